//! Query matching for the history picker.
//!
//! Ranking and highlighting share one notion of case folding and one greedy subsequence scan, so
//! the characters highlighted in an entry are exactly the characters the fuzzy test consumed.
//!
//! # Example
//!
//! ```
//! use history_picker::matcher::{annotate, rank_entries};
//!
//! let history = ["git push", "show history", "history command"];
//! let ranked = rank_entries(&history, "hist");
//! assert_eq!(ranked.texts(&history), vec!["history command", "show history"]);
//! assert_eq!(annotate("ls", "l"), "[#9664c8::b]l[white::-]s");
//! ```

pub mod highlight;
pub mod rank;

pub use highlight::{HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN, annotate, match_mask, parse_annotated};
pub use rank::{classify, is_subsequence, rank, rank_entries};

/// Fold a single char to its comparison form.
///
/// Takes the first char of the lowercase mapping so folding never changes the char count.
pub fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Folded copy of `text`, used only for comparison and never for display.
pub fn fold(text: &str) -> String {
    text.chars().map(fold_char).collect()
}
