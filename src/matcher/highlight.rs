//! Inline highlight markup for matched characters.
//!
//! The marker tokens are a fixed contract with the renderer: every matched char is wrapped on its
//! own as `HIGHLIGHT_OPEN` + char + `HIGHLIGHT_CLOSE`. Adjacent matches are never merged.

use super::fold_char;

/// Opens a highlighted char (purple, bold).
pub const HIGHLIGHT_OPEN: &str = "[#9664c8::b]";
/// Closes a highlighted char (back to white, no attributes).
pub const HIGHLIGHT_CLOSE: &str = "[white::-]";

/// Flag each char of `entry` that the greedy subsequence scan for `query` consumes.
///
/// The mask has one flag per `char` of `entry`. An empty query flags nothing.
pub fn match_mask(entry: &str, query: &str) -> Vec<bool> {
    let mut pattern = query.chars().map(fold_char).peekable();
    entry
        .chars()
        .map(|c| match pattern.peek() {
            Some(&p) if p == fold_char(c) => {
                pattern.next();
                true
            }
            _ => false,
        })
        .collect()
}

/// Wrap each char of `entry` matched by `query` in highlight markers.
///
/// Original casing is preserved. The scan is the same one that decides fuzzy membership, so
/// prefix and substring hits get marked wherever the greedy scan lands.
///
/// # Examples
///
/// ```
/// use history_picker::matcher::annotate;
///
/// assert_eq!(annotate("Ls", "l"), "[#9664c8::b]L[white::-]s");
/// assert_eq!(annotate("ls", ""), "ls");
/// ```
pub fn annotate(entry: &str, query: &str) -> String {
    if query.is_empty() {
        return entry.to_string();
    }

    let mask = match_mask(entry, query);
    let marked = mask.iter().filter(|&&m| m).count();
    let mut result =
        String::with_capacity(entry.len() + marked * (HIGHLIGHT_OPEN.len() + HIGHLIGHT_CLOSE.len()));

    for (c, matched) in entry.chars().zip(mask) {
        if matched {
            result.push_str(HIGHLIGHT_OPEN);
            result.push(c);
            result.push_str(HIGHLIGHT_CLOSE);
        } else {
            result.push(c);
        }
    }

    result
}

/// Split annotated text into `(text, highlighted)` runs
///
/// This is the reading side of the marker contract for consumers of `query --highlight` output.
/// Only the exact shape [`annotate`] emits, `HIGHLIGHT_OPEN` + one char + `HIGHLIGHT_CLOSE`,
/// counts as a highlighted char; any other text, including a lone marker token, is kept
/// literally. The format is ambiguous for entries that themselves spell out that exact shape, so
/// the renderer works from [`match_mask`] instead of parsing annotated text.
/// Consecutive chars with the same state are merged into one run.
pub fn parse_annotated(annotated: &str) -> Vec<(String, bool)> {
    let mut runs: Vec<(String, bool)> = Vec::new();
    let mut rest = annotated;

    while let Some(c) = rest.chars().next() {
        if let Some(after_open) = rest.strip_prefix(HIGHLIGHT_OPEN)
            && let Some(marked) = after_open.chars().next()
            && let Some(after_close) = after_open[marked.len_utf8()..].strip_prefix(HIGHLIGHT_CLOSE)
        {
            push_run_char(&mut runs, marked, true);
            rest = after_close;
            continue;
        }

        push_run_char(&mut runs, c, false);
        rest = &rest[c.len_utf8()..];
    }

    runs
}

fn push_run_char(runs: &mut Vec<(String, bool)>, c: char, highlighted: bool) {
    match runs.last_mut() {
        Some((text, state)) if *state == highlighted => text.push(c),
        _ => runs.push((c.to_string(), highlighted)),
    }
}
