//! History Picker - Interactively search shell history and pick a command to re-run
//!
//! This library turns a raw shell history log plus a live query into a ranked, highlighted
//! result list. It provides:
//!
//! - Reading plain-text history files (`~/.bash_history`, `$HISTFILE`)
//! - Deduplicating history into a most-recent-first corpus
//! - Three-tier ranking: prefix matches, then substring matches, then fuzzy (subsequence) matches
//! - Inline highlight markup for the characters a query matched
//! - An interactive terminal picker built on the above
//!
//! # Example
//!
//! ```no_run
//! use history_picker::{annotate, build_corpus, rank};
//! use std::path::PathBuf;
//!
//! let corpus = build_corpus(&PathBuf::from("/home/alice/.bash_history"))?;
//! let ranked = rank(&corpus, "git");
//! for text in ranked.texts(corpus.entries()).into_iter().take(10) {
//!     println!("{}", annotate(text, "git"));
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod indexer;
pub mod matcher;
pub mod models;
pub mod parsers;
pub mod session;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use indexer::{build_corpus, deduplicate_history};
pub use matcher::{annotate, rank};
pub use models::{Corpus, MatchTier, RankedResult};
pub use parsers::history::parse_history_file;
pub use session::{Picker, SearchSession};
pub use utils::paths::format_path_with_tilde;
