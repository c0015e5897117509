//! Corpus building: history file → deduplicated, most-recent-first corpus.
//!
//! - [`deduplicate_history`] - keep the newest occurrence of each command
//! - [`build_corpus`] - read a history file and deduplicate it
//! - [`HistoryStats`] - counts reported by the `stats` command

pub mod builder;
pub mod dedup;
pub mod stats;

pub use builder::{build_corpus, build_corpus_with_raw};
pub use dedup::deduplicate_history;
pub use stats::HistoryStats;
