//! Data models for the history picker.
//!
//! - [`Corpus`] - Deduplicated history, most recent command first
//! - [`MatchTier`] - Prefix / substring / fuzzy match bucket
//! - [`RankedResult`] - Tiered, ordered hits for one query

pub mod history;
pub mod search;

pub use history::Corpus;
pub use search::{MatchTier, RankedHit, RankedResult};
