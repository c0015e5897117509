//! Interactive session state.
//!
//! A [`SearchSession`] is the immutable-per-step record `{corpus, query, results}`: every query
//! change produces a fresh ranking and nothing from the previous one is kept. A [`Picker`] wraps
//! it in an explicit input state machine ([`InputMode`]) driven by discrete [`InputEvent`]s.
//! Ranking only ever happens inside query-editing transitions, never while drawing.

pub mod picker;
pub mod record;

pub use picker::{InputEvent, InputMode, Picker, Transition};
pub use record::SearchSession;

/// Maximum number of ranked entries the picker shows and lets the user move through
pub const MAX_VISIBLE_RESULTS: usize = 100;
/// Maximum query length in chars
pub const MAX_QUERY_CHARS: usize = 256;
