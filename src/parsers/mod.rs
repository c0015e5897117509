//! Readers for the raw history log.
//!
//! # Error Handling Strategy
//!
//! The history file is the only input the picker has, so failing to open or read it is fatal and
//! propagated as an `anyhow::Error` with the path in context. Inside a readable file nothing is
//! rejected: blank lines are skipped and invalid UTF-8 is replaced, because shell history files
//! routinely pick up stray bytes from pasted text.

pub mod history;

pub use history::parse_history_file;
