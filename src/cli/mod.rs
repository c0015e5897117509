//! Command-line front end.

pub mod commands;

pub use commands::{Cli, Commands, run};
