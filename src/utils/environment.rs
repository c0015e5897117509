use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Default history file name under `$HOME`
pub const DEFAULT_HISTORY_FILE: &str = ".bash_history";

/// Resolve the history file to read
///
/// An explicit path wins; otherwise `$HISTFILE` if set and non-empty, otherwise
/// `$HOME/.bash_history`.
pub fn get_history_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    if let Some(histfile) = env::var_os("HISTFILE").filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(histfile));
    }

    let home = env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(DEFAULT_HISTORY_FILE))
}
