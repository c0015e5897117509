//! Corpus builder for a shell history file.
//!
//! # Error Handling Strategy
//!
//! The history source is all-or-nothing: if it cannot be opened or read, the error is returned
//! with context and the caller aborts the session. There is no partial load to recover from.

use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::indexer::dedup::deduplicate_history;
use crate::models::Corpus;
use crate::parsers::parse_history_file;

/// Read a history file and build the search corpus
///
/// # Arguments
///
/// * `history_path` - Path to a plain-text history file (e.g. `~/.bash_history`)
///
/// # Returns
///
/// Returns the deduplicated [`Corpus`], newest command first.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read, or is larger than the size limit.
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use history_picker::build_corpus;
///
/// let path = PathBuf::from("/home/alice/.bash_history");
/// let corpus = build_corpus(&path)?;
/// println!("{} distinct commands", corpus.len());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn build_corpus(history_path: &Path) -> Result<Corpus> {
    build_corpus_with_raw(history_path).map(|(corpus, _)| corpus)
}

/// Like [`build_corpus`], also returning the raw lines (oldest first) for statistics.
pub fn build_corpus_with_raw(history_path: &Path) -> Result<(Corpus, Vec<String>)> {
    let raw = parse_history_file(history_path)?;
    let corpus = deduplicate_history(raw.clone());

    info!(raw = raw.len(), distinct = corpus.len(), "built corpus");

    Ok((corpus, raw))
}
