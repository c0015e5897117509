use std::collections::HashSet;

use crate::models::Corpus;

/// Collapse a chronological log (oldest first) into a corpus, most recent first
///
/// Each distinct command is kept once, at the position of its most recent occurrence. Lines are
/// compared exactly: no case or whitespace normalization beyond what the reader already did.
///
/// # Examples
///
/// ```
/// use history_picker::deduplicate_history;
///
/// let log = vec!["ls".to_string(), "make".to_string(), "ls".to_string()];
/// let corpus = deduplicate_history(log);
/// assert_eq!(corpus.entries(), ["ls", "make"]);
/// ```
pub fn deduplicate_history(history: Vec<String>) -> Corpus {
    let mut seen = HashSet::with_capacity(history.len());
    let mut result = Vec::new();

    // Walk from newest to oldest so the first sighting is the most recent one
    for line in history.into_iter().rev() {
        if !seen.contains(&line) {
            seen.insert(line.clone());
            result.push(line);
        }
    }

    Corpus::from_unique(result)
}
