use std::collections::HashSet;
use std::ops::Index;

/// Deduplicated command history, most recent command first.
///
/// No two entries are equal as text. Order is significant: it is the tie-break order inside a
/// match tier when ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    entries: Vec<String>,
}

impl Corpus {
    /// Wrap entries that are already unique. Callers inside the crate guarantee uniqueness.
    pub(crate) fn from_unique(entries: Vec<String>) -> Self {
        debug_assert_eq!(entries.iter().collect::<HashSet<_>>().len(), entries.len());
        Self { entries }
    }

    /// Build a corpus from entries that are already ordered most-recent-first.
    ///
    /// Later repeats of a command are dropped, so the first occurrence wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use history_picker::models::Corpus;
    ///
    /// let corpus = Corpus::from_recent_first(["ls", "cd /tmp", "ls"]);
    /// assert_eq!(corpus.entries(), ["ls", "cd /tmp"]);
    /// ```
    pub fn from_recent_first<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let entries = entries
            .into_iter()
            .map(Into::into)
            .filter(|entry: &String| seen.insert(entry.clone()))
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }
}

impl Index<usize> for Corpus {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.entries[index]
    }
}

impl AsRef<[String]> for Corpus {
    fn as_ref(&self) -> &[String] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_recent_first_keeps_first_occurrence() {
        let corpus = Corpus::from_recent_first(["git push", "ls", "git push", "ls", "make"]);
        assert_eq!(corpus.entries(), ["git push", "ls", "make"]);
    }

    #[test]
    fn test_from_recent_first_empty() {
        let corpus = Corpus::from_recent_first(Vec::<String>::new());
        assert!(corpus.is_empty());
        assert_eq!(corpus.len(), 0);
        assert_eq!(corpus.get(0), None);
    }

    #[test]
    fn test_accessors() {
        let corpus = Corpus::from_recent_first(["a", "b"]);
        assert_eq!(corpus.get(1), Some("b"));
        assert_eq!(&corpus[0], "a");
        assert_eq!(corpus.iter().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(corpus.into_entries(), vec!["a".to_string(), "b".to_string()]);
    }
}
