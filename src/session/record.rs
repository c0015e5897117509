use std::sync::Arc;

use tracing::debug;

use crate::matcher::rank;
use crate::models::{Corpus, RankedHit, RankedResult};

/// One step of a search session: the corpus, the current query and its ranking
///
/// The corpus is shared between steps; the ranking always belongs to exactly this query.
#[derive(Debug, Clone)]
pub struct SearchSession {
    corpus: Arc<Corpus>,
    query: String,
    results: RankedResult,
}

impl SearchSession {
    /// Start a session with an empty query (the whole corpus, in order)
    pub fn new(corpus: Corpus) -> Self {
        let corpus = Arc::new(corpus);
        let results = rank(&corpus, "");
        Self { corpus, query: String::new(), results }
    }

    /// The next step for `query`. `self` is left untouched.
    pub fn with_query(&self, query: impl Into<String>) -> Self {
        let query = query.into();
        let results = rank(&self.corpus, &query);
        debug!(query_len = query.chars().count(), results = results.len(), "query changed");
        Self { corpus: Arc::clone(&self.corpus), query, results }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &RankedResult {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Ranked entry at `position`, with its hit metadata
    pub fn hit(&self, position: usize) -> Option<(&str, &RankedHit)> {
        let hit = self.results.get(position)?;
        self.corpus.get(hit.index).map(|text| (text, hit))
    }

    /// The first `limit` ranked entries as text
    pub fn visible(&self, limit: usize) -> impl Iterator<Item = &str> {
        self.results.indices().take(limit).filter_map(|index| self.corpus.get(index))
    }

    /// Raw text of the entry at `position` in the ranking; `None` when out of range
    pub fn select(&self, position: usize) -> Option<&str> {
        self.hit(position).map(|(text, _)| text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MatchTier;

    fn session() -> SearchSession {
        SearchSession::new(Corpus::from_recent_first([
            "git push",
            "git pull",
            "go install tools",
            "gradle integration test",
            "git commit",
        ]))
    }

    #[test]
    fn test_new_session_is_identity() {
        let session = session();
        assert_eq!(session.query(), "");
        assert_eq!(session.len(), 5);
        assert_eq!(session.visible(100).collect::<Vec<_>>(), session.corpus().entries());
    }

    #[test]
    fn test_with_query_leaves_previous_step() {
        let first = session();
        let second = first.with_query("git");

        assert_eq!(first.query(), "");
        assert_eq!(first.len(), 5);
        assert_eq!(second.query(), "git");
        assert_eq!(
            second.visible(3).collect::<Vec<_>>(),
            vec!["git push", "git pull", "git commit"]
        );
    }

    #[test]
    fn test_with_query_filters() {
        let step = session().with_query("commit");
        assert_eq!(step.len(), 1);
        assert_eq!(step.hit(0).map(|(_, hit)| hit.tier), Some(Some(MatchTier::Substring)));
    }

    #[test]
    fn test_select_in_and_out_of_range() {
        let step = session().with_query("git");
        assert_eq!(step.select(0), Some("git push"));
        assert_eq!(step.select(4), Some("gradle integration test"));
        assert_eq!(step.select(5), None);
        assert_eq!(step.select(usize::MAX), None);
    }

    #[test]
    fn test_empty_corpus() {
        let step = SearchSession::new(Corpus::default()).with_query("x");
        assert!(step.is_empty());
        assert_eq!(step.select(0), None);
    }
}
