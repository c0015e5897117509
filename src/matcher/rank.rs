use tracing::debug;

use super::fold;
use crate::models::{Corpus, MatchTier, RankedHit, RankedResult};

/// Rank a corpus against a query.
///
/// An empty query returns the corpus unchanged. Otherwise entries are bucketed into prefix,
/// substring and fuzzy matches (case-insensitive), buckets are concatenated in that order and
/// each bucket keeps corpus order. Entries matching none of the three are dropped.
pub fn rank(corpus: &Corpus, query: &str) -> RankedResult {
    rank_entries(corpus.entries(), query)
}

/// Rank an arbitrary slice of entries. See [`rank`].
pub fn rank_entries<S: AsRef<str>>(entries: &[S], query: &str) -> RankedResult {
    if query.is_empty() {
        return RankedResult::new(
            (0..entries.len()).map(|index| RankedHit { index, tier: None }).collect(),
        );
    }

    let folded_query = fold(query);
    let mut prefix = Vec::new();
    let mut substring = Vec::new();
    let mut fuzzy = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        let bucket = match classify_folded(&fold(entry.as_ref()), &folded_query) {
            Some(MatchTier::Prefix) => &mut prefix,
            Some(MatchTier::Substring) => &mut substring,
            Some(MatchTier::Subsequence) => &mut fuzzy,
            None => continue,
        };
        bucket.push(index);
    }

    debug!(
        query_len = query.chars().count(),
        prefix = prefix.len(),
        substring = substring.len(),
        fuzzy = fuzzy.len(),
        "ranked entries"
    );

    let hits = [
        (MatchTier::Prefix, prefix),
        (MatchTier::Substring, substring),
        (MatchTier::Subsequence, fuzzy),
    ]
    .into_iter()
    .flat_map(|(tier, indices)| {
        indices.into_iter().map(move |index| RankedHit { index, tier: Some(tier) })
    })
    .collect();

    RankedResult::new(hits)
}

/// Decide which tier, if any, `entry` falls into for `query`.
///
/// An empty query trivially prefixes everything.
pub fn classify(entry: &str, query: &str) -> Option<MatchTier> {
    classify_folded(&fold(entry), &fold(query))
}

fn classify_folded(entry: &str, query: &str) -> Option<MatchTier> {
    if entry.starts_with(query) {
        Some(MatchTier::Prefix)
    } else if entry.contains(query) {
        Some(MatchTier::Substring)
    } else if is_subsequence(entry, query) {
        Some(MatchTier::Subsequence)
    } else {
        None
    }
}

/// Greedy in-order scan: true when every char of `pattern` occurs in `text` in order.
///
/// Comparison is exact; fold both sides first for a case-insensitive test.
pub fn is_subsequence(text: &str, pattern: &str) -> bool {
    let mut pattern_chars = pattern.chars().peekable();
    for c in text.chars() {
        match pattern_chars.peek() {
            Some(&p) if p == c => {
                pattern_chars.next();
            }
            Some(_) => {}
            None => break,
        }
    }
    pattern_chars.peek().is_none()
}
