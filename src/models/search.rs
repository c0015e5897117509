use serde::{Deserialize, Serialize};

/// Match strength bucket. Declaration order is priority order, so `Prefix < Substring`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MatchTier {
    Prefix,
    Substring,
    Subsequence,
}

impl MatchTier {
    pub const ALL: [MatchTier; 3] = [MatchTier::Prefix, MatchTier::Substring, MatchTier::Subsequence];

    pub fn label(self) -> &'static str {
        match self {
            MatchTier::Prefix => "prefix",
            MatchTier::Substring => "substring",
            MatchTier::Subsequence => "fuzzy",
        }
    }
}

/// One ranked entry: its position in the ranked slice and the tier that admitted it.
///
/// `tier` is `None` only when the query was empty and the corpus was returned as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedHit {
    pub index: usize,
    pub tier: Option<MatchTier>,
}

/// Ranked result for one query: prefix hits, then substring hits, then fuzzy hits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankedResult {
    hits: Vec<RankedHit>,
}

impl RankedResult {
    pub(crate) fn new(hits: Vec<RankedHit>) -> Self {
        Self { hits }
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&RankedHit> {
        self.hits.get(position)
    }

    pub fn hits(&self) -> &[RankedHit] {
        &self.hits
    }

    pub fn iter(&self) -> impl Iterator<Item = &RankedHit> {
        self.hits.iter()
    }

    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.hits.iter().map(|hit| hit.index)
    }

    /// Resolve hits against the slice that was ranked.
    pub fn texts<'a, S: AsRef<str>>(&self, entries: &'a [S]) -> Vec<&'a str> {
        self.hits.iter().filter_map(|hit| entries.get(hit.index)).map(|entry| entry.as_ref()).collect()
    }

    /// Number of hits per tier, in priority order.
    pub fn tier_counts(&self) -> [(MatchTier, usize); 3] {
        MatchTier::ALL
            .map(|tier| (tier, self.hits.iter().filter(|hit| hit.tier == Some(tier)).count()))
    }
}
