use std::collections::HashMap;

use serde::Serialize;

use crate::models::Corpus;

/// How many of the most repeated commands to report
pub const TOP_COMMANDS: usize = 5;

/// Summary of a history log and the corpus built from it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryStats {
    pub total_lines: usize,
    pub distinct_commands: usize,
    /// Fraction of lines that repeat an earlier command (0.0 for an empty log)
    pub duplicate_ratio: f64,
    /// Most repeated commands with their counts, highest first
    pub top_commands: Vec<(String, usize)>,
}

impl HistoryStats {
    pub fn compute(raw: &[String], corpus: &Corpus) -> Self {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for line in raw {
            *counts.entry(line.as_str()).or_default() += 1;
        }

        // Ties resolve in corpus order (most recent first)
        let mut top: Vec<(String, usize)> = corpus
            .iter()
            .filter_map(|entry| counts.get(entry).map(|&count| (entry.to_string(), count)))
            .filter(|(_, count)| *count > 1)
            .collect();
        top.sort_by(|a, b| b.1.cmp(&a.1));
        top.truncate(TOP_COMMANDS);

        let duplicate_ratio = if raw.is_empty() {
            0.0
        } else {
            (raw.len() - corpus.len()) as f64 / raw.len() as f64
        };

        Self {
            total_lines: raw.len(),
            distinct_commands: corpus.len(),
            duplicate_ratio,
            top_commands: top,
        }
    }
}
