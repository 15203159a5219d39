use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// One row of an sgRNA library design file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryEntry {
    /// Library-assigned sgRNA identifier
    pub identifier: String,

    /// Guide sequence, uppercased
    pub sequence: String,

    /// Target gene, uppercased
    pub gene: String,
}

/// In-memory index over an sgRNA library, keyed by guide sequence.
///
/// Duplicate sequences follow last-write-wins: a later row replaces the entry
/// of an earlier row with the same sequence. The first-seen position is kept
/// so iteration order is stable across runs.
#[derive(Debug, Default)]
pub struct LibraryIndex {
    entries: HashMap<String, LibraryEntry>,
    order: Vec<String>,
    length_counts: HashMap<usize, usize>,
}

impl LibraryIndex {
    /// Create an empty index
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one library row. The sequence length histogram counts every row,
    /// including rows that overwrite an earlier duplicate.
    pub fn insert(&mut self, entry: LibraryEntry) {
        *self.length_counts.entry(entry.sequence.len()).or_insert(0) += 1;

        let sequence = entry.sequence.clone();
        if let Some(previous) = self.entries.insert(sequence.clone(), entry) {
            debug!(
                "duplicate sequence {} in library: replacing {} with later row",
                sequence, previous.identifier
            );
        } else {
            self.order.push(sequence);
        }
    }

    /// Look up the library entry for a sequence
    #[must_use]
    pub fn get(&self, sequence: &str) -> Option<&LibraryEntry> {
        self.entries.get(sequence)
    }

    /// Whether the sequence is part of the library
    #[must_use]
    pub fn contains(&self, sequence: &str) -> bool {
        self.entries.contains_key(sequence)
    }

    /// Number of distinct sequences
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sequences in first-seen order
    pub fn sequences(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Histogram of sequence length -> row count
    #[must_use]
    pub fn length_counts(&self) -> &HashMap<usize, usize> {
        &self.length_counts
    }

    /// Distinct sequence lengths observed in the library, ascending
    #[must_use]
    pub fn observed_lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.length_counts.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, seq: &str, gene: &str) -> LibraryEntry {
        LibraryEntry {
            identifier: id.to_string(),
            sequence: seq.to_string(),
            gene: gene.to_string(),
        }
    }

    #[test]
    fn test_insert_and_get() {
        let mut index = LibraryIndex::new();
        index.insert(entry("g1", "ACGTACGTACGTACGTACGT", "TP53"));

        assert_eq!(index.len(), 1);
        assert!(index.contains("ACGTACGTACGTACGTACGT"));
        assert_eq!(index.get("ACGTACGTACGTACGTACGT").unwrap().identifier, "g1");
        assert!(index.get("TTTTTTTTTTTTTTTTTTTT").is_none());
    }

    #[test]
    fn test_duplicate_sequence_last_write_wins() {
        let mut index = LibraryIndex::new();
        index.insert(entry("g1", "ACGTACGTACGTACGTACGT", "TP53"));
        index.insert(entry("g2", "ACGTACGTACGTACGTACGT", "BRCA1"));

        assert_eq!(index.len(), 1);
        let kept = index.get("ACGTACGTACGTACGTACGT").unwrap();
        assert_eq!(kept.identifier, "g2");
        assert_eq!(kept.gene, "BRCA1");
        // Both rows still count toward the length histogram
        assert_eq!(index.length_counts()[&20], 2);
    }

    #[test]
    fn test_observed_lengths_sorted() {
        let mut index = LibraryIndex::new();
        index.insert(entry("g1", "ACGTACGTACGTACGTACGTA", "A")); // 21
        index.insert(entry("g2", "ACGTACGTACGTACGTACG", "B")); // 19
        index.insert(entry("g3", "ACGTACGTACGTACGTACGT", "C")); // 20

        assert_eq!(index.observed_lengths(), vec![19, 20, 21]);
    }

    #[test]
    fn test_sequences_in_first_seen_order() {
        let mut index = LibraryIndex::new();
        index.insert(entry("g1", "CCCCCCCCCCCCCCCCCCCC", "A"));
        index.insert(entry("g2", "AAAAAAAAAAAAAAAAAAAA", "B"));
        // Overwrite keeps the original position
        index.insert(entry("g3", "CCCCCCCCCCCCCCCCCCCC", "C"));

        let order: Vec<&str> = index.sequences().collect();
        assert_eq!(
            order,
            vec!["CCCCCCCCCCCCCCCCCCCC", "AAAAAAAAAAAAAAAAAAAA"]
        );
    }
}
