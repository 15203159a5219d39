use std::collections::HashMap;
use std::io::BufRead;

use crate::core::library::LibraryIndex;
use crate::core::record::MatchCandidate;
use crate::parsing::annotation::{parse_annotation_line, AnnotationParseError};
use crate::parsing::overlay::EfficiencyTable;

/// Accumulated genomic candidates per library sequence.
///
/// Entries accumulate across sources; nothing is ever removed. First-match
/// order is kept so report output is deterministic per run.
#[derive(Debug, Default)]
pub struct MatchAccumulator {
    candidates: HashMap<String, Vec<MatchCandidate>>,
    order: Vec<String>,
}

impl MatchAccumulator {
    pub fn push(&mut self, candidate: MatchCandidate) {
        if !self.candidates.contains_key(&candidate.sequence) {
            self.order.push(candidate.sequence.clone());
        }
        self.candidates
            .entry(candidate.sequence.clone())
            .or_default()
            .push(candidate);
    }

    /// Whether the sequence has at least one candidate
    #[must_use]
    pub fn contains(&self, sequence: &str) -> bool {
        self.candidates.contains_key(sequence)
    }

    #[must_use]
    pub fn get(&self, sequence: &str) -> Option<&[MatchCandidate]> {
        self.candidates.get(sequence).map(Vec::as_slice)
    }

    /// Number of sequences with at least one candidate
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Matched sequences and their candidates, in first-match order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[MatchCandidate])> {
        self.order.iter().map(|sequence| {
            (
                sequence.as_str(),
                self.candidates[sequence].as_slice(),
            )
        })
    }
}

/// Streams annotation sources and matches their records against the library.
///
/// Owns the run's mutable state (the accumulator); the library index and the
/// optional efficiency overlay are built once and borrowed immutably.
pub struct Annotator<'a> {
    library: &'a LibraryIndex,
    overlay: Option<&'a EfficiencyTable>,
    accumulator: MatchAccumulator,
}

impl<'a> Annotator<'a> {
    #[must_use]
    pub fn new(library: &'a LibraryIndex, overlay: Option<&'a EfficiencyTable>) -> Self {
        Self {
            library,
            overlay,
            accumulator: MatchAccumulator::default(),
        }
    }

    /// Drain one annotation source into the accumulator.
    ///
    /// Records whose sequence is absent from the library are silently
    /// discarded; they belong to sgRNAs outside this library.
    ///
    /// # Errors
    ///
    /// Returns `AnnotationParseError` on the first malformed line, carrying
    /// its 0-based line index. Mid-run parse errors abort the whole run.
    pub fn consume<R: BufRead>(&mut self, reader: R) -> Result<(), AnnotationParseError> {
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record = parse_annotation_line(&line, i)?;

            let Some(entry) = self.library.get(&record.sequence) else {
                continue;
            };
            let score = match self.overlay {
                Some(table) => table.score_for(&entry.identifier),
                None => record.score,
            };

            self.accumulator.push(MatchCandidate {
                chrom: record.chrom,
                start: record.start,
                end: record.end,
                library_id: entry.identifier.clone(),
                score,
                strand: record.strand,
                annotation_gene: record.gene,
                library_gene: entry.gene.clone(),
                sequence: record.sequence,
            });
        }
        Ok(())
    }

    /// The accumulated matches so far
    #[must_use]
    pub fn accumulator(&self) -> &MatchAccumulator {
        &self.accumulator
    }

    #[must_use]
    pub fn into_accumulator(self) -> MatchAccumulator {
        self.accumulator
    }
}
