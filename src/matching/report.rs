use serde::Serialize;
use tracing::warn;

use crate::core::library::LibraryIndex;
use crate::core::record::BedRecord;
use crate::matching::engine::MatchAccumulator;

/// A matched sequence none of whose candidates agreed with the library gene.
/// Its last-seen candidate is still emitted; this diagnostic flags it for
/// manual review.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneMismatch {
    pub library_id: String,
    pub sequence: String,
    pub library_gene: String,
    pub annotation_gene: String,
    pub chrom: String,
    pub start: u64,
    pub end: u64,
}

/// A library sequence that never appeared in any annotation source
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnmatchedSequence {
    pub library_id: String,
    pub sequence: String,
    pub gene: String,
}

/// Final annotation report: BED records plus diagnostics
#[derive(Debug, Default, Serialize)]
pub struct AnnotationReport {
    /// BED6 output lines, one per emitted candidate
    pub records: Vec<BedRecord>,

    /// Sequences emitted via the last-seen fallback
    pub gene_mismatches: Vec<GeneMismatch>,

    /// Library sequences with no candidate at all
    pub not_found: Vec<UnmatchedSequence>,
}

/// Resolve accumulated candidates into the final report.
///
/// For each matched sequence, every candidate whose annotation gene equals
/// the library gene produces a BED record. When no candidate agrees, exactly
/// one record is emitted from the last-seen candidate and a gene-mismatch
/// warning is logged. Library sequences with no candidates at all are logged
/// as not found. Every library sequence therefore ends up either emitted or
/// reported as not found, never both.
#[must_use]
pub fn build_report(library: &LibraryIndex, accumulator: &MatchAccumulator) -> AnnotationReport {
    let mut report = AnnotationReport::default();

    for (_, candidates) in accumulator.iter() {
        let mut any_agreed = false;
        for candidate in candidates {
            if candidate.gene_agrees() {
                report.records.push(candidate.to_bed());
                any_agreed = true;
            }
        }

        if !any_agreed {
            if let Some(last) = candidates.last() {
                report.records.push(last.to_bed());
                warn!(
                    "gene not matched: {} ({}) expected gene {}, annotation has {} at {}:{}-{}",
                    last.library_id,
                    last.sequence,
                    last.library_gene,
                    last.annotation_gene,
                    last.chrom,
                    last.start,
                    last.end
                );
                report.gene_mismatches.push(GeneMismatch {
                    library_id: last.library_id.clone(),
                    sequence: last.sequence.clone(),
                    library_gene: last.library_gene.clone(),
                    annotation_gene: last.annotation_gene.clone(),
                    chrom: last.chrom.clone(),
                    start: last.start,
                    end: last.end,
                });
            }
        }
    }

    for sequence in library.sequences() {
        if accumulator.contains(sequence) {
            continue;
        }
        if let Some(entry) = library.get(sequence) {
            warn!(
                "sequence not found: {} {} {}",
                entry.identifier, entry.sequence, entry.gene
            );
            report.not_found.push(UnmatchedSequence {
                library_id: entry.identifier.clone(),
                sequence: entry.sequence.clone(),
                gene: entry.gene.clone(),
            });
        }
    }

    report
}
