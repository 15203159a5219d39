use serde::{Deserialize, Serialize};

/// One parsed line of a reference annotation table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationRecord {
    pub chrom: String,
    pub start: u64,
    pub end: u64,

    /// Gene named by the annotation table, uppercased
    pub gene: String,

    /// Native efficiency score from the table
    pub score: f64,

    pub strand: String,

    /// Guide sequence, uppercased
    pub sequence: String,
}

/// An annotation record whose sequence was found in the library
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchCandidate {
    pub chrom: String,
    pub start: u64,
    pub end: u64,

    /// sgRNA identifier from the library
    pub library_id: String,

    /// Score to report: the table's native score, or the efficiency overlay
    /// value when an overlay is active
    pub score: f64,

    pub strand: String,

    /// Gene named by the annotation table
    pub annotation_gene: String,

    /// Gene expected by the library
    pub library_gene: String,

    pub sequence: String,
}

impl MatchCandidate {
    /// Whether the annotation table and the library agree on the gene
    #[must_use]
    pub fn gene_agrees(&self) -> bool {
        self.annotation_gene == self.library_gene
    }

    /// Project this candidate onto its BED6 output line
    #[must_use]
    pub fn to_bed(&self) -> BedRecord {
        BedRecord {
            chrom: self.chrom.clone(),
            start: self.start,
            end: self.end,
            name: self.library_id.clone(),
            score: self.score,
            strand: self.strand.clone(),
        }
    }
}

/// One BED6 output line: chromosome, start, end, name, score, strand
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BedRecord {
    pub chrom: String,
    pub start: u64,
    pub end: u64,
    pub name: String,
    pub score: f64,
    pub strand: String,
}

impl std::fmt::Display for BedRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}",
            self.chrom,
            self.start,
            self.end,
            self.name,
            format_score(self.score),
            self.strand
        )
    }
}

/// Render a BED score: whole numbers keep one decimal place (`5.0`),
/// everything else uses the shortest float form (`9.9`).
#[must_use]
pub fn format_score(score: f64) -> String {
    if score.is_finite() && score.fract() == 0.0 {
        format!("{score:.1}")
    } else {
        format!("{score}")
    }
}
