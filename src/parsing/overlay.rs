use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OverlayError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Efficiency table {0} is empty")]
    MissingHeader(String),

    #[error("{column} is not in the columns of {path}")]
    ColumnNotFound { column: String, path: String },

    #[error("Error parsing line {line} in efficiency table: missing fields")]
    MissingFields { line: usize },

    #[error("Error parsing line {line} in efficiency table: invalid score '{value}'")]
    InvalidScore { line: usize, value: String },
}

/// Optional per-sgRNA efficiency scores, keyed by library identifier.
///
/// Loaded from a tab-separated table with a header line. The first column is
/// the sgRNA identifier; the configured column supplies the score that
/// replaces the annotation table's native score during matching.
#[derive(Debug, Default)]
pub struct EfficiencyTable {
    scores: HashMap<String, f64>,
}

impl EfficiencyTable {
    /// Load an efficiency table, taking scores from the named column.
    ///
    /// # Errors
    ///
    /// Returns `OverlayError::ColumnNotFound` if `column` is not in the
    /// header, or a parse error for malformed rows. These are configuration
    /// errors and surface before any matching starts.
    pub fn load(path: &Path, column: &str) -> Result<Self, OverlayError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_text(&content, column, &path.display().to_string())
    }

    /// Parse efficiency table text. `source` names the table in errors.
    ///
    /// # Errors
    ///
    /// See [`EfficiencyTable::load`].
    pub fn parse_text(text: &str, column: &str, source: &str) -> Result<Self, OverlayError> {
        let mut lines = text.lines();
        let header = lines
            .next()
            .ok_or_else(|| OverlayError::MissingHeader(source.to_string()))?;

        // The first header field names the identifier column; score columns
        // start at position 1
        let position = header
            .split('\t')
            .skip(1)
            .position(|name| name.trim() == column)
            .map(|p| p + 1)
            .ok_or_else(|| OverlayError::ColumnNotFound {
                column: column.to_string(),
                path: source.to_string(),
            })?;

        let mut scores = HashMap::new();
        for (i, line) in lines.enumerate() {
            if line.is_empty() {
                continue;
            }
            // Line indices are 1-based here because line 0 is the header
            let line_num = i + 1;

            let fields: Vec<&str> = line.split('\t').collect();
            let value = fields
                .get(position)
                .ok_or(OverlayError::MissingFields { line: line_num })?;
            let score: f64 = value
                .trim()
                .parse()
                .map_err(|_| OverlayError::InvalidScore {
                    line: line_num,
                    value: (*value).to_string(),
                })?;
            scores.insert(fields[0].trim().to_string(), score);
        }

        Ok(Self { scores })
    }

    /// Override score for an sgRNA identifier; identifiers absent from the
    /// table score 0.
    #[must_use]
    pub fn score_for(&self, library_id: &str) -> f64 {
        self.scores.get(library_id).copied().unwrap_or(0.0)
    }

    /// Number of identifiers in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "sgrna\tgene\tLFC\ng1\tTP53\t9.9\ng2\tBRCA1\t-1.5\n";

    #[test]
    fn test_load_named_column() {
        let table = EfficiencyTable::parse_text(TABLE, "LFC", "scores.txt").unwrap();
        assert_eq!(table.len(), 2);
        assert!((table.score_for("g1") - 9.9).abs() < f64::EPSILON);
        assert!((table.score_for("g2") - -1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_absent_id_scores_zero() {
        let table = EfficiencyTable::parse_text(TABLE, "LFC", "scores.txt").unwrap();
        assert!((table.score_for("g999") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_column_is_config_error() {
        let err = EfficiencyTable::parse_text(TABLE, "beta", "scores.txt").unwrap_err();
        match err {
            OverlayError::ColumnNotFound { column, path } => {
                assert_eq!(column, "beta");
                assert_eq!(path, "scores.txt");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_score_cell_fails() {
        let text = "sgrna\tLFC\ng1\tnot-a-number\n";
        let err = EfficiencyTable::parse_text(text, "LFC", "scores.txt").unwrap_err();
        assert!(matches!(err, OverlayError::InvalidScore { line: 1, .. }));
    }

    #[test]
    fn test_empty_table_fails() {
        let err = EfficiencyTable::parse_text("", "LFC", "scores.txt").unwrap_err();
        assert!(matches!(err, OverlayError::MissingHeader(_)));
    }
}
