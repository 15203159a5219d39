use thiserror::Error;

use crate::core::record::AnnotationRecord;

#[derive(Error, Debug)]
pub enum AnnotationParseError {
    #[error("IO error reading annotation table: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error parsing line {0} in annotation table: expected 7 tab-separated fields")]
    FieldCount(usize),

    #[error("Error parsing line {0} in annotation table: invalid numeric field")]
    InvalidNumber(usize),
}

/// Parse one annotation table line into an [`AnnotationRecord`].
///
/// Expects exactly 7 tab-separated fields: chromosome, start, end, gene,
/// score, strand, sequence. Gene and sequence are uppercased. `index` is the
/// 0-based line index reported in errors.
///
/// # Errors
///
/// Returns `AnnotationParseError::FieldCount` on the wrong number of fields,
/// or `AnnotationParseError::InvalidNumber` if start/end are not integers or
/// score is not a float.
pub fn parse_annotation_line(
    line: &str,
    index: usize,
) -> Result<AnnotationRecord, AnnotationParseError> {
    let fields: Vec<&str> = line.trim().split('\t').collect();
    if fields.len() != 7 {
        return Err(AnnotationParseError::FieldCount(index));
    }

    let start: u64 = fields[1]
        .parse()
        .map_err(|_| AnnotationParseError::InvalidNumber(index))?;
    let end: u64 = fields[2]
        .parse()
        .map_err(|_| AnnotationParseError::InvalidNumber(index))?;
    let score: f64 = fields[4]
        .parse()
        .map_err(|_| AnnotationParseError::InvalidNumber(index))?;

    Ok(AnnotationRecord {
        chrom: fields[0].to_string(),
        start,
        end,
        gene: fields[3].to_uppercase(),
        score,
        strand: fields[5].to_string(),
        sequence: fields[6].to_uppercase(),
    })
}
