use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

use crate::core::library::{LibraryEntry, LibraryIndex};

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error parsing line {line} in library file: expected 3 columns, found {found}")]
    ColumnCount { line: usize, found: usize },
}

/// Delimiter for a library file, chosen from the file extension:
/// comma for `.csv`, tab otherwise. No sniffing.
#[must_use]
pub fn delimiter_for(path: &Path) -> char {
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
    if is_csv {
        ','
    } else {
        '\t'
    }
}

/// Load an sgRNA library design file (columns identifier, sequence, gene;
/// no header) into a [`LibraryIndex`].
///
/// # Errors
///
/// Returns `LibraryError::Io` if the file cannot be read, or
/// `LibraryError::ColumnCount` on a malformed row. No partial recovery is
/// attempted.
pub fn load_library(path: &Path) -> Result<LibraryIndex, LibraryError> {
    let content = std::fs::read_to_string(path)?;
    parse_library_text(&content, delimiter_for(path))
}

/// Parse library text with the given delimiter.
///
/// Sequences and genes are uppercased. Duplicate sequences are last-write-wins
/// in the index. If more than one distinct sequence length is observed, a
/// warning is logged listing each length and its row count.
///
/// # Errors
///
/// Returns `LibraryError::ColumnCount` if a row has fewer than 3 columns.
pub fn parse_library_text(text: &str, delimiter: char) -> Result<LibraryIndex, LibraryError> {
    let mut index = LibraryIndex::new();

    for (i, line) in text.lines().enumerate() {
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(delimiter).collect();
        // Extra columns are tolerated; only the first three are used
        if fields.len() < 3 {
            return Err(LibraryError::ColumnCount {
                line: i,
                found: fields.len(),
            });
        }

        index.insert(LibraryEntry {
            identifier: fields[0].trim().to_string(),
            sequence: fields[1].trim().to_uppercase(),
            gene: fields[2].trim().to_uppercase(),
        });
    }

    let counts = index.length_counts();
    if counts.len() > 1 {
        warn!("The library file contains a mixture of sgRNAs with different lengths.");
        let mut pairs: Vec<(usize, usize)> = counts.iter().map(|(l, c)| (*l, *c)).collect();
        pairs.sort_unstable();
        let summary: Vec<String> = pairs.iter().map(|(l, c)| format!("{l}:{c}")).collect();
        warn!(
            "sgRNA length and count in the library is: {}",
            summary.join(",")
        );
    }
    info!("Estimated sgRNA lengths: {:?}", index.observed_lengths());

    Ok(index)
}
