use std::fs::File;
use std::io::{BufRead, BufReader, Read};

use bzip2::read::BzDecoder;
use flate2::read::GzDecoder;
use thiserror::Error;

use crate::sources::resolver::SourceLocator;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        source: reqwest::Error,
    },
}

/// Compression applied to an annotation source, keyed purely by file suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    Bzip2,
    Gzip,
    None,
}

impl Compression {
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name.ends_with(".bz2") {
            Self::Bzip2
        } else if name.ends_with(".gz") {
            Self::Gzip
        } else {
            Self::None
        }
    }
}

/// Open a source locator as a buffered line reader, transparently
/// decompressing by suffix.
///
/// The reader is a fresh, non-restartable stream; re-reading requires a new
/// open. Open and fetch failures abort the run.
///
/// # Errors
///
/// Returns `SourceError::Open` for local files and `SourceError::Fetch` for
/// remote URLs (including non-success HTTP statuses).
pub fn open_source(locator: &SourceLocator) -> Result<Box<dyn BufRead>, SourceError> {
    let raw: Box<dyn Read> = match locator {
        SourceLocator::Local(path) => {
            let file = File::open(path).map_err(|e| SourceError::Open {
                path: path.display().to_string(),
                source: e,
            })?;
            Box::new(file)
        }
        SourceLocator::Remote(url) => {
            let response = reqwest::blocking::get(url)
                .and_then(reqwest::blocking::Response::error_for_status)
                .map_err(|e| SourceError::Fetch {
                    url: url.clone(),
                    source: e,
                })?;
            Box::new(response)
        }
    };

    Ok(match Compression::from_name(&locator.name()) {
        Compression::Bzip2 => Box::new(BufReader::new(BzDecoder::new(raw))),
        Compression::Gzip => Box::new(BufReader::new(GzDecoder::new(raw))),
        Compression::None => Box::new(BufReader::new(raw)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    #[test]
    fn test_compression_from_suffix() {
        assert_eq!(Compression::from_name("table.txt.bz2"), Compression::Bzip2);
        assert_eq!(Compression::from_name("table.txt.gz"), Compression::Gzip);
        assert_eq!(Compression::from_name("table.txt"), Compression::None);
        assert_eq!(
            Compression::from_name("https://example.org/t.txt.bz2"),
            Compression::Bzip2
        );
    }

    #[test]
    fn test_open_plain_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.txt");
        std::fs::write(&path, "line one\nline two\n").unwrap();

        let reader = open_source(&SourceLocator::Local(path)).unwrap();
        let lines: Vec<String> = reader.lines().map(Result::unwrap).collect();
        assert_eq!(lines, vec!["line one", "line two"]);
    }

    #[test]
    fn test_open_gzip_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.txt.gz");
        let file = File::create(&path).unwrap();
        let mut encoder = flate2::write::GzEncoder::new(file, flate2::Compression::default());
        encoder.write_all(b"compressed line\n").unwrap();
        encoder.finish().unwrap();

        let reader = open_source(&SourceLocator::Local(path)).unwrap();
        let lines: Vec<String> = reader.lines().map(Result::unwrap).collect();
        assert_eq!(lines, vec!["compressed line"]);
    }

    #[test]
    fn test_open_bzip2_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.txt.bz2");
        let file = File::create(&path).unwrap();
        let mut encoder = bzip2::write::BzEncoder::new(file, bzip2::Compression::default());
        encoder.write_all(b"bzipped line\n").unwrap();
        encoder.finish().unwrap();

        let reader = open_source(&SourceLocator::Local(path)).unwrap();
        let lines: Vec<String> = reader.lines().map(Result::unwrap).collect();
        assert_eq!(lines, vec!["bzipped line"]);
    }

    #[test]
    fn test_missing_local_file_fails() {
        let locator = SourceLocator::Local(PathBuf::from("/no/such/table.txt"));
        let err = open_source(&locator).err().unwrap();
        assert!(matches!(err, SourceError::Open { .. }));
        assert!(err.to_string().contains("/no/such/table.txt"));
    }
}
