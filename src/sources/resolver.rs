use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::core::types::{Assembly, SUPPORTED_SGRNA_LENGTHS};

/// Remote root hosting the precomputed annotation tables
pub const REMOTE_TABLE_ROOT: &str = "https://bitbucket.org/liulab/mageck-vispr/downloads";

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("an assembly must be specified when no annotation table is provided")]
    MissingAssembly,
}

/// Where an annotation table lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocator {
    Local(PathBuf),
    Remote(String),
}

impl SourceLocator {
    /// Classify a user-supplied path or URL: anything starting with `http`
    /// is remote, everything else is a local path.
    #[must_use]
    pub fn from_spec(spec: &str) -> Self {
        if spec.starts_with("http") {
            Self::Remote(spec.to_string())
        } else {
            Self::Local(PathBuf::from(spec))
        }
    }

    /// The locator's name as used for compression-suffix detection and logs
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Local(path) => path.display().to_string(),
            Self::Remote(url) => url.clone(),
        }
    }
}

impl std::fmt::Display for SourceLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// File name of the precomputed table for an assembly/length pair.
/// A deterministic naming convention, not a lookup table.
#[must_use]
pub fn table_file_name(assembly: Assembly, sgrna_len: usize) -> String {
    format!("sgrna_annotation_{assembly}_exome_{sgrna_len}bp.txt.bz2")
}

/// Inputs to annotation source resolution
#[derive(Debug, Default)]
pub struct ResolveOptions<'a> {
    /// Explicit table path or URL; bypasses assembly/length selection
    pub annotation_table: Option<&'a str>,

    /// Local folder holding precomputed tables, instead of downloading
    pub annotation_folder: Option<&'a Path>,

    /// Assembly used to select precomputed tables
    pub assembly: Option<Assembly>,

    /// Explicitly requested sgRNA length; `None` means use observed lengths
    pub sgrna_len: Option<usize>,
}

/// Produce the ordered list of annotation sources to consult.
///
/// With an explicit table, that is the sole source. Otherwise one source per
/// accepted sgRNA length is built from the naming convention, rooted either
/// in the local folder or at the remote download root. In auto mode, observed
/// lengths outside the supported set are dropped with a warning; sgRNAs of
/// those lengths are simply never annotated.
///
/// # Errors
///
/// Returns `ResolveError::MissingAssembly` if neither an explicit table nor
/// an assembly was supplied.
pub fn resolve_sources(
    opts: &ResolveOptions<'_>,
    observed_lengths: &[usize],
) -> Result<Vec<SourceLocator>, ResolveError> {
    if let Some(spec) = opts.annotation_table {
        info!("Using existing annotation table: {spec}");
        return Ok(vec![SourceLocator::from_spec(spec)]);
    }

    let assembly = opts.assembly.ok_or(ResolveError::MissingAssembly)?;

    let lengths: Vec<usize> = match opts.sgrna_len {
        Some(len) => vec![len],
        None => observed_lengths
            .iter()
            .copied()
            .filter(|len| {
                let supported = SUPPORTED_SGRNA_LENGTHS.contains(len);
                if !supported {
                    warn!("Unsupported sgRNA length: {len}. These sgRNAs will not be annotated.");
                }
                supported
            })
            .collect(),
    };

    let mut sources = Vec::with_capacity(lengths.len());
    for len in lengths {
        let file_name = table_file_name(assembly, len);
        let locator = match opts.annotation_folder {
            Some(folder) => {
                let path = folder.join(&file_name);
                info!("Using local annotation table: {}", path.display());
                SourceLocator::Local(path)
            }
            None => {
                let url = format!("{REMOTE_TABLE_ROOT}/{file_name}");
                info!("Downloading annotation table: {url}");
                SourceLocator::Remote(url)
            }
        };
        sources.push(locator);
    }

    Ok(sources)
}
