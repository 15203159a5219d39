//! Annotation source resolution and decoding.
//!
//! Resolution turns CLI options plus the library's observed sgRNA lengths
//! into an ordered list of [`SourceLocator`]s: an explicit path or URL, files
//! under a local folder, or remote downloads, all following the
//! `sgrna_annotation_{assembly}_exome_{len}bp.txt.bz2` naming convention.
//!
//! Decoding opens a locator as a lazy line stream, selecting bzip2, gzip, or
//! plain-text handling purely from the file suffix.
//!
//! [`SourceLocator`]: resolver::SourceLocator

pub mod decoder;
pub mod resolver;
