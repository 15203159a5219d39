//! # sgrna-annotator
//!
//! A library for annotating CRISPR sgRNA library designs with genomic
//! position and efficiency-score information.
//!
//! An sgRNA library maps guide sequences to identifiers and target genes.
//! To place those guides on the genome, their sequences are matched against
//! reference annotation tables (per assembly and sgRNA length) that map each
//! sequence to coordinates, gene, score, and strand.
//!
//! `sgrna-annotator` loads the library, resolves which annotation tables to
//! consult (explicit path or URL, local folder, or remote download), streams
//! and decompresses them, matches sequences exactly, optionally overlays an
//! externally computed efficiency score, and reports one BED6 line per
//! accepted candidate. Guides whose table gene disagrees with the library, or
//! that never match at all, are flagged on the diagnostic channel.
//!
//! ## Example
//!
//! ```rust,no_run
//! use sgrna_annotator::matching::engine::Annotator;
//! use sgrna_annotator::matching::report::build_report;
//! use sgrna_annotator::parsing::library::load_library;
//! use sgrna_annotator::sources::decoder::open_source;
//! use sgrna_annotator::sources::resolver::SourceLocator;
//! use std::path::Path;
//!
//! // Load the library design (identifier, sequence, gene)
//! let library = load_library(Path::new("library.csv")).unwrap();
//!
//! // Stream an annotation table into the matcher
//! let locator = SourceLocator::from_spec("tables/custom_annotation.txt.bz2");
//! let mut annotator = Annotator::new(&library, None);
//! annotator.consume(open_source(&locator).unwrap()).unwrap();
//!
//! // Resolve candidates into BED records
//! let report = build_report(&library, annotator.accumulator());
//! for record in &report.records {
//!     println!("{record}");
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Library index, annotation records, and match candidates
//! - [`parsing`]: Parsers for library, annotation, and efficiency tables
//! - [`sources`]: Annotation table resolution and compressed-stream decoding
//! - [`matching`]: The matcher and the output reporter
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod sources;

// Re-export commonly used types for convenience
pub use crate::core::library::{LibraryEntry, LibraryIndex};
pub use crate::core::record::{AnnotationRecord, BedRecord, MatchCandidate};
pub use crate::core::types::{Assembly, LengthMode};
pub use crate::matching::engine::{Annotator, MatchAccumulator};
pub use crate::matching::report::{build_report, AnnotationReport};
