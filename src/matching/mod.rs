//! Sequence matching and output resolution.
//!
//! This module provides the two stages that turn streamed annotation records
//! into the final BED report:
//!
//! - [`Annotator`]: streams decoded annotation sources, matches each record's
//!   sequence against the library index, and accumulates all genomic
//!   candidates per sequence
//! - [`build_report`]: runs once after all sources are drained and applies
//!   the gene-agreement preference per sequence
//!
//! The design intentionally buffers candidates instead of streaming output:
//! the gene-agreement decision needs full visibility across a sequence's
//! candidate set before any line is emitted.
//!
//! ## Example
//!
//! ```rust,no_run
//! use sgrna_annotator::matching::engine::Annotator;
//! use sgrna_annotator::matching::report::build_report;
//! use sgrna_annotator::parsing::library::load_library;
//! use std::io::Cursor;
//! use std::path::Path;
//!
//! let library = load_library(Path::new("library.csv")).unwrap();
//! let mut annotator = Annotator::new(&library, None);
//! annotator
//!     .consume(Cursor::new("chr1\t100\t120\tTP53\t5.0\t+\tACGTACGTACGTACGTACGT\n"))
//!     .unwrap();
//!
//! let report = build_report(&library, annotator.accumulator());
//! for record in &report.records {
//!     println!("{record}");
//! }
//! ```
//!
//! [`Annotator`]: engine::Annotator
//! [`build_report`]: report::build_report

pub mod engine;
pub mod report;
