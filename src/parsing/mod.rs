//! Parsers for the tabular inputs consumed by the annotator.
//!
//! This module provides parsers for:
//!
//! - **Library files**: `identifier, sequence, gene` rows, no header; comma
//!   separated for `.csv`, tab separated otherwise
//! - **Annotation table lines**: 7 tab-separated fields with fail-fast
//!   numeric validation, carrying the 0-based line index in errors
//! - **Efficiency tables**: tab-separated score tables with a header and a
//!   configured score column
//!
//! ## Example
//!
//! ```rust,no_run
//! use sgrna_annotator::parsing::library::load_library;
//! use std::path::Path;
//!
//! let index = load_library(Path::new("library.csv")).unwrap();
//! println!("{} sgRNAs, lengths {:?}", index.len(), index.observed_lengths());
//! ```

pub mod annotation;
pub mod library;
pub mod overlay;
