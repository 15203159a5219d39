//! Core data types for sgRNA library annotation.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`LibraryEntry`], [`LibraryIndex`]: The user-supplied sgRNA library,
//!   indexed by guide sequence
//! - [`AnnotationRecord`]: One parsed line of a reference annotation table
//! - [`MatchCandidate`]: An annotation record matched against the library
//! - [`BedRecord`]: One BED6 output line
//! - [`Assembly`], [`LengthMode`]: Table-selection parameters
//!
//! Matching is **sequence-exact**: sequences and genes are normalized to
//! uppercase on load, and no fuzzy or prefix matching is performed.
//!
//! [`LibraryEntry`]: library::LibraryEntry
//! [`LibraryIndex`]: library::LibraryIndex
//! [`AnnotationRecord`]: record::AnnotationRecord
//! [`MatchCandidate`]: record::MatchCandidate
//! [`BedRecord`]: record::BedRecord
//! [`Assembly`]: types::Assembly
//! [`LengthMode`]: types::LengthMode

pub mod library;
pub mod record;
pub mod types;
