//! Command-line interface for sgrna-annotator.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **annotate**: Annotate an sgRNA library design with genomic position
//!   and efficiency-score information, printed in BED format
//!
//! ## Usage
//!
//! ```text
//! # Annotate against the hg38 precomputed tables (downloads as needed)
//! sgrna-annotator annotate library.csv --assembly hg38 > library.bed
//!
//! # Use a local folder of precomputed tables
//! sgrna-annotator annotate library.csv --assembly hg38 --annotation-folder tables/
//!
//! # Use an explicit annotation table (path or URL; plain, .gz, or .bz2)
//! sgrna-annotator annotate library.txt --annotation-table custom_table.txt.bz2
//!
//! # Replace the score column with MAGeCK log fold changes
//! sgrna-annotator annotate library.csv --assembly hg19 \
//!     --efficiency sgrna_summary.txt --efficiency-column LFC
//! ```
//!
//! BED lines go to stdout; diagnostics go to stderr, so the BED output stays
//! machine-parseable.

use clap::{Parser, Subcommand};

pub mod annotate;

#[derive(Parser)]
#[command(name = "sgrna-annotator")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Annotate CRISPR sgRNA library designs with genomic positions and scores")]
#[command(
    long_about = "sgrna-annotator annotates an sgRNA library design (identifier, sequence, gene) with genomic position and predicted efficiency information from reference annotation tables.\n\nTables are selected by genome assembly and sgRNA length and fetched from a local folder or downloaded on demand; alternatively an explicit table path or URL can be given. Results are printed as BED6 lines, with unmatched or gene-mismatched sgRNAs reported on stderr for manual review."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "bed")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Annotate an sgRNA library design, printing BED6 lines to stdout
    Annotate(annotate::AnnotateArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Bed,
    Json,
}
