use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::types::{Assembly, LengthMode};
use crate::matching::engine::Annotator;
use crate::matching::report::{build_report, AnnotationReport};
use crate::parsing::library::load_library;
use crate::parsing::overlay::EfficiencyTable;
use crate::sources::decoder::open_source;
use crate::sources::resolver::{resolve_sources, ResolveOptions};

#[derive(Args)]
pub struct AnnotateArgs {
    /// Path to the sgRNA library design file: columns identifier, sequence,
    /// gene; no header; comma separated for .csv, tab separated otherwise
    #[arg(required = true)]
    pub library: PathBuf,

    /// Genome assembly used to select precomputed annotation tables
    #[arg(long, value_enum)]
    pub assembly: Option<Assembly>,

    /// Length of the sgRNAs in the library file
    #[arg(long, value_enum, default_value = "auto")]
    pub sgrna_len: LengthMode,

    /// Path or URL of an annotation table (tab separated, no header; columns
    /// chromosome, start, end, gene, score, strand, sequence; plain, .gz, or
    /// .bz2). Bypasses assembly/length based table selection.
    #[arg(long)]
    pub annotation_table: Option<String>,

    /// Look for precomputed annotation tables in this folder instead of
    /// downloading them
    #[arg(long)]
    pub annotation_folder: Option<PathBuf>,

    /// Tab-separated score table with a header, sgRNA identifier in the first
    /// column; its values replace the annotation table's score column
    #[arg(long, requires = "efficiency_column")]
    pub efficiency: Option<PathBuf>,

    /// Column of the --efficiency table to use as the score, e.g. the LFC
    /// column of a MAGeCK sgRNA summary
    #[arg(long)]
    pub efficiency_column: Option<String>,
}

/// Execute the annotate subcommand.
///
/// # Errors
///
/// Returns an error on configuration problems (no table and no assembly,
/// overlay column missing), on library/annotation parse failures, and on
/// source open or fetch failures. Soft conditions (unsupported lengths,
/// unmatched sequences, gene mismatches) are logged and the run completes
/// with partial output.
pub fn run(args: AnnotateArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    // Configuration errors surface before any file is touched
    if args.annotation_table.is_none() && args.assembly.is_none() {
        anyhow::bail!(
            "need to specify one of: an annotation table (--annotation-table) or an assembly (--assembly)"
        );
    }

    let overlay = match (&args.efficiency, &args.efficiency_column) {
        (Some(path), Some(column)) => Some(EfficiencyTable::load(path, column)?),
        // clap's `requires` catches this first; kept for library callers
        (Some(_), None) => {
            anyhow::bail!("--efficiency-column must be specified together with --efficiency")
        }
        _ => None,
    };

    let library = load_library(&args.library)?;

    if verbose {
        eprintln!(
            "Loaded {} library sequences from {}",
            library.len(),
            args.library.display()
        );
        if let Some(table) = &overlay {
            eprintln!("Loaded efficiency scores for {} sgRNAs", table.len());
        }
    }

    let opts = ResolveOptions {
        annotation_table: args.annotation_table.as_deref(),
        annotation_folder: args.annotation_folder.as_deref(),
        assembly: args.assembly,
        sgrna_len: args.sgrna_len.explicit(),
    };
    let sources = resolve_sources(&opts, &library.observed_lengths())?;

    let mut annotator = Annotator::new(&library, overlay.as_ref());
    for locator in &sources {
        let reader = open_source(locator)?;
        annotator.consume(reader)?;
    }

    if verbose {
        eprintln!(
            "Matched {} of {} library sequences across {} source(s)",
            annotator.accumulator().len(),
            library.len(),
            sources.len()
        );
    }

    let report = build_report(&library, annotator.accumulator());

    match format {
        OutputFormat::Bed => print_bed(&report),
        OutputFormat::Json => print_json(&report)?,
    }

    Ok(())
}

fn print_bed(report: &AnnotationReport) {
    for record in &report.records {
        println!("{record}");
    }
}

fn print_json(report: &AnnotationReport) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
