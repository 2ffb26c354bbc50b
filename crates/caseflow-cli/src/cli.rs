//! CLI argument definitions for Caseflow.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "caseflow",
    version,
    about = "Caseflow - Bulk case-record importer",
    long_about = "Import arbitrary CSV case files: fuzzy column mapping against\n\
                  the case-record schema, per-row validation with fix suggestions,\n\
                  and chunked, resumable submission to the case store."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Import a CSV file: map, validate, and submit rows in chunks.
    Import(ImportArgs),

    /// Map and validate a CSV file without submitting anything.
    Check(CheckArgs),

    /// List the target schema fields and their aliases.
    Fields,
}

#[derive(Parser)]
pub struct ImportArgs {
    /// Path to the CSV file to import.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Override a column mapping, e.g. `--map ref_no=case_id`. Repeatable;
    /// an empty field (`--map notes=`) clears the column's mapping.
    #[arg(long = "map", value_name = "SOURCE=FIELD")]
    pub map: Vec<String>,

    /// Rows per submission chunk.
    #[arg(long = "chunk-size", value_name = "N", default_value_t = 100)]
    pub chunk_size: usize,

    /// Submit the valid rows even when some rows fail validation.
    ///
    /// By default the import aborts when any row is invalid so the file can
    /// be repaired and resubmitted as a whole.
    #[arg(long = "partial")]
    pub partial: bool,

    /// Apply the deterministic fix helpers (collapse whitespace, phone
    /// country code, uppercase tokens) before validating.
    #[arg(long = "apply-fixes")]
    pub apply_fixes: bool,

    /// Write the per-row failure report to this path after submission.
    #[arg(long = "error-report", value_name = "PATH")]
    pub error_report: Option<PathBuf>,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to the CSV file to check.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
