//! CLI argument definitions for the reconciliation tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "rx",
    version,
    about = "Pharmacy catalog reconciliation - match extracted medication names",
    long_about = "Reconcile OCR-extracted medication names against a drug catalog.\n\n\
                  Scores every catalog entry with a weighted combination of\n\
                  Jaro-Winkler, Levenshtein, and bigram similarity, then decides\n\
                  between auto-match, reviewer suggestions, and no match."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

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

    /// Allow raw extracted prescription text in logs.
    ///
    /// Extracted lines can embed patient details; by default they are
    /// redacted from log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Match one extracted medication name against a catalog.
    Resolve(ResolveArgs),

    /// Match every extracted name in a file, one medication per line.
    Batch(BatchArgs),

    /// List the entries of a catalog file.
    Catalog(CatalogArgs),
}

#[derive(Parser)]
pub struct ResolveArgs {
    /// Path to the catalog CSV (id,name,strength,generic_name).
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,

    /// Extracted medication name to resolve.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Extracted strength; enables the exact name+strength fast path.
    #[arg(long, value_name = "STRENGTH")]
    pub strength: Option<String>,

    /// Override the suggestion floor (default 0.40). Tunable.
    #[arg(long = "floor", value_name = "SCORE")]
    pub floor: Option<f64>,

    /// Override the auto-match ceiling (default 0.63). Tunable.
    #[arg(long = "ceiling", value_name = "SCORE")]
    pub ceiling: Option<f64>,

    /// Maximum candidates to report (default 5).
    #[arg(long = "top", value_name = "N")]
    pub top: Option<usize>,

    /// Emit the outcome as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser)]
pub struct BatchArgs {
    /// Path to the catalog CSV (id,name,strength,generic_name).
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,

    /// File of extracted names, one `name` or `name,strength` per line.
    #[arg(value_name = "NAMES_FILE")]
    pub names_file: PathBuf,

    /// Override the suggestion floor (default 0.40). Tunable.
    #[arg(long = "floor", value_name = "SCORE")]
    pub floor: Option<f64>,

    /// Override the auto-match ceiling (default 0.63). Tunable.
    #[arg(long = "ceiling", value_name = "SCORE")]
    pub ceiling: Option<f64>,

    /// Emit the batch report as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser)]
pub struct CatalogArgs {
    /// Path to the catalog CSV (id,name,strength,generic_name).
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
