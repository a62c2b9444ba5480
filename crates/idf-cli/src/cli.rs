//! CLI argument definitions for the integrity data pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "idf",
    version,
    about = "Integrity Data Foundation - validate and normalize equipment integrity records",
    long_about = "Validate an equipment integrity (corrosion/inspection) CSV export against the\n\
                  record schema, write a JSON issue report, and write a normalized CSV with\n\
                  canonical column names and coerced numeric fields.\n\n\
                  Exit codes: 0 = no errors, 1 = validation errors, 2 = input file missing."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate and normalize an integrity data export.
    Run(RunArgs),

    /// List the known integrity record columns.
    Columns,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Input directory containing the integrity CSV export.
    #[arg(long = "input", value_name = "DIR")]
    pub input: PathBuf,

    /// Output directory for the issue report and normalized data.
    #[arg(long = "output", value_name = "DIR")]
    pub output: PathBuf,

    /// CSV file name inside the input directory.
    #[arg(long = "file-name", value_name = "NAME")]
    pub file_name: Option<String>,

    /// Validate and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
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
