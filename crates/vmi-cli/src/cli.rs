//! CLI argument definitions for the ViewModel injection processor.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "vmi",
    version,
    about = "ViewModel injection processor - generate factory and module glue",
    long_about = "Validate @ViewModelInject constructors and generate the factory\n\
                  and aggregation-module sources a dependency container consumes.\n\
                  Pass files are JSON descriptions of one compilation pass each."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Process pass files and write generated sources.
    Process(ProcessArgs),

    /// Run the pipeline and report diagnostics without writing sources.
    Check(CheckArgs),
}

#[derive(Parser)]
pub struct ProcessArgs {
    /// Pass files in compilation order (one JSON file per pass).
    #[arg(value_name = "PASS_FILE", required = true)]
    pub passes: Vec<PathBuf>,

    /// Output directory for generated sources.
    #[arg(long = "out", value_name = "DIR")]
    pub out: PathBuf,

    /// Diagnostics report path (default: <DIR>/diagnostics_report.json).
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Skip the @Generated marker on generated types.
    #[arg(long = "no-generated-annotation")]
    pub no_generated_annotation: bool,

    /// Treat the SavedStateHandle type as absent from the classpath.
    #[arg(long = "no-state-handle")]
    pub no_state_handle: bool,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Pass files in compilation order (one JSON file per pass).
    #[arg(value_name = "PASS_FILE", required = true)]
    pub passes: Vec<PathBuf>,

    /// Treat the SavedStateHandle type as absent from the classpath.
    #[arg(long = "no-state-handle")]
    pub no_state_handle: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
