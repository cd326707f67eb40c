//! CLI argument definitions for the readiness check.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "sis-readiness",
    version,
    about = "Validate and join discipline incident and consequence exports",
    long_about = "Validate and join a discipline incident export with its consequence export.\n\n\
                  Headers from Skyward, PowerSchool, DeansList, Infinite Campus and TEAMS\n\
                  exports are matched exactly against known variants. The run either prints\n\
                  a readiness report or halts with the steps needed to fix the input."
)]
pub struct Cli {
    /// Incident export (CSV with a header row).
    #[arg(value_name = "INCIDENT_CSV", required_unless_present = "list_aliases")]
    pub incident: Option<PathBuf>,

    /// Consequence export (CSV with a header row).
    #[arg(value_name = "CONSEQUENCE_CSV", required_unless_present = "list_aliases")]
    pub consequence: Option<PathBuf>,

    /// JSON file mapping raw headers to canonical fields per file role.
    ///
    /// A role present in the file replaces automatic alias detection for
    /// that file entirely.
    #[arg(long = "overrides", value_name = "FILE")]
    pub overrides: Option<PathBuf>,

    /// How to print the report or halt.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormatArg,

    /// Print the first N joined rows after the report.
    #[arg(long = "preview", value_name = "N")]
    pub preview: Option<usize>,

    /// List every known header variant and exit.
    #[arg(long = "list-aliases")]
    pub list_aliases: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Allow student record values (incident numbers) in trace logs.
    #[arg(long = "log-data")]
    pub log_data: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Text,
    Json,
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
