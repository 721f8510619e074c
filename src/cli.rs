// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! The environment-backed flags rely on clap's `env` feature; a flag given on
//! the command line always wins over its environment variable.

use clap::{Parser, ValueEnum};

use crate::config::{DEFAULT_LIST_FILE, DEFAULT_LOG_DIR};

/// Command-line arguments for `qc-batch`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "qc-batch",
    version,
    about = "Run the digit-reader → QC pipeline over a list of data paths.",
    long_about = None
)]
pub struct CliArgs {
    /// File with one data path per line (blank lines are skipped).
    #[arg(value_name = "LISTFILE", default_value = DEFAULT_LIST_FILE)]
    pub list_file: String,

    /// Directory receiving one `run_<label>.log` per item.
    #[arg(value_name = "LOGDIR", default_value = DEFAULT_LOG_DIR)]
    pub log_dir: String,

    /// Optional TOML file with tool and classifier settings.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// QC configuration locator passed to the consumer as `json://<locator>`.
    #[arg(long, value_name = "PATH", env = "QC_CONFIG")]
    pub qc_config: Option<String>,

    /// Producer (digit reader) executable.
    #[arg(long, value_name = "PROGRAM", env = "QC_BATCH_PRODUCER")]
    pub producer: Option<String>,

    /// Consumer (QC runner) executable.
    #[arg(long, value_name = "PROGRAM", env = "QC_BATCH_CONSUMER")]
    pub consumer: Option<String>,

    /// Literal whose presence in a run log marks the run as failed.
    #[arg(long, value_name = "TEXT")]
    pub marker: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `QC_BATCH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Resolve config and print the pipeline for each item without running it.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
