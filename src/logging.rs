// src/logging.rs

//! Diagnostics for `qc-batch` on `tracing` + `tracing-subscriber`.
//!
//! The filter comes from the `--log-level` flag when given. Otherwise
//! `QC_BATCH_LOG` is read as an `EnvFilter` directive list (`debug`,
//! `qc_batch=trace,warn`, ...), falling back to `info`. Invalid directives in
//! the variable are skipped rather than failing startup.
//!
//! Everything goes to STDERR; stdout carries the per-item console report.
//! Per-item events run inside an `item` span carrying the run label, so each
//! line names the run it belongs to.

use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{EnvFilter, fmt};

use crate::cli::LogLevel;

const LOG_ENV_VAR: &str = "QC_BATCH_LOG";

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let filter = match cli_level {
        Some(lvl) => EnvFilter::new(directive(lvl)),
        None => env_filter(),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing tracing subscriber: {e}"))?;

    Ok(())
}

fn env_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy()
}

// The flag scopes its level to this crate; dependencies stay at `warn`.
fn directive(lvl: LogLevel) -> String {
    let level = match lvl {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };
    format!("warn,qc_batch={level}")
}
