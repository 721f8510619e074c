// src/lib.rs

pub mod classify;
pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod report;
pub mod source;
pub mod types;

use tracing::info;

use crate::cli::CliArgs;
use crate::engine::{BatchRunner, BatchSummary};
use crate::errors::Result;
use crate::exec::ProcessPipeline;
use crate::report::Console;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - configuration resolution (CLI, environment, optional TOML file)
/// - the process-backed pipeline
/// - the sequential batch runner and console report
///
/// Returns the per-item summary; per-item failures are part of the summary,
/// only fatal errors come back as `Err`.
pub async fn run(args: CliArgs) -> Result<BatchSummary> {
    let cfg = config::resolve(&args)?;
    let mut runner = BatchRunner::new(cfg, ProcessPipeline::new(), Console::stdout());

    if args.dry_run {
        runner.preview()?;
        return Ok(BatchSummary::default());
    }

    let summary = runner.run().await?;
    info!(
        ok = summary.ok_count(),
        failed = summary.failed_count(),
        "batch complete"
    );
    Ok(summary)
}
