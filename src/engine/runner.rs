// src/engine/runner.rs

use std::io::Write;

use tracing::{Instrument, info, info_span, warn};

use crate::classify::OutcomeClassifier;
use crate::config::RunConfig;
use crate::engine::summary::{BatchSummary, ItemResult};
use crate::errors::{BatchError, Result};
use crate::exec::{PipelineBackend, PipelineCommand, RunExecutor};
use crate::report::Console;
use crate::source::{ItemSource, WorkItem};
use crate::types::{PipelineStatus, Verdict};

/// Sequential driver tying the item source, executor, classifier and
/// console together.
///
/// Fatal errors (list file, log directory) are returned; a failing item only
/// changes its own verdict.
pub struct BatchRunner<B, W> {
    executor: RunExecutor<B>,
    classifier: OutcomeClassifier,
    console: Console<W>,
}

impl<B: PipelineBackend, W: Write> BatchRunner<B, W> {
    pub fn new(config: RunConfig, backend: B, console: Console<W>) -> Self {
        let classifier = OutcomeClassifier::new(config.marker.clone());
        Self {
            executor: RunExecutor::new(config, backend),
            classifier,
            console,
        }
    }

    pub fn config(&self) -> &RunConfig {
        self.executor.config()
    }

    pub fn into_console(self) -> Console<W> {
        self.console
    }

    /// Process every item of the list file in order.
    pub async fn run(&mut self) -> Result<BatchSummary> {
        self.console.banner(self.executor.config())?;
        let source = ItemSource::open(&self.executor.config().list_file)?;

        let mut summary = BatchSummary::default();
        for item in source.items() {
            self.console.item_started(&item.label)?;

            let log = self.executor.log_path(&item);
            let (status, verdict) = self.process(&item).await?;

            self.console.item_finished(&item.label, verdict, &log)?;
            summary.push(ItemResult {
                label: item.label,
                path: item.path,
                log_path: log,
                status,
                verdict,
            });
        }

        let log_dir = &self.executor.config().log_dir;
        self.console.summary(&summary, log_dir)?;
        Ok(summary)
    }

    /// Execute and classify one item.
    ///
    /// Only a log directory that cannot be created stops the batch; any other
    /// problem with this item becomes a failed verdict.
    async fn process(&self, item: &WorkItem) -> Result<(PipelineStatus, Verdict)> {
        let span = info_span!("item", label = %item.label);
        let record = match self.executor.execute(item).instrument(span).await {
            Ok(record) => record,
            Err(err @ BatchError::LogDir { .. }) => return Err(err),
            Err(err) => {
                warn!(
                    label = %item.label,
                    error = %err,
                    "item could not be run; counting as failed"
                );
                return Ok((PipelineStatus(-1), Verdict::Failed));
            }
        };

        let verdict = match self.classifier.classify_log(&record.log_path) {
            Ok(verdict) => verdict,
            Err(err) => {
                warn!(
                    label = %item.label,
                    log = ?record.log_path,
                    error = %err,
                    "cannot read run log; counting as failed"
                );
                Verdict::Failed
            }
        };

        if verdict.is_ok() && !record.status.success() {
            warn!(
                label = %item.label,
                exit_code = record.status.code(),
                "pipeline exited non-zero but log has no failure marker"
            );
        }
        info!(
            label = %item.label,
            %verdict,
            exit_code = record.status.code(),
            "item finished"
        );

        Ok((record.status, verdict))
    }

    /// Print what [`BatchRunner::run`] would execute, without running
    /// anything or touching the log directory.
    pub fn preview(&mut self) -> Result<usize> {
        let cfg = self.executor.config();
        self.console.banner(cfg)?;
        let source = ItemSource::open(&cfg.list_file)?;

        let mut count = 0;
        for item in source.items() {
            let pipeline = PipelineCommand::for_item(&item, cfg);
            let log = self.executor.log_path(&item);
            self.console.dry_run_item(&item.label, &pipeline, &log)?;
            count += 1;
        }

        info!(items = count, "dry-run complete (no execution)");
        Ok(count)
    }
}
