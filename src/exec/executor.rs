// src/exec/executor.rs

//! Runs one work item and writes its log.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{error, info};

use crate::config::RunConfig;
use crate::errors::{BatchError, Result};
use crate::exec::backend::PipelineBackend;
use crate::exec::command::PipelineCommand;
use crate::source::WorkItem;
use crate::types::PipelineStatus;

/// What one invocation left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRecord {
    pub item: WorkItem,
    pub log_path: PathBuf,
    pub status: PipelineStatus,
}

/// Deterministic log location for a label.
pub fn log_path_for(log_dir: &Path, label: &str) -> PathBuf {
    log_dir.join(format!("run_{label}.log"))
}

/// Executes the pipeline for one item at a time and records it in
/// `<logdir>/run_<label>.log`.
///
/// Log layout:
///
/// ```text
/// # 2026-01-01 12:00:00 UTC run 564587 path /alice/data/2025/LHC25_FT0/564587
/// ...merged producer/consumer output...
/// # exit status 0
/// ```
pub struct RunExecutor<B> {
    config: RunConfig,
    backend: B,
}

impl<B: PipelineBackend> RunExecutor<B> {
    pub fn new(config: RunConfig, backend: B) -> Self {
        Self { config, backend }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn log_path(&self, item: &WorkItem) -> PathBuf {
        log_path_for(&self.config.log_dir, &item.label)
    }

    /// Run `item` to completion.
    ///
    /// Only problems with the log itself are returned as errors; anything
    /// the pipeline does (including failing to start) ends up in the log and
    /// the recorded status.
    pub async fn execute(&self, item: &WorkItem) -> Result<RunRecord> {
        let log_dir = &self.config.log_dir;
        fs::create_dir_all(log_dir).map_err(|source| BatchError::LogDir {
            path: log_dir.clone(),
            source,
        })?;

        let log_path = self.log_path(item);
        let mut log = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&log_path)?;

        writeln!(
            log,
            "# {} run {} path {}",
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
            item.label,
            item.path
        )?;

        let pipeline = PipelineCommand::for_item(item, &self.config);
        info!(label = %item.label, path = %item.path, log = ?log_path, "executing item");

        let status = match self.backend.run(&pipeline, &log).await {
            Ok(status) => status,
            Err(err) => {
                error!(label = %item.label, error = %err, "pipeline capture failed");
                writeln!(log, "qc-batch: pipeline error: {err}")?;
                PipelineStatus(-1)
            }
        };

        if !ends_with_newline(&mut log)? {
            writeln!(log)?;
        }
        writeln!(log, "# exit status {status}")?;
        log.sync_all()?;

        Ok(RunRecord {
            item: item.clone(),
            log_path,
            status,
        })
    }
}

/// Whether the byte just before the current position is a newline, so the
/// footer always starts on a line of its own.
fn ends_with_newline(file: &mut File) -> io::Result<bool> {
    if file.stream_position()? == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::Current(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
