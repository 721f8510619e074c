// src/exec/pipeline.rs

//! Process-backed pipeline: two OS processes joined by a pipe.

use std::fs::File;
use std::future::Future;
use std::io::Write;
use std::pin::Pin;
use std::process::Stdio;

use anyhow::Context;
use tokio::process::{Child, ChildStdout, Command};
use tracing::{debug, info, warn};

use crate::errors::Result;
use crate::exec::backend::PipelineBackend;
use crate::exec::command::{CommandLine, PipelineCommand};
use crate::types::PipelineStatus;

/// Real backend used in production.
///
/// Both children inherit duplicates of the log file handle, so their output
/// lands in the file in whatever order the OS delivers it, without passing
/// through this process.
#[derive(Debug, Clone, Default)]
pub struct ProcessPipeline;

impl ProcessPipeline {
    pub fn new() -> Self {
        Self
    }
}

impl PipelineBackend for ProcessPipeline {
    fn run<'a>(
        &'a self,
        pipeline: &'a PipelineCommand,
        output: &'a File,
    ) -> Pin<Box<dyn Future<Output = Result<PipelineStatus>> + Send + 'a>> {
        Box::pin(run_pipeline(pipeline, output))
    }
}

async fn run_pipeline(pipeline: &PipelineCommand, output: &File) -> Result<PipelineStatus> {
    info!(cmd = %pipeline, "starting pipeline");

    let mut producer_cmd = Command::new(&pipeline.producer.program);
    producer_cmd
        .args(&pipeline.producer.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(log_handle(output)?)
        .kill_on_drop(true);

    let mut producer = spawn_stage(&mut producer_cmd, &pipeline.producer, output)?;
    drop(producer_cmd);

    // A producer that never started leaves the consumer reading an empty
    // stream, as `missing | consumer` would in a shell.
    let consumer_stdin = match producer.as_mut().and_then(|c| c.stdout.take()) {
        Some(stdout) => pipe_to_consumer(stdout)?,
        None => Stdio::null(),
    };

    let mut consumer_cmd = Command::new(&pipeline.consumer.program);
    consumer_cmd
        .args(&pipeline.consumer.args)
        .stdin(consumer_stdin)
        .stdout(log_handle(output)?)
        .stderr(log_handle(output)?)
        .kill_on_drop(true);

    let consumer = spawn_stage(&mut consumer_cmd, &pipeline.consumer, output)?;
    // Release our copy of the pipe's read end so the producer sees a broken
    // pipe if the consumer exits early.
    drop(consumer_cmd);

    let producer_wait = wait_stage(producer, "producer");
    let consumer_wait = wait_stage(consumer, "consumer");
    let (producer_status, consumer_status) = tokio::join!(producer_wait, consumer_wait);

    if let Some(status) = producer_status? {
        debug!(exit_code = status.code(), "producer exited");
    }

    let status = consumer_status?.unwrap_or(PipelineStatus::NOT_LAUNCHED);
    info!(exit_code = status.code(), "pipeline finished");
    Ok(status)
}

fn pipe_to_consumer(stdout: ChildStdout) -> Result<Stdio> {
    let stdio: Stdio = stdout
        .try_into()
        .context("handing producer stdout to the consumer")?;
    Ok(stdio)
}

fn log_handle(output: &File) -> Result<Stdio> {
    let dup = output
        .try_clone()
        .context("duplicating log file handle for child process")?;
    Ok(Stdio::from(dup))
}

/// Spawn one stage. A launch failure is recorded in the log and yields `None`.
fn spawn_stage(cmd: &mut Command, line: &CommandLine, output: &File) -> Result<Option<Child>> {
    match cmd.spawn() {
        Ok(child) => Ok(Some(child)),
        Err(err) => {
            warn!(program = %line.program, error = %err, "failed to launch pipeline stage");
            let mut out = output;
            writeln!(out, "qc-batch: cannot launch {}: {err}", line.program)
                .context("recording launch failure in log")?;
            Ok(None)
        }
    }
}

async fn wait_stage(child: Option<Child>, stage: &str) -> Result<Option<PipelineStatus>> {
    let Some(mut child) = child else {
        return Ok(None);
    };

    let status = child
        .wait()
        .await
        .with_context(|| format!("waiting for {stage} process"))?;

    Ok(Some(PipelineStatus::from_exit_status(status)))
}
