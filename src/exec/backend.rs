// src/exec/backend.rs

//! Pluggable pipeline backend abstraction.
//!
//! The run executor talks to a `PipelineBackend` instead of spawning
//! processes itself. Production uses [`ProcessPipeline`], which starts the
//! two real executables; tests can provide an in-process backend that writes
//! scripted output and returns a scripted status.

use std::fs::File;
use std::future::Future;
use std::pin::Pin;

use crate::errors::Result;
use crate::exec::command::PipelineCommand;
use crate::types::PipelineStatus;

pub use super::pipeline::ProcessPipeline;

/// Run a connected producer → consumer pair and capture its merged output.
pub trait PipelineBackend: Send + Sync {
    /// Execute `pipeline`, appending everything both stages print to
    /// `output`, and return the status of the last stage.
    ///
    /// Implementations must not report launch failures as `Err`: a stage that
    /// cannot be started is written into `output` and reflected in the
    /// returned status. `Err` is reserved for failures of the capture itself.
    fn run<'a>(
        &'a self,
        pipeline: &'a PipelineCommand,
        output: &'a File,
    ) -> Pin<Box<dyn Future<Output = Result<PipelineStatus>> + Send + 'a>>;
}
