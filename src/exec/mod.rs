// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`command`] builds the producer and consumer command lines for an item.
//! - [`backend`] provides the `PipelineBackend` trait the executor runs
//!   through, so tests can swap in a fake.
//! - [`pipeline`] is the production backend based on `tokio::process`.
//! - [`executor`] owns the per-item log: header, captured output, footer.

pub mod backend;
pub mod command;
pub mod executor;
pub mod pipeline;

pub use backend::{PipelineBackend, ProcessPipeline};
pub use command::{CommandLine, PipelineCommand};
pub use executor::{RunExecutor, RunRecord, log_path_for};
