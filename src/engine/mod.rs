// src/engine/mod.rs

//! Batch driver.
//!
//! - [`runner`] holds the sequential loop: read items, execute, classify,
//!   report.
//! - [`summary`] collects per-item results for the final report.
//!
//! Items never overlap: one item is executed, classified and reported before
//! the next one is read.

pub mod runner;
pub mod summary;

pub use runner::BatchRunner;
pub use summary::{BatchSummary, ItemResult};
