// src/config/mod.rs

//! Configuration for a batch run.
//!
//! Responsibilities:
//! - Define the optional TOML file model and the resolved `RunConfig` (`model.rs`).
//! - Load the file and merge it with CLI/environment values (`loader.rs`).
//!
//! Everything is resolved once at startup; the batch loop only ever sees an
//! immutable `RunConfig`.

pub mod loader;
pub mod model;

pub use loader::{load_from_path, resolve};
pub use model::{DEFAULT_CONSUMER, DEFAULT_LIST_FILE, DEFAULT_LOG_DIR, DEFAULT_MARKER};
pub use model::{DEFAULT_PRODUCER, DEFAULT_QC_CONFIG, FileConfig, RunConfig, ToolsConfig};
