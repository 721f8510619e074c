// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::CliArgs;
use crate::config::model::{DEFAULT_CONSUMER, DEFAULT_MARKER};
use crate::config::model::{DEFAULT_PRODUCER, DEFAULT_QC_CONFIG};
use crate::config::model::{FileConfig, RunConfig, ToolsConfig};
use crate::errors::{BatchError, Result};

/// Load the optional TOML settings file.
///
/// This only performs deserialization; merging with CLI/environment values
/// happens in [`resolve`].
pub fn load_from_path(path: impl AsRef<Path>) -> Result<FileConfig> {
    let path = path.as_ref();
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            let msg = format!("cannot read config file {path:?}: {e}");
            return Err(BatchError::Config(msg));
        }
    };

    let config: FileConfig = toml::from_str(&contents)?;

    Ok(config)
}

/// Resolve the run configuration once at startup.
///
/// Per value the first source that provides it wins:
/// 1. CLI flag (or its environment variable, handled by clap)
/// 2. the `--config` TOML file
/// 3. the built-in default
pub fn resolve(args: &CliArgs) -> Result<RunConfig> {
    let file = match args.config.as_deref() {
        Some(path) => load_from_path(path)?,
        None => FileConfig::default(),
    };

    let FileConfig { tools, qc, classify } = file;

    let marker = pick(&args.marker, classify.marker, DEFAULT_MARKER);
    if marker.is_empty() {
        let msg = "failure marker must not be empty".to_string();
        return Err(BatchError::Config(msg));
    }

    let cfg = RunConfig {
        list_file: PathBuf::from(&args.list_file),
        log_dir: PathBuf::from(&args.log_dir),
        qc_config: pick(&args.qc_config, qc.config, DEFAULT_QC_CONFIG),
        tools: ToolsConfig {
            producer: pick(&args.producer, tools.producer, DEFAULT_PRODUCER),
            consumer: pick(&args.consumer, tools.consumer, DEFAULT_CONSUMER),
        },
        marker,
    };

    debug!(?cfg, "resolved run configuration");
    Ok(cfg)
}

fn pick(cli: &Option<String>, file: Option<String>, default: &str) -> String {
    match cli {
        Some(value) => value.clone(),
        None => file.unwrap_or_else(|| default.to_string()),
    }
}
