// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

pub const DEFAULT_LIST_FILE: &str = "laser_paths.lst";
pub const DEFAULT_LOG_DIR: &str = "logs";
pub const DEFAULT_QC_CONFIG: &str = "/opt/qc/etc/ft0-laser-qc.json";
pub const DEFAULT_PRODUCER: &str = "o2-ft0-digit-reader-workflow";
pub const DEFAULT_CONSUMER: &str = "o2-qc";
pub const DEFAULT_MARKER: &str = "FATAL";

/// Optional TOML file, e.g.:
///
/// ```toml
/// [tools]
/// producer = "o2-ft0-digit-reader-workflow"
/// consumer = "o2-qc"
///
/// [qc]
/// config = "/opt/qc/etc/ft0-laser-qc.json"
///
/// [classify]
/// marker = "FATAL"
/// ```
///
/// All sections and keys are optional; anything left out falls back to the
/// built-in defaults. Unknown keys are rejected so typos don't go unnoticed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub tools: ToolsSection,

    #[serde(default)]
    pub qc: QcSection,

    #[serde(default)]
    pub classify: ClassifySection,
}

/// `[tools]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolsSection {
    pub producer: Option<String>,
    pub consumer: Option<String>,
}

/// `[qc]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QcSection {
    /// QC configuration locator (without the `json://` scheme).
    pub config: Option<String>,
}

/// `[classify]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassifySection {
    pub marker: Option<String>,
}

/// The two external executables making up one pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolsConfig {
    pub producer: String,
    pub consumer: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            producer: DEFAULT_PRODUCER.to_string(),
            consumer: DEFAULT_CONSUMER.to_string(),
        }
    }
}

/// Fully resolved, immutable configuration of one batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub list_file: PathBuf,
    pub log_dir: PathBuf,
    pub qc_config: String,
    pub tools: ToolsConfig,
    pub marker: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            list_file: PathBuf::from(DEFAULT_LIST_FILE),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            qc_config: DEFAULT_QC_CONFIG.to_string(),
            tools: ToolsConfig::default(),
            marker: DEFAULT_MARKER.to_string(),
        }
    }
}
