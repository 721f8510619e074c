// crates/test-utils/src/builders.rs

use std::path::Path;

use qc_batch::config::{RunConfig, ToolsConfig};

/// Builder for `RunConfig` to simplify test setup.
pub struct RunConfigBuilder {
    config: RunConfig,
}

impl RunConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: RunConfig::default(),
        }
    }

    pub fn list_file(mut self, path: impl AsRef<Path>) -> Self {
        self.config.list_file = path.as_ref().to_path_buf();
        self
    }

    pub fn log_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.config.log_dir = path.as_ref().to_path_buf();
        self
    }

    pub fn qc_config(mut self, locator: &str) -> Self {
        self.config.qc_config = locator.to_string();
        self
    }

    pub fn tools(mut self, producer: impl AsRef<Path>, consumer: impl AsRef<Path>) -> Self {
        self.config.tools = ToolsConfig {
            producer: producer.as_ref().to_string_lossy().into_owned(),
            consumer: consumer.as_ref().to_string_lossy().into_owned(),
        };
        self
    }

    pub fn marker(mut self, marker: &str) -> Self {
        self.config.marker = marker.to_string();
        self
    }

    pub fn build(self) -> RunConfig {
        self.config
    }
}

impl Default for RunConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
