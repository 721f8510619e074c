// src/exec/command.rs

//! Command lines for the two pipeline stages.

use std::fmt;

use crate::config::RunConfig;
use crate::source::WorkItem;

/// Flag putting both external tools into batch (non-interactive) mode.
pub const BATCH_FLAG: &str = "-b";

/// One external program plus its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Producer → consumer pair executed for one work item.
///
/// The producer's stdout is the consumer's stdin; the pipeline's exit status
/// is the consumer's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineCommand {
    pub producer: CommandLine,
    pub consumer: CommandLine,
}

impl PipelineCommand {
    pub fn for_item(item: &WorkItem, cfg: &RunConfig) -> Self {
        Self {
            producer: CommandLine {
                program: cfg.tools.producer.clone(),
                args: vec!["--input".into(), item.path.clone(), BATCH_FLAG.into()],
            },
            consumer: CommandLine {
                program: cfg.tools.consumer.clone(),
                args: vec![
                    "--config".into(),
                    format!("json://{}", cfg.qc_config),
                    BATCH_FLAG.into(),
                ],
            },
        }
    }
}

impl fmt::Display for PipelineCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.producer, self.consumer)
    }
}
