// crates/test-utils/src/fake_pipeline.rs

use std::collections::HashMap;
use std::fs::File;
use std::future::Future;
use std::io::Write;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use qc_batch::errors::Result;
use qc_batch::exec::{PipelineBackend, PipelineCommand};
use qc_batch::types::PipelineStatus;

/// Scripted result for one producer input.
#[derive(Debug, Clone)]
pub struct FakeRun {
    pub output: String,
    pub status: i32,
}

/// An in-process pipeline that:
/// - records the producer input of every run, in order
/// - writes scripted output to the log and returns a scripted status.
///
/// Inputs without a script print nothing and exit 0.
#[derive(Debug, Clone, Default)]
pub struct FakePipeline {
    scripts: HashMap<String, FakeRun>,
    executed: Arc<Mutex<Vec<String>>>,
}

impl FakePipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script(mut self, input: &str, output: &str, status: i32) -> Self {
        self.scripts.insert(
            input.to_string(),
            FakeRun {
                output: output.to_string(),
                status,
            },
        );
        self
    }

    /// Shared handle to the recorded producer inputs.
    pub fn executed(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.executed)
    }
}

/// The `--input` argument of the producer command line.
pub fn producer_input(pipeline: &PipelineCommand) -> String {
    let args = &pipeline.producer.args;
    args.iter()
        .position(|a| a == "--input")
        .and_then(|i| args.get(i + 1))
        .cloned()
        .unwrap_or_default()
}

impl PipelineBackend for FakePipeline {
    fn run<'a>(
        &'a self,
        pipeline: &'a PipelineCommand,
        output: &'a File,
    ) -> Pin<Box<dyn Future<Output = Result<PipelineStatus>> + Send + 'a>> {
        Box::pin(async move {
            let input = producer_input(pipeline);
            self.executed.lock().unwrap().push(input.clone());

            let Some(run) = self.scripts.get(&input) else {
                return Ok(PipelineStatus(0));
            };

            let mut out = output;
            out.write_all(run.output.as_bytes())?;
            Ok(PipelineStatus(run.status))
        })
    }
}
