#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub use qc_batch_test_utils::builders::RunConfigBuilder;
pub use qc_batch_test_utils::fake_pipeline::FakePipeline;
pub use qc_batch_test_utils::{init_tracing, stub_tools, with_timeout};

/// Write a list file with the given raw contents into `dir`.
pub fn write_list(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("paths.lst");
    fs::write(&path, contents).expect("writing list file");
    path
}

/// Lines of a finished run log.
pub fn log_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("reading run log")
        .lines()
        .map(str::to_string)
        .collect()
}
