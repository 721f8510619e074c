// tests/executor_stub_tools.rs
//
// Runs the real process-backed pipeline against `sh` stand-ins for the
// reader and QC tools.

#![cfg(unix)]

mod common;
use crate::common::{RunConfigBuilder, init_tracing, log_lines, stub_tools, with_timeout};

use std::error::Error;

use tempfile::TempDir;

use qc_batch::exec::{ProcessPipeline, RunExecutor};
use qc_batch::source::WorkItem;
use qc_batch::types::PipelineStatus;

type TestResult = Result<(), Box<dyn Error>>;

#[tokio::test]
async fn producer_output_is_streamed_into_the_consumer() -> TestResult {
    init_tracing();
    let dir = TempDir::new()?;
    let producer = stub_tools::echo_producer(dir.path())?;
    let consumer = stub_tools::qc_consumer(dir.path(), "never-matches")?;
    let cfg = RunConfigBuilder::new()
        .log_dir(dir.path().join("logs"))
        .qc_config("/etc/qc/laser.json")
        .tools(&producer, &consumer)
        .build();
    let executor = RunExecutor::new(cfg, ProcessPipeline::new());

    let item = WorkItem::new("/grid/100");
    let record = with_timeout(executor.execute(&item)).await?;

    assert_eq!(record.status, PipelineStatus(0));
    let lines = log_lines(&record.log_path);
    assert!(lines[0].ends_with("run 100 path /grid/100"));
    assert_eq!(lines.last().map(String::as_str), Some("# exit status 0"));

    // Lines from different processes may interleave; each must be present.
    let body = &lines[1..lines.len() - 1];
    assert_eq!(body.len(), 3);
    let expected = [
        "producer: reading /grid/100",
        "qc: config json:///etc/qc/laser.json",
        "qc: received /grid/100",
    ];
    for line in expected {
        assert!(body.iter().any(|l| l == line), "missing {line:?}");
    }
    Ok(())
}

#[tokio::test]
async fn consumer_status_is_the_pipeline_status() -> TestResult {
    let dir = TempDir::new()?;
    let producer = stub_tools::echo_producer(dir.path())?;
    let consumer = stub_tools::qc_consumer(dir.path(), "200")?;
    let cfg = RunConfigBuilder::new()
        .log_dir(dir.path().join("logs"))
        .tools(&producer, &consumer)
        .build();
    let executor = RunExecutor::new(cfg, ProcessPipeline::new());

    let item = WorkItem::new("/grid/200");
    let record = with_timeout(executor.execute(&item)).await?;

    assert_eq!(record.status, PipelineStatus(1));
    let lines = log_lines(&record.log_path);
    assert!(lines.contains(&"FATAL: bad input".to_string()));
    assert_eq!(lines.last().map(String::as_str), Some("# exit status 1"));
    Ok(())
}

#[tokio::test]
async fn exit_code_of_consumer_is_recorded_verbatim() -> TestResult {
    let dir = TempDir::new()?;
    let producer = stub_tools::echo_producer(dir.path())?;
    let consumer = stub_tools::exiting_consumer(dir.path(), 42)?;
    let cfg = RunConfigBuilder::new()
        .log_dir(dir.path().join("logs"))
        .tools(&producer, &consumer)
        .build();
    let executor = RunExecutor::new(cfg, ProcessPipeline::new());

    let item = WorkItem::new("run/9");
    let record = with_timeout(executor.execute(&item)).await?;

    assert_eq!(record.status, PipelineStatus(42));
    let lines = log_lines(&record.log_path);
    assert!(lines.contains(&"qc: exiting with 42".to_string()));
    assert_eq!(lines.last().map(String::as_str), Some("# exit status 42"));
    Ok(())
}

#[tokio::test]
async fn missing_consumer_surfaces_through_log_and_status() -> TestResult {
    let dir = TempDir::new()?;
    let producer = stub_tools::echo_producer(dir.path())?;
    let missing = dir.path().join("no-such-qc");
    let cfg = RunConfigBuilder::new()
        .log_dir(dir.path().join("logs"))
        .tools(&producer, &missing)
        .build();
    let executor = RunExecutor::new(cfg, ProcessPipeline::new());

    let item = WorkItem::new("/grid/5");
    let record = with_timeout(executor.execute(&item)).await?;

    assert_eq!(record.status, PipelineStatus::NOT_LAUNCHED);
    let lines = log_lines(&record.log_path);
    let reported = lines
        .iter()
        .any(|l| l.starts_with("qc-batch: cannot launch") && l.contains("no-such-qc"));
    assert!(reported);
    assert_eq!(lines.last().map(String::as_str), Some("# exit status 127"));
    Ok(())
}

#[tokio::test]
async fn missing_producer_still_runs_the_consumer_on_empty_input() -> TestResult {
    let dir = TempDir::new()?;
    let missing = dir.path().join("no-such-reader");
    let consumer = stub_tools::qc_consumer(dir.path(), "never-matches")?;
    let cfg = RunConfigBuilder::new()
        .log_dir(dir.path().join("logs"))
        .qc_config("cfg.json")
        .tools(&missing, &consumer)
        .build();
    let executor = RunExecutor::new(cfg, ProcessPipeline::new());

    let item = WorkItem::new("/grid/6");
    let record = with_timeout(executor.execute(&item)).await?;

    assert_eq!(record.status, PipelineStatus(0));
    let lines = log_lines(&record.log_path);
    let reported = lines
        .iter()
        .any(|l| l.contains("cannot launch") && l.contains("no-such-reader"));
    assert!(reported);
    assert!(lines.contains(&"qc: config json://cfg.json".to_string()));
    assert!(!lines.iter().any(|l| l.starts_with("qc: received")));
    Ok(())
}

#[tokio::test]
async fn unterminated_tool_output_keeps_footer_on_its_own_line() -> TestResult {
    let dir = TempDir::new()?;
    let producer = stub_tools::echo_producer(dir.path())?;
    let consumer = stub_tools::unterminated_consumer(dir.path())?;
    let cfg = RunConfigBuilder::new()
        .log_dir(dir.path().join("logs"))
        .tools(&producer, &consumer)
        .build();
    let executor = RunExecutor::new(cfg, ProcessPipeline::new());

    let item = WorkItem::new("/grid/8");
    let record = with_timeout(executor.execute(&item)).await?;

    let lines = log_lines(&record.log_path);
    assert!(lines.contains(&"qc: partial line".to_string()));
    assert_eq!(lines.last().map(String::as_str), Some("# exit status 0"));
    Ok(())
}
