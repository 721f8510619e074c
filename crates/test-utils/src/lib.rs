// crates/test-utils/src/lib.rs

//! Shared helpers for the `qc-batch` integration tests.

pub mod builders;
pub mod fake_pipeline;
pub mod stub_tools;

use std::future::Future;
use std::sync::Once;
use std::time::Duration;

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{EnvFilter, fmt};

/// Upper bound for one awaited test operation. Stub pipelines spawn real
/// `sh` processes, so this is wider than an in-process fake would need.
const TEST_TIMEOUT: Duration = Duration::from_secs(10);

static INIT: Once = Once::new();

/// Route `tracing` output through the test harness writer.
///
/// Filtered by `RUST_LOG`; without it the crate logs at `debug` and
/// everything else at `info`. Span close events are shown so each item's
/// `label` appears once its run is done. Output only surfaces for failing
/// tests unless run with `--nocapture`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::new("info,qc_batch=debug"),
        };

        // Another harness may already own the global subscriber.
        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .try_init();
    });
}

/// Await `f`, failing the test if it does not finish within ten seconds.
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: Future<Output = T>,
{
    match tokio::time::timeout(TEST_TIMEOUT, f).await {
        Ok(value) => value,
        Err(_) => panic!("test timed out after {TEST_TIMEOUT:?}"),
    }
}
