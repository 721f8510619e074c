// tests/logging.rs
//
// Installs the process-wide subscriber, so this file holds a single test.

use qc_batch::cli::LogLevel;
use qc_batch::logging::init_logging;

#[test]
fn subscriber_is_installed_once_per_process() {
    assert!(init_logging(Some(LogLevel::Debug)).is_ok());
    tracing::debug!(label = "564587", "visible at the flag's level");

    let again = init_logging(None);
    assert!(again.is_err());
}
