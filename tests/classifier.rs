// tests/classifier.rs

use std::error::Error;
use std::fs;

use tempfile::TempDir;

use qc_batch::classify::OutcomeClassifier;
use qc_batch::config::DEFAULT_MARKER;
use qc_batch::types::Verdict;

type TestResult = Result<(), Box<dyn Error>>;

fn default_classifier() -> OutcomeClassifier {
    OutcomeClassifier::new(DEFAULT_MARKER)
}

#[test]
fn marker_anywhere_fails_the_run() {
    let c = default_classifier();

    assert_eq!(c.classify("FATAL: bad input"), Verdict::Failed);
    let log = "header\nsome output\n[ERROR] x FATAL y\n# exit status 1\n";
    assert_eq!(c.classify(log), Verdict::Failed);
    assert_eq!(c.classify("line\nends with FATAL"), Verdict::Failed);
}

#[test]
fn match_is_case_sensitive() {
    let c = default_classifier();

    assert_eq!(c.classify("fatal: lowercase only"), Verdict::Ok);
    assert_eq!(c.classify("Fatal error"), Verdict::Ok);
    assert_eq!(c.classify(""), Verdict::Ok);
}

#[test]
fn custom_marker_is_matched_literally() {
    let c = OutcomeClassifier::new("[ERROR].*");
    assert_eq!(c.marker(), "[ERROR].*");

    assert_eq!(c.classify("[ERROR] something"), Verdict::Ok);
    assert_eq!(c.classify("saw [ERROR].* literally"), Verdict::Failed);
}

#[test]
fn classifies_log_files_including_invalid_utf8() -> TestResult {
    let dir = TempDir::new()?;
    let c = default_classifier();

    let ok = dir.path().join("run_1.log");
    fs::write(&ok, "# header\nall good\n# exit status 0\n")?;
    assert_eq!(c.classify_log(&ok)?, Verdict::Ok);

    let failed = dir.path().join("run_2.log");
    let bytes: &[u8] = b"# header\n\xff\xfe garbage FATAL tail\n# exit status 1\n";
    fs::write(&failed, bytes)?;
    assert_eq!(c.classify_log(&failed)?, Verdict::Failed);

    Ok(())
}

#[test]
fn missing_log_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("run_x.log");
    let result = default_classifier().classify_log(&missing);
    assert!(result.is_err());
}
