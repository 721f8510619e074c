// src/classify.rs

//! Verdict from a finished run log.

use std::fs;
use std::path::Path;

use crate::errors::Result;
use crate::types::Verdict;

/// Flags a run as failed when a literal marker occurs anywhere in its log.
///
/// Matching is a plain case-sensitive substring search; there is no pattern
/// syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeClassifier {
    marker: String,
}

impl OutcomeClassifier {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn classify(&self, log_text: &str) -> Verdict {
        if log_text.contains(&self.marker) {
            Verdict::Failed
        } else {
            Verdict::Ok
        }
    }

    /// Classify a log file. Must only be called once the log is complete.
    ///
    /// Bytes that are not valid UTF-8 are replaced before matching.
    pub fn classify_log(&self, path: &Path) -> Result<Verdict> {
        let bytes = fs::read(path)?;
        Ok(self.classify(&String::from_utf8_lossy(&bytes)))
    }
}
