// src/engine/summary.rs

use std::path::PathBuf;

use crate::types::{PipelineStatus, Verdict};

/// Result of one processed item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemResult {
    pub label: String,
    pub path: String,
    pub log_path: PathBuf,
    pub status: PipelineStatus,
    pub verdict: Verdict,
}

/// All items of one batch, in list order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub items: Vec<ItemResult>,
}

impl BatchSummary {
    pub fn push(&mut self, result: ItemResult) {
        self.items.push(result);
    }

    pub fn ok_count(&self) -> usize {
        self.items.iter().filter(|r| r.verdict.is_ok()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.items.len() - self.ok_count()
    }

    pub fn verdict_of(&self, label: &str) -> Option<Verdict> {
        self.items
            .iter()
            .rev()
            .find(|r| r.label == label)
            .map(|r| r.verdict)
    }
}
