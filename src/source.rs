// src/source.rs

//! Work items read from the list file.
//!
//! The list file is plain text with one path-like identifier per line. Lines
//! are trimmed and blank ones skipped; there is no comment syntax and no other
//! validation, so a malformed path only fails once the producer rejects it.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::{BatchError, Result};

/// One unit of work: the original identifier plus its short label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub path: String,
    pub label: String,
}

impl WorkItem {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let label = derive_label(&path).to_string();
        Self { path, label }
    }
}

/// Final path segment of `path`: the text after the last `/`.
///
/// Trailing separators are ignored, so `"/grid/run/564587/"` and
/// `"/grid/run/564587"` share the label `"564587"`. The result never
/// contains a separator; an entry made only of separators has the empty
/// label.
pub fn derive_label(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}

/// Ordered, restartable source of [`WorkItem`]s.
///
/// The file is read once in [`ItemSource::open`] so that a missing or
/// unreadable list aborts the batch before any item runs. Every call to
/// [`ItemSource::items`] yields the same sequence again.
#[derive(Debug, Clone)]
pub struct ItemSource {
    path: PathBuf,
    contents: String,
}

impl ItemSource {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let contents = fs::read_to_string(&path).map_err(|source| BatchError::ListFile {
            path: path.clone(),
            source,
        })?;

        debug!(list = ?path, bytes = contents.len(), "list file loaded");
        Ok(Self::from_contents(path, contents))
    }

    /// Build a source from text already in memory.
    pub fn from_contents(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn items(&self) -> impl Iterator<Item = WorkItem> + '_ {
        self.contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(WorkItem::new)
    }
}
