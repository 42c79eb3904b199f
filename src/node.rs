//! Data structures for the entries found under a traversal root.

use serde::Serialize;
use std::time::SystemTime;

/// A file or directory discovered during traversal.
#[derive(Debug, Clone, Serialize)]
pub struct DirectoryEntry {
    /// Base name of the entry
    pub name: String,
    /// Size in bytes (0 for directories)
    pub size: u64,
    /// Whether this is a directory
    pub is_dir: bool,
    /// Last modification time, if the platform reports one
    pub modified_at: Option<SystemTime>,
    /// Nesting level; direct children of the root are at 0
    pub depth: usize,
}

impl DirectoryEntry {
    /// Create a new entry
    pub fn new(name: impl Into<String>, size: u64, is_dir: bool, depth: usize) -> Self {
        Self {
            name: name.into(),
            size,
            is_dir,
            modified_at: None,
            depth,
        }
    }

    pub fn with_modified(mut self, modified_at: Option<SystemTime>) -> Self {
        self.modified_at = modified_at;
        self
    }
}

/// Ordered entries produced by a single traversal.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct TraversalResult {
    pub entries: Vec<DirectoryEntry>,
}

/// Aggregate counts over a traversal result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SummaryStats {
    pub file_count: u64,
    pub folder_count: u64,
    /// Sum of file sizes; directory sizes are not counted
    pub total_size: u64,
}

impl TraversalResult {
    /// Create a new empty TraversalResult
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DirectoryEntry> {
        self.entries.iter()
    }

    /// Count files and folders and total up file sizes
    pub fn summarize(&self) -> SummaryStats {
        self.entries
            .iter()
            .fold(SummaryStats::default(), |mut stats, entry| {
                if entry.is_dir {
                    stats.folder_count += 1;
                } else {
                    stats.file_count += 1;
                    stats.total_size += entry.size;
                }
                stats
            })
    }
}

impl From<Vec<DirectoryEntry>> for TraversalResult {
    fn from(entries: Vec<DirectoryEntry>) -> Self {
        Self { entries }
    }
}
