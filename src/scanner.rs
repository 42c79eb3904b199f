//! Directory walking, one directory at a time in name order.

use crate::error::{LsTreeError, Result};
use crate::node::{DirectoryEntry, TraversalResult};
use jwalk::{Parallelism, WalkDir};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Scanner configuration
#[derive(Debug, Default)]
pub struct Scanner {
    /// Recurse into every subdirectory instead of listing direct children only
    pub deep: bool,
}

impl Scanner {
    /// Create a new Scanner with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Select deep or shallow traversal
    pub fn deep(mut self, deep: bool) -> Self {
        self.deep = deep;
        self
    }

    /// Walk `root` and return its entries in pre-order, siblings sorted by name.
    ///
    /// The first I/O failure aborts the walk; no partial result is returned.
    pub fn scan(&self, root: &Path) -> Result<TraversalResult> {
        let root_meta = fs::metadata(root).map_err(|e| LsTreeError::metadata(root, e))?;
        if !root_meta.is_dir() {
            return Err(LsTreeError::NotADirectory(root.to_path_buf()));
        }

        debug!(root = %root.display(), deep = self.deep, "starting walk");

        let mut walker = WalkDir::new(root)
            .parallelism(Parallelism::Serial)
            .sort(true)
            .skip_hidden(false)
            .follow_links(false);
        if !self.deep {
            walker = walker.max_depth(1);
        }

        let mut result = TraversalResult::new();
        for entry in walker {
            let mut entry = entry?;
            if let Some(err) = entry.read_children_error.take() {
                return Err(err.into());
            }
            // The root itself is rendered from its label, not listed.
            if entry.depth == 0 {
                continue;
            }

            let metadata = entry.metadata()?;
            let is_dir = entry.file_type().is_dir();
            let size = if is_dir { 0 } else { metadata.len() };
            let name = entry.file_name().to_string_lossy().into_owned();

            result.entries.push(
                DirectoryEntry::new(name, size, is_dir, entry.depth - 1)
                    .with_modified(metadata.modified().ok()),
            );
        }

        debug!(entries = result.len(), "walk finished");
        Ok(result)
    }
}
