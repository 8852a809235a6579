//! File invalidation tracker.
//!
//! Records the last-seen timestamp per source file so an embedding
//! application can decide when cached results are stale. The tracker does
//! no I/O or watching itself; callers hand it the timestamps they observe.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Last-seen timestamps keyed by path.
#[derive(Debug, Clone, Default)]
pub struct FileInvalidationTracker {
    files: BTreeMap<PathBuf, SystemTime>,
}

impl FileInvalidationTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record or overwrite the last-seen timestamp for a path.
    pub fn record_file(&mut self, path: impl Into<PathBuf>, timestamp: SystemTime) {
        self.files.insert(path.into(), timestamp);
    }

    /// Check if a path changed since it was recorded.
    ///
    /// A never-recorded path counts as modified. A recorded path counts as
    /// modified when the given timestamp differs from the recorded one in
    /// either direction, so a rollback to an older mtime also invalidates.
    pub fn is_modified(&self, path: impl AsRef<Path>, timestamp: SystemTime) -> bool {
        match self.files.get(path.as_ref()) {
            None => true,
            Some(recorded) => *recorded != timestamp,
        }
    }

    /// Stop tracking a path.
    pub fn untrack(&mut self, path: impl AsRef<Path>) {
        self.files.remove(path.as_ref());
    }

    /// Drop all tracking state.
    pub fn clear(&mut self) {
        self.files.clear();
    }

    /// All currently tracked paths.
    pub fn tracked_files(&self) -> Vec<&Path> {
        self.files.keys().map(|path| path.as_path()).collect()
    }

    /// Number of tracked paths.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if nothing is tracked.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
