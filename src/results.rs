use std::path::PathBuf;
use std::time::Duration;

use crate::error::ImgNormError;

/// What a completed run did. Informational only.
#[derive(Debug, Default)]
pub struct Summary {
    /// Files converted to `.jpg`.
    pub converted: usize,

    /// Files renamed to their normalized name.
    pub renamed: usize,

    /// Supported files whose name was already normalized.
    pub unchanged: usize,

    /// Files left alone: unsupported extension, failed conversion, or a
    /// name that is not valid UTF-8.
    pub skipped: usize,

    /// Sources whose conversion failed, in the order they were visited.
    pub failed: Vec<PathBuf>,

    /// Walk statistics.
    pub stats: ScanStats,

    /// Non-fatal traversal errors (permission denied, symlink loops, IO).
    pub errors: Vec<ImgNormError>,
}

/// Traversal statistics for a completed run.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScanStats {
    /// Regular files found, below the root.
    pub files: usize,

    /// Directories found, below the root.
    pub dirs: usize,

    /// Wall-clock time from the start of the walk to the last rename.
    pub duration: Duration,
}
