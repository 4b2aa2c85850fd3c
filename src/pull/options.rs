//! Options and results for pull operations.

use std::path::PathBuf;
use std::time::Duration;

/// Result of pulling a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullResult {
    /// The unit was acquired and installed.
    Downloaded,
    /// The unit was already installed; no I/O happened.
    AlreadyDownloaded,
}

/// Outcome of a pull, carrying what the unit's header revealed.
///
/// The id is the canonical one: for a fresh download it comes from the
/// header, which may differ from the filename the target was addressed by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pulled {
    /// Whether a download actually happened.
    pub result: PullResult,
    /// Canonical id of the unit.
    pub id: String,
    /// Boot runtime declared by the unit's header, when the header was read.
    pub boot: Option<String>,
}

/// Options for pulling a target.
#[derive(Debug, Clone, Default)]
pub struct PullOptions {
    /// Pull even if the target is already installed.
    pub force: bool,
    /// Unpack instead of installing the archive.
    pub unpack: bool,
    /// Destination of the archive or unpacked files.
    pub output: Option<PathBuf>,
    /// Bound on each network attempt.
    pub timeout: Option<Duration>,
    /// Replaces the configured sources when non-empty.
    pub sources: Vec<String>,
    /// Additional sources, searched last.
    pub extra_sources: Vec<String>,
}
