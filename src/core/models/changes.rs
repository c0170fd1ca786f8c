//! Files affected by a commit
//!
//! Produced by the change-listing collaborator, consumed read-only by the
//! classification pipeline.

use serde::Deserialize;

/// What happened to a file in a commit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    /// File was added
    Added,
    /// File content was modified
    Modified,
    /// File was removed
    Removed,
    /// File was renamed
    Renamed,
}

/// A single file touched by a commit
///
/// The status does not affect classification: a removed test file still
/// means the commit touches tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffectedFile {
    /// Path of the file, relative to the repository root
    pub name: String,
    /// Change kind reported by the host
    pub status: FileStatus,
}

impl AffectedFile {
    /// Create an affected file entry
    pub fn new(name: impl Into<String>, status: FileStatus) -> Self {
        Self {
            name: name.into(),
            status,
        }
    }
}
