//! Raw file content port
//!
//! Used to load the per-repository test-pattern configuration at a
//! specific revision.

use crate::core::models::CommitRef;

/// Fetches raw file content pinned to a commit
pub trait ContentFetcher: Send + Sync {
    /// Fetch a file's content at the given revision
    ///
    /// Returns `Ok(None)` when the file does not exist at that revision;
    /// `Err` is reserved for transport failures.
    fn fetch_raw_file(&self, commit: &CommitRef, path: &str) -> anyhow::Result<Option<String>>;
}
