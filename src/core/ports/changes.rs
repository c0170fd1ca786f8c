//! Changed-file listing port
//!
//! The one collaborator whose failure is fatal to a check: without the
//! file list no classification is possible.

use crate::core::models::{AffectedFile, CommitRef};

/// Enumerates files touched by a commit
pub trait ChangeLister: Send + Sync {
    /// List the files changed by the given commit
    fn changed_files(&self, commit: &CommitRef) -> anyhow::Result<Vec<AffectedFile>>;
}
