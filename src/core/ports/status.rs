//! Commit status port
//!
//! Write-only and fire-and-forget from the core's perspective: a failed
//! post is logged by the caller and never alters the computed verdict.

use crate::core::models::{CommitRef, StatusDecision};

/// Posts commit statuses against revisions
pub trait StatusReporter: Send + Sync {
    /// Post the given status decision for the commit
    fn post_status(&self, commit: &CommitRef, decision: &StatusDecision) -> anyhow::Result<()>;
}
