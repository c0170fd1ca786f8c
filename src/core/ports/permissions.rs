//! Actor permission port
//!
//! Used only by the approve-without-tests override path.

use crate::core::models::{PermissionLevel, RepoRef};

/// Resolves an actor's permission level on a repository
pub trait PermissionChecker: Send + Sync {
    /// Look up the permission level `actor` holds on `repo`
    fn permission_level(&self, repo: &RepoRef, actor: &str) -> anyhow::Result<PermissionLevel>;
}
