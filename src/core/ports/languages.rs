//! Repository language inventory port
//!
//! Best-effort: an empty list and a failed call are both handled by
//! falling back to the default matcher.

use crate::core::models::RepoRef;

/// Reports the languages used in a repository
pub trait LanguageInventory: Send + Sync {
    /// List language names for the repository, most-used first
    fn repository_languages(&self, repo: &RepoRef) -> anyhow::Result<Vec<String>>;
}
