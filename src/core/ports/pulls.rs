//! Pull request lookup port
//!
//! Comment events carry only the PR number; this port resolves the number
//! to the current head commit and title.

use crate::core::models::{PullSnapshot, RepoRef};

/// Resolves pull request numbers to their current head
pub trait PullRequestReader: Send + Sync {
    /// Fetch the snapshot of a pull request by number
    fn pull_request(&self, repo: &RepoRef, number: u64) -> anyhow::Result<PullSnapshot>;
}
