//! Pull request snapshot
//!
//! The minimal view of a pull request the pipeline needs when an event
//! (such as an override comment) arrives without a commit SHA attached.

/// Current head of a pull request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullSnapshot {
    /// SHA of the head commit
    pub head_sha: String,
    /// Current title
    pub title: String,
    /// Login of the pull request author
    pub author: String,
}
