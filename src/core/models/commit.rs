//! Repository and commit addressing
//!
//! Every collaborator call is keyed by a repository (owner + name) and,
//! for revision-scoped calls, a commit SHA.

use std::fmt;

/// A GitHub repository reference (owner + name)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoRef {
    /// Repository owner (user or organization login)
    pub owner: String,
    /// Repository name
    pub name: String,
}

impl RepoRef {
    /// Create a repository reference
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Parse an `owner/name` slug
    ///
    /// Returns `None` if the slug does not contain exactly one `/` with
    /// non-empty parts on both sides.
    #[must_use]
    pub fn parse(slug: &str) -> Option<Self> {
        let (owner, name) = slug.split_once('/')?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return None;
        }
        Some(Self::new(owner, name))
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// A specific revision of a repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRef {
    /// The repository the commit belongs to
    pub repo: RepoRef,
    /// Full commit SHA
    pub sha: String,
}

impl CommitRef {
    /// Create a commit reference
    pub fn new(repo: RepoRef, sha: impl Into<String>) -> Self {
        Self {
            repo,
            sha: sha.into(),
        }
    }
}

impl fmt::Display for CommitRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.repo, self.sha)
    }
}
