//! GitHub webhook payloads
//!
//! Only the fields the pipeline consumes are modeled; everything else in
//! the delivery is ignored by serde.

use anyhow::Context as _;
use serde::Deserialize;

use crate::core::models::{CommitRef, RepoRef};

/// A decoded webhook delivery
#[derive(Debug, Clone)]
pub enum Event {
    /// `pull_request` delivery
    PullRequest(PullRequestEvent),
    /// `issue_comment` delivery
    IssueComment(IssueCommentEvent),
    /// Any event kind the bot does not act on
    Unsupported(String),
}

impl Event {
    /// Decode a delivery from its `X-GitHub-Event` kind and JSON body
    pub fn decode(kind: &str, body: &str) -> anyhow::Result<Self> {
        match kind {
            "pull_request" => Ok(Self::PullRequest(
                serde_json::from_str(body).context("malformed pull_request payload")?,
            )),
            "issue_comment" => Ok(Self::IssueComment(
                serde_json::from_str(body).context("malformed issue_comment payload")?,
            )),
            other => Ok(Self::Unsupported(other.to_string())),
        }
    }
}

/// A `pull_request` event
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestEvent {
    /// Action that triggered the delivery (opened, synchronize, edited, ...)
    pub action: String,
    /// Pull request number
    pub number: u64,
    /// The pull request itself
    pub pull_request: PullRequestPayload,
    /// The repository the PR belongs to
    pub repository: RepositoryPayload,
}

impl PullRequestEvent {
    /// The head commit this delivery refers to
    #[must_use]
    pub fn commit_ref(&self) -> CommitRef {
        CommitRef::new(self.repository.repo_ref(), self.pull_request.head.sha.clone())
    }

    /// Whether this action changes the head commit and warrants a re-check
    #[must_use]
    pub fn touches_head(&self) -> bool {
        matches!(self.action.as_str(), "opened" | "reopened" | "synchronize")
    }
}

/// Pull request fields carried in the event
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestPayload {
    /// Current title
    pub title: String,
    /// Head branch tip
    pub head: BranchPayload,
    /// PR author
    pub user: UserPayload,
}

/// Branch reference inside a PR payload
#[derive(Debug, Clone, Deserialize)]
pub struct BranchPayload {
    /// Tip commit SHA
    pub sha: String,
}

/// An `issue_comment` event
#[derive(Debug, Clone, Deserialize)]
pub struct IssueCommentEvent {
    /// Action that triggered the delivery (created, edited, deleted)
    pub action: String,
    /// The comment
    pub comment: CommentPayload,
    /// The issue (or PR) commented on
    pub issue: IssuePayload,
    /// The repository
    pub repository: RepositoryPayload,
}

impl IssueCommentEvent {
    /// Whether the comment sits on a pull request and was just created
    #[must_use]
    pub fn is_new_pr_comment(&self) -> bool {
        self.action == "created" && self.issue.pull_request.is_some()
    }
}

/// Comment fields carried in the event
#[derive(Debug, Clone, Deserialize)]
pub struct CommentPayload {
    /// Comment body
    pub body: String,
    /// Comment author
    pub user: UserPayload,
}

/// Issue fields carried in the event
#[derive(Debug, Clone, Deserialize)]
pub struct IssuePayload {
    /// Issue / PR number
    pub number: u64,
    /// Present iff the issue is a pull request
    #[serde(default)]
    pub pull_request: Option<serde_json::Value>,
}

/// Repository fields carried in every event
#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryPayload {
    /// Repository name
    pub name: String,
    /// Repository owner
    pub owner: UserPayload,
}

impl RepositoryPayload {
    /// Convert to the domain repository reference
    #[must_use]
    pub fn repo_ref(&self) -> RepoRef {
        RepoRef::new(self.owner.login.clone(), self.name.clone())
    }
}

/// A user reference inside a payload
#[derive(Debug, Clone, Deserialize)]
pub struct UserPayload {
    /// User login
    pub login: String,
}
