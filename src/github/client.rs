//! Blocking GitHub REST client
//!
//! Implements every collaborator port over `reqwest::blocking`. Timeouts
//! live here, at the network boundary; the core never waits on anything
//! else.

use std::time::Duration;

use anyhow::Context as _;
use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder};
use serde::Deserialize;

use crate::core::models::{
    AffectedFile, CommitRef, FileStatus, PermissionLevel, PullSnapshot, RepoRef, StatusDecision,
};
use crate::core::ports::{
    ChangeLister, ContentFetcher, LanguageInventory, PermissionChecker, PullRequestReader,
    StatusReporter,
};

const USER_AGENT: &str = concat!("testkeeper/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// GitHub REST API client
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: Client,
    api_url: String,
    token: Option<String>,
}

impl GithubClient {
    /// Create a client against the given API base URL
    ///
    /// `token` is optional; without it the client is limited to public
    /// repositories and cannot post statuses.
    pub fn new(api_url: impl Into<String>, token: Option<String>) -> anyhow::Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            http,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token,
        })
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.authorized(self.http.get(format!("{}{path}", self.api_url)))
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.authorized(self.http.post(format!("{}{path}", self.api_url)))
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, Deserialize)]
struct CommitResponse {
    #[serde(default)]
    files: Vec<CommitFile>,
}

#[derive(Debug, Deserialize)]
struct CommitFile {
    filename: String,
    status: String,
}

#[derive(Debug, Deserialize)]
struct PermissionResponse {
    permission: String,
}

#[derive(Debug, Deserialize)]
struct PullResponse {
    title: String,
    head: PullHead,
    user: PullUser,
}

#[derive(Debug, Deserialize)]
struct PullHead {
    sha: String,
}

#[derive(Debug, Deserialize)]
struct PullUser {
    login: String,
}

/// Map a GitHub file status string onto the domain enum
///
/// GitHub also reports `changed`, `copied` and `unchanged`; those fold
/// into the nearest kind since classification ignores the status anyway.
fn map_status(status: &str) -> FileStatus {
    match status {
        "added" | "copied" => FileStatus::Added,
        "removed" => FileStatus::Removed,
        "renamed" => FileStatus::Renamed,
        _ => FileStatus::Modified,
    }
}

// =============================================================================
// PORT IMPLEMENTATIONS
// =============================================================================

impl ContentFetcher for GithubClient {
    fn fetch_raw_file(&self, commit: &CommitRef, path: &str) -> anyhow::Result<Option<String>> {
        let response = self
            .get(&format!(
                "/repos/{}/{}/contents/{path}",
                commit.repo.owner, commit.repo.name
            ))
            .query(&[("ref", commit.sha.as_str())])
            .header("Accept", "application/vnd.github.raw+json")
            .send()
            .with_context(|| format!("fetching {path} at {commit}"))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let content = response
            .error_for_status()
            .with_context(|| format!("fetching {path} at {commit}"))?
            .text()
            .with_context(|| format!("reading {path} at {commit}"))?;
        Ok(Some(content))
    }
}

impl ChangeLister for GithubClient {
    fn changed_files(&self, commit: &CommitRef) -> anyhow::Result<Vec<AffectedFile>> {
        // Single page; GitHub caps the files array of this endpoint at 300
        // entries per commit.
        let response: CommitResponse = self
            .get(&format!(
                "/repos/{}/{}/commits/{}",
                commit.repo.owner, commit.repo.name, commit.sha
            ))
            .send()
            .with_context(|| format!("listing changed files for {commit}"))?
            .error_for_status()
            .with_context(|| format!("listing changed files for {commit}"))?
            .json()
            .with_context(|| format!("decoding changed files for {commit}"))?;

        Ok(response
            .files
            .into_iter()
            .map(|f| AffectedFile::new(f.filename, map_status(&f.status)))
            .collect())
    }
}

impl LanguageInventory for GithubClient {
    fn repository_languages(&self, repo: &RepoRef) -> anyhow::Result<Vec<String>> {
        let languages: serde_json::Map<String, serde_json::Value> = self
            .get(&format!("/repos/{}/{}/languages", repo.owner, repo.name))
            .send()
            .with_context(|| format!("listing languages for {repo}"))?
            .error_for_status()
            .with_context(|| format!("listing languages for {repo}"))?
            .json()
            .with_context(|| format!("decoding languages for {repo}"))?;

        Ok(languages.keys().cloned().collect())
    }
}

impl PermissionChecker for GithubClient {
    fn permission_level(&self, repo: &RepoRef, actor: &str) -> anyhow::Result<PermissionLevel> {
        let response: PermissionResponse = self
            .get(&format!(
                "/repos/{}/{}/collaborators/{actor}/permission",
                repo.owner, repo.name
            ))
            .send()
            .with_context(|| format!("checking permission of {actor} on {repo}"))?
            .error_for_status()
            .with_context(|| format!("checking permission of {actor} on {repo}"))?
            .json()
            .with_context(|| format!("decoding permission of {actor} on {repo}"))?;

        Ok(response.permission.parse().unwrap_or_else(|err| {
            log::warn!("{err}; treating {actor} as unprivileged");
            PermissionLevel::None
        }))
    }
}

impl PullRequestReader for GithubClient {
    fn pull_request(&self, repo: &RepoRef, number: u64) -> anyhow::Result<PullSnapshot> {
        let response: PullResponse = self
            .get(&format!("/repos/{}/{}/pulls/{number}", repo.owner, repo.name))
            .send()
            .with_context(|| format!("fetching {repo}#{number}"))?
            .error_for_status()
            .with_context(|| format!("fetching {repo}#{number}"))?
            .json()
            .with_context(|| format!("decoding {repo}#{number}"))?;

        Ok(PullSnapshot {
            head_sha: response.head.sha,
            title: response.title,
            author: response.user.login,
        })
    }
}

impl StatusReporter for GithubClient {
    fn post_status(&self, commit: &CommitRef, decision: &StatusDecision) -> anyhow::Result<()> {
        self.post(&format!(
            "/repos/{}/{}/statuses/{}",
            commit.repo.owner, commit.repo.name, commit.sha
        ))
        .json(decision)
        .send()
        .with_context(|| format!("posting status for {commit}"))?
        .error_for_status()
        .with_context(|| format!("posting status for {commit}"))?;

        log::info!(
            "posted {} [{}] for {commit}: {}",
            decision.state,
            decision.context,
            decision.description
        );
        Ok(())
    }
}
