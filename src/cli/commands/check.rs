//! `check` command - one-shot classification of a commit
//!
//! Runs the same pipeline the webhook path runs, minus status posting.
//! Exits non-zero when the gate blocks, so the command composes in
//! scripts.

use std::path::Path;

use anyhow::{Context as _, bail};

use testkeeper::core::models::{CommitRef, RepoRef};
use testkeeper::core::services::checker::TestPresenceChecker;
use testkeeper::core::services::gate;
use testkeeper::github::GithubClient;
use testkeeper::output::{CheckReport, OutputMode};

/// Classify one commit and print the resulting decision
pub fn execute(
    config_path: Option<&Path>,
    repo_slug: &str,
    sha: &str,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    let Some(repo) = RepoRef::parse(repo_slug) else {
        bail!("invalid repository slug {repo_slug:?}, expected owner/name");
    };
    let commit = CommitRef::new(repo, sha);

    let client = GithubClient::new(&config.github.api_url, config.token())
        .context("failed to create GitHub client")?;

    let checker = TestPresenceChecker::new(&client, &client, &client)
        .with_config_file(config.plugins.config_file.clone());
    let verdict = checker.is_any_test_present(&commit)?;
    let outcome = gate::decide(verdict, None);

    let report = CheckReport::new(&commit.to_string(), verdict, &outcome);
    println!("{}", report.render(mode));

    if !outcome.approved() {
        std::process::exit(1);
    }
    Ok(())
}
