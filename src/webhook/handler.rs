//! Event dispatch pipeline
//!
//! Wires decoded events through the checker and the gates, then posts the
//! resulting statuses. Status-post failures are logged and swallowed (the
//! webhook response has long been sent); only verdict-blocking failures
//! propagate to the caller for logging.

use crate::config::PluginConfig;
use crate::core::models::{CommitRef, PermissionLevel, StatusDecision};
use crate::core::ports::RepositoryHost;
use crate::core::services::checker::TestPresenceChecker;
use crate::core::services::gate::{self, OverrideCommand};
use crate::core::services::wip;

use super::events::{Event, IssueCommentEvent, PullRequestEvent};

/// Dispatches webhook events through the gating pipeline
pub struct EventHandler<'a, H: RepositoryHost> {
    host: &'a H,
    plugins: PluginConfig,
}

impl<H: RepositoryHost> std::fmt::Debug for EventHandler<'_, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventHandler").field("plugins", &self.plugins).finish()
    }
}

impl<'a, H: RepositoryHost> EventHandler<'a, H> {
    /// Create a handler over the given host with plugin settings
    pub fn new(host: &'a H, plugins: PluginConfig) -> Self {
        Self { host, plugins }
    }

    /// Process one decoded delivery
    ///
    /// Errors indicate the verdict could not be computed; the commit
    /// status is deliberately left untouched in that case.
    pub fn handle(&self, event: &Event) -> anyhow::Result<()> {
        match event {
            Event::PullRequest(ev) => self.handle_pull_request(ev),
            Event::IssueComment(ev) => self.handle_comment(ev),
            Event::Unsupported(kind) => {
                log::debug!("ignoring {kind} event");
                Ok(())
            },
        }
    }

    fn handle_pull_request(&self, event: &PullRequestEvent) -> anyhow::Result<()> {
        let commit = event.commit_ref();

        if event.touches_head() {
            log::info!("checking {commit} ({} #{})", event.action, event.number);
            self.run_test_gate(&commit, None)?;
            self.post(&commit, &wip::decide(&event.pull_request.title));
        } else if event.action == "edited" {
            // Title may have changed; the head commit has not.
            self.post(&commit, &wip::decide(&event.pull_request.title));
        } else {
            log::debug!("ignoring pull_request action {}", event.action);
        }
        Ok(())
    }

    fn handle_comment(&self, event: &IssueCommentEvent) -> anyhow::Result<()> {
        if !event.is_new_pr_comment() {
            log::debug!("ignoring issue_comment: not a new PR comment");
            return Ok(());
        }
        if event.comment.body.trim() != self.plugins.skip_comment {
            return Ok(());
        }

        let repo = event.repository.repo_ref();
        let actor = event.comment.user.login.clone();
        let snapshot = self.host.pull_request(&repo, event.issue.number)?;
        let commit = CommitRef::new(repo.clone(), snapshot.head_sha);

        // A failed permission lookup silently downgrades the actor: an
        // override must never succeed on the benefit of the doubt.
        let permission = match self.host.permission_level(&repo, &actor) {
            Ok(level) => level,
            Err(err) => {
                log::warn!("permission lookup for @{actor} on {repo} failed: {err:#}");
                PermissionLevel::None
            },
        };

        log::info!("override requested by @{actor} ({permission}) on {commit}");
        self.run_test_gate(&commit, Some(OverrideCommand { actor, permission }))
    }

    /// Recompute the verdict and post the gate's decision
    fn run_test_gate(
        &self,
        commit: &CommitRef,
        command: Option<OverrideCommand>,
    ) -> anyhow::Result<()> {
        let checker = TestPresenceChecker::new(self.host, self.host, self.host)
            .with_config_file(self.plugins.config_file.clone());
        let verdict = checker.is_any_test_present(commit)?;
        let outcome = gate::decide(verdict, command.as_ref());
        self.post(commit, &outcome.decision);
        Ok(())
    }

    /// Post a status, logging failures instead of propagating them
    fn post(&self, commit: &CommitRef, decision: &StatusDecision) {
        if let Err(err) = self.host.post_status(commit, decision) {
            log::error!("failed to post status for {commit}: {err:#}");
        }
    }
}
