//! Test-presence checking
//!
//! Orchestrates one classification run: load repository configuration at
//! the commit revision, list changed files, resolve the governing matcher
//! set, and scan for any match. Read-only; posting status is the gate
//! caller's job.
//!
//! Error taxonomy (one branch per kind):
//! - fatal: changed files cannot be listed, the verdict is uncomputable;
//! - degrade: config fetch/parse and language listing failures fall through
//!   the resolver precedence chain;
//! - everything else is pure logic and cannot fail.

use thiserror::Error;

use crate::config::RepoTestConfig;
use crate::core::models::{CommitRef, Verdict};
use crate::core::ports::{ChangeLister, ContentFetcher, LanguageInventory};
use crate::core::services::resolver;

/// Conventional per-repository configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "test-keeper.yaml";

/// Errors that make a check impossible to complete
#[derive(Debug, Error)]
pub enum CheckError {
    /// The changed-file listing collaborator failed; without the file list
    /// no classification is possible
    #[error("cannot list changed files for {commit}")]
    ChangedFilesUnavailable {
        /// The commit being classified
        commit: String,
        /// Underlying collaborator failure
        #[source]
        source: anyhow::Error,
    },
}

/// Decides whether a commit contains tests
///
/// Pure function of (repository, commit SHA, collaborator responses): no
/// shared state, idempotent across re-deliveries of the same event.
pub struct TestPresenceChecker<'a> {
    content: &'a dyn ContentFetcher,
    changes: &'a dyn ChangeLister,
    languages: &'a dyn LanguageInventory,
    config_file: String,
}

impl std::fmt::Debug for TestPresenceChecker<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestPresenceChecker").field("config_file", &self.config_file).finish()
    }
}

impl<'a> TestPresenceChecker<'a> {
    /// Create a checker over the given collaborators
    pub fn new(
        content: &'a dyn ContentFetcher,
        changes: &'a dyn ChangeLister,
        languages: &'a dyn LanguageInventory,
    ) -> Self {
        Self {
            content,
            changes,
            languages,
            config_file: DEFAULT_CONFIG_FILE.to_string(),
        }
    }

    /// Override the per-repository configuration file name
    #[must_use]
    pub fn with_config_file(mut self, name: impl Into<String>) -> Self {
        self.config_file = name.into();
        self
    }

    /// Classify one commit: does any changed file look like a test?
    pub fn is_any_test_present(&self, commit: &CommitRef) -> Result<Verdict, CheckError> {
        let custom_pattern = self.load_custom_pattern(commit);

        let files = self.changes.changed_files(commit).map_err(|source| {
            CheckError::ChangedFilesUnavailable {
                commit: commit.to_string(),
                source,
            }
        })?;

        // Language detection is advisory: only consulted when no custom
        // pattern applies, and its failure degrades to the default matcher.
        let languages = if custom_pattern.is_some() {
            Vec::new()
        } else {
            self.list_languages(commit)
        };

        let matchers = resolver::resolve(custom_pattern.as_deref(), &languages);
        log::debug!(
            "classifying {} against {} matcher(s), {} changed file(s)",
            commit,
            matchers.len(),
            files.len()
        );

        let has_test = files.iter().any(|file| matchers.matches_any(&file.name));
        Ok(Verdict { has_test })
    }

    /// Load the custom test pattern from `test-keeper.yaml`, if usable
    ///
    /// Missing file, fetch failure, parse failure and an empty field all
    /// mean "no custom pattern".
    fn load_custom_pattern(&self, commit: &CommitRef) -> Option<String> {
        let content = match self.content.fetch_raw_file(commit, &self.config_file) {
            Ok(Some(content)) => content,
            Ok(None) => {
                log::debug!("no {} at {}", self.config_file, commit);
                return None;
            },
            Err(err) => {
                log::warn!("failed to fetch {} at {}: {err:#}", self.config_file, commit);
                return None;
            },
        };

        RepoTestConfig::from_yaml(&content).test_pattern
    }

    /// Best-effort language listing; failure yields an empty list
    fn list_languages(&self, commit: &CommitRef) -> Vec<String> {
        match self.languages.repository_languages(&commit.repo) {
            Ok(languages) => languages,
            Err(err) => {
                log::warn!("failed to list languages for {}: {err:#}", commit.repo);
                Vec::new()
            },
        }
    }
}
