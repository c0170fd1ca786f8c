//! Output formatting for human and JSON modes
//!
//! Used by the one-shot `check` command; the serving path only logs.

use colored::Colorize as _;
use serde::Serialize;

use crate::core::models::Verdict;
use crate::core::services::gate::GateOutcome;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a one-shot check, ready for rendering
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Commit that was classified
    pub commit: String,
    /// Whether any changed file matched a test pattern
    pub has_test: bool,
    /// Resulting status state
    pub state: String,
    /// Resulting status description
    pub description: String,
}

impl CheckReport {
    /// Build a report from the pipeline results
    #[must_use]
    pub fn new(commit: &str, verdict: Verdict, outcome: &GateOutcome) -> Self {
        Self {
            commit: commit.to_string(),
            has_test: verdict.has_test,
            state: outcome.decision.state.to_string(),
            description: outcome.decision.description.clone(),
        }
    }

    /// Render the report in the given mode
    #[must_use]
    pub fn render(&self, mode: OutputMode) -> String {
        match mode {
            OutputMode::Json => serde_json::to_string_pretty(self)
                .unwrap_or_else(|_| r#"{"error":"serialization failed"}"#.to_string()),
            OutputMode::Human => {
                let marker = if self.has_test {
                    "PASS".green().bold()
                } else {
                    "FAIL".red().bold()
                };
                format!("{marker} {}: {}", self.commit, self.description)
            },
        }
    }
}
