//! Verdicts and commit statuses
//!
//! A `Verdict` is the checker's sole output; a `StatusDecision` is the
//! single durable user-visible artifact, created per event, posted once,
//! discarded.

use serde::Serialize;

/// Outcome of the test-presence check for one commit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// Whether any changed file matched a test pattern
    pub has_test: bool,
}

impl Verdict {
    /// A verdict stating tests are present
    pub const TESTS_PRESENT: Self = Self { has_test: true };
    /// A verdict stating no tests were found
    pub const NO_TESTS: Self = Self { has_test: false };
}

/// Commit status state as understood by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitState {
    /// The gate passed
    Success,
    /// The gate failed
    Failure,
}

impl std::fmt::Display for CommitState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Failure => write!(f, "failure"),
        }
    }
}

/// A commit status to be posted against a revision
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusDecision {
    /// Resulting state
    pub state: CommitState,
    /// Status context label (names the gate that produced it)
    pub context: String,
    /// Human-readable reason
    pub description: String,
}

impl StatusDecision {
    /// Create a success status
    pub fn success(context: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            state: CommitState::Success,
            context: context.into(),
            description: description.into(),
        }
    }

    /// Create a failure status
    pub fn failure(context: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            state: CommitState::Failure,
            context: context.into(),
            description: description.into(),
        }
    }
}
