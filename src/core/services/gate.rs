//! Commit gating state machine
//!
//! Consumes the checker's verdict plus an optional administrative override
//! and emits the terminal gate state with its status decision. Every
//! webhook delivery restarts from `Pending`; no session state survives
//! across events.
//!
//! | input | next | status |
//! |---|---|---|
//! | tests present | Approved | success, "tests present" |
//! | no tests, no override | Blocked | failure, "no tests" |
//! | no tests, admin override | Approved | success, names the actor |
//! | override from non-admin | Blocked | failure (override ignored) |

use crate::core::models::{PermissionLevel, StatusDecision, Verdict};

/// Status context label for the test-presence gate
pub const STATUS_CONTEXT: &str = "testkeeper/test-keeper";

/// Gate states; `Pending` is the implicit start of every run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// Classification in progress (never emitted)
    Pending,
    /// The commit may merge
    Approved,
    /// The commit is blocked
    Blocked,
}

/// An approve-without-tests command issued by a principal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideCommand {
    /// Login of the principal issuing the command
    pub actor: String,
    /// Permission the principal holds on the repository
    pub permission: PermissionLevel,
}

/// Terminal result of one gate run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateOutcome {
    /// Terminal state, always `Approved` or `Blocked`
    pub state: GateState,
    /// The commit status to post
    pub decision: StatusDecision,
}

impl GateOutcome {
    /// Whether the gate ended approved
    #[must_use]
    pub fn approved(&self) -> bool {
        self.state == GateState::Approved
    }
}

/// Run the gate: verdict + optional override → terminal outcome
///
/// An override from a principal without admin permission is ignored, not an
/// error: the outcome is exactly what the verdict alone would produce.
#[must_use]
pub fn decide(verdict: Verdict, command: Option<&OverrideCommand>) -> GateOutcome {
    if verdict.has_test {
        return GateOutcome {
            state: GateState::Approved,
            decision: StatusDecision::success(STATUS_CONTEXT, "tests present"),
        };
    }

    match command {
        Some(cmd) if cmd.permission.is_admin() => GateOutcome {
            state: GateState::Approved,
            decision: StatusDecision::success(
                STATUS_CONTEXT,
                format!("approved without tests by @{}", cmd.actor),
            ),
        },
        Some(cmd) => {
            log::info!("override from @{} ignored: permission is {}", cmd.actor, cmd.permission);
            blocked()
        },
        None => blocked(),
    }
}

fn blocked() -> GateOutcome {
    GateOutcome {
        state: GateState::Blocked,
        decision: StatusDecision::failure(STATUS_CONTEXT, "no tests"),
    }
}
