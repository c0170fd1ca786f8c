//! Work-in-progress gating
//!
//! Blocks merge while a pull request title carries a WIP marker. Pure
//! title inspection; re-evaluated on every open/edit/synchronize event.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::StatusDecision;

/// Status context label for the work-in-progress gate
pub const STATUS_CONTEXT: &str = "testkeeper/work-in-progress";

/// Accepted marker forms: `WIP`, `WIP:`, `[WIP]`, `(wip)` at the start of
/// the title, case-insensitive
static WIP_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*[\[(]?\s*wip\b").expect("static pattern compiles"));

/// Whether the title marks the pull request as work in progress
#[must_use]
pub fn is_work_in_progress(title: &str) -> bool {
    WIP_MARKER.is_match(title)
}

/// Decide the work-in-progress status for a title
#[must_use]
pub fn decide(title: &str) -> StatusDecision {
    if is_work_in_progress(title) {
        StatusDecision::failure(STATUS_CONTEXT, "work in progress")
    } else {
        StatusDecision::success(STATUS_CONTEXT, "ready for review")
    }
}
