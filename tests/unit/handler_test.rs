//! Tests for webhook event dispatch
//!
//! Exercises the full pipeline from decoded events to posted statuses,
//! including the override comment path.

use testkeeper::config::PluginConfig;
use testkeeper::core::models::{CommitState, PermissionLevel};
use testkeeper::webhook::{Event, EventHandler};

use crate::common::mocks::StubHost;

fn pull_request_event(action: &str, title: &str) -> Event {
    let body = serde_json::json!({
        "action": action,
        "number": 7,
        "pull_request": {
            "title": title,
            "head": { "sha": "abc123" },
            "user": { "login": "author" }
        },
        "repository": {
            "name": "spoon-knife",
            "owner": { "login": "octocat" }
        }
    })
    .to_string();
    Event::decode("pull_request", &body).unwrap()
}

fn comment_event(body_text: &str, on_pull_request: bool) -> Event {
    let mut issue = serde_json::json!({ "number": 7 });
    if on_pull_request {
        issue["pull_request"] = serde_json::json!({ "url": "https://example.invalid" });
    }
    let body = serde_json::json!({
        "action": "created",
        "comment": {
            "body": body_text,
            "user": { "login": "commenter" }
        },
        "issue": issue,
        "repository": {
            "name": "spoon-knife",
            "owner": { "login": "octocat" }
        }
    })
    .to_string();
    Event::decode("issue_comment", &body).unwrap()
}

fn handle(host: &StubHost, event: &Event) -> anyhow::Result<()> {
    EventHandler::new(host, PluginConfig::default()).handle(event)
}

// =============================================================================
// pull_request deliveries
// =============================================================================

#[test]
fn opened_pr_with_tests_gets_success_statuses() {
    let host = StubHost::new()
        .with_languages(&["Go"])
        .with_files(&["pkg/a.go", "pkg/a_test.go"]);

    handle(&host, &pull_request_event("opened", "add feature")).unwrap();

    let posted = host.posted_statuses();
    assert_eq!(posted.len(), 2);
    let (commit, keeper) = &posted[0];
    assert_eq!(commit.sha, "abc123");
    assert_eq!(keeper.state, CommitState::Success);
    assert_eq!(keeper.description, "tests present");
    let (_, wip) = &posted[1];
    assert_eq!(wip.state, CommitState::Success);
    assert_eq!(wip.description, "ready for review");
}

#[test]
fn synchronized_pr_without_tests_is_blocked() {
    let host = StubHost::new().with_languages(&["Go"]).with_files(&["pkg/a.go"]);

    handle(&host, &pull_request_event("synchronize", "add feature")).unwrap();

    let posted = host.posted_statuses();
    assert_eq!(posted[0].1.state, CommitState::Failure);
    assert_eq!(posted[0].1.description, "no tests");
}

#[test]
fn wip_title_fails_the_wip_context_only() {
    let host = StubHost::new()
        .with_languages(&["Go"])
        .with_files(&["pkg/a_test.go"]);

    handle(&host, &pull_request_event("opened", "WIP: add feature")).unwrap();

    let posted = host.posted_statuses();
    assert_eq!(posted.len(), 2);
    assert_eq!(posted[0].1.state, CommitState::Success);
    assert_eq!(posted[1].1.state, CommitState::Failure);
    assert_eq!(posted[1].1.description, "work in progress");
}

#[test]
fn edited_pr_reposts_only_the_wip_status() {
    let host = StubHost::new();

    handle(&host, &pull_request_event("edited", "no longer wip")).unwrap();

    let posted = host.posted_statuses();
    assert_eq!(posted.len(), 1);
    assert_eq!(posted[0].1.state, CommitState::Success);
    assert_eq!(posted[0].1.description, "ready for review");
}

#[test]
fn unrelated_pr_actions_are_ignored() {
    let host = StubHost::new();
    handle(&host, &pull_request_event("labeled", "anything")).unwrap();
    assert!(host.posted_statuses().is_empty());
}

#[test]
fn changed_file_failure_leaves_status_untouched() {
    let mut host = StubHost::new();
    host.fail_changed_files = true;

    let result = handle(&host, &pull_request_event("opened", "add feature"));

    assert!(result.is_err());
    // Classification impossible: no status update, a no-op rather than a
    // wrong verdict.
    assert!(host.posted_statuses().is_empty());
}

#[test]
fn status_post_failure_is_swallowed() {
    let mut host = StubHost::new().with_files(&["pkg/a_test.go"]).with_languages(&["Go"]);
    host.fail_status_post = true;

    let result = handle(&host, &pull_request_event("opened", "add feature"));
    assert!(result.is_ok());
}

// =============================================================================
// issue_comment deliveries (override path)
// =============================================================================

#[test]
fn admin_override_approves_without_tests() {
    let host = StubHost::new()
        .with_languages(&["Go"])
        .with_files(&["pkg/a.go"])
        .with_permission(PermissionLevel::Admin)
        .with_pull("abc123", "add feature", "author");

    handle(&host, &comment_event("/ok-without-tests", true)).unwrap();

    let posted = host.posted_statuses();
    assert_eq!(posted.len(), 1);
    assert_eq!(posted[0].0.sha, "abc123");
    assert_eq!(posted[0].1.state, CommitState::Success);
    assert_eq!(posted[0].1.description, "approved without tests by @commenter");
}

#[test]
fn non_admin_override_is_ignored() {
    let host = StubHost::new()
        .with_languages(&["Go"])
        .with_files(&["pkg/a.go"])
        .with_permission(PermissionLevel::Write)
        .with_pull("abc123", "add feature", "author");

    handle(&host, &comment_event("/ok-without-tests", true)).unwrap();

    let posted = host.posted_statuses();
    assert_eq!(posted.len(), 1);
    assert_eq!(posted[0].1.state, CommitState::Failure);
    assert_eq!(posted[0].1.description, "no tests");
}

#[test]
fn permission_lookup_failure_downgrades_the_actor() {
    let mut host = StubHost::new()
        .with_languages(&["Go"])
        .with_files(&["pkg/a.go"])
        .with_pull("abc123", "add feature", "author");
    host.fail_permission = true;

    handle(&host, &comment_event("/ok-without-tests", true)).unwrap();

    let posted = host.posted_statuses();
    assert_eq!(posted[0].1.state, CommitState::Failure);
}

#[test]
fn override_command_is_matched_exactly_after_trim() {
    let host = StubHost::new()
        .with_permission(PermissionLevel::Admin)
        .with_pull("abc123", "add feature", "author");

    // Quoting the command in discussion must not trigger it.
    handle(&host, &comment_event("please use /ok-without-tests here", true)).unwrap();
    assert!(host.posted_statuses().is_empty());

    // Surrounding whitespace is fine.
    handle(&host, &comment_event("  /ok-without-tests\n", true)).unwrap();
    assert_eq!(host.posted_statuses().len(), 1);
}

#[test]
fn comments_on_plain_issues_are_ignored() {
    let host = StubHost::new().with_permission(PermissionLevel::Admin);
    handle(&host, &comment_event("/ok-without-tests", false)).unwrap();
    assert!(host.posted_statuses().is_empty());
}

#[test]
fn unsupported_event_kinds_are_ignored() {
    let host = StubHost::new();
    let event = Event::decode("push", "{}").unwrap();
    handle(&host, &event).unwrap();
    assert!(host.posted_statuses().is_empty());
}
