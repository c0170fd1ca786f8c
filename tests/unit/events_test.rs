//! Tests for webhook payload decoding

use testkeeper::webhook::Event;

const PULL_REQUEST_BODY: &str = r#"{
    "action": "opened",
    "number": 42,
    "pull_request": {
        "title": "Add the thing",
        "head": { "sha": "deadbeef" },
        "user": { "login": "author" },
        "extra_field_we_ignore": true
    },
    "repository": {
        "name": "spoon-knife",
        "owner": { "login": "octocat" }
    }
}"#;

#[test]
fn decodes_pull_request_deliveries() {
    let Event::PullRequest(event) = Event::decode("pull_request", PULL_REQUEST_BODY).unwrap()
    else {
        panic!("expected a pull_request event");
    };
    assert_eq!(event.action, "opened");
    assert_eq!(event.number, 42);
    assert_eq!(event.pull_request.title, "Add the thing");
    assert!(event.touches_head());

    let commit = event.commit_ref();
    assert_eq!(commit.sha, "deadbeef");
    assert_eq!(commit.repo.to_string(), "octocat/spoon-knife");
}

#[test]
fn pull_request_actions_that_do_not_move_the_head() {
    for action in ["edited", "labeled", "closed"] {
        let body = PULL_REQUEST_BODY.replace("opened", action);
        let Event::PullRequest(event) = Event::decode("pull_request", &body).unwrap() else {
            panic!("expected a pull_request event");
        };
        assert!(!event.touches_head(), "{action} should not warrant a re-check");
    }
}

#[test]
fn decodes_issue_comment_deliveries() {
    let body = r#"{
        "action": "created",
        "comment": { "body": "/ok-without-tests", "user": { "login": "admin" } },
        "issue": { "number": 42, "pull_request": { "url": "https://example.invalid" } },
        "repository": { "name": "spoon-knife", "owner": { "login": "octocat" } }
    }"#;
    let Event::IssueComment(event) = Event::decode("issue_comment", body).unwrap() else {
        panic!("expected an issue_comment event");
    };
    assert!(event.is_new_pr_comment());
    assert_eq!(event.comment.user.login, "admin");
}

#[test]
fn plain_issue_comments_are_not_pr_comments() {
    let body = r#"{
        "action": "created",
        "comment": { "body": "hi", "user": { "login": "user" } },
        "issue": { "number": 1 },
        "repository": { "name": "r", "owner": { "login": "o" } }
    }"#;
    let Event::IssueComment(event) = Event::decode("issue_comment", body).unwrap() else {
        panic!("expected an issue_comment event");
    };
    assert!(!event.is_new_pr_comment());
}

#[test]
fn unsupported_kinds_decode_without_parsing() {
    let event = Event::decode("push", "this is not even json").unwrap();
    assert!(matches!(event, Event::Unsupported(kind) if kind == "push"));
}

#[test]
fn malformed_payloads_are_rejected() {
    assert!(Event::decode("pull_request", "{}").is_err());
    assert!(Event::decode("issue_comment", "not json").is_err());
}
