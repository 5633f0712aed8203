//! Shared fixtures for the integration tests

#![allow(dead_code)]

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_USER_AGENT: &str = "gh-activity-tests";

/// A realistic slice of `GET /users/{username}/events`
pub fn sample_events() -> Value {
    json!([
        {
            "id": "1001",
            "type": "PushEvent",
            "actor": { "id": 1, "login": "octocat" },
            "repo": { "id": 10, "name": "octocat/hello-world", "url": "https://api.github.com/repos/octocat/hello-world" },
            "payload": { "ref": "refs/heads/main", "size": 1, "distinct_size": 1 },
            "public": true,
            "created_at": "2024-01-05T10:00:00Z"
        },
        {
            "id": "1002",
            "type": "CreateEvent",
            "repo": { "id": 11, "name": "octocat/new-thing" },
            "payload": { "ref": null, "ref_type": "repository", "master_branch": "main", "description": "A new thing", "pusher_type": "user" },
            "created_at": "2024-01-04T09:00:00Z"
        },
        {
            "id": "1003",
            "type": "PullRequestEvent",
            "repo": { "id": 10, "name": "octocat/hello-world" },
            "payload": { "action": "opened", "number": 7 },
            "created_at": "2024-01-03T08:00:00Z"
        },
        {
            "id": "1004",
            "type": "MemberEvent",
            "repo": { "id": 12, "name": "octocat/team" },
            "payload": { "action": "added" },
            "created_at": "2024-01-02T07:00:00Z"
        }
    ])
}

/// One entry with wrong-typed fields next to a well-formed fork
pub fn mixed_quality_events() -> Value {
    json!([
        {
            "id": 2001,
            "type": "IssuesEvent",
            "repo": null,
            "payload": { "action": 5 },
            "created_at": "2024-03-01T10:00:00Z"
        },
        {
            "id": "2002",
            "type": "ForkEvent",
            "repo": { "name": "octocat/hello-world" },
            "payload": null,
            "created_at": "2024-03-02T10:00:00Z"
        },
        {
            "id": "2003",
            "type": "ForkEvent",
            "repo": { "name": "octocat/spoon-knife" },
            "payload": {},
            "created_at": "2024-03-03T10:00:00Z"
        }
    ])
}

/// `n` watch events for pagination checks
pub fn many_events(n: usize) -> Value {
    Value::Array(
        (0..n)
            .map(|i| {
                json!({
                    "id": i.to_string(),
                    "type": "WatchEvent",
                    "repo": { "name": format!("octocat/repo-{}", i) },
                    "payload": { "action": "started" },
                    "created_at": "2024-02-01T12:00:00Z"
                })
            })
            .collect(),
    )
}

/// Mount a JSON response for one user's events endpoint
pub async fn mount_events(server: &MockServer, username: &str, status: u16, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/users/{}/events", username)))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}
