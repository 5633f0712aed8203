//! End-to-end flow: form -> service -> HTTP -> model, against a mock API

mod common;

use anyhow::{Result, bail};
use common::{TEST_USER_AGENT, many_events, mixed_quality_events, mount_events, sample_events};
use crossterm::event::{KeyCode, KeyModifiers};
use gh_activity::adapters::github::GithubClient;
use gh_activity::config::UiConfig;
use gh_activity::domain::Event;
use gh_activity::error::FETCH_FAILED_BANNER;
use gh_activity::services::activity_service::ActivityService;
use gh_activity::tui::{Focus, TuiMessage, TuiModel, TuiUpdate};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

struct Harness {
    model: TuiModel,
    service: ActivityService,
    event_rx: mpsc::UnboundedReceiver<Event>,
}

impl Harness {
    fn new(server: &MockServer) -> Result<Self> {
        let client = GithubClient::new(server.uri(), TEST_USER_AGENT)?;
        let (service, event_rx, _command_tx) = ActivityService::new(Arc::new(client));
        Ok(Self {
            model: TuiModel::new(&UiConfig::default()),
            service,
            event_rx,
        })
    }

    fn type_username(&mut self, username: &str) -> Result<()> {
        self.model.focus = Focus::Form;
        TuiUpdate::handle_key(&mut self.model, KeyCode::Char('u'), KeyModifiers::CONTROL)?;
        for c in username.chars() {
            TuiUpdate::handle_key(&mut self.model, KeyCode::Char(c), KeyModifiers::NONE)?;
        }
        Ok(())
    }

    /// Press Enter in the form; returns whether a load was issued
    fn submit(&mut self) -> Result<bool> {
        match TuiUpdate::handle_key(&mut self.model, KeyCode::Enter, KeyModifiers::NONE)? {
            TuiMessage::Command(cmd) => {
                self.service.handle_command(cmd);
                Ok(true)
            }
            TuiMessage::None => Ok(false),
        }
    }

    /// Apply events until the in-flight load completes
    async fn settle(&mut self) -> Result<()> {
        loop {
            let next = tokio::time::timeout(Duration::from_secs(5), self.event_rx.recv()).await?;
            let Some(event) = next else {
                bail!("event channel closed");
            };
            self.model.apply_event(&event);
            if matches!(event, Event::ActivityLoaded { .. } | Event::LoadFailed { .. }) {
                return Ok(());
            }
        }
    }

    async fn search(&mut self, username: &str) -> Result<()> {
        self.type_username(username)?;
        assert!(self.submit()?, "valid username should issue a load");
        assert!(self.model.form.is_submitting());
        self.settle().await
    }

    fn shown(&self) -> usize {
        self.model.list.visible_events(&self.model.query.events).len()
    }
}

#[tokio::test]
async fn test_invalid_usernames_never_hit_the_network() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let mut harness = Harness::new(&server)?;

    harness.type_username("")?;
    assert!(!harness.submit()?);
    assert_eq!(
        harness.model.form.field_error.as_ref().map(|e| e.to_string()).as_deref(),
        Some("Username is required")
    );

    harness.type_username(&"a".repeat(40))?;
    assert!(!harness.submit()?);
    assert!(harness.model.form.field_error.is_some());
    assert!(!harness.model.query.loading);
    Ok(())
}

#[tokio::test]
async fn test_39_character_username_is_loaded() -> Result<()> {
    let server = MockServer::start().await;
    let username = "a".repeat(39);
    mount_events(&server, &username, 200, sample_events()).await;

    let mut harness = Harness::new(&server)?;
    harness.search(&username).await?;

    assert!(!harness.model.form.is_submitting());
    assert_eq!(harness.model.query.events.len(), 4);
    assert_eq!(harness.shown(), 4);
    Ok(())
}

#[tokio::test]
async fn test_pagination_reveals_five_at_a_time() -> Result<()> {
    let server = MockServer::start().await;
    mount_events(&server, "octocat", 200, many_events(12)).await;

    let mut harness = Harness::new(&server)?;
    harness.search("octocat").await?;
    assert!(!harness.model.query.loading);
    assert_eq!(harness.shown(), 5);

    harness.model.focus = Focus::List;
    let mut seen = Vec::new();
    for _ in 0..4 {
        TuiUpdate::handle_key(&mut harness.model, KeyCode::Char('m'), KeyModifiers::NONE)?;
        seen.push(harness.shown());
    }
    assert_eq!(seen, vec![10, 12, 12, 12]);
    Ok(())
}

#[tokio::test]
async fn test_failed_load_keeps_previous_events_and_sets_banner() -> Result<()> {
    let server = MockServer::start().await;
    mount_events(&server, "octocat", 200, sample_events()).await;
    mount_events(&server, "ghost", 404, serde_json::json!({ "message": "Not Found" })).await;

    let mut harness = Harness::new(&server)?;
    harness.search("octocat").await?;
    let before = harness.model.query.events.clone();

    harness.search("ghost").await?;
    assert_eq!(harness.model.query.error, FETCH_FAILED_BANNER);
    assert_eq!(harness.model.query.events, before);
    assert!(!harness.model.query.loading);
    assert!(!harness.model.form.is_submitting());

    // A later successful search clears the banner
    harness.search("octocat").await?;
    assert!(!harness.model.query.has_error());
    Ok(())
}

#[tokio::test]
async fn test_new_search_starts_from_first_page() -> Result<()> {
    let server = MockServer::start().await;
    mount_events(&server, "octocat", 200, many_events(20)).await;
    mount_events(&server, "hubot", 200, many_events(20)).await;

    let mut harness = Harness::new(&server)?;
    harness.search("octocat").await?;
    harness.model.show_more();
    harness.model.show_more();
    assert_eq!(harness.shown(), 15);

    harness.search("hubot").await?;
    assert_eq!(harness.model.query.shown_user.as_deref(), Some("hubot"));
    assert_eq!(harness.shown(), 5);
    Ok(())
}

#[tokio::test]
async fn test_malformed_entry_loads_alongside_good_ones() -> Result<()> {
    let server = MockServer::start().await;
    mount_events(&server, "octocat", 200, mixed_quality_events()).await;

    let mut harness = Harness::new(&server)?;
    harness.search("octocat").await?;

    assert!(!harness.model.query.has_error());
    assert_eq!(harness.model.query.events.len(), 3);
    assert_eq!(harness.shown(), 3);
    assert_eq!(harness.model.query.shown_user.as_deref(), Some("octocat"));
    Ok(())
}

#[tokio::test]
async fn test_empty_activity() -> Result<()> {
    let server = MockServer::start().await;
    mount_events(&server, "quiet", 200, serde_json::json!([])).await;

    let mut harness = Harness::new(&server)?;
    harness.search("quiet").await?;
    assert!(harness.model.query.events.is_empty());
    assert!(!harness.model.query.has_error());
    assert_eq!(harness.shown(), 0);
    Ok(())
}
