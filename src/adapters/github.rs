use crate::domain::ActivityEvent;
use crate::error::{FetchError, Result};
use crate::ports::ActivitySource;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::Url;
use tracing::{debug, warn};

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// GitHub REST adapter that implements ActivitySource
///
/// Unauthenticated, no timeout and no retry: a failed request is reported
/// once and the caller decides what to show.
pub struct GithubClient {
    http: reqwest::Client,
    base_url: String,
}

impl GithubClient {
    pub fn new(base_url: impl Into<String>, user_agent: &str) -> Result<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));

        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .default_headers(default_headers)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// `{base}/users/{username}/events`, with the username as one encoded segment
    pub fn events_url(&self, username: &str) -> Result<Url> {
        let invalid = || FetchError::InvalidBaseUrl {
            base: self.base_url.clone(),
        };

        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(["users", username, "events"]);
        Ok(url)
    }
}

#[async_trait]
impl ActivitySource for GithubClient {
    async fn recent_events(&self, username: &str) -> Result<Vec<ActivityEvent>> {
        let url = self.events_url(username)?;
        debug!("GET {}", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("Activity request for {} returned {}", username, status);
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        // Only a non-array body is an error; each element decodes on its own
        let raw: Vec<serde_json::Value> = serde_json::from_slice(&body)?;
        let events: Vec<ActivityEvent> = raw.into_iter().map(ActivityEvent::from_value).collect();
        debug!("Decoded {} events for {}", events.len(), username);
        Ok(events)
    }
}
