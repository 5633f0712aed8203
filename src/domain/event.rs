use chrono::{DateTime, FixedOffset};
use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One record from `GET /users/{username}/events`
///
/// Every field falls back to its default and scalars of the wrong type are
/// kept as text, so a partially malformed entry still renders.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ActivityEvent {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,

    #[serde(rename = "type", default, deserialize_with = "lenient::string")]
    pub kind: String,

    #[serde(default, deserialize_with = "lenient::object")]
    pub repo: EventRepo,

    #[serde(default, deserialize_with = "lenient::object")]
    pub payload: EventPayload,

    /// Raw RFC 3339 timestamp as sent by the API
    #[serde(default, deserialize_with = "lenient::string")]
    pub created_at: String,
}

/// Repository the event happened in
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EventRepo {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
}

/// Type-dependent payload fields used for descriptions
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EventPayload {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub action: Option<String>,

    #[serde(rename = "ref", default, deserialize_with = "lenient::opt_string")]
    pub git_ref: Option<String>,

    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub ref_type: Option<String>,

    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub master_branch: Option<String>,

    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub pusher_type: Option<String>,
}

impl ActivityEvent {
    /// Decode one list element; anything that is not an object becomes an empty event
    pub fn from_value(value: Value) -> Self {
        lenient::from_value(value)
    }
}

/// Field decoders that never reject a wrong-typed value
mod lenient {
    use super::*;

    fn scalar_text(value: Value) -> Option<String> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(s),
            other => Some(other.to_string()),
        }
    }

    pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
    }

    pub fn opt_string<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        Ok(scalar_text(Value::deserialize(deserializer)?))
    }

    pub fn object<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        Ok(from_value(Value::deserialize(deserializer)?))
    }

    pub fn from_value<T: DeserializeOwned + Default>(value: Value) -> T {
        match value {
            Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            _ => T::default(),
        }
    }
}

/// Icons shown next to each timeline entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventIcon {
    Commit,
    PullRequest,
    Star,
    Branch,
    Fork,
    Package,
    Book,
}

impl EventIcon {
    /// Icon for an event type tag. Unknown tags get the branch icon.
    pub fn for_kind(kind: &str) -> Self {
        match kind {
            "PushEvent" => EventIcon::Commit,
            "PullRequestEvent" => EventIcon::PullRequest,
            "WatchEvent" => EventIcon::Star,
            "CreateEvent" => EventIcon::Branch,
            "ForkEvent" => EventIcon::Fork,
            "ReleaseEvent" => EventIcon::Package,
            "IssuesEvent" => EventIcon::Book,
            _ => EventIcon::Branch,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            EventIcon::Commit => "◉",
            EventIcon::PullRequest => "⇄",
            EventIcon::Star => "★",
            EventIcon::Branch => "⎇",
            EventIcon::Fork => "⑂",
            EventIcon::Package => "▣",
            EventIcon::Book => "▤",
        }
    }
}

impl ActivityEvent {
    pub fn icon(&self) -> EventIcon {
        EventIcon::for_kind(&self.kind)
    }

    /// One-line human readable summary of the event
    pub fn description(&self) -> String {
        let payload = &self.payload;
        let field = |value: &Option<String>| value.clone().unwrap_or_default();

        let text = match self.kind.as_str() {
            "PushEvent" => {
                let git_ref = payload.git_ref.as_deref().unwrap_or_default();
                let branch = git_ref.strip_prefix("refs/heads/").unwrap_or(git_ref);
                format!("Pushed to {}", branch)
            }
            "PullRequestEvent" => format!("{} a pull request", field(&payload.action)),
            "WatchEvent" => "Starred the repository".to_string(),
            "CreateEvent" => {
                let target = payload
                    .git_ref
                    .as_deref()
                    .filter(|r| !r.is_empty())
                    .or(payload.master_branch.as_deref().filter(|b| !b.is_empty()))
                    .unwrap_or_default();
                format!("Created {} {}", field(&payload.ref_type), target)
            }
            "ForkEvent" => "Forked the repository".to_string(),
            "ReleaseEvent" => "Published a release".to_string(),
            "IssuesEvent" => format!("{} an issue", field(&payload.action)),
            other => other.to_string(),
        };

        text.trim_end().to_string()
    }

    /// Creation date as `Mon D, YYYY`, or the raw value when it does not parse
    pub fn formatted_date(&self) -> String {
        format_date(&self.created_at)
    }
}

pub fn format_date(raw: &str) -> String {
    match DateTime::<FixedOffset>::parse_from_rfc3339(raw) {
        Ok(ts) => ts.format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}
