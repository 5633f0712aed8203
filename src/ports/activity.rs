use crate::domain::ActivityEvent;
use crate::error::Result;
use async_trait::async_trait;

/// Port for loading a user's public activity
#[async_trait]
pub trait ActivitySource: Send + Sync {
    /// Fetch the most recent events for `username`, newest first
    async fn recent_events(&self, username: &str) -> Result<Vec<ActivityEvent>>;
}
