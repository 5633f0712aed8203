use crate::domain::{ActivityEvent, Event};
use crate::error::FETCH_FAILED_BANNER;

/// Loading / error / result state of the activity query
///
/// Results are replaced wholesale, never merged. A failed load keeps the
/// previous events on screen.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct QueryState {
    pub loading: bool,

    /// Banner text, empty when there is no error
    pub error: String,

    pub events: Vec<ActivityEvent>,

    /// Username whose events are currently shown
    pub shown_user: Option<String>,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an event to update the state
    pub fn apply(&mut self, event: &Event) {
        match event {
            Event::LoadStarted { .. } => {
                self.loading = true;
                self.error.clear();
            }

            Event::ActivityLoaded { username, events } => {
                self.events = events.clone();
                self.shown_user = Some(username.clone());
                self.loading = false;
            }

            Event::LoadFailed { .. } => {
                self.error = FETCH_FAILED_BANNER.to_string();
                self.loading = false;
            }

            Event::QuitRequested => {}
        }
    }

    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }
}
