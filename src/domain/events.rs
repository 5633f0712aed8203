use super::event::ActivityEvent;

/// Domain events emitted by the activity service
#[derive(Debug, Clone)]
pub enum Event {
    /// A load for this username was issued
    LoadStarted { username: String },

    /// The API answered with a decodable event list
    ActivityLoaded {
        username: String,
        events: Vec<ActivityEvent>,
    },

    /// The request failed or the body could not be decoded
    LoadFailed { username: String, msg: String },

    /// User requested to quit the application
    QuitRequested,
}
