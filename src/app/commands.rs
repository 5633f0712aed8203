/// Commands that can be sent to the activity service
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Load recent activity for a validated username
    LoadActivity { username: String },

    /// Quit the application
    Quit,
}
