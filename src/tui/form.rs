use crate::error::{MAX_USERNAME_LEN, SubmitError, ValidationError};
use std::future::Future;
use tracing::debug;

pub const PLACEHOLDER: &str = "Enter GitHub username";

/// Single-field username form
///
/// The form disables itself between a successful submit and the completion
/// of the caller's callback. Callback errors are not recorded here.
#[derive(Debug, Default)]
pub struct SearchForm {
    /// Current input text
    pub text: String,

    /// Field-level message from the last rejected submit
    pub field_error: Option<ValidationError>,

    submitting: bool,
}

/// Check a raw username against the form rules
pub fn validate_username(raw: &str) -> Result<String, ValidationError> {
    let len = raw.chars().count();
    if len == 0 {
        return Err(ValidationError::Empty);
    }
    if len > MAX_USERNAME_LEN {
        return Err(ValidationError::TooLong { len });
    }
    Ok(raw.to_string())
}

impl SearchForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn button_label(&self) -> &'static str {
        if self.submitting { "Searching..." } else { "Search" }
    }

    pub fn push_char(&mut self, c: char) {
        self.text.push(c);
        self.field_error = None;
    }

    pub fn backspace(&mut self) {
        self.text.pop();
        self.field_error = None;
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.field_error = None;
    }

    /// Validate the current text and disable the form
    ///
    /// Returns the username to load, or `None` when the form is already
    /// submitting or the text is invalid (the message lands in `field_error`).
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.submitting {
            debug!("Ignoring submit while a search is in flight");
            return None;
        }

        match validate_username(&self.text) {
            Ok(username) => {
                self.field_error = None;
                self.submitting = true;
                Some(username)
            }
            Err(e) => {
                self.field_error = Some(e);
                None
            }
        }
    }

    /// Re-enable the form after the submitted search completed
    pub fn finish(&mut self) {
        self.submitting = false;
    }

    /// Validate `raw`, run `callback` with it and re-enable once it resolves
    ///
    /// A form that is already submitting keeps its text and reports `Busy`.
    pub async fn submit_with<F, Fut, T>(&mut self, raw: &str, callback: F) -> Result<T, SubmitError>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = T>,
    {
        if self.submitting {
            debug!("Rejecting submit of {:?} while a search is in flight", raw);
            return Err(SubmitError::Busy);
        }

        self.text = raw.to_string();
        let Some(username) = self.begin_submit() else {
            return Err(self.field_error.clone().map_or(SubmitError::Busy, SubmitError::Invalid));
        };

        let output = callback(username).await;
        self.finish();
        Ok(output)
    }
}
