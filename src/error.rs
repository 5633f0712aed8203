use thiserror::Error;

/// Longest username GitHub accepts
pub const MAX_USERNAME_LEN: usize = 39;

/// Banner shown for any failed load; details only go to the log
pub const FETCH_FAILED_BANNER: &str = "Unable to fetch GitHub activity. Please try again.";

/// Field-level validation failures of the search form
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Username is required")]
    Empty,

    #[error("Username must be 39 characters or less")]
    TooLong { len: usize },
}

/// Why a form submit never reached its callback
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("A search is already in progress")]
    Busy,
}

/// Failures while loading activity from the API
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to fetch activity: HTTP {status}")]
    Status { status: u16 },

    #[error("Failed to build request URL from {base}")]
    InvalidBaseUrl { base: String },

    #[error("Request failed: {source}")]
    Request {
        #[from]
        source: reqwest::Error,
    },

    #[error("Response body is not an event list: {source}")]
    Decode {
        #[from]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, FetchError>;
