//! Error types for the generative-text collaborators

use thiserror::Error;

/// Errors that can occur when asking the text generator for content
#[derive(Error, Debug)]
pub enum ConciergeError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Response contained no text")]
    EmptyResponse,

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("No API key configured")]
    MissingApiKey,

    #[error("Invalid image: {0}")]
    InvalidImage(String),
}

impl From<serde_json::Error> for ConciergeError {
    fn from(err: serde_json::Error) -> Self {
        ConciergeError::Parse(err.to_string())
    }
}

/// Result type alias for concierge operations
pub type ConciergeResult<T> = Result<T, ConciergeError>;

/// Error body returned by the generative-language API
#[derive(Debug, serde::Deserialize)]
pub(crate) struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, serde::Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}
