//! Error handling for IS23 CamAdmin

use crate::camera_provider::types::FormErrors;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP client error (transport failure or undecodable body)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response from the camera management API
    #[error("API error: HTTP {status}: {message}")]
    Api { status: u16, message: String },

    /// Form validation error (no request is issued)
    #[error("Validation error: {0}")]
    Form(#[from] FormErrors),
}

impl Error {
    /// True when the failure originated locally, before any network call
    pub fn is_local(&self) -> bool {
        matches!(self, Error::Form(_))
    }
}
