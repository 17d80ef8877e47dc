/*
[INPUT]:  Error sources (credentials, HTTP, serialization, arguments)
[OUTPUT]: Structured error types for the whole crate
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the Anboto adapter
#[derive(Error, Debug)]
pub enum AnbotoError {
    /// Secret key is not valid base64
    #[error("Invalid secret key: {0}")]
    Credentials(#[from] base64::DecodeError),

    /// HMAC key was rejected
    #[error("Invalid HMAC key length")]
    InvalidKey,

    /// Caller supplied an unusable argument; no request was issued
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// HTTP transport failed (connection, timeout, TLS)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl AnbotoError {
    /// Check if the error was raised before any request left the process
    pub fn is_local(&self) -> bool {
        !matches!(self, AnbotoError::Http(_))
    }

    /// Create an invalid-argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        AnbotoError::InvalidArgument(message.into())
    }
}

/// Result type alias for Anboto operations
pub type Result<T> = std::result::Result<T, AnbotoError>;
