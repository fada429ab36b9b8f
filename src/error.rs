//! Error types for the Last.fm client.

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for all Last.fm operations.
#[derive(Debug, Error)]
pub enum LastfmError {
    /// No API key was supplied.
    #[error("API key is required for Last.fm API access")]
    MissingApiKey,

    /// The API answered with something other than `200 OK`.
    #[error("Unexpected HTTP status {status} for {url}")]
    UnexpectedStatus {
        /// Status returned by the server.
        status: StatusCode,
        /// Requested URL with the API key redacted.
        url: String,
    },

    /// HTTP request failed.
    #[error("Request error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A key of the unwrap path is missing from the response.
    #[error("Key not found: {0}")]
    KeyNotFound(String),

    /// A JSON value had a type the converter cannot handle.
    #[error("Unexpected JSON shape: expected {expected}, found {found}")]
    UnexpectedShape {
        /// What the converter wanted.
        expected: &'static str,
        /// JSON type that was actually present.
        found: &'static str,
    },

    /// An integer field held something that does not parse as one.
    #[error("Invalid number in field `{field}`: {value}")]
    InvalidNumber {
        /// Field name.
        field: String,
        /// Raw value as found in the response.
        value: String,
    },
}

/// Result type alias for Last.fm operations.
pub type Result<T> = std::result::Result<T, LastfmError>;
