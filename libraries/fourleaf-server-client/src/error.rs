//! Error types for the storefront client.

use thiserror::Error;

/// Errors that can occur when talking to the storefront backend.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error response
    #[error("Server error ({status}): {message}")]
    ServerError {
        /// HTTP status code
        status: u16,
        /// Response body, if the server sent one
        message: String,
    },

    /// Authentication required but no token available (or token rejected)
    #[error("Authentication required")]
    AuthRequired,

    /// Invalid backend URL
    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// File not found for upload
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// IO error while reading an upload
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Backend is offline or unreachable
    #[error("Backend unreachable: {0}")]
    ServerUnreachable(String),
}

/// Result type for storefront client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

impl From<ClientError> for fourleaf_core::FourleafError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Request(e) => fourleaf_core::FourleafError::network(e.to_string()),
            ClientError::ServerUnreachable(msg) => fourleaf_core::FourleafError::network(msg),
            other => fourleaf_core::FourleafError::stream(other.to_string()),
        }
    }
}
