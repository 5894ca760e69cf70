//! Client error types.

use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("Bad request: {message}")]
    BadRequest { message: String },

    #[error("Resource not found: {message}")]
    NotFound { message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
