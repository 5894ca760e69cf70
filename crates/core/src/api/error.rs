use thiserror::Error;

use crate::storage::{repository_error_to_status_code, RepositoryError};
use crate::todo::ValidationError;

/// Message returned in place of any 500-class error.
pub const INTERNAL_ERROR_MESSAGE: &str = "Unknown error occurred";

/// Every failure a request handler can report.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error(transparent)]
    BadRequest(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("Request timed out")]
    Timeout,
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// The message safe to show the caller. Server-side failures collapse to
    /// [`INTERNAL_ERROR_MESSAGE`].
    pub fn public_message(&self) -> String {
        if api_error_to_status_code(self) >= 500 {
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}

/// Maps an [`ApiError`] to an HTTP status code.
///
/// - `BadRequest` -> 400
/// - `Repository` -> see [`repository_error_to_status_code`]
/// - `Timeout` -> 408
/// - `Internal` -> 500
pub fn api_error_to_status_code(error: &ApiError) -> u16 {
    match error {
        ApiError::BadRequest(_) => 400,
        ApiError::Repository(err) => repository_error_to_status_code(err),
        ApiError::Timeout => 408,
        ApiError::Internal(_) => 500,
    }
}
