//! HTTP client for the todolist API.

pub mod health;
pub mod todos;

use todolist_core::api::ErrorPayload;

use crate::error::{ClientError, Result};

/// HTTP client for the todolist API.
#[derive(Debug, Clone)]
pub struct TodolistClient {
    client: reqwest::Client,
    base_url: String,
}

impl TodolistClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decode a success body, or turn the `{error}` envelope into a [`ClientError`].
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return response.json().await.map_err(ClientError::from);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(error_from_status(status.as_u16(), &body))
    }
}

/// Extracts the server's error message from a failed response body.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorPayload>(body)
        .map(|payload| payload.error)
        .unwrap_or_else(|_| body.to_string())
}

/// Maps a failed status and body to a [`ClientError`].
pub fn error_from_status(status: u16, body: &str) -> ClientError {
    let message = error_message(body);
    match status {
        400 => ClientError::BadRequest { message },
        404 => ClientError::NotFound { message },
        status => ClientError::ServerError { status, message },
    }
}
