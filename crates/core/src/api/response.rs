//! The fixed response envelope returned by every handler.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::error::{api_error_to_status_code, ApiError};

/// Which method set an endpoint advertises in `Access-Control-Allow-Methods`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowedMethods {
    /// The ToDo collection: list and create.
    Collection,
    /// A single ToDo addressed by its key: read, update, delete.
    Item,
}

impl AllowedMethods {
    pub fn header_value(self) -> &'static str {
        match self {
            AllowedMethods::Collection => "OPTIONS,GET,POST",
            AllowedMethods::Item => "OPTIONS,GET,PUT,DELETE",
        }
    }
}

/// Headers attached to every response regardless of outcome.
pub fn response_headers(methods: AllowedMethods) -> BTreeMap<String, String> {
    BTreeMap::from([
        ("content-type".to_string(), "application/json".to_string()),
        (
            "Access-Control-Allow-Headers".to_string(),
            "Content-Type".to_string(),
        ),
        ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
        (
            "Access-Control-Allow-Methods".to_string(),
            methods.header_value().to_string(),
        ),
    ])
}

/// Status code, headers and JSON-encoded body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl ApiResponse {
    fn new(status_code: u16, body: String, methods: AllowedMethods) -> Self {
        Self {
            status_code,
            headers: response_headers(methods),
            body,
        }
    }

    /// A 200 response carrying `payload` as JSON.
    pub fn success<T: Serialize>(payload: &T, methods: AllowedMethods) -> Self {
        match serde_json::to_string(payload) {
            Ok(body) => Self::new(200, body, methods),
            Err(e) => Self::error(&ApiError::Internal(e.to_string()), methods),
        }
    }

    /// An error response: the error's status and `{"error": message}`.
    pub fn error(error: &ApiError, methods: AllowedMethods) -> Self {
        let body = json!({ "error": error.public_message() }).to_string();
        Self::new(api_error_to_status_code(error), body, methods)
    }

    /// Builds the envelope for a handler outcome.
    pub fn from_result<T: Serialize>(result: Result<T, ApiError>, methods: AllowedMethods) -> Self {
        match result {
            Ok(payload) => Self::success(&payload, methods),
            Err(error) => Self::error(&error, methods),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Parses the body back into JSON.
    pub fn json_body(&self) -> serde_json::Result<Value> {
        serde_json::from_str(&self.body)
    }
}
