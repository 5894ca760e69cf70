//! Bridges axum requests and responses to the core envelope.
//!
//! Extractor rejections and timeouts are turned into [`ApiError`]s here so
//! that every answer, failures included, carries the envelope headers and a
//! JSON body.

use std::{collections::BTreeMap, future::Future, time::Duration};

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, QueryRejection},
        Query,
    },
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use todolist_core::api::{api_error_to_status_code, AllowedMethods, ApiError, ApiResponse};
use todolist_core::todo::ValidationError;

/// Raw query extractor output; rejections are reported through the envelope.
pub type RawQuery = Result<Query<BTreeMap<String, String>>, QueryRejection>;

/// Raw body extractor output; rejections are reported through the envelope.
pub type RawBody = Result<Bytes, BytesRejection>;

/// Unwraps query parameters, rejecting an undecodable query string.
pub fn query_params(query: RawQuery) -> Result<BTreeMap<String, String>, ValidationError> {
    query
        .map(|Query(params)| params)
        .map_err(|_| ValidationError::MalformedQuery)
}

/// Unwraps the body as UTF-8 text. Unreadable or non-UTF-8 bodies are malformed.
pub fn body_text(body: RawBody) -> Result<String, ValidationError> {
    let bytes = body.map_err(|_| ValidationError::MalformedBody)?;
    String::from_utf8(bytes.to_vec()).map_err(|_| ValidationError::MalformedBody)
}

/// Bounds an operation by the request timeout.
pub async fn with_timeout<T>(
    limit: Duration,
    operation: impl Future<Output = Result<T, ApiError>>,
) -> Result<T, ApiError> {
    tokio::time::timeout(limit, operation)
        .await
        .unwrap_or(Err(ApiError::Timeout))
}

/// An [`ApiResponse`] ready to be returned from an axum handler.
#[derive(Debug)]
pub struct Envelope(pub ApiResponse);

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        let ApiResponse {
            status_code,
            headers,
            body,
        } = self.0;

        let status = StatusCode::from_u16(status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut header_map = HeaderMap::with_capacity(headers.len());
        for (name, value) in headers {
            match (
                HeaderName::try_from(name.as_str()),
                HeaderValue::from_str(&value),
            ) {
                (Ok(name), Ok(value)) => {
                    header_map.insert(name, value);
                }
                _ => tracing::warn!(header = %name, "Dropping invalid response header"),
            }
        }

        (status, header_map, body).into_response()
    }
}

/// Logs a failed operation and wraps the outcome in an [`Envelope`].
pub fn respond<T: Serialize>(
    operation: &'static str,
    result: Result<T, ApiError>,
    methods: AllowedMethods,
) -> Envelope {
    if let Err(error) = &result {
        let status = api_error_to_status_code(error);
        if status >= 500 {
            tracing::error!(operation, status, error = %error, "ToDo request failed");
        } else {
            tracing::warn!(operation, status, error = %error, "ToDo request rejected");
        }
    }

    Envelope(ApiResponse::from_result(result, methods))
}
