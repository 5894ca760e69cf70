//! Transport-neutral view of an inbound request.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::storage::{FIELD_DATE, FIELD_ID};
use crate::todo::{ToDoPrimaryKey, ValidationError};

/// Query parameters plus the raw, unparsed body of a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiRequest {
    pub query: BTreeMap<String, String>,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a query parameter.
    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }

    /// Set the raw body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Parses the body as a JSON object.
    pub fn json_body(&self) -> Result<Map<String, Value>, ValidationError> {
        let raw = match self.body.as_deref() {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => return Err(ValidationError::EmptyBody),
        };

        match serde_json::from_str(raw) {
            Ok(Value::Object(map)) => Ok(map),
            _ => Err(ValidationError::MalformedBody),
        }
    }

    fn has_key_params(&self) -> bool {
        self.query.contains_key(FIELD_ID) || self.query.contains_key(FIELD_DATE)
    }

    fn has_body(&self) -> bool {
        self.body.as_deref().is_some_and(|b| !b.trim().is_empty())
    }

    /// Extracts and validates the `(id, date)` key.
    ///
    /// Query parameters win; the JSON body is the fallback. With neither,
    /// fails with [`ValidationError::EmptyParameters`].
    pub fn primary_key(&self) -> Result<ToDoPrimaryKey, ValidationError> {
        if self.has_key_params() {
            let id = self.query.get(FIELD_ID).map(|v| Value::from(v.as_str()));
            let date = self.query.get(FIELD_DATE).map(|v| Value::from(v.as_str()));
            return ToDoPrimaryKey::parse(id.as_ref(), date.as_ref());
        }

        if self.has_body() {
            let body = self.json_body()?;
            return ToDoPrimaryKey::parse(body.get(FIELD_ID), body.get(FIELD_DATE));
        }

        Err(ValidationError::EmptyParameters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "550e8400-e29b-41d4-a716-446655440000";
    const DATE: &str = "2024-01-15T10:30:00.000Z";

    #[test]
    fn test_json_body_missing() {
        assert_eq!(
            ApiRequest::new().json_body(),
            Err(ValidationError::EmptyBody)
        );
        assert_eq!(
            ApiRequest::new().with_body("  ").json_body(),
            Err(ValidationError::EmptyBody)
        );
    }

    #[test]
    fn test_json_body_malformed() {
        assert_eq!(
            ApiRequest::new().with_body("{name:").json_body(),
            Err(ValidationError::MalformedBody)
        );
        assert_eq!(
            ApiRequest::new().with_body("[1, 2]").json_body(),
            Err(ValidationError::MalformedBody)
        );
    }

    #[test]
    fn test_json_body_object() {
        let body = ApiRequest::new()
            .with_body(r#"{"name": "Buy milk"}"#)
            .json_body()
            .unwrap();
        assert_eq!(body.get("name"), Some(&Value::from("Buy milk")));
    }

    #[test]
    fn test_primary_key_from_query() {
        let key = ApiRequest::new()
            .with_query("id", ID)
            .with_query("date", DATE)
            .primary_key()
            .unwrap();
        assert_eq!(key.id(), ID);
        assert_eq!(key.date(), DATE);
    }

    #[test]
    fn test_primary_key_query_wins_over_body() {
        let result = ApiRequest::new()
            .with_query("id", ID)
            .with_body(format!(r#"{{"id": "{ID}", "date": "{DATE}"}}"#))
            .primary_key();
        assert_eq!(result, Err(ValidationError::DateRequired));
    }

    #[test]
    fn test_primary_key_from_body() {
        let key = ApiRequest::new()
            .with_body(format!(r#"{{"id": "{ID}", "date": "{DATE}"}}"#))
            .primary_key()
            .unwrap();
        assert_eq!(key.id(), ID);
    }

    #[test]
    fn test_primary_key_missing_everything() {
        assert_eq!(
            ApiRequest::new().primary_key(),
            Err(ValidationError::EmptyParameters)
        );
    }

    #[test]
    fn test_primary_key_invalid_query_id() {
        let result = ApiRequest::new()
            .with_query("id", "not-a-uuid")
            .with_query("date", DATE)
            .primary_key();
        assert_eq!(result, Err(ValidationError::InvalidId));
    }
}
