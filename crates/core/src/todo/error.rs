use thiserror::Error;

/// Errors raised while validating untrusted ToDo input.
///
/// Every variant maps to a 400 response and its message names the offending
/// field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("id required")]
    IdRequired,
    #[error("id must be a valid uuid")]
    InvalidId,
    #[error("date required")]
    DateRequired,
    #[error("date not a valid ISO date")]
    InvalidDate,
    #[error("name required")]
    NameRequired,
    #[error("name must be a string")]
    NameNotString,
    #[error("name cannot be empty")]
    EmptyName,
    #[error("Empty request body")]
    EmptyBody,
    #[error("Invalid JSON body")]
    MalformedBody,
    #[error("Empty request parameters")]
    EmptyParameters,
    #[error("Invalid query parameters")]
    MalformedQuery,
}

/// Errors raised while rebuilding a ToDo from a stored record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("deserialize error: types do not match")]
    TypeMismatch,
    #[error("deserialize error: {0}")]
    Invalid(#[from] ValidationError),
}
