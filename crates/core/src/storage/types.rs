use std::collections::BTreeMap;

/// Attribute name of the identifier half of the primary key.
pub const FIELD_ID: &str = "id";
/// Attribute name of the timestamp half of the primary key.
pub const FIELD_DATE: &str = "date";
/// Attribute name of the ToDo name.
pub const FIELD_NAME: &str = "name";

/// A scalar as the key-value store types it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreValue {
    /// String.
    S(String),
    /// Number, kept in its textual form like the store does.
    N(String),
    /// Boolean.
    Bool(bool),
}

impl StoreValue {
    /// Returns the string payload, or `None` for non-string scalars.
    pub fn as_s(&self) -> Option<&str> {
        match self {
            StoreValue::S(value) => Some(value),
            _ => None,
        }
    }
}

/// A flat stored item: attribute name to scalar value.
pub type Record = BTreeMap<String, StoreValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_s() {
        assert_eq!(StoreValue::S("x".to_string()).as_s(), Some("x"));
        assert_eq!(StoreValue::N("1".to_string()).as_s(), None);
        assert_eq!(StoreValue::Bool(true).as_s(), None);
    }
}
