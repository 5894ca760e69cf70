//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! store records. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use todolist_core::storage::{Record, RepositoryError, StoreValue, FIELD_DATE, FIELD_ID};
use todolist_core::todo::{ToDo, ToDoPrimaryKey};

pub type Item = HashMap<String, AttributeValue>;

fn to_attribute(value: &StoreValue) -> AttributeValue {
    match value {
        StoreValue::S(s) => AttributeValue::S(s.clone()),
        StoreValue::N(n) => AttributeValue::N(n.clone()),
        StoreValue::Bool(b) => AttributeValue::Bool(*b),
    }
}

fn from_attribute(value: &AttributeValue) -> Option<StoreValue> {
    match value {
        AttributeValue::S(s) => Some(StoreValue::S(s.clone())),
        AttributeValue::N(n) => Some(StoreValue::N(n.clone())),
        AttributeValue::Bool(b) => Some(StoreValue::Bool(*b)),
        // Sets, lists, maps and binaries have no scalar counterpart.
        _ => None,
    }
}

/// Convert a record to a DynamoDB item.
pub fn record_to_item(record: &Record) -> Item {
    record
        .iter()
        .map(|(name, value)| (name.clone(), to_attribute(value)))
        .collect()
}

/// Convert a DynamoDB item to a record, dropping non-scalar attributes.
pub fn item_to_record(item: &Item) -> Record {
    item.iter()
        .filter_map(|(name, value)| from_attribute(value).map(|v| (name.clone(), v)))
        .collect()
}

/// Convert a ToDo to a DynamoDB item.
pub fn todo_to_item(todo: &ToDo) -> Item {
    record_to_item(&todo.serialize())
}

/// Convert a DynamoDB item to a ToDo.
pub fn item_to_todo(item: &Item) -> Result<ToDo, RepositoryError> {
    ToDo::deserialize(&item_to_record(item))
        .map_err(|e| RepositoryError::Serialization(e.to_string()))
}

/// The `Key` map addressing one item.
pub fn key_to_item(key: &ToDoPrimaryKey) -> Item {
    HashMap::from([
        (FIELD_ID.to_string(), AttributeValue::S(key.id().to_string())),
        (
            FIELD_DATE.to_string(),
            AttributeValue::S(key.date().to_string()),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ID: &str = "550e8400-e29b-41d4-a716-446655440000";
    const DATE: &str = "2024-01-15T10:30:00.000Z";

    fn sample() -> ToDo {
        ToDo::from_key_and_name(
            Some(&json!(ID)),
            Some(&json!(DATE)),
            Some(&json!("Buy milk")),
        )
        .unwrap()
    }

    #[test]
    fn test_todo_to_item_field_names() {
        let item = todo_to_item(&sample());

        assert_eq!(item.len(), 3);
        assert_eq!(item.get("id"), Some(&AttributeValue::S(ID.to_string())));
        assert_eq!(item.get("date"), Some(&AttributeValue::S(DATE.to_string())));
        assert_eq!(
            item.get("name"),
            Some(&AttributeValue::S("Buy milk".to_string()))
        );
    }

    #[test]
    fn test_item_to_todo_reconstructs_equal_todo() {
        let triples = [
            (ID, DATE, "Buy milk"),
            ("550E8400-E29B-41D4-A716-446655440000", DATE, "Buy milk"),
            (ID, DATE, "Café ☕ 日本語"),
            (ID, DATE, "   "),
            (ID, "2024-02-29T23:59:59.999Z", "Leap day"),
        ];

        for (id, date, name) in triples {
            let original =
                ToDo::from_key_and_name(Some(&json!(id)), Some(&json!(date)), Some(&json!(name)))
                    .unwrap();

            let restored = item_to_todo(&todo_to_item(&original)).unwrap();

            assert!(restored.is_equals(&original), "{id} {date} {name:?}");
            assert_eq!(restored.name(), name);
        }
    }

    #[test]
    fn test_item_to_todo_ignores_extra_attributes() {
        let mut item = todo_to_item(&sample());
        item.insert("owner".to_string(), AttributeValue::S("someone".to_string()));

        assert!(item_to_todo(&item).unwrap().is_equals(&sample()));
    }

    #[test]
    fn test_item_to_todo_wrong_type() {
        let mut item = todo_to_item(&sample());
        item.insert("name".to_string(), AttributeValue::N("42".to_string()));

        let result = item_to_todo(&item);

        assert_eq!(
            result,
            Err(RepositoryError::Serialization(
                "deserialize error: types do not match".to_string()
            ))
        );
    }

    #[test]
    fn test_item_to_record_drops_non_scalars() {
        let item = HashMap::from([
            ("id".to_string(), AttributeValue::S(ID.to_string())),
            ("tags".to_string(), AttributeValue::Ss(vec!["a".to_string()])),
            ("done".to_string(), AttributeValue::Bool(false)),
        ]);

        let record = item_to_record(&item);

        assert_eq!(record.len(), 2);
        assert_eq!(record.get("done"), Some(&StoreValue::Bool(false)));
    }

    #[test]
    fn test_key_to_item() {
        let key = key_to_item(sample().primary_key());

        assert_eq!(key.len(), 2);
        assert_eq!(key.get("id"), Some(&AttributeValue::S(ID.to_string())));
        assert_eq!(key.get("date"), Some(&AttributeValue::S(DATE.to_string())));
    }
}
