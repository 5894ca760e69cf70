//! Seed data generation and insertion.

use super::error::{DynamodbError, Result};
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use serde_json::Value;
use std::collections::HashMap;
use todolist_core::storage::StoreValue;
use todolist_core::todo::ToDo;

const SEED_NAMES: [&str; 10] = [
    "Buy groceries",
    "Review pull request",
    "Book flights",
    "Reply to emails",
    "Water the plants",
    "Renew passport",
    "Call the dentist",
    "Update resume",
    "Pay electricity bill",
    "Clean desk",
];

/// Generates `count` ToDos, cycling through the sample names.
pub fn generate_seed_todos(count: u32) -> Result<Vec<ToDo>> {
    (0..count as usize)
        .map(|i| {
            let name = Value::from(SEED_NAMES[i % SEED_NAMES.len()]);
            ToDo::from_name(Some(&name)).map_err(|e| DynamodbError::InvalidSeed(e.to_string()))
        })
        .collect()
}

fn todo_to_item(todo: &ToDo) -> HashMap<String, AttributeValue> {
    todo.serialize()
        .into_iter()
        .map(|(name, value)| {
            let value = match value {
                StoreValue::S(s) => AttributeValue::S(s),
                StoreValue::N(n) => AttributeValue::N(n),
                StoreValue::Bool(b) => AttributeValue::Bool(b),
            };
            (name, value)
        })
        .collect()
}

/// Writes the ToDos one `PutItem` at a time, returning how many were written.
pub async fn seed_todos(client: &Client, table_name: &str, todos: &[ToDo]) -> Result<usize> {
    for todo in todos {
        client
            .put_item()
            .table_name(table_name)
            .set_item(Some(todo_to_item(todo)))
            .send()
            .await
            .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;
    }
    Ok(todos.len())
}
