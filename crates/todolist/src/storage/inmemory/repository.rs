//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use todolist_core::storage::{Record, RepositoryError, Result, ToDoRepository};
use todolist_core::todo::{ToDo, ToDoPrimaryKey};

/// Map key: `(id, date)`.
type Key = (String, String);

fn key_of(key: &ToDoPrimaryKey) -> Key {
    (key.id().to_string(), key.date().to_string())
}

fn decode(record: &Record) -> Result<ToDo> {
    ToDo::deserialize(record).map_err(|e| RepositoryError::Serialization(e.to_string()))
}

/// In-memory storage backend for tests and local development.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    items: Arc<RwLock<HashMap<Key, Record>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a raw record as-is, bypassing the domain model.
    #[cfg(test)]
    pub async fn insert_raw(&self, key: &ToDoPrimaryKey, record: Record) {
        self.items.write().await.insert(key_of(key), record);
    }
}

#[async_trait]
impl ToDoRepository for InMemoryRepository {
    async fn get_todo(&self, key: &ToDoPrimaryKey) -> Result<ToDo> {
        let items = self.items.read().await;
        match items.get(&key_of(key)) {
            Some(record) => decode(record),
            None => Err(RepositoryError::NotFound {
                entity_type: "ToDo",
                key: format!("{}#{}", key.id(), key.date()),
            }),
        }
    }

    async fn put_todo(&self, todo: &ToDo) -> Result<()> {
        let mut items = self.items.write().await;
        items.insert(key_of(todo.primary_key()), todo.serialize());
        Ok(())
    }

    async fn delete_todo(&self, key: &ToDoPrimaryKey) -> Result<()> {
        let mut items = self.items.write().await;
        items.remove(&key_of(key));
        Ok(())
    }

    async fn scan_todos(&self) -> Result<Vec<ToDo>> {
        let items = self.items.read().await;
        items.values().map(decode).collect()
    }
}
