use async_trait::async_trait;

use crate::todo::{ToDo, ToDoPrimaryKey};

use super::Result;

/// Storage adapter for ToDo items.
///
/// A single logical table keyed by the composite `(id, date)` key. Every
/// backend implements the full capability set.
#[async_trait]
pub trait ToDoRepository: Send + Sync {
    /// Point lookup. Fails with `NotFound` when no item has this key.
    async fn get_todo(&self, key: &ToDoPrimaryKey) -> Result<ToDo>;

    /// Writes the item, overwriting any item stored under the same key.
    async fn put_todo(&self, todo: &ToDo) -> Result<()>;

    /// Removes the item. Removing a missing key is not an error.
    async fn delete_todo(&self, key: &ToDoPrimaryKey) -> Result<()>;

    /// Returns every stored item in no particular order.
    async fn scan_todos(&self) -> Result<Vec<ToDo>>;
}
