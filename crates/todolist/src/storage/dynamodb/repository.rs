//! DynamoDB repository implementation.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;

use todolist_core::storage::{RepositoryError, Result, ToDoRepository};
use todolist_core::todo::{ToDo, ToDoPrimaryKey};

use super::conversions::{item_to_todo, key_to_item, todo_to_item};
use super::error::{map_delete_item_error, map_get_item_error, map_put_item_error, map_scan_error};

/// DynamoDB-based repository implementation.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new repository using the AWS SDK default credential chain.
    pub async fn connect(table_name: impl Into<String>) -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(Client::new(&config), table_name)
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl ToDoRepository for DynamoDbRepository {
    async fn get_todo(&self, key: &ToDoPrimaryKey) -> Result<ToDo> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(key_to_item(key)))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => item_to_todo(&item),
            None => Err(RepositoryError::NotFound {
                entity_type: "ToDo",
                key: format!("{}#{}", key.id(), key.date()),
            }),
        }
    }

    async fn put_todo(&self, todo: &ToDo) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(todo_to_item(todo)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn delete_todo(&self, key: &ToDoPrimaryKey) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(key_to_item(key)))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }

    async fn scan_todos(&self) -> Result<Vec<ToDo>> {
        // Single page; cursoring over LastEvaluatedKey is out of scope.
        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(map_scan_error)?;

        let items = result.items.unwrap_or_default();
        items.iter().map(item_to_todo).collect()
    }
}
