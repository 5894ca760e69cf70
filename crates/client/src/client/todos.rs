//! ToDo API operations.

use serde::Serialize;
use todolist_core::api::{ItemPayload, ItemsPayload, MessagePayload};
use todolist_core::todo::ToDo;

use super::TodolistClient;
use crate::error::{ClientError, Result};

/// Query string addressing one ToDo.
#[derive(Debug, Serialize)]
struct KeyQuery<'a> {
    id: &'a str,
    date: &'a str,
}

/// Body for create and update requests.
#[derive(Debug, Serialize)]
struct NameBody<'a> {
    name: &'a str,
}

fn expect_item(payload: MessagePayload) -> Result<ToDo> {
    payload
        .item
        .ok_or_else(|| ClientError::InvalidResponse(format!("missing item: {}", payload.message)))
}

impl TodolistClient {
    /// List all ToDos.
    pub async fn list_todos(&self) -> Result<Vec<ToDo>> {
        let response = self.client.get(self.url("/api/todos")).send().await?;
        let payload: ItemsPayload = self.handle_response(response).await?;
        Ok(payload.items)
    }

    /// Create a new ToDo; the server assigns its id and date.
    pub async fn create_todo(&self, name: &str) -> Result<ToDo> {
        let response = self
            .client
            .post(self.url("/api/todos"))
            .json(&NameBody { name })
            .send()
            .await?;
        expect_item(self.handle_response(response).await?)
    }

    /// Get one ToDo by its key.
    pub async fn get_todo(&self, id: &str, date: &str) -> Result<ToDo> {
        let response = self
            .client
            .get(self.url("/api/todos/item"))
            .query(&KeyQuery { id, date })
            .send()
            .await?;
        let payload: ItemPayload = self.handle_response(response).await?;
        Ok(payload.item)
    }

    /// Save a ToDo under the given key, creating it if absent.
    pub async fn update_todo(&self, id: &str, date: &str, name: &str) -> Result<ToDo> {
        let response = self
            .client
            .put(self.url("/api/todos/item"))
            .query(&KeyQuery { id, date })
            .json(&NameBody { name })
            .send()
            .await?;
        expect_item(self.handle_response(response).await?)
    }

    /// Delete one ToDo by its key.
    pub async fn delete_todo(&self, id: &str, date: &str) -> Result<()> {
        let response = self
            .client
            .delete(self.url("/api/todos/item"))
            .query(&KeyQuery { id, date })
            .send()
            .await?;
        let _: MessagePayload = self.handle_response(response).await?;
        Ok(())
    }
}
