//! Success payloads serialized into the envelope body.

use serde::{Deserialize, Serialize};

use crate::todo::ToDo;

/// Body of a list response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemsPayload {
    pub items: Vec<ToDo>,
}

/// Body of a read response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPayload {
    pub item: ToDo,
}

/// Body of a write response. `item` is absent for deletes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagePayload {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<ToDo>,
}

impl MessagePayload {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            item: None,
        }
    }

    pub fn with_item(mut self, item: ToDo) -> Self {
        self.item = Some(item);
        self
    }
}

/// Error body as the server sends it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub error: String,
}
