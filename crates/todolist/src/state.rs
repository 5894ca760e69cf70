//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. Storage is a repository trait object so handlers never
//! see which backend is active.

use std::{sync::Arc, time::Duration};

use todolist_core::storage::ToDoRepository;

use crate::config::Config;

/// Shared application state.
///
/// Cloned for each request handler; holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    /// ToDo storage adapter.
    pub todo_repo: Arc<dyn ToDoRepository>,
    /// Router-wide request timeout.
    pub request_timeout: Duration,
}

impl AppState {
    /// Creates state around an explicit repository.
    pub fn with_repository(todo_repo: Arc<dyn ToDoRepository>, config: &Config) -> Self {
        Self {
            todo_repo,
            request_timeout: config.request_timeout(),
        }
    }

    /// Creates state with the in-memory backend.
    #[cfg(feature = "inmemory")]
    pub async fn from_config(config: &Config) -> Self {
        use crate::storage::InMemoryRepository;

        tracing::info!("Using in-memory storage");
        Self::with_repository(Arc::new(InMemoryRepository::new()), config)
    }

    /// Creates state with the DynamoDB backend.
    #[cfg(feature = "dynamodb")]
    pub async fn from_config(config: &Config) -> Self {
        use crate::storage::DynamoDbRepository;

        let repo = DynamoDbRepository::connect(config.table_name.clone()).await;
        tracing::info!(table = %repo.table_name(), "Using DynamoDB storage");
        Self::with_repository(Arc::new(repo), config)
    }
}
