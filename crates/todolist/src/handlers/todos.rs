//! ToDo CRUD handlers.
//!
//! Each operation is a transport-neutral `*_impl` function over a repository
//! trait object and an [`ApiRequest`]; the axum handlers only extract the
//! request parts, bound the call by the request timeout and wrap the outcome
//! in the response envelope.

use axum::extract::State;
use serde_json::{Map, Value};

use todolist_core::api::{
    AllowedMethods, ApiError, ApiRequest, ItemPayload, ItemsPayload, MessagePayload,
};
use todolist_core::storage::{ToDoRepository, FIELD_NAME};
use todolist_core::todo::{ToDo, ToDoAttributes};

use super::envelope::{
    body_text, query_params, respond, with_timeout, Envelope, RawBody, RawQuery,
};
use crate::state::AppState;

// ============================================================================
// List
// ============================================================================

/// Returns every stored ToDo. An empty table is a success with no items.
pub async fn list_todos_impl(repo: &dyn ToDoRepository) -> Result<ItemsPayload, ApiError> {
    let items = repo.scan_todos().await?;
    tracing::debug!(count = items.len(), "Listed ToDos");
    Ok(ItemsPayload { items })
}

/// GET /api/todos
pub async fn list_todos(State(state): State<AppState>) -> Envelope {
    let result = with_timeout(
        state.request_timeout,
        list_todos_impl(state.todo_repo.as_ref()),
    )
    .await;
    respond("list", result, AllowedMethods::Collection)
}

// ============================================================================
// Create
// ============================================================================

/// Creates a ToDo from `{name}` under a freshly generated key.
pub async fn create_todo_impl(
    repo: &dyn ToDoRepository,
    request: &ApiRequest,
) -> Result<MessagePayload, ApiError> {
    let body = request.json_body()?;
    let todo = ToDo::from_name(body.get(FIELD_NAME))?;

    repo.put_todo(&todo).await?;

    tracing::info!(id = %todo.id(), date = %todo.date(), "Created ToDo");
    Ok(MessagePayload::new("ToDo created").with_item(todo))
}

/// POST /api/todos
pub async fn create_todo(State(state): State<AppState>, body: RawBody) -> Envelope {
    let result = with_timeout(state.request_timeout, async {
        let request = ApiRequest::new().with_body(body_text(body)?);
        create_todo_impl(state.todo_repo.as_ref(), &request).await
    })
    .await;
    respond("create", result, AllowedMethods::Collection)
}

// ============================================================================
// Read
// ============================================================================

/// Looks up one ToDo by its `(id, date)` key.
pub async fn get_todo_impl(
    repo: &dyn ToDoRepository,
    request: &ApiRequest,
) -> Result<ItemPayload, ApiError> {
    let key = request.primary_key()?;
    let item = repo.get_todo(&key).await?;
    Ok(ItemPayload { item })
}

/// GET /api/todos/item?id=..&date=..
pub async fn get_todo(State(state): State<AppState>, query: RawQuery) -> Envelope {
    let result = with_timeout(state.request_timeout, async {
        let request = ApiRequest {
            query: query_params(query)?,
            body: None,
        };
        get_todo_impl(state.todo_repo.as_ref(), &request).await
    })
    .await;
    respond("get", result, AllowedMethods::Item)
}

// ============================================================================
// Update
// ============================================================================

/// Writes `{name}` under the supplied key, creating the item if it is absent.
///
/// The key comes from the query string, or from `{id, date}` in the body.
pub async fn update_todo_impl(
    repo: &dyn ToDoRepository,
    request: &ApiRequest,
) -> Result<MessagePayload, ApiError> {
    let body = request.json_body()?;
    let key = request.primary_key()?;
    let attributes = ToDoAttributes::parse(body.get(FIELD_NAME))?;
    let todo = ToDo::from_parts(key, attributes);

    repo.put_todo(&todo).await?;

    tracing::info!(id = %todo.id(), date = %todo.date(), "Saved ToDo");
    Ok(MessagePayload::new("ToDo saved").with_item(todo))
}

/// PUT /api/todos/item
pub async fn update_todo(
    State(state): State<AppState>,
    query: RawQuery,
    body: RawBody,
) -> Envelope {
    let result = with_timeout(state.request_timeout, async {
        let request = ApiRequest {
            query: query_params(query)?,
            body: Some(body_text(body)?),
        };
        update_todo_impl(state.todo_repo.as_ref(), &request).await
    })
    .await;
    respond("update", result, AllowedMethods::Item)
}

// ============================================================================
// Delete
// ============================================================================

/// Removes one ToDo. Deleting a key that does not exist still succeeds.
pub async fn delete_todo_impl(
    repo: &dyn ToDoRepository,
    request: &ApiRequest,
) -> Result<MessagePayload, ApiError> {
    let key = request.primary_key()?;

    repo.delete_todo(&key).await?;

    tracing::info!(id = %key.id(), date = %key.date(), "Deleted ToDo");
    Ok(MessagePayload::new("ToDo deleted"))
}

/// DELETE /api/todos/item?id=..&date=..
pub async fn delete_todo(
    State(state): State<AppState>,
    query: RawQuery,
    body: RawBody,
) -> Envelope {
    let result = with_timeout(state.request_timeout, async {
        let request = ApiRequest {
            query: query_params(query)?,
            body: Some(body_text(body)?),
        };
        delete_todo_impl(state.todo_repo.as_ref(), &request).await
    })
    .await;
    respond("delete", result, AllowedMethods::Item)
}

// ============================================================================
// CORS preflight
// ============================================================================

fn preflight(methods: AllowedMethods) -> Envelope {
    respond("preflight", Ok::<_, ApiError>(Map::<String, Value>::new()), methods)
}

/// OPTIONS /api/todos
pub async fn preflight_collection() -> Envelope {
    preflight(AllowedMethods::Collection)
}

/// OPTIONS /api/todos/item
pub async fn preflight_item() -> Envelope {
    preflight(AllowedMethods::Item)
}
