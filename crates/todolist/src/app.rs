use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{
        health::livez,
        todos::{
            create_todo, delete_todo, get_todo, list_todos, preflight_collection, preflight_item,
            update_todo,
        },
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
///
/// CORS headers are part of every response envelope, so no CORS layer is
/// installed here. The request timeout is applied inside the ToDo handlers
/// for the same reason: a timed-out request still gets an envelope.
pub fn create_app(state: AppState) -> Router {
    let api_routes = Router::new()
        .route(
            "/todos",
            get(list_todos)
                .post(create_todo)
                .options(preflight_collection),
        )
        .route(
            "/todos/item",
            get(get_todo)
                .put(update_todo)
                .delete(delete_todo)
                .options(preflight_item),
        );

    Router::new()
        .route("/livez", get(livez))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use super::*;
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
        response::Response,
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use todolist_core::storage::{Result as RepositoryResult, ToDoRepository};
    use todolist_core::todo::{validate_date, validate_uuid, ToDo, ToDoPrimaryKey};

    use crate::config::{Config, LogFormat};
    use crate::storage::InMemoryRepository;

    const ID: &str = "550e8400-e29b-41d4-a716-446655440000";
    const DATE: &str = "2024-01-15T10:30:00.000Z";

    fn test_state() -> AppState {
        let config = Config {
            table_name: "todolist-test".to_string(),
            request_timeout_seconds: 5,
            log_format: LogFormat::Pretty,
        };
        AppState::with_repository(Arc::new(InMemoryRepository::new()), &config)
    }

    fn request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
        let builder = Request::builder().method(method).uri(uri);
        match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn json_body(response: Response) -> Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    fn item_uri() -> String {
        format!("/api/todos/item?id={ID}&date={DATE}")
    }

    #[tokio::test]
    async fn test_livez() {
        let app = create_app(test_state());

        let response = app
            .oneshot(request(Method::GET, "/livez", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_todos_empty() {
        let app = create_app(test_state());

        let response = app
            .oneshot(request(Method::GET, "/api/todos", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .unwrap(),
            "*"
        );
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-methods")
                .unwrap(),
            "OPTIONS,GET,POST"
        );
        assert_eq!(json_body(response).await, json!({ "items": [] }));
    }

    #[tokio::test]
    async fn test_create_todo() {
        let app = create_app(test_state());

        let response = app
            .oneshot(request(
                Method::POST,
                "/api/todos",
                Some(json!({ "name": "Buy milk" })),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["message"], "ToDo created");
        assert_eq!(body["item"]["name"], "Buy milk");
        assert!(validate_uuid(Some(&body["item"]["id"])).is_ok());
        assert!(validate_date(Some(&body["item"]["date"])).is_ok());
    }

    #[tokio::test]
    async fn test_create_todo_empty_name() {
        let app = create_app(test_state());

        let response = app
            .oneshot(request(
                Method::POST,
                "/api/todos",
                Some(json!({ "name": "" })),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .unwrap(),
            "*"
        );
        assert_eq!(
            json_body(response).await,
            json!({ "error": "name cannot be empty" })
        );
    }

    #[tokio::test]
    async fn test_get_missing_todo() {
        let app = create_app(test_state());

        let response = app
            .oneshot(request(Method::GET, &item_uri(), None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            json_body(response).await,
            json!({ "error": "There are no matching ToDo" })
        );
    }

    #[tokio::test]
    async fn test_get_invalid_id() {
        let app = create_app(test_state());

        let response = app
            .oneshot(request(
                Method::GET,
                &format!("/api/todos/item?id=not-a-uuid&date={DATE}"),
                None,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({ "error": "id must be a valid uuid" })
        );
    }

    #[tokio::test]
    async fn test_update_get_delete_flow() {
        let state = test_state();

        let response = create_app(state.clone())
            .oneshot(request(
                Method::PUT,
                &item_uri(),
                Some(json!({ "name": "Buy milk" })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({
                "message": "ToDo saved",
                "item": { "id": ID, "date": DATE, "name": "Buy milk" }
            })
        );

        let response = create_app(state.clone())
            .oneshot(request(Method::GET, &item_uri(), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-methods")
                .unwrap(),
            "OPTIONS,GET,PUT,DELETE"
        );
        assert_eq!(
            json_body(response).await,
            json!({ "item": { "id": ID, "date": DATE, "name": "Buy milk" } })
        );

        for _ in 0..2 {
            let response = create_app(state.clone())
                .oneshot(request(Method::DELETE, &item_uri(), None))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(
                json_body(response).await,
                json!({ "message": "ToDo deleted" })
            );
        }

        let response = create_app(state)
            .oneshot(request(Method::GET, &item_uri(), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_without_key() {
        let app = create_app(test_state());

        let response = app
            .oneshot(request(Method::DELETE, "/api/todos/item", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({ "error": "Empty request parameters" })
        );
    }

    #[tokio::test]
    async fn test_preflight() {
        let app = create_app(test_state());

        let response = app
            .oneshot(request(Method::OPTIONS, "/api/todos/item", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-headers")
                .unwrap(),
            "Content-Type"
        );
    }

    fn raw_request(method: Method, uri: &str, body: &'static [u8]) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_non_utf8_body_gets_envelope() {
        let cases = [
            (Method::POST, "/api/todos".to_string(), "OPTIONS,GET,POST"),
            (Method::PUT, item_uri(), "OPTIONS,GET,PUT,DELETE"),
        ];

        for (method, uri, allowed) in cases {
            let response = create_app(test_state())
                .oneshot(raw_request(method, &uri, &[b'{', 0xFF]))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(
                response.headers().get("content-type").unwrap(),
                "application/json"
            );
            assert_eq!(
                response
                    .headers()
                    .get("access-control-allow-origin")
                    .unwrap(),
                "*"
            );
            assert_eq!(
                response
                    .headers()
                    .get("access-control-allow-methods")
                    .unwrap(),
                allowed
            );
            assert_eq!(
                json_body(response).await,
                json!({ "error": "Invalid JSON body" })
            );
        }
    }

    /// Repository whose scans never finish in time.
    struct StalledRepository;

    #[async_trait::async_trait]
    impl ToDoRepository for StalledRepository {
        async fn get_todo(&self, _key: &ToDoPrimaryKey) -> RepositoryResult<ToDo> {
            unreachable!()
        }

        async fn put_todo(&self, _todo: &ToDo) -> RepositoryResult<()> {
            unreachable!()
        }

        async fn delete_todo(&self, _key: &ToDoPrimaryKey) -> RepositoryResult<()> {
            unreachable!()
        }

        async fn scan_todos(&self) -> RepositoryResult<Vec<ToDo>> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_timeout_gets_envelope() {
        let state = AppState {
            todo_repo: Arc::new(StalledRepository),
            request_timeout: Duration::from_millis(20),
        };

        let response = create_app(state)
            .oneshot(request(Method::GET, "/api/todos", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .unwrap(),
            "*"
        );
        assert_eq!(
            json_body(response).await,
            json!({ "error": "Request timed out" })
        );
    }
}
