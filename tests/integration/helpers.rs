//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use librarium_api::{AppState, build_app};
use librarium_core::config::AppConfig;

/// Test application context
pub struct TestApp {
    /// The Axum app for making test requests
    pub app: Router,
}

impl TestApp {
    /// Create a new test application over fresh in-memory stores
    pub fn new() -> Self {
        Self {
            app: build_app(AppState::new(AppConfig::default())),
        }
    }

    /// Send one request through the full middleware stack
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        actor: Option<i64>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(actor) = actor {
            req = req.header("x-actor-id", actor.to_string());
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .app
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let disposition = response
            .headers()
            .get("content-disposition")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body_bytes = axum::body::to_bytes(response.into_body(), 4 * 1024 * 1024)
            .await
            .expect("Failed to read body");

        let text = String::from_utf8_lossy(&body_bytes).to_string();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            body,
            text,
            content_type,
            disposition,
        }
    }

    /// Create one author, genre, and publisher; returns their ids
    pub async fn seed_catalog_refs(&self) -> (i64, i64, i64) {
        let author = self
            .request(
                "POST",
                "/api/authors",
                Some(serde_json::json!({ "name": "Frank Herbert" })),
                None,
            )
            .await;
        let genre = self
            .request(
                "POST",
                "/api/genres",
                Some(serde_json::json!({ "name": "Science Fiction" })),
                None,
            )
            .await;
        let publisher = self
            .request(
                "POST",
                "/api/publishers",
                Some(serde_json::json!({ "name": "Chilton Books" })),
                None,
            )
            .await;
        (author.id(), genre.id(), publisher.id())
    }

    /// Create one book against existing references; returns its id
    pub async fn create_book(
        &self,
        title: &str,
        isbn: &str,
        author_id: i64,
        genre_id: i64,
        publisher_id: i64,
        initial_stock: i64,
    ) -> i64 {
        let response = self
            .request(
                "POST",
                "/api/books",
                Some(serde_json::json!({
                    "title": title,
                    "isbn": isbn,
                    "author_id": author_id,
                    "genre_id": genre_id,
                    "publisher_id": publisher_id,
                    "initial_stock": initial_stock,
                })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.text);
        response.id()
    }

    /// Create one role; returns its id
    pub async fn create_role(&self, name: &str) -> i64 {
        let response = self
            .request(
                "POST",
                "/api/roles",
                Some(serde_json::json!({ "name": name })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.text);
        response.id()
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body (Null when the body is not JSON)
    pub body: Value,
    /// Raw body text
    pub text: String,
    /// Content-Type header
    pub content_type: String,
    /// Content-Disposition header
    pub disposition: String,
}

impl TestResponse {
    /// Id of the entity under `data.id`
    pub fn id(&self) -> i64 {
        self.body["data"]["id"]
            .as_i64()
            .unwrap_or_else(|| panic!("no data.id in {}", self.text))
    }
}
