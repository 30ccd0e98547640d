//! Integration tests for the response envelope and error normalization.

mod helpers;

use axum::{Json, Router, http::StatusCode, middleware as axum_middleware, routing::post};
use http::StatusCode as HttpStatus;
use serde_json::json;

use librarium_api::middleware::{format, status_override};

#[tokio::test]
async fn test_success_envelope_has_data_and_message() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/books", None, None).await;

    assert_eq!(response.status, HttpStatus::OK);
    assert_eq!(response.body["data"], json!([]));
    assert_eq!(response.body["message"], "Success");
    assert!(response.body["meta"].is_object());
}

#[tokio::test]
async fn test_error_envelope_shape() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/books/999", None, None).await;

    assert_eq!(response.status, HttpStatus::NOT_FOUND);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["message"], "Book 999 not found");
    assert_eq!(response.body["statusCode"], 404);
    // The error envelope never carries a data key.
    assert!(response.body.get("data").is_none());
}

#[tokio::test]
async fn test_validation_violations_are_joined() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/books",
            Some(json!({
                "title": "",
                "isbn": "short",
                "author_id": 1,
                "genre_id": 1,
                "publisher_id": 1,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, HttpStatus::BAD_REQUEST);
    assert_eq!(
        response.body["message"],
        "isbn must be between 10 and 17 characters, title is required"
    );
    assert_eq!(response.body["statusCode"], 400);
}

#[tokio::test]
async fn test_non_numeric_id_is_rejected() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/books/abc", None, None).await;

    assert_eq!(response.status, HttpStatus::BAD_REQUEST);
    assert_eq!(response.body["message"], "id must be a positive integer");
}

#[tokio::test]
async fn test_unknown_route_is_normalized() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/nope", None, None).await;

    assert_eq!(response.status, HttpStatus::NOT_FOUND);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["statusCode"], 404);
    assert!(response.body["message"].is_string());
}

#[tokio::test]
async fn test_create_stays_201() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/genres",
            Some(json!({ "name": "Fantasy" })),
            None,
        )
        .await;

    assert_eq!(response.status, HttpStatus::CREATED);
    assert_eq!(response.body["message"], "Genre created");
}

#[tokio::test]
async fn test_query_post_status_forced_to_200() {
    // A handler that answers 201 on a search path; the override must
    // rewrite the status without touching the body.
    let router: Router = Router::new()
        .route(
            "/things/search",
            post(|| async { (StatusCode::CREATED, Json(json!({ "data": [1, 2] }))) }),
        )
        .layer(axum_middleware::from_fn(
            status_override::override_query_post_status,
        ))
        .layer(axum_middleware::from_fn(format::format_response));

    let app = helpers::TestApp { app: router };
    let response = app
        .request("POST", "/things/search", Some(json!({})), None)
        .await;

    assert_eq!(response.status, HttpStatus::OK);
    assert_eq!(response.body["data"], json!([1, 2]));
    assert_eq!(response.body["message"], "Success");
}

#[tokio::test]
async fn test_query_post_error_status_is_kept() {
    let router: Router = Router::new()
        .route(
            "/things/search",
            post(|| async { (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "message": "bad" }))) }),
        )
        .layer(axum_middleware::from_fn(
            status_override::override_query_post_status,
        ));

    let app = helpers::TestApp { app: router };
    let response = app
        .request("POST", "/things/search", Some(json!({})), None)
        .await;

    assert_eq!(response.status, HttpStatus::UNPROCESSABLE_ENTITY);
}
