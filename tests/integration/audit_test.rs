//! Integration tests for the audit trail.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_mutations_are_audited_with_actor() {
    let app = helpers::TestApp::new();
    app.request(
        "POST",
        "/api/genres",
        Some(json!({ "name": "Horror" })),
        Some(42),
    )
    .await;

    let response = app
        .request(
            "POST",
            "/api/audit/advanced-filter",
            Some(json!({ "actor_id": 42 })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["meta"]["total"], 1);
    assert_eq!(response.body["data"][0]["action"], "genre.created");
    assert_eq!(response.body["data"][0]["entity_type"], "genre");
    assert_eq!(response.body["data"][0]["actor_id"], 42);
}

#[tokio::test]
async fn test_anonymous_mutations_have_no_actor() {
    let app = helpers::TestApp::new();
    app.request(
        "POST",
        "/api/genres",
        Some(json!({ "name": "Horror" })),
        None,
    )
    .await;

    let response = app
        .request("POST", "/api/audit/advanced-filter", Some(json!({})), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"][0]["actor_id"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_filter_by_entity_type() {
    let app = helpers::TestApp::new();
    app.request(
        "POST",
        "/api/genres",
        Some(json!({ "name": "Horror" })),
        Some(1),
    )
    .await;
    app.request(
        "POST",
        "/api/roles",
        Some(json!({ "name": "librarian" })),
        Some(1),
    )
    .await;

    let response = app
        .request(
            "POST",
            "/api/audit/advanced-filter",
            Some(json!({ "entity_type": "role" })),
            None,
        )
        .await;

    assert_eq!(response.body["meta"]["total"], 1);
    assert_eq!(response.body["data"][0]["action"], "role.created");
}

#[tokio::test]
async fn test_filter_by_action() {
    let app = helpers::TestApp::new();
    let genre = app
        .request(
            "POST",
            "/api/genres",
            Some(json!({ "name": "Horror" })),
            None,
        )
        .await;
    app.request(
        "PUT",
        &format!("/api/genres/{}", genre.id()),
        Some(json!({ "description": "spooky" })),
        None,
    )
    .await;

    let response = app
        .request(
            "POST",
            "/api/audit/advanced-filter",
            Some(json!({ "action": "genre.updated" })),
            None,
        )
        .await;

    assert_eq!(response.body["meta"]["total"], 1);
}

#[tokio::test]
async fn test_filter_answers_200_not_201() {
    let app = helpers::TestApp::new();

    let response = app
        .request("POST", "/api/audit/advanced-filter", Some(json!({})), None)
        .await;

    // A POST, but semantically a query.
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"], json!([]));
    assert_eq!(response.body["message"], "Success");
}

#[tokio::test]
async fn test_inventory_movement_detail_is_recorded() {
    let app = helpers::TestApp::new();
    let (author_id, genre_id, publisher_id) = app.seed_catalog_refs().await;
    let book_id = app
        .create_book("Dune", "9780441172719", author_id, genre_id, publisher_id, 0)
        .await;
    app.request(
        "POST",
        "/api/inventory/movements",
        Some(json!({ "book_id": book_id, "kind": "inbound", "quantity": 5 })),
        Some(7),
    )
    .await;

    let response = app
        .request(
            "POST",
            "/api/audit/advanced-filter",
            Some(json!({ "action": "inventory.recorded" })),
            None,
        )
        .await;

    assert_eq!(response.body["meta"]["total"], 1);
    let entry = &response.body["data"][0];
    assert_eq!(entry["actor_id"], 7);
    assert_eq!(entry["detail"]["book_id"], book_id);
    assert_eq!(entry["detail"]["delta"], 5);
}
