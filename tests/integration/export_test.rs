//! Integration tests for the CSV export endpoints.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_export_books_csv() {
    let app = helpers::TestApp::new();
    let (author_id, genre_id, publisher_id) = app.seed_catalog_refs().await;
    app.create_book("Dune", "9780441172719", author_id, genre_id, publisher_id, 5)
        .await;

    let response = app.request("GET", "/api/books/export", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.content_type, "text/csv");
    assert_eq!(
        response.disposition,
        "attachment; filename=\"books.csv\""
    );

    let mut lines = response.text.lines();
    assert_eq!(
        lines.next(),
        Some("id,title,isbn,author_id,genre_id,publisher_id,published_year,stock")
    );
    // published_year was never set, so its column is empty.
    assert_eq!(
        lines.next(),
        Some(format!("1,Dune,9780441172719,{author_id},{genre_id},{publisher_id},,5").as_str())
    );
}

#[tokio::test]
async fn test_export_empty_catalog_is_empty_body() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/books/export", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text, "");
}

#[tokio::test]
async fn test_export_quotes_embedded_commas() {
    let app = helpers::TestApp::new();
    let (author_id, genre_id, publisher_id) = app.seed_catalog_refs().await;
    app.create_book(
        "War, and Peace",
        "9780199232765",
        author_id,
        genre_id,
        publisher_id,
        0,
    )
    .await;

    let response = app.request("GET", "/api/books/export", None, None).await;

    assert!(response.text.contains("\"War, and Peace\""));
}

#[tokio::test]
async fn test_export_movements_csv() {
    let app = helpers::TestApp::new();
    let (author_id, genre_id, publisher_id) = app.seed_catalog_refs().await;
    let book_id = app
        .create_book("Dune", "9780441172719", author_id, genre_id, publisher_id, 0)
        .await;
    app.request(
        "POST",
        "/api/inventory/movements",
        Some(json!({ "book_id": book_id, "kind": "inbound", "quantity": 3 })),
        None,
    )
    .await;

    let response = app
        .request("GET", "/api/inventory/movements/export", None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.content_type, "text/csv");
    assert!(
        response
            .text
            .starts_with("id,book_id,kind,quantity,note,recorded_by,created_at")
    );
    assert!(response.text.contains("inbound"));
}

#[tokio::test]
async fn test_export_audit_csv() {
    let app = helpers::TestApp::new();
    app.request(
        "POST",
        "/api/genres",
        Some(json!({ "name": "Horror" })),
        Some(7),
    )
    .await;

    let response = app.request("GET", "/api/audit/export", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.disposition,
        "attachment; filename=\"audit-log.csv\""
    );
    assert!(
        response
            .text
            .starts_with("id,actor_id,action,entity_type,entity_id,detail,created_at")
    );
    assert!(response.text.contains("genre.created"));
}
