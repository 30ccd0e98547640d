//! Integration tests for the book, author, genre, and publisher catalog.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_and_fetch_book() {
    let app = helpers::TestApp::new();
    let (author_id, genre_id, publisher_id) = app.seed_catalog_refs().await;

    let created = app
        .request(
            "POST",
            "/api/books",
            Some(json!({
                "title": "Dune",
                "isbn": "9780441172719",
                "author_id": author_id,
                "genre_id": genre_id,
                "publisher_id": publisher_id,
                "published_year": 1965,
            })),
            None,
        )
        .await;

    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["message"], "Book created");
    assert_eq!(created.body["data"]["title"], "Dune");

    let fetched = app
        .request("GET", &format!("/api/books/{}", created.id()), None, None)
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["data"]["isbn"], "9780441172719");
    assert_eq!(fetched.body["message"], "Success");
}

#[tokio::test]
async fn test_list_books_pagination() {
    let app = helpers::TestApp::new();
    let (author_id, genre_id, publisher_id) = app.seed_catalog_refs().await;
    for n in 0..15 {
        app.create_book(
            &format!("Book {n}"),
            &format!("978000000{n:04}"),
            author_id,
            genre_id,
            publisher_id,
            0,
        )
        .await;
    }

    let response = app
        .request("GET", "/api/books?page=2&limit=10", None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"].as_array().map(Vec::len), Some(5));
    assert_eq!(response.body["meta"]["total"], 15);
    assert_eq!(response.body["meta"]["totalPages"], 2);
    assert_eq!(response.body["meta"]["hasNext"], false);
    assert_eq!(response.body["meta"]["hasPrev"], true);
}

#[tokio::test]
async fn test_update_book() {
    let app = helpers::TestApp::new();
    let (author_id, genre_id, publisher_id) = app.seed_catalog_refs().await;
    let id = app
        .create_book("Draft", "9780441172719", author_id, genre_id, publisher_id, 0)
        .await;

    let response = app
        .request(
            "PUT",
            &format!("/api/books/{id}"),
            Some(json!({ "title": "Dune Messiah" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["title"], "Dune Messiah");
    assert_eq!(response.body["message"], "Book updated");
}

#[tokio::test]
async fn test_delete_book_then_fetch_fails() {
    let app = helpers::TestApp::new();
    let (author_id, genre_id, publisher_id) = app.seed_catalog_refs().await;
    let id = app
        .create_book("Gone", "9780441172719", author_id, genre_id, publisher_id, 0)
        .await;

    let deleted = app
        .request("DELETE", &format!("/api/books/{id}"), None, None)
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["message"], "Book deleted");
    // Null data collapses to the empty-array sentinel.
    assert_eq!(deleted.body["data"], json!([]));

    let fetched = app
        .request("GET", &format!("/api/books/{id}"), None, None)
        .await;
    assert_eq!(fetched.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_book_unknown_author_fails() {
    let app = helpers::TestApp::new();
    let (_, genre_id, publisher_id) = app.seed_catalog_refs().await;

    let response = app
        .request(
            "POST",
            "/api/books",
            Some(json!({
                "title": "Orphaned",
                "isbn": "9780441172719",
                "author_id": 9999,
                "genre_id": genre_id,
                "publisher_id": publisher_id,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Author 9999 not found");
}

#[tokio::test]
async fn test_search_books_by_title() {
    let app = helpers::TestApp::new();
    let (author_id, genre_id, publisher_id) = app.seed_catalog_refs().await;
    app.create_book("Dune", "9780441172719", author_id, genre_id, publisher_id, 0)
        .await;
    app.create_book(
        "Children of Dune",
        "9780441104024",
        author_id,
        genre_id,
        publisher_id,
        0,
    )
    .await;
    app.create_book(
        "Foundation",
        "9780553293357",
        author_id,
        genre_id,
        publisher_id,
        0,
    )
    .await;

    let response = app
        .request(
            "POST",
            "/api/books/search",
            Some(json!({ "title": "dune" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"].as_array().map(Vec::len), Some(2));
    assert_eq!(response.body["meta"]["total"], 2);
}

#[tokio::test]
async fn test_filter_authors_by_country() {
    let app = helpers::TestApp::new();
    app.request(
        "POST",
        "/api/authors",
        Some(json!({ "name": "Frank Herbert", "country": "US" })),
        None,
    )
    .await;
    app.request(
        "POST",
        "/api/authors",
        Some(json!({ "name": "Stanislaw Lem", "country": "PL" })),
        None,
    )
    .await;

    let response = app
        .request(
            "POST",
            "/api/authors/filter",
            Some(json!({ "country": "PL" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"].as_array().map(Vec::len), Some(1));
    assert_eq!(response.body["data"][0]["name"], "Stanislaw Lem");
}

#[tokio::test]
async fn test_duplicate_genre_name_conflicts() {
    let app = helpers::TestApp::new();
    let body = json!({ "name": "Horror" });
    app.request("POST", "/api/genres", Some(body.clone()), None)
        .await;

    let response = app.request("POST", "/api/genres", Some(body), None).await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["message"], "Genre Horror already exists");
}

#[tokio::test]
async fn test_delete_author_blocked_while_referenced() {
    let app = helpers::TestApp::new();
    let (author_id, genre_id, publisher_id) = app.seed_catalog_refs().await;
    app.create_book("Dune", "9780441172719", author_id, genre_id, publisher_id, 0)
        .await;

    let response = app
        .request("DELETE", &format!("/api/authors/{author_id}"), None, None)
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_publisher_crud_roundtrip() {
    let app = helpers::TestApp::new();

    let created = app
        .request(
            "POST",
            "/api/publishers",
            Some(json!({ "name": "Tor Books", "city": "New York" })),
            None,
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let id = created.id();

    let updated = app
        .request(
            "PUT",
            &format!("/api/publishers/{id}"),
            Some(json!({ "founded_year": 1980 })),
            None,
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["data"]["founded_year"], 1980);

    let deleted = app
        .request("DELETE", &format!("/api/publishers/{id}"), None, None)
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
    assert!(response.body["data"]["version"].is_string());
}
