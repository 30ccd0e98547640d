//! Integration tests for user and role management.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_and_fetch_user() {
    let app = helpers::TestApp::new();
    let role_id = app.create_role("librarian").await;

    let created = app
        .request(
            "POST",
            "/api/users",
            Some(json!({
                "username": "paul",
                "email": "paul@arrakis.example",
                "role_id": role_id,
            })),
            None,
        )
        .await;

    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["data"]["status"], "active");

    let fetched = app
        .request("GET", &format!("/api/users/{}", created.id()), None, None)
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["data"]["username"], "paul");
}

#[tokio::test]
async fn test_duplicate_username_conflicts() {
    let app = helpers::TestApp::new();
    let role_id = app.create_role("librarian").await;
    app.request(
        "POST",
        "/api/users",
        Some(json!({ "username": "paul", "email": "one@example.com", "role_id": role_id })),
        None,
    )
    .await;

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(json!({ "username": "paul", "email": "two@example.com", "role_id": role_id })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["message"], "Username paul is already taken");
}

#[tokio::test]
async fn test_duplicate_email_conflicts() {
    let app = helpers::TestApp::new();
    let role_id = app.create_role("librarian").await;
    app.request(
        "POST",
        "/api/users",
        Some(json!({ "username": "paul", "email": "same@example.com", "role_id": role_id })),
        None,
    )
    .await;

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(json!({ "username": "leto", "email": "same@example.com", "role_id": role_id })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(
        response.body["message"],
        "Email same@example.com is already in use"
    );
}

#[tokio::test]
async fn test_invalid_email_is_rejected() {
    let app = helpers::TestApp::new();
    let role_id = app.create_role("librarian").await;

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(json!({ "username": "paul", "email": "not-an-email", "role_id": role_id })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "email must be a valid address");
}

#[tokio::test]
async fn test_suspend_user() {
    let app = helpers::TestApp::new();
    let role_id = app.create_role("librarian").await;
    let created = app
        .request(
            "POST",
            "/api/users",
            Some(json!({ "username": "paul", "email": "paul@example.com", "role_id": role_id })),
            None,
        )
        .await;

    let response = app
        .request(
            "PUT",
            &format!("/api/users/{}", created.id()),
            Some(json!({ "status": "suspended" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "suspended");
}

#[tokio::test]
async fn test_assign_role() {
    let app = helpers::TestApp::new();
    let first = app.create_role("librarian").await;
    let second = app.create_role("admin").await;
    let created = app
        .request(
            "POST",
            "/api/users",
            Some(json!({ "username": "paul", "email": "paul@example.com", "role_id": first })),
            None,
        )
        .await;

    let response = app
        .request(
            "PUT",
            &format!("/api/users/{}/role", created.id()),
            Some(json!({ "role_id": second })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Role assigned");
    assert_eq!(response.body["data"]["role_id"], second);
}

#[tokio::test]
async fn test_assign_unknown_role_fails() {
    let app = helpers::TestApp::new();
    let role_id = app.create_role("librarian").await;
    let created = app
        .request(
            "POST",
            "/api/users",
            Some(json!({ "username": "paul", "email": "paul@example.com", "role_id": role_id })),
            None,
        )
        .await;

    let response = app
        .request(
            "PUT",
            &format!("/api/users/{}/role", created.id()),
            Some(json!({ "role_id": 999 })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Role 999 not found");
}

#[tokio::test]
async fn test_delete_role_blocked_while_assigned() {
    let app = helpers::TestApp::new();
    let role_id = app.create_role("librarian").await;
    app.request(
        "POST",
        "/api/users",
        Some(json!({ "username": "paul", "email": "paul@example.com", "role_id": role_id })),
        None,
    )
    .await;

    let response = app
        .request("DELETE", &format!("/api/roles/{role_id}"), None, None)
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(
        response.body["message"],
        format!("Role {role_id} is still assigned to users")
    );
}

#[tokio::test]
async fn test_delete_user_frees_role() {
    let app = helpers::TestApp::new();
    let role_id = app.create_role("librarian").await;
    let created = app
        .request(
            "POST",
            "/api/users",
            Some(json!({ "username": "paul", "email": "paul@example.com", "role_id": role_id })),
            None,
        )
        .await;

    let deleted = app
        .request("DELETE", &format!("/api/users/{}", created.id()), None, None)
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let response = app
        .request("DELETE", &format!("/api/roles/{role_id}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
}
