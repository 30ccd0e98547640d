//! Route definitions for the Librarium HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::handlers;
use crate::state::AppState;

/// Build the route tree. Middleware layers are applied in [`crate::app`].
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(book_routes())
        .merge(author_routes())
        .merge(genre_routes())
        .merge(publisher_routes())
        .merge(inventory_routes())
        .merge(user_routes())
        .merge(role_routes())
        .merge(audit_routes())
        .merge(health_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Book CRUD, search, and export
fn book_routes() -> Router<AppState> {
    Router::new()
        .route("/books", get(handlers::book::list_books))
        .route("/books", post(handlers::book::create_book))
        .route("/books/search", post(handlers::book::search_books))
        .route("/books/export", get(handlers::book::export_books))
        .route("/books/{id}", get(handlers::book::get_book))
        .route("/books/{id}", put(handlers::book::update_book))
        .route("/books/{id}", delete(handlers::book::delete_book))
}

/// Author CRUD and filter
fn author_routes() -> Router<AppState> {
    Router::new()
        .route("/authors", get(handlers::author::list_authors))
        .route("/authors", post(handlers::author::create_author))
        .route("/authors/filter", post(handlers::author::filter_authors))
        .route("/authors/{id}", get(handlers::author::get_author))
        .route("/authors/{id}", put(handlers::author::update_author))
        .route("/authors/{id}", delete(handlers::author::delete_author))
}

/// Genre CRUD
fn genre_routes() -> Router<AppState> {
    Router::new()
        .route("/genres", get(handlers::genre::list_genres))
        .route("/genres", post(handlers::genre::create_genre))
        .route("/genres/{id}", get(handlers::genre::get_genre))
        .route("/genres/{id}", put(handlers::genre::update_genre))
        .route("/genres/{id}", delete(handlers::genre::delete_genre))
}

/// Publisher CRUD
fn publisher_routes() -> Router<AppState> {
    Router::new()
        .route("/publishers", get(handlers::publisher::list_publishers))
        .route("/publishers", post(handlers::publisher::create_publisher))
        .route("/publishers/{id}", get(handlers::publisher::get_publisher))
        .route(
            "/publishers/{id}",
            put(handlers::publisher::update_publisher),
        )
        .route(
            "/publishers/{id}",
            delete(handlers::publisher::delete_publisher),
        )
}

/// Inventory movements and export
fn inventory_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/inventory/movements",
            get(handlers::inventory::list_movements),
        )
        .route(
            "/inventory/movements",
            post(handlers::inventory::record_movement),
        )
        .route(
            "/inventory/movements/export",
            get(handlers::inventory::export_movements),
        )
}

/// User CRUD and role assignment
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(handlers::user::list_users))
        .route("/users", post(handlers::user::create_user))
        .route("/users/{id}", get(handlers::user::get_user))
        .route("/users/{id}", put(handlers::user::update_user))
        .route("/users/{id}", delete(handlers::user::delete_user))
        .route("/users/{id}/role", put(handlers::user::assign_role))
}

/// Role CRUD
fn role_routes() -> Router<AppState> {
    Router::new()
        .route("/roles", get(handlers::role::list_roles))
        .route("/roles", post(handlers::role::create_role))
        .route("/roles/{id}", get(handlers::role::get_role))
        .route("/roles/{id}", put(handlers::role::update_role))
        .route("/roles/{id}", delete(handlers::role::delete_role))
}

/// Audit search and export
fn audit_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/audit/advanced-filter",
            post(handlers::audit::advanced_filter),
        )
        .route("/audit/export", get(handlers::audit::export_audit))
}

/// Health check endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
