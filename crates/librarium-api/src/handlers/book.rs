//! Book CRUD, search, and export handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde_json::{Value, json};

use librarium_core::export::to_csv;
use librarium_service::book::{BookSearch, CreateBook, UpdateBook};

use crate::dto::request::{BookSearchRequest, CreateBookRequest, UpdateBookRequest};
use crate::dto::validate_dto;
use crate::error::ApiError;
use crate::export::CsvFile;
use crate::extractors::path::parse_positive_id;
use crate::extractors::{ActorContext, PaginationParams};
use crate::state::AppState;

/// GET /api/books
pub async fn list_books(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Value>, ApiError> {
    let page = state
        .book_service
        .list(params.into_page_request(&state.config.catalog))
        .await;
    Ok(Json(json!({ "data": page.items, "meta": page.meta })))
}

/// GET /api/books/{id}
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_positive_id(&id, "id")?;
    let book = state.book_service.get(id).await?;
    Ok(Json(json!({ "data": book })))
}

/// POST /api/books
pub async fn create_book(
    State(state): State<AppState>,
    ActorContext(ctx): ActorContext,
    Json(req): Json<CreateBookRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    validate_dto(&req)?;
    let book = state
        .book_service
        .create(
            &ctx,
            CreateBook {
                title: req.title,
                isbn: req.isbn,
                description: req.description,
                author_id: req.author_id,
                genre_id: req.genre_id,
                publisher_id: req.publisher_id,
                published_year: req.published_year,
                initial_stock: req.initial_stock.unwrap_or(0),
            },
        )
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "data": book, "message": "Book created" })),
    ))
}

/// PUT /api/books/{id}
pub async fn update_book(
    State(state): State<AppState>,
    ActorContext(ctx): ActorContext,
    Path(id): Path<String>,
    Json(req): Json<UpdateBookRequest>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_positive_id(&id, "id")?;
    validate_dto(&req)?;
    let book = state
        .book_service
        .update(
            &ctx,
            id,
            UpdateBook {
                title: req.title,
                isbn: req.isbn,
                description: req.description,
                published_year: req.published_year,
            },
        )
        .await?;
    Ok(Json(json!({ "data": book, "message": "Book updated" })))
}

/// DELETE /api/books/{id}
pub async fn delete_book(
    State(state): State<AppState>,
    ActorContext(ctx): ActorContext,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_positive_id(&id, "id")?;
    state.book_service.delete(&ctx, id).await?;
    Ok(Json(json!({ "data": null, "message": "Book deleted" })))
}

/// POST /api/books/search
pub async fn search_books(
    State(state): State<AppState>,
    Json(req): Json<BookSearchRequest>,
) -> Result<Json<Value>, ApiError> {
    let page = PaginationParams {
        page: req.page,
        limit: req.limit,
    }
    .into_page_request(&state.config.catalog);
    let result = state
        .book_service
        .search(
            BookSearch {
                title: req.title,
                author_id: req.author_id,
                genre_id: req.genre_id,
                publisher_id: req.publisher_id,
                published_after: req.published_after,
                published_before: req.published_before,
            },
            page,
        )
        .await;
    Ok(Json(json!({ "data": result.items, "meta": result.meta })))
}

/// GET /api/books/export
pub async fn export_books(State(state): State<AppState>) -> Result<CsvFile, ApiError> {
    let rows = state
        .book_service
        .export_rows(state.config.catalog.export_row_limit)
        .await;
    let content = to_csv(
        &rows,
        &[
            "id",
            "title",
            "isbn",
            "author_id",
            "genre_id",
            "publisher_id",
            "published_year",
            "stock",
        ],
    )?;
    Ok(CsvFile::new("books", content))
}
