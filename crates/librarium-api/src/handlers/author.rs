//! Author CRUD and filter handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde_json::{Value, json};

use librarium_service::author::AuthorFilter;

use crate::dto::request::{AuthorFilterRequest, CreateAuthorRequest, UpdateAuthorRequest};
use crate::dto::validate_dto;
use crate::error::ApiError;
use crate::extractors::path::parse_positive_id;
use crate::extractors::{ActorContext, PaginationParams};
use crate::state::AppState;

/// GET /api/authors
pub async fn list_authors(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Value>, ApiError> {
    let page = state
        .author_service
        .list(params.into_page_request(&state.config.catalog))
        .await;
    Ok(Json(json!({ "data": page.items, "meta": page.meta })))
}

/// GET /api/authors/{id}
pub async fn get_author(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_positive_id(&id, "id")?;
    let author = state.author_service.get(id).await?;
    Ok(Json(json!({ "data": author })))
}

/// POST /api/authors
pub async fn create_author(
    State(state): State<AppState>,
    ActorContext(ctx): ActorContext,
    Json(req): Json<CreateAuthorRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    validate_dto(&req)?;
    let author = state
        .author_service
        .create(&ctx, req.name, req.country, req.birth_year)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "data": author, "message": "Author created" })),
    ))
}

/// PUT /api/authors/{id}
pub async fn update_author(
    State(state): State<AppState>,
    ActorContext(ctx): ActorContext,
    Path(id): Path<String>,
    Json(req): Json<UpdateAuthorRequest>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_positive_id(&id, "id")?;
    validate_dto(&req)?;
    let author = state
        .author_service
        .update(&ctx, id, req.name, req.country, req.birth_year)
        .await?;
    Ok(Json(json!({ "data": author, "message": "Author updated" })))
}

/// DELETE /api/authors/{id}
pub async fn delete_author(
    State(state): State<AppState>,
    ActorContext(ctx): ActorContext,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_positive_id(&id, "id")?;
    state.author_service.delete(&ctx, id).await?;
    Ok(Json(json!({ "data": null, "message": "Author deleted" })))
}

/// POST /api/authors/filter
pub async fn filter_authors(
    State(state): State<AppState>,
    Json(req): Json<AuthorFilterRequest>,
) -> Result<Json<Value>, ApiError> {
    let page = PaginationParams {
        page: req.page,
        limit: req.limit,
    }
    .into_page_request(&state.config.catalog);
    let result = state
        .author_service
        .filter(
            AuthorFilter {
                name: req.name,
                country: req.country,
            },
            page,
        )
        .await;
    Ok(Json(json!({ "data": result.items, "meta": result.meta })))
}
