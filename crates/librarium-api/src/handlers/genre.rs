//! Genre CRUD handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::dto::request::{CreateGenreRequest, UpdateGenreRequest};
use crate::dto::validate_dto;
use crate::error::ApiError;
use crate::extractors::path::parse_positive_id;
use crate::extractors::{ActorContext, PaginationParams};
use crate::state::AppState;

/// GET /api/genres
pub async fn list_genres(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Value>, ApiError> {
    let page = state
        .genre_service
        .list(params.into_page_request(&state.config.catalog))
        .await;
    Ok(Json(json!({ "data": page.items, "meta": page.meta })))
}

/// GET /api/genres/{id}
pub async fn get_genre(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_positive_id(&id, "id")?;
    let genre = state.genre_service.get(id).await?;
    Ok(Json(json!({ "data": genre })))
}

/// POST /api/genres
pub async fn create_genre(
    State(state): State<AppState>,
    ActorContext(ctx): ActorContext,
    Json(req): Json<CreateGenreRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    validate_dto(&req)?;
    let genre = state
        .genre_service
        .create(&ctx, req.name, req.description)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "data": genre, "message": "Genre created" })),
    ))
}

/// PUT /api/genres/{id}
pub async fn update_genre(
    State(state): State<AppState>,
    ActorContext(ctx): ActorContext,
    Path(id): Path<String>,
    Json(req): Json<UpdateGenreRequest>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_positive_id(&id, "id")?;
    validate_dto(&req)?;
    let genre = state
        .genre_service
        .update(&ctx, id, req.name, req.description)
        .await?;
    Ok(Json(json!({ "data": genre, "message": "Genre updated" })))
}

/// DELETE /api/genres/{id}
pub async fn delete_genre(
    State(state): State<AppState>,
    ActorContext(ctx): ActorContext,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_positive_id(&id, "id")?;
    state.genre_service.delete(&ctx, id).await?;
    Ok(Json(json!({ "data": null, "message": "Genre deleted" })))
}
