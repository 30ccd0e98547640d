//! Publisher CRUD handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::dto::request::{CreatePublisherRequest, UpdatePublisherRequest};
use crate::dto::validate_dto;
use crate::error::ApiError;
use crate::extractors::path::parse_positive_id;
use crate::extractors::{ActorContext, PaginationParams};
use crate::state::AppState;

/// GET /api/publishers
pub async fn list_publishers(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Value>, ApiError> {
    let page = state
        .publisher_service
        .list(params.into_page_request(&state.config.catalog))
        .await;
    Ok(Json(json!({ "data": page.items, "meta": page.meta })))
}

/// GET /api/publishers/{id}
pub async fn get_publisher(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_positive_id(&id, "id")?;
    let publisher = state.publisher_service.get(id).await?;
    Ok(Json(json!({ "data": publisher })))
}

/// POST /api/publishers
pub async fn create_publisher(
    State(state): State<AppState>,
    ActorContext(ctx): ActorContext,
    Json(req): Json<CreatePublisherRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    validate_dto(&req)?;
    let publisher = state
        .publisher_service
        .create(&ctx, req.name, req.city, req.founded_year)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "data": publisher, "message": "Publisher created" })),
    ))
}

/// PUT /api/publishers/{id}
pub async fn update_publisher(
    State(state): State<AppState>,
    ActorContext(ctx): ActorContext,
    Path(id): Path<String>,
    Json(req): Json<UpdatePublisherRequest>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_positive_id(&id, "id")?;
    validate_dto(&req)?;
    let publisher = state
        .publisher_service
        .update(&ctx, id, req.name, req.city, req.founded_year)
        .await?;
    Ok(Json(
        json!({ "data": publisher, "message": "Publisher updated" }),
    ))
}

/// DELETE /api/publishers/{id}
pub async fn delete_publisher(
    State(state): State<AppState>,
    ActorContext(ctx): ActorContext,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_positive_id(&id, "id")?;
    state.publisher_service.delete(&ctx, id).await?;
    Ok(Json(
        json!({ "data": null, "message": "Publisher deleted" }),
    ))
}
