//! Role management handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::dto::request::{CreateRoleRequest, UpdateRoleRequest};
use crate::dto::validate_dto;
use crate::error::ApiError;
use crate::extractors::path::parse_positive_id;
use crate::extractors::{ActorContext, PaginationParams};
use crate::state::AppState;

/// GET /api/roles
pub async fn list_roles(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Value>, ApiError> {
    let page = state
        .role_service
        .list(params.into_page_request(&state.config.catalog))
        .await;
    Ok(Json(json!({ "data": page.items, "meta": page.meta })))
}

/// GET /api/roles/{id}
pub async fn get_role(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_positive_id(&id, "id")?;
    let role = state.role_service.get(id).await?;
    Ok(Json(json!({ "data": role })))
}

/// POST /api/roles
pub async fn create_role(
    State(state): State<AppState>,
    ActorContext(ctx): ActorContext,
    Json(req): Json<CreateRoleRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    validate_dto(&req)?;
    let role = state
        .role_service
        .create(&ctx, req.name, req.description)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "data": role, "message": "Role created" })),
    ))
}

/// PUT /api/roles/{id}
pub async fn update_role(
    State(state): State<AppState>,
    ActorContext(ctx): ActorContext,
    Path(id): Path<String>,
    Json(req): Json<UpdateRoleRequest>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_positive_id(&id, "id")?;
    validate_dto(&req)?;
    let role = state
        .role_service
        .update(&ctx, id, req.name, req.description)
        .await?;
    Ok(Json(json!({ "data": role, "message": "Role updated" })))
}

/// DELETE /api/roles/{id}
pub async fn delete_role(
    State(state): State<AppState>,
    ActorContext(ctx): ActorContext,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_positive_id(&id, "id")?;
    state.role_service.delete(&ctx, id).await?;
    Ok(Json(json!({ "data": null, "message": "Role deleted" })))
}
