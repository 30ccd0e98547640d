//! User management handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde_json::{Value, json};

use librarium_service::user::{CreateUser, UpdateUser};

use crate::dto::request::{AssignRoleRequest, CreateUserRequest, UpdateUserRequest};
use crate::dto::validate_dto;
use crate::error::ApiError;
use crate::extractors::path::parse_positive_id;
use crate::extractors::{ActorContext, PaginationParams};
use crate::state::AppState;

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Value>, ApiError> {
    let page = state
        .user_service
        .list(params.into_page_request(&state.config.catalog))
        .await;
    Ok(Json(json!({ "data": page.items, "meta": page.meta })))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_positive_id(&id, "id")?;
    let user = state.user_service.get(id).await?;
    Ok(Json(json!({ "data": user })))
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    ActorContext(ctx): ActorContext,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    validate_dto(&req)?;
    let user = state
        .user_service
        .create(
            &ctx,
            CreateUser {
                username: req.username,
                email: req.email,
                role_id: req.role_id,
            },
        )
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "data": user, "message": "User created" })),
    ))
}

/// PUT /api/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    ActorContext(ctx): ActorContext,
    Path(id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_positive_id(&id, "id")?;
    validate_dto(&req)?;
    let user = state
        .user_service
        .update(
            &ctx,
            id,
            UpdateUser {
                email: req.email,
                status: req.status,
            },
        )
        .await?;
    Ok(Json(json!({ "data": user, "message": "User updated" })))
}

/// PUT /api/users/{id}/role
pub async fn assign_role(
    State(state): State<AppState>,
    ActorContext(ctx): ActorContext,
    Path(id): Path<String>,
    Json(req): Json<AssignRoleRequest>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_positive_id(&id, "id")?;
    let user = state.user_service.assign_role(&ctx, id, req.role_id).await?;
    Ok(Json(json!({ "data": user, "message": "Role assigned" })))
}

/// DELETE /api/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    ActorContext(ctx): ActorContext,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_positive_id(&id, "id")?;
    state.user_service.delete(&ctx, id).await?;
    Ok(Json(json!({ "data": null, "message": "User deleted" })))
}
