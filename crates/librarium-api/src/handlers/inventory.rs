//! Inventory movement handlers.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::{Value, json};

use librarium_core::export::to_csv;
use librarium_service::inventory::NewMovement;

use crate::dto::request::RecordMovementRequest;
use crate::error::ApiError;
use crate::export::CsvFile;
use crate::extractors::{ActorContext, PaginationParams};
use crate::state::AppState;

/// Query parameters for listing movements.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovementListParams {
    /// Restrict to one book.
    pub book_id: Option<i64>,
    /// Page number.
    pub page: Option<u64>,
    /// Items per page.
    pub limit: Option<u64>,
}

/// GET /api/inventory/movements
pub async fn list_movements(
    State(state): State<AppState>,
    Query(params): Query<MovementListParams>,
) -> Result<Json<Value>, ApiError> {
    let page = PaginationParams {
        page: params.page,
        limit: params.limit,
    }
    .into_page_request(&state.config.catalog);
    let result = state.inventory_service.list(params.book_id, page).await;
    Ok(Json(json!({ "data": result.items, "meta": result.meta })))
}

/// POST /api/inventory/movements
pub async fn record_movement(
    State(state): State<AppState>,
    ActorContext(ctx): ActorContext,
    Json(req): Json<RecordMovementRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let movement = state
        .inventory_service
        .record(
            &ctx,
            NewMovement {
                book_id: req.book_id,
                kind: req.kind,
                quantity: req.quantity,
                note: req.note,
            },
        )
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "data": movement, "message": "Movement recorded" })),
    ))
}

/// GET /api/inventory/movements/export
pub async fn export_movements(State(state): State<AppState>) -> Result<CsvFile, ApiError> {
    let rows = state
        .inventory_service
        .export_rows(state.config.catalog.export_row_limit)
        .await;
    let content = to_csv(
        &rows,
        &[
            "id",
            "book_id",
            "kind",
            "quantity",
            "note",
            "recorded_by",
            "created_at",
        ],
    )?;
    Ok(CsvFile::new("inventory-movements", content))
}
