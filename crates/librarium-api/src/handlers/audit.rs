//! Audit trail handlers.

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use librarium_core::export::to_csv;
use librarium_service::audit::AuditFilter;

use crate::dto::request::AuditFilterRequest;
use crate::error::ApiError;
use crate::export::CsvFile;
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// POST /api/audit/advanced-filter
pub async fn advanced_filter(
    State(state): State<AppState>,
    Json(req): Json<AuditFilterRequest>,
) -> Result<Json<Value>, ApiError> {
    let page = PaginationParams {
        page: req.page,
        limit: req.limit,
    }
    .into_page_request(&state.config.catalog);
    let result = state
        .audit_service
        .advanced_filter(
            AuditFilter {
                actor_id: req.actor_id,
                action: req.action,
                entity_type: req.entity_type,
                from: req.from,
                to: req.to,
            },
            page,
        )
        .await;
    Ok(Json(json!({ "data": result.items, "meta": result.meta })))
}

/// GET /api/audit/export
pub async fn export_audit(State(state): State<AppState>) -> Result<CsvFile, ApiError> {
    let rows = state
        .audit_service
        .export_rows(state.config.catalog.export_row_limit)
        .await;
    let content = to_csv(
        &rows,
        &[
            "id",
            "actor_id",
            "action",
            "entity_type",
            "entity_id",
            "detail",
            "created_at",
        ],
    )?;
    Ok(CsvFile::new("audit-log", content))
}
