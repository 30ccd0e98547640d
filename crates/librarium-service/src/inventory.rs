//! Inventory movement operations.
//!
//! Every movement applies its stock delta to the referenced book inside
//! the same call, so a book's `stock` is always the sum of its movements
//! plus its initial stock. The stock floor is checked and the delta applied
//! under the book's write lock, and the movement is only recorded once the
//! stock change has committed.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use librarium_core::error::AppError;
use librarium_core::result::AppResult;
use librarium_core::types::{Page, PageRequest};
use librarium_entity::{Book, InventoryMovement, MovementKind};

use crate::audit::AuditService;
use crate::context::RequestContext;
use crate::store::MemStore;
use crate::validation;

/// Data for recording a new movement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMovement {
    /// The book whose stock moves.
    pub book_id: i64,
    /// Direction of the movement.
    pub kind: MovementKind,
    /// Number of copies. Signed only for adjustments.
    pub quantity: i64,
    /// Free-form note.
    pub note: Option<String>,
}

/// Records movements and keeps book stock consistent.
#[derive(Clone)]
pub struct InventoryService {
    movements: Arc<MemStore<InventoryMovement>>,
    books: Arc<MemStore<Book>>,
    audit: Arc<AuditService>,
}

impl InventoryService {
    /// Creates a new inventory service over the shared stores.
    pub fn new(
        movements: Arc<MemStore<InventoryMovement>>,
        books: Arc<MemStore<Book>>,
        audit: Arc<AuditService>,
    ) -> Self {
        Self {
            movements,
            books,
            audit,
        }
    }

    /// Records one movement and applies its delta to the book's stock.
    pub async fn record(
        &self,
        ctx: &RequestContext,
        data: NewMovement,
    ) -> AppResult<InventoryMovement> {
        if data.quantity == 0 {
            return Err(AppError::validation("Quantity must not be zero"));
        }
        if matches!(data.kind, MovementKind::Inbound | MovementKind::Outbound)
            && data.quantity < 0
        {
            return Err(AppError::validation(
                "Quantity must be positive for inbound and outbound movements",
            ));
        }

        let delta = match data.kind {
            MovementKind::Inbound => data.quantity,
            MovementKind::Outbound => -data.quantity,
            MovementKind::Adjustment => data.quantity,
        };

        // Floor check and delta share one write lock, so two concurrent
        // outbounds cannot both pass the guard on the same copies.
        let updated = self
            .books
            .try_update_with(data.book_id, |book| {
                if book.stock + delta < 0 {
                    return Err(AppError::validation(format!(
                        "Insufficient stock for book {}: {} on hand",
                        book.id, book.stock
                    )));
                }
                book.stock += delta;
                book.updated_at = Utc::now();
                Ok(())
            })
            .await?;
        validation::found(updated, "Book", data.book_id)?;

        let movement = self
            .movements
            .insert_with(|id| InventoryMovement {
                id,
                book_id: data.book_id,
                kind: data.kind,
                quantity: data.quantity,
                note: data.note.clone(),
                recorded_by: ctx.actor_id,
                created_at: Utc::now(),
            })
            .await;

        self.audit
            .record(
                ctx,
                "inventory.recorded",
                "inventory_movement",
                Some(movement.id),
                Some(serde_json::json!({ "book_id": data.book_id, "delta": delta })),
            )
            .await;
        Ok(movement)
    }

    /// Lists movements page by page, optionally restricted to one book.
    pub async fn list(&self, book_id: Option<i64>, page: PageRequest) -> Page<InventoryMovement> {
        let matched: Vec<InventoryMovement> = self
            .movements
            .all()
            .await
            .into_iter()
            .filter(|m| book_id.is_none_or(|b| m.book_id == b))
            .collect();
        Page::from_items(matched, &page)
    }

    /// Rows for CSV export, capped at `limit`.
    pub async fn export_rows(&self, limit: usize) -> Vec<InventoryMovement> {
        self.movements.all().await.into_iter().take(limit).collect()
    }
}
