//! Inventory movement entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The direction of an inventory movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    /// Copies received into stock.
    Inbound,
    /// Copies leaving stock (sale, loan, loss).
    Outbound,
    /// Manual correction; the quantity is a signed delta.
    Adjustment,
}

/// A single stock movement for one book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryMovement {
    /// Unique movement identifier.
    pub id: i64,
    /// The book whose stock moved.
    pub book_id: i64,
    /// Direction of the movement.
    pub kind: MovementKind,
    /// Number of copies moved. Signed only for adjustments.
    pub quantity: i64,
    /// Free-form note (delivery reference, reason, ...).
    pub note: Option<String>,
    /// The user who recorded the movement, if known.
    pub recorded_by: Option<i64>,
    /// When the movement was recorded.
    pub created_at: DateTime<Utc>,
}

impl InventoryMovement {
    /// The signed stock delta this movement applies to the book.
    pub fn stock_delta(&self) -> i64 {
        match self.kind {
            MovementKind::Inbound => self.quantity,
            MovementKind::Outbound => -self.quantity,
            MovementKind::Adjustment => self.quantity,
        }
    }
}
