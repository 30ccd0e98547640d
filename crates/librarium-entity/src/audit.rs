//! Audit log entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One append-only audit record for a mutating operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLog {
    /// Unique record identifier.
    pub id: Uuid,
    /// The acting user, if the request was authenticated.
    pub actor_id: Option<i64>,
    /// Action name, e.g. `book.created`.
    pub action: String,
    /// Entity type the action applied to, e.g. `book`.
    pub entity_type: String,
    /// Identifier of the affected entity, when it has one.
    pub entity_id: Option<i64>,
    /// Structured detail payload.
    pub detail: Option<serde_json::Value>,
    /// When the action happened.
    pub created_at: DateTime<Utc>,
}
