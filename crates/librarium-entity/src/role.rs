//! Role entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named role assignable to users.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    /// Unique role identifier.
    pub id: i64,
    /// Name, unique across the system.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// When the role was created.
    pub created_at: DateTime<Utc>,
    /// When the role was last updated.
    pub updated_at: DateTime<Utc>,
}
