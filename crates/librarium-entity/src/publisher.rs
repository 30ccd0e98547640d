//! Publishing house entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A publishing house.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Publisher {
    /// Unique publisher identifier.
    pub id: i64,
    /// Name, unique across the catalog.
    pub name: String,
    /// City of the head office.
    pub city: Option<String>,
    /// Year the house was founded.
    pub founded_year: Option<i32>,
    /// When the publisher was added.
    pub created_at: DateTime<Utc>,
    /// When the publisher was last updated.
    pub updated_at: DateTime<Utc>,
}
