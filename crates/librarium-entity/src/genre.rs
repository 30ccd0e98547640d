//! Genre entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A literary genre.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genre {
    /// Unique genre identifier.
    pub id: i64,
    /// Name, unique across the catalog.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// When the genre was added.
    pub created_at: DateTime<Utc>,
    /// When the genre was last updated.
    pub updated_at: DateTime<Utc>,
}
