//! Author entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A book author.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    /// Unique author identifier.
    pub id: i64,
    /// Full name, unique across the catalog.
    pub name: String,
    /// Country of origin.
    pub country: Option<String>,
    /// Year of birth.
    pub birth_year: Option<i32>,
    /// When the author was added.
    pub created_at: DateTime<Utc>,
    /// When the author was last updated.
    pub updated_at: DateTime<Utc>,
}
