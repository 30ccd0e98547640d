//! Book entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalogued book title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    /// Unique book identifier.
    pub id: i64,
    /// Title.
    pub title: String,
    /// ISBN, unique across the catalog.
    pub isbn: String,
    /// Optional blurb/description.
    pub description: Option<String>,
    /// Referenced author.
    pub author_id: i64,
    /// Referenced genre.
    pub genre_id: i64,
    /// Referenced publishing house.
    pub publisher_id: i64,
    /// Year of publication.
    pub published_year: Option<i32>,
    /// Copies currently on hand. Maintained by inventory movements.
    pub stock: i64,
    /// When the book was catalogued.
    pub created_at: DateTime<Utc>,
    /// When the book was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Whether at least one copy is on hand.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}
