//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    /// The account may use the API.
    Active,
    /// The account is blocked.
    Suspended,
}

/// A registered user of the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// Unique login name.
    pub username: String,
    /// Unique email address.
    pub email: String,
    /// Assigned role.
    pub role_id: i64,
    /// Account status.
    pub status: UserStatus,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Whether the account is currently allowed to act.
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }
}
