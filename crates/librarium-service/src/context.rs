//! Request context carrying the acting user.
//!
//! Extracted once at the HTTP layer and passed explicitly into service
//! methods, so services never reach into an ambient request object and
//! stay testable without a framework-shaped mock.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Context for the current request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The acting user's ID, if the request was authenticated upstream.
    pub actor_id: Option<i64>,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Context for an authenticated user.
    pub fn for_user(actor_id: i64) -> Self {
        Self {
            actor_id: Some(actor_id),
            request_time: Utc::now(),
        }
    }

    /// Context for an unauthenticated request.
    pub fn anonymous() -> Self {
        Self {
            actor_id: None,
            request_time: Utc::now(),
        }
    }

    /// Whether the request carries no acting user.
    pub fn is_anonymous(&self) -> bool {
        self.actor_id.is_none()
    }
}
