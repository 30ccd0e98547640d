//! Append-only audit trail for mutating operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use librarium_core::types::{Page, PageRequest};
use librarium_entity::AuditLog;

use crate::context::RequestContext;

/// Filter for searching the audit trail.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditFilter {
    /// Only records produced by this actor.
    pub actor_id: Option<i64>,
    /// Only records with this exact action name.
    pub action: Option<String>,
    /// Only records touching this entity type.
    pub entity_type: Option<String>,
    /// Only records at or after this time.
    pub from: Option<DateTime<Utc>>,
    /// Only records at or before this time.
    pub to: Option<DateTime<Utc>>,
}

/// Records and queries audit entries.
#[derive(Debug, Default)]
pub struct AuditService {
    records: RwLock<Vec<AuditLog>>,
}

impl AuditService {
    /// Create an empty audit trail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one audit record. Never fails; auditing must not break the
    /// operation it describes.
    pub async fn record(
        &self,
        ctx: &RequestContext,
        action: &str,
        entity_type: &str,
        entity_id: Option<i64>,
        detail: Option<serde_json::Value>,
    ) {
        let entry = AuditLog {
            id: Uuid::new_v4(),
            actor_id: ctx.actor_id,
            action: action.to_string(),
            entity_type: entity_type.to_string(),
            entity_id,
            detail,
            created_at: Utc::now(),
        };
        tracing::debug!(action, entity_type, entity_id, "audit record");
        self.records.write().await.push(entry);
    }

    /// Search the trail with the given filter, newest first.
    pub async fn advanced_filter(&self, filter: AuditFilter, page: PageRequest) -> Page<AuditLog> {
        let records = self.records.read().await;
        let mut matched: Vec<AuditLog> = records
            .iter()
            .filter(|r| filter.actor_id.is_none_or(|a| r.actor_id == Some(a)))
            .filter(|r| filter.action.as_deref().is_none_or(|a| r.action == a))
            .filter(|r| {
                filter
                    .entity_type
                    .as_deref()
                    .is_none_or(|e| r.entity_type == e)
            })
            .filter(|r| filter.from.is_none_or(|t| r.created_at >= t))
            .filter(|r| filter.to.is_none_or(|t| r.created_at <= t))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Page::from_items(matched, &page)
    }

    /// Rows for CSV export, oldest first, capped at `limit`.
    pub async fn export_rows(&self, limit: usize) -> Vec<AuditLog> {
        self.records
            .read()
            .await
            .iter()
            .take(limit)
            .cloned()
            .collect()
    }
}
