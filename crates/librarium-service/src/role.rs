//! Role management operations.

use std::sync::Arc;

use chrono::Utc;

use librarium_core::result::AppResult;
use librarium_core::types::{Page, PageRequest};
use librarium_entity::{Role, User};

use crate::audit::AuditService;
use crate::context::RequestContext;
use crate::store::{MemStore, RelationLock};
use crate::validation;

/// Handles role CRUD.
#[derive(Clone)]
pub struct RoleService {
    roles: Arc<MemStore<Role>>,
    users: Arc<MemStore<User>>,
    relations: RelationLock,
    audit: Arc<AuditService>,
}

impl RoleService {
    /// Creates a new role service over the shared stores.
    pub fn new(
        roles: Arc<MemStore<Role>>,
        users: Arc<MemStore<User>>,
        relations: RelationLock,
        audit: Arc<AuditService>,
    ) -> Self {
        Self {
            roles,
            users,
            relations,
            audit,
        }
    }

    /// Lists roles page by page, in id order.
    pub async fn list(&self, page: PageRequest) -> Page<Role> {
        Page::from_items(self.roles.all().await, &page)
    }

    /// Fetches one role by id.
    pub async fn get(&self, id: i64) -> AppResult<Role> {
        validation::found(self.roles.get(id).await, "Role", id)
    }

    /// Adds a new role with a unique name.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        name: String,
        description: Option<String>,
    ) -> AppResult<Role> {
        let now = Utc::now();
        let role = self
            .roles
            .insert_guarded(
                |roles| {
                    validation::ensure_available(
                        roles.iter().any(|r| r.name == name),
                        format!("Role {name} already exists"),
                    )
                },
                |id| Role {
                    id,
                    name: name.clone(),
                    description: description.clone(),
                    created_at: now,
                    updated_at: now,
                },
            )
            .await?;

        self.audit
            .record(ctx, "role.created", "role", Some(role.id), None)
            .await;
        Ok(role)
    }

    /// Applies a partial update to one role.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: i64,
        name: Option<String>,
        description: Option<String>,
    ) -> AppResult<Role> {
        let updated = self
            .roles
            .update_guarded(
                id,
                |roles| {
                    if let Some(name) = &name {
                        validation::ensure_available(
                            roles.iter().any(|r| &r.name == name && r.id != id),
                            format!("Role {name} already exists"),
                        )?;
                    }
                    Ok(())
                },
                |role| {
                    if let Some(name) = name.clone() {
                        role.name = name;
                    }
                    if let Some(description) = description.clone() {
                        role.description = Some(description);
                    }
                    role.updated_at = Utc::now();
                },
            )
            .await?;

        let role = validation::found(updated, "Role", id)?;
        self.audit
            .record(ctx, "role.updated", "role", Some(id), None)
            .await;
        Ok(role)
    }

    /// Removes one role, unless users still hold it.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        {
            // Shares the relation lock with user creation and role
            // assignment, so no user can take the role mid-delete.
            let _relations = self.relations.acquire().await;
            self.get(id).await?;
            validation::ensure_unreferenced(
                self.users.any(|u| u.role_id == id).await,
                format!("Role {id} is still assigned to users"),
            )?;
            self.roles.remove(id).await;
        }
        self.audit
            .record(ctx, "role.deleted", "role", Some(id), None)
            .await;
        Ok(())
    }
}
