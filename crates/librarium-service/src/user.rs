//! User management operations.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use librarium_core::result::AppResult;
use librarium_core::types::{Page, PageRequest};
use librarium_entity::{Role, User, UserStatus};

use crate::audit::AuditService;
use crate::context::RequestContext;
use crate::store::{MemStore, RelationLock};
use crate::validation;

/// Data for registering a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Unique login name.
    pub username: String,
    /// Unique email address.
    pub email: String,
    /// Assigned role.
    pub role_id: i64,
}

/// Partial update for an existing user. `None` fields stay unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUser {
    /// New email address.
    pub email: Option<String>,
    /// New account status.
    pub status: Option<UserStatus>,
}

/// Handles user CRUD and role assignment.
#[derive(Clone)]
pub struct UserService {
    users: Arc<MemStore<User>>,
    roles: Arc<MemStore<Role>>,
    relations: RelationLock,
    audit: Arc<AuditService>,
}

impl UserService {
    /// Creates a new user service over the shared stores.
    pub fn new(
        users: Arc<MemStore<User>>,
        roles: Arc<MemStore<Role>>,
        relations: RelationLock,
        audit: Arc<AuditService>,
    ) -> Self {
        Self {
            users,
            roles,
            relations,
            audit,
        }
    }

    /// Lists users page by page, in id order.
    pub async fn list(&self, page: PageRequest) -> Page<User> {
        Page::from_items(self.users.all().await, &page)
    }

    /// Fetches one user by id.
    pub async fn get(&self, id: i64) -> AppResult<User> {
        validation::found(self.users.get(id).await, "User", id)
    }

    /// Registers a new user with unique username and email.
    pub async fn create(&self, ctx: &RequestContext, data: CreateUser) -> AppResult<User> {
        let now = Utc::now();
        let user = {
            // The role check and the insert share the relation lock with
            // role deletion, so the role cannot vanish in between.
            let _relations = self.relations.acquire().await;
            validation::found(self.roles.get(data.role_id).await, "Role", data.role_id)?;
            self.users
                .insert_guarded(
                    |users| {
                        validation::ensure_available(
                            users.iter().any(|u| u.username == data.username),
                            format!("Username {} is already taken", data.username),
                        )?;
                        validation::ensure_available(
                            users.iter().any(|u| u.email == data.email),
                            format!("Email {} is already in use", data.email),
                        )
                    },
                    |id| User {
                        id,
                        username: data.username.clone(),
                        email: data.email.clone(),
                        role_id: data.role_id,
                        status: UserStatus::Active,
                        created_at: now,
                        updated_at: now,
                    },
                )
                .await?
        };

        self.audit
            .record(ctx, "user.created", "user", Some(user.id), None)
            .await;
        Ok(user)
    }

    /// Applies a partial update to one user.
    pub async fn update(&self, ctx: &RequestContext, id: i64, data: UpdateUser) -> AppResult<User> {
        let updated = self
            .users
            .update_guarded(
                id,
                |users| {
                    if let Some(email) = &data.email {
                        validation::ensure_available(
                            users.iter().any(|u| &u.email == email && u.id != id),
                            format!("Email {email} is already in use"),
                        )?;
                    }
                    Ok(())
                },
                |user| {
                    if let Some(email) = data.email.clone() {
                        user.email = email;
                    }
                    if let Some(status) = data.status {
                        user.status = status;
                    }
                    user.updated_at = Utc::now();
                },
            )
            .await?;

        let user = validation::found(updated, "User", id)?;
        self.audit
            .record(ctx, "user.updated", "user", Some(id), None)
            .await;
        Ok(user)
    }

    /// Moves one user onto a different role.
    pub async fn assign_role(
        &self,
        ctx: &RequestContext,
        id: i64,
        role_id: i64,
    ) -> AppResult<User> {
        self.get(id).await?;
        let user = {
            let _relations = self.relations.acquire().await;
            validation::found(self.roles.get(role_id).await, "Role", role_id)?;
            let updated = self
                .users
                .update_with(id, |user| {
                    user.role_id = role_id;
                    user.updated_at = Utc::now();
                })
                .await;
            validation::found(updated, "User", id)?
        };
        self.audit
            .record(
                ctx,
                "user.role_assigned",
                "user",
                Some(id),
                Some(serde_json::json!({ "role_id": role_id })),
            )
            .await;
        Ok(user)
    }

    /// Removes one user.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        validation::found(self.users.remove(id).await, "User", id)?;
        self.audit
            .record(ctx, "user.deleted", "user", Some(id), None)
            .await;
        Ok(())
    }
}
