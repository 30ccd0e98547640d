//! Publishing house catalog operations.

use std::sync::Arc;

use chrono::Utc;

use librarium_core::result::AppResult;
use librarium_core::types::{Page, PageRequest};
use librarium_entity::{Book, Publisher};

use crate::audit::AuditService;
use crate::context::RequestContext;
use crate::store::{MemStore, RelationLock};
use crate::validation;

/// Handles publisher CRUD.
#[derive(Clone)]
pub struct PublisherService {
    publishers: Arc<MemStore<Publisher>>,
    books: Arc<MemStore<Book>>,
    relations: RelationLock,
    audit: Arc<AuditService>,
}

impl PublisherService {
    /// Creates a new publisher service over the shared stores.
    pub fn new(
        publishers: Arc<MemStore<Publisher>>,
        books: Arc<MemStore<Book>>,
        relations: RelationLock,
        audit: Arc<AuditService>,
    ) -> Self {
        Self {
            publishers,
            books,
            relations,
            audit,
        }
    }

    /// Lists publishers page by page, in id order.
    pub async fn list(&self, page: PageRequest) -> Page<Publisher> {
        Page::from_items(self.publishers.all().await, &page)
    }

    /// Fetches one publisher by id.
    pub async fn get(&self, id: i64) -> AppResult<Publisher> {
        validation::found(self.publishers.get(id).await, "Publisher", id)
    }

    /// Adds a new publishing house with a unique name.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        name: String,
        city: Option<String>,
        founded_year: Option<i32>,
    ) -> AppResult<Publisher> {
        let now = Utc::now();
        let publisher = self
            .publishers
            .insert_guarded(
                |publishers| {
                    validation::ensure_available(
                        publishers.iter().any(|p| p.name == name),
                        format!("Publisher {name} already exists"),
                    )
                },
                |id| Publisher {
                    id,
                    name: name.clone(),
                    city: city.clone(),
                    founded_year,
                    created_at: now,
                    updated_at: now,
                },
            )
            .await?;

        self.audit
            .record(
                ctx,
                "publisher.created",
                "publisher",
                Some(publisher.id),
                None,
            )
            .await;
        Ok(publisher)
    }

    /// Applies a partial update to one publisher.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: i64,
        name: Option<String>,
        city: Option<String>,
        founded_year: Option<i32>,
    ) -> AppResult<Publisher> {
        let updated = self
            .publishers
            .update_guarded(
                id,
                |publishers| {
                    if let Some(name) = &name {
                        validation::ensure_available(
                            publishers.iter().any(|p| &p.name == name && p.id != id),
                            format!("Publisher {name} already exists"),
                        )?;
                    }
                    Ok(())
                },
                |publisher| {
                    if let Some(name) = name.clone() {
                        publisher.name = name;
                    }
                    if let Some(city) = city.clone() {
                        publisher.city = Some(city);
                    }
                    if let Some(year) = founded_year {
                        publisher.founded_year = Some(year);
                    }
                    publisher.updated_at = Utc::now();
                },
            )
            .await?;

        let publisher = validation::found(updated, "Publisher", id)?;
        self.audit
            .record(ctx, "publisher.updated", "publisher", Some(id), None)
            .await;
        Ok(publisher)
    }

    /// Removes one publisher, unless books still reference it.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        {
            let _relations = self.relations.acquire().await;
            self.get(id).await?;
            validation::ensure_unreferenced(
                self.books.any(|b| b.publisher_id == id).await,
                format!("Publisher {id} is still referenced by books"),
            )?;
            self.publishers.remove(id).await;
        }
        self.audit
            .record(ctx, "publisher.deleted", "publisher", Some(id), None)
            .await;
        Ok(())
    }
}
