//! Author catalog operations.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use librarium_core::result::AppResult;
use librarium_core::types::{Page, PageRequest};
use librarium_entity::{Author, Book};

use crate::audit::AuditService;
use crate::context::RequestContext;
use crate::store::{MemStore, RelationLock};
use crate::validation;

/// Filter criteria for the filter-as-POST endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorFilter {
    /// Case-insensitive name substring.
    pub name: Option<String>,
    /// Exact country match.
    pub country: Option<String>,
}

/// Handles author CRUD and filtering.
#[derive(Clone)]
pub struct AuthorService {
    authors: Arc<MemStore<Author>>,
    books: Arc<MemStore<Book>>,
    relations: RelationLock,
    audit: Arc<AuditService>,
}

impl AuthorService {
    /// Creates a new author service over the shared stores.
    pub fn new(
        authors: Arc<MemStore<Author>>,
        books: Arc<MemStore<Book>>,
        relations: RelationLock,
        audit: Arc<AuditService>,
    ) -> Self {
        Self {
            authors,
            books,
            relations,
            audit,
        }
    }

    /// Lists authors page by page, in id order.
    pub async fn list(&self, page: PageRequest) -> Page<Author> {
        Page::from_items(self.authors.all().await, &page)
    }

    /// Fetches one author by id.
    pub async fn get(&self, id: i64) -> AppResult<Author> {
        validation::found(self.authors.get(id).await, "Author", id)
    }

    /// Adds a new author with a unique name.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        name: String,
        country: Option<String>,
        birth_year: Option<i32>,
    ) -> AppResult<Author> {
        let now = Utc::now();
        let author = self
            .authors
            .insert_guarded(
                |authors| {
                    validation::ensure_available(
                        authors.iter().any(|a| a.name == name),
                        format!("Author {name} already exists"),
                    )
                },
                |id| Author {
                    id,
                    name: name.clone(),
                    country: country.clone(),
                    birth_year,
                    created_at: now,
                    updated_at: now,
                },
            )
            .await?;

        self.audit
            .record(ctx, "author.created", "author", Some(author.id), None)
            .await;
        Ok(author)
    }

    /// Applies a partial update to one author.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: i64,
        name: Option<String>,
        country: Option<String>,
        birth_year: Option<i32>,
    ) -> AppResult<Author> {
        let updated = self
            .authors
            .update_guarded(
                id,
                |authors| {
                    if let Some(name) = &name {
                        validation::ensure_available(
                            authors.iter().any(|a| &a.name == name && a.id != id),
                            format!("Author {name} already exists"),
                        )?;
                    }
                    Ok(())
                },
                |author| {
                    if let Some(name) = name.clone() {
                        author.name = name;
                    }
                    if let Some(country) = country.clone() {
                        author.country = Some(country);
                    }
                    if let Some(year) = birth_year {
                        author.birth_year = Some(year);
                    }
                    author.updated_at = Utc::now();
                },
            )
            .await?;

        let author = validation::found(updated, "Author", id)?;
        self.audit
            .record(ctx, "author.updated", "author", Some(id), None)
            .await;
        Ok(author)
    }

    /// Removes one author, unless books still reference it.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        {
            // The reference check and the removal share the relation lock
            // with book creation, so no book can slip in between them.
            let _relations = self.relations.acquire().await;
            self.get(id).await?;
            validation::ensure_unreferenced(
                self.books.any(|b| b.author_id == id).await,
                format!("Author {id} is still referenced by books"),
            )?;
            self.authors.remove(id).await;
        }
        self.audit
            .record(ctx, "author.deleted", "author", Some(id), None)
            .await;
        Ok(())
    }

    /// Filters authors with the given criteria.
    pub async fn filter(&self, criteria: AuthorFilter, page: PageRequest) -> Page<Author> {
        let needle = criteria.name.as_deref().map(str::to_lowercase);
        let matched: Vec<Author> = self
            .authors
            .all()
            .await
            .into_iter()
            .filter(|a| {
                needle
                    .as_deref()
                    .is_none_or(|n| a.name.to_lowercase().contains(n))
            })
            .filter(|a| {
                criteria
                    .country
                    .as_deref()
                    .is_none_or(|c| a.country.as_deref() == Some(c))
            })
            .collect();
        Page::from_items(matched, &page)
    }
}
