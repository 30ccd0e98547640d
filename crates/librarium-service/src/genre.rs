//! Genre catalog operations.

use std::sync::Arc;

use chrono::Utc;

use librarium_core::result::AppResult;
use librarium_core::types::{Page, PageRequest};
use librarium_entity::{Book, Genre};

use crate::audit::AuditService;
use crate::context::RequestContext;
use crate::store::{MemStore, RelationLock};
use crate::validation;

/// Handles genre CRUD.
#[derive(Clone)]
pub struct GenreService {
    genres: Arc<MemStore<Genre>>,
    books: Arc<MemStore<Book>>,
    relations: RelationLock,
    audit: Arc<AuditService>,
}

impl GenreService {
    /// Creates a new genre service over the shared stores.
    pub fn new(
        genres: Arc<MemStore<Genre>>,
        books: Arc<MemStore<Book>>,
        relations: RelationLock,
        audit: Arc<AuditService>,
    ) -> Self {
        Self {
            genres,
            books,
            relations,
            audit,
        }
    }

    /// Lists genres page by page, in id order.
    pub async fn list(&self, page: PageRequest) -> Page<Genre> {
        Page::from_items(self.genres.all().await, &page)
    }

    /// Fetches one genre by id.
    pub async fn get(&self, id: i64) -> AppResult<Genre> {
        validation::found(self.genres.get(id).await, "Genre", id)
    }

    /// Adds a new genre with a unique name.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        name: String,
        description: Option<String>,
    ) -> AppResult<Genre> {
        let now = Utc::now();
        let genre = self
            .genres
            .insert_guarded(
                |genres| {
                    validation::ensure_available(
                        genres.iter().any(|g| g.name == name),
                        format!("Genre {name} already exists"),
                    )
                },
                |id| Genre {
                    id,
                    name: name.clone(),
                    description: description.clone(),
                    created_at: now,
                    updated_at: now,
                },
            )
            .await?;

        self.audit
            .record(ctx, "genre.created", "genre", Some(genre.id), None)
            .await;
        Ok(genre)
    }

    /// Applies a partial update to one genre.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: i64,
        name: Option<String>,
        description: Option<String>,
    ) -> AppResult<Genre> {
        let updated = self
            .genres
            .update_guarded(
                id,
                |genres| {
                    if let Some(name) = &name {
                        validation::ensure_available(
                            genres.iter().any(|g| &g.name == name && g.id != id),
                            format!("Genre {name} already exists"),
                        )?;
                    }
                    Ok(())
                },
                |genre| {
                    if let Some(name) = name.clone() {
                        genre.name = name;
                    }
                    if let Some(description) = description.clone() {
                        genre.description = Some(description);
                    }
                    genre.updated_at = Utc::now();
                },
            )
            .await?;

        let genre = validation::found(updated, "Genre", id)?;
        self.audit
            .record(ctx, "genre.updated", "genre", Some(id), None)
            .await;
        Ok(genre)
    }

    /// Removes one genre, unless books still reference it.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        {
            let _relations = self.relations.acquire().await;
            self.get(id).await?;
            validation::ensure_unreferenced(
                self.books.any(|b| b.genre_id == id).await,
                format!("Genre {id} is still referenced by books"),
            )?;
            self.genres.remove(id).await;
        }
        self.audit
            .record(ctx, "genre.deleted", "genre", Some(id), None)
            .await;
        Ok(())
    }
}
