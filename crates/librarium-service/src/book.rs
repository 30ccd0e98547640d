//! Book catalog operations.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use librarium_core::result::AppResult;
use librarium_core::types::{Page, PageRequest};
use librarium_entity::{Author, Book, Genre, Publisher};

use crate::audit::AuditService;
use crate::context::RequestContext;
use crate::store::{MemStore, RelationLock};
use crate::validation;

/// Data for cataloguing a new book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBook {
    /// Title.
    pub title: String,
    /// ISBN, unique across the catalog.
    pub isbn: String,
    /// Optional blurb.
    pub description: Option<String>,
    /// Referenced author.
    pub author_id: i64,
    /// Referenced genre.
    pub genre_id: i64,
    /// Referenced publishing house.
    pub publisher_id: i64,
    /// Year of publication.
    pub published_year: Option<i32>,
    /// Copies on hand at cataloguing time.
    pub initial_stock: i64,
}

/// Partial update for an existing book. `None` fields stay unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBook {
    /// New title.
    pub title: Option<String>,
    /// New ISBN.
    pub isbn: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New published year.
    pub published_year: Option<i32>,
}

/// Search criteria for the search-as-POST endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookSearch {
    /// Case-insensitive title substring.
    pub title: Option<String>,
    /// Restrict to one author.
    pub author_id: Option<i64>,
    /// Restrict to one genre.
    pub genre_id: Option<i64>,
    /// Restrict to one publisher.
    pub publisher_id: Option<i64>,
    /// Published in or after this year.
    pub published_after: Option<i32>,
    /// Published in or before this year.
    pub published_before: Option<i32>,
}

/// Handles book CRUD and search.
#[derive(Clone)]
pub struct BookService {
    books: Arc<MemStore<Book>>,
    authors: Arc<MemStore<Author>>,
    genres: Arc<MemStore<Genre>>,
    publishers: Arc<MemStore<Publisher>>,
    relations: RelationLock,
    audit: Arc<AuditService>,
}

impl BookService {
    /// Creates a new book service over the shared stores.
    pub fn new(
        books: Arc<MemStore<Book>>,
        authors: Arc<MemStore<Author>>,
        genres: Arc<MemStore<Genre>>,
        publishers: Arc<MemStore<Publisher>>,
        relations: RelationLock,
        audit: Arc<AuditService>,
    ) -> Self {
        Self {
            books,
            authors,
            genres,
            publishers,
            relations,
            audit,
        }
    }

    /// Lists the catalog page by page, in id order.
    pub async fn list(&self, page: PageRequest) -> Page<Book> {
        Page::from_items(self.books.all().await, &page)
    }

    /// Fetches one book by id.
    pub async fn get(&self, id: i64) -> AppResult<Book> {
        validation::found(self.books.get(id).await, "Book", id)
    }

    /// Catalogues a new book after checking its references and ISBN.
    pub async fn create(&self, ctx: &RequestContext, data: CreateBook) -> AppResult<Book> {
        let now = Utc::now();
        let book = {
            // Reference checks and the insert share the relation lock, so a
            // concurrent author/genre/publisher delete cannot land between
            // the existence check and the book landing in the store.
            let _relations = self.relations.acquire().await;
            self.check_references(data.author_id, data.genre_id, data.publisher_id)
                .await?;
            self.books
                .insert_guarded(
                    |books| {
                        validation::ensure_available(
                            books.iter().any(|b| b.isbn == data.isbn),
                            format!("Book with ISBN {} already exists", data.isbn),
                        )
                    },
                    |id| Book {
                        id,
                        title: data.title.clone(),
                        isbn: data.isbn.clone(),
                        description: data.description.clone(),
                        author_id: data.author_id,
                        genre_id: data.genre_id,
                        publisher_id: data.publisher_id,
                        published_year: data.published_year,
                        stock: data.initial_stock,
                        created_at: now,
                        updated_at: now,
                    },
                )
                .await?
        };

        self.audit
            .record(ctx, "book.created", "book", Some(book.id), None)
            .await;
        Ok(book)
    }

    /// Applies a partial update to one book.
    pub async fn update(&self, ctx: &RequestContext, id: i64, data: UpdateBook) -> AppResult<Book> {
        let updated = self
            .books
            .update_guarded(
                id,
                |books| {
                    if let Some(isbn) = &data.isbn {
                        validation::ensure_available(
                            books.iter().any(|b| &b.isbn == isbn && b.id != id),
                            format!("Book with ISBN {isbn} already exists"),
                        )?;
                    }
                    Ok(())
                },
                |book| {
                    if let Some(title) = data.title.clone() {
                        book.title = title;
                    }
                    if let Some(isbn) = data.isbn.clone() {
                        book.isbn = isbn;
                    }
                    if let Some(description) = data.description.clone() {
                        book.description = Some(description);
                    }
                    if let Some(year) = data.published_year {
                        book.published_year = Some(year);
                    }
                    book.updated_at = Utc::now();
                },
            )
            .await?;

        let book = validation::found(updated, "Book", id)?;
        self.audit
            .record(ctx, "book.updated", "book", Some(id), None)
            .await;
        Ok(book)
    }

    /// Removes one book from the catalog.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        validation::found(self.books.remove(id).await, "Book", id)?;
        self.audit
            .record(ctx, "book.deleted", "book", Some(id), None)
            .await;
        Ok(())
    }

    /// Searches the catalog with the given criteria.
    pub async fn search(&self, criteria: BookSearch, page: PageRequest) -> Page<Book> {
        let needle = criteria.title.as_deref().map(str::to_lowercase);
        let matched: Vec<Book> = self
            .books
            .all()
            .await
            .into_iter()
            .filter(|b| {
                needle
                    .as_deref()
                    .is_none_or(|t| b.title.to_lowercase().contains(t))
            })
            .filter(|b| criteria.author_id.is_none_or(|a| b.author_id == a))
            .filter(|b| criteria.genre_id.is_none_or(|g| b.genre_id == g))
            .filter(|b| criteria.publisher_id.is_none_or(|p| b.publisher_id == p))
            .filter(|b| {
                criteria
                    .published_after
                    .is_none_or(|y| b.published_year.is_some_and(|p| p >= y))
            })
            .filter(|b| {
                criteria
                    .published_before
                    .is_none_or(|y| b.published_year.is_some_and(|p| p <= y))
            })
            .collect();
        Page::from_items(matched, &page)
    }

    /// Rows for CSV export, capped at `limit`.
    pub async fn export_rows(&self, limit: usize) -> Vec<Book> {
        self.books.all().await.into_iter().take(limit).collect()
    }

    async fn check_references(
        &self,
        author_id: i64,
        genre_id: i64,
        publisher_id: i64,
    ) -> AppResult<()> {
        validation::found(self.authors.get(author_id).await, "Author", author_id)?;
        validation::found(self.genres.get(genre_id).await, "Genre", genre_id)?;
        validation::found(
            self.publishers.get(publisher_id).await,
            "Publisher",
            publisher_id,
        )?;
        Ok(())
    }
}
