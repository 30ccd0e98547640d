//! Shared application state threaded through every handler.

use std::sync::Arc;
use std::time::Instant;

use librarium_core::config::AppConfig;
use librarium_entity::{Author, Book, Genre, InventoryMovement, Publisher, Role, User};
use librarium_service::audit::AuditService;
use librarium_service::author::AuthorService;
use librarium_service::book::BookService;
use librarium_service::genre::GenreService;
use librarium_service::inventory::InventoryService;
use librarium_service::publisher::PublisherService;
use librarium_service::role::RoleService;
use librarium_service::store::{MemStore, RelationLock};
use librarium_service::user::UserService;

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// When the server started, for health reporting.
    pub started_at: Instant,
    /// Book catalog operations.
    pub book_service: Arc<BookService>,
    /// Author operations.
    pub author_service: Arc<AuthorService>,
    /// Genre operations.
    pub genre_service: Arc<GenreService>,
    /// Publisher operations.
    pub publisher_service: Arc<PublisherService>,
    /// Inventory movement operations.
    pub inventory_service: Arc<InventoryService>,
    /// User management operations.
    pub user_service: Arc<UserService>,
    /// Role management operations.
    pub role_service: Arc<RoleService>,
    /// Audit trail.
    pub audit_service: Arc<AuditService>,
}

impl AppState {
    /// Builds the full service graph over fresh in-memory stores.
    pub fn new(config: AppConfig) -> Self {
        let books: Arc<MemStore<Book>> = Arc::new(MemStore::new());
        let authors: Arc<MemStore<Author>> = Arc::new(MemStore::new());
        let genres: Arc<MemStore<Genre>> = Arc::new(MemStore::new());
        let publishers: Arc<MemStore<Publisher>> = Arc::new(MemStore::new());
        let movements: Arc<MemStore<InventoryMovement>> = Arc::new(MemStore::new());
        let users: Arc<MemStore<User>> = Arc::new(MemStore::new());
        let roles: Arc<MemStore<Role>> = Arc::new(MemStore::new());

        let audit_service = Arc::new(AuditService::new());
        let relations = RelationLock::new();

        let book_service = Arc::new(BookService::new(
            Arc::clone(&books),
            Arc::clone(&authors),
            Arc::clone(&genres),
            Arc::clone(&publishers),
            relations.clone(),
            Arc::clone(&audit_service),
        ));
        let author_service = Arc::new(AuthorService::new(
            Arc::clone(&authors),
            Arc::clone(&books),
            relations.clone(),
            Arc::clone(&audit_service),
        ));
        let genre_service = Arc::new(GenreService::new(
            Arc::clone(&genres),
            Arc::clone(&books),
            relations.clone(),
            Arc::clone(&audit_service),
        ));
        let publisher_service = Arc::new(PublisherService::new(
            Arc::clone(&publishers),
            Arc::clone(&books),
            relations.clone(),
            Arc::clone(&audit_service),
        ));
        let inventory_service = Arc::new(InventoryService::new(
            Arc::clone(&movements),
            Arc::clone(&books),
            Arc::clone(&audit_service),
        ));
        let user_service = Arc::new(UserService::new(
            Arc::clone(&users),
            Arc::clone(&roles),
            relations.clone(),
            Arc::clone(&audit_service),
        ));
        let role_service = Arc::new(RoleService::new(
            Arc::clone(&roles),
            Arc::clone(&users),
            relations,
            Arc::clone(&audit_service),
        ));

        Self {
            config: Arc::new(config),
            started_at: Instant::now(),
            book_service,
            author_service,
            genre_service,
            publisher_service,
            inventory_service,
            user_service,
            role_service,
            audit_service,
        }
    }
}
