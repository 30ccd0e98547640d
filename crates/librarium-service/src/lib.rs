//! # librarium-service
//!
//! Business logic services for Librarium. Each service owns (or shares) the
//! in-memory stores it operates on and enforces the uniqueness, existence,
//! and stock rules of the catalog. Persistence sits behind the store seam so
//! it can be swapped for a database-backed implementation without touching
//! the services.

pub mod audit;
pub mod author;
pub mod book;
pub mod context;
pub mod genre;
pub mod inventory;
pub mod publisher;
pub mod role;
pub mod store;
pub mod user;
pub mod validation;

pub use context::RequestContext;
pub use store::MemStore;
