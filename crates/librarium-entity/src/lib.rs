//! # librarium-entity
//!
//! Domain entity models for the Librarium catalog: books, authors, genres,
//! publishing houses, inventory movements, users, roles, and audit records.

pub mod audit;
pub mod author;
pub mod book;
pub mod genre;
pub mod inventory;
pub mod publisher;
pub mod role;
pub mod user;

pub use audit::AuditLog;
pub use author::Author;
pub use book::Book;
pub use genre::Genre;
pub use inventory::{InventoryMovement, MovementKind};
pub use publisher::Publisher;
pub use role::Role;
pub use user::{User, UserStatus};
