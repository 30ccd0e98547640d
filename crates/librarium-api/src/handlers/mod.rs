//! HTTP request handlers, one module per domain.

pub mod audit;
pub mod author;
pub mod book;
pub mod genre;
pub mod health;
pub mod inventory;
pub mod publisher;
pub mod role;
pub mod user;
