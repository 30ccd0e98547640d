//! Custom Axum extractors.

pub mod actor;
pub mod pagination;
pub mod path;

pub use actor::ActorContext;
pub use pagination::PaginationParams;
