//! Shared value types used across the Librarium crates.

pub mod pagination;

pub use pagination::{Page, PageMeta, PageRequest};
