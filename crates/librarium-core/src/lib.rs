//! # librarium-core
//!
//! Core crate for the Librarium catalog server. Contains the unified error
//! system, configuration schemas, pagination types, and the CSV export
//! utility shared by every export endpoint.
//!
//! This crate has **no** internal dependencies on other Librarium crates.

pub mod config;
pub mod error;
pub mod export;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
