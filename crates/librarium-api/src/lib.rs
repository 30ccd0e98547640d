//! # librarium-api
//!
//! HTTP API layer for Librarium built on Axum.
//!
//! Provides all REST endpoints, middleware (response envelope formatting,
//! error normalization, POST status override, CORS, logging), extractors,
//! DTOs, and the CSV export response type. Every response leaving this
//! layer is normalized: successes into `{ data, meta?, message }`, errors
//! into `{ success: false, message, statusCode }`.

pub mod app;
pub mod dto;
pub mod error;
pub mod export;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use state::AppState;
