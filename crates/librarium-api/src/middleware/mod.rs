//! Axum middleware stack.

pub mod compression;
pub mod cors;
pub mod error_boundary;
pub mod format;
pub mod logging;
pub mod status_override;
