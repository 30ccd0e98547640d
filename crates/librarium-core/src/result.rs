//! Convenience result type alias for Librarium.

use crate::error::AppError;

/// A specialized `Result` type for Librarium operations.
///
/// This is defined as a convenience so that every crate does not need to
/// write `Result<T, AppError>` explicitly.
pub type AppResult<T> = Result<T, AppError>;
