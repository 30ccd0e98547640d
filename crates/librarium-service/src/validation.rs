//! Shared existence and uniqueness checks used by the services.

use librarium_core::error::AppError;
use librarium_core::result::AppResult;

/// Resolve an optional lookup into the entity or a not-found error.
pub fn found<T>(item: Option<T>, entity: &str, id: i64) -> AppResult<T> {
    item.ok_or_else(|| AppError::not_found(format!("{entity} {id} not found")))
}

/// Fail with a conflict when a unique value is already taken.
pub fn ensure_available(taken: bool, message: impl Into<String>) -> AppResult<()> {
    if taken {
        Err(AppError::conflict(message))
    } else {
        Ok(())
    }
}

/// Fail with a conflict when an entity is still referenced by others.
pub fn ensure_unreferenced(referenced: bool, message: impl Into<String>) -> AppResult<()> {
    if referenced {
        Err(AppError::conflict(message))
    } else {
        Ok(())
    }
}
