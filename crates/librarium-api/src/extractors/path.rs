//! Typed path parameter helpers.

use librarium_core::error::AppError;

/// Parses a positive integer id from a path segment.
///
/// `param` names the parameter in the failure message, so clients see
/// e.g. `"id must be a positive integer"`.
pub fn parse_positive_id(raw: &str, param: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::validation(format!("{param} must be a positive integer")))
}
