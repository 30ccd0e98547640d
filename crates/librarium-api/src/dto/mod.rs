//! Request/response DTOs.

pub mod request;
pub mod response;

use validator::Validate;

use librarium_core::error::AppError;
use librarium_core::result::AppResult;

/// Runs declarative validation on a request DTO.
///
/// All violations are collected into one Validation error, joined with
/// `", "`, so a client sees every problem in a single round trip.
pub fn validate_dto(dto: &impl Validate) -> AppResult<()> {
    dto.validate().map_err(|errors| {
        let mut messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, field_errors)| {
                field_errors.iter().map(move |err| match &err.message {
                    Some(message) => message.to_string(),
                    None => format!("{field} is invalid"),
                })
            })
            .collect();
        messages.sort();
        AppError::validation(messages.join(", "))
    })
}
