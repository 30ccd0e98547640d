//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use librarium_core::error::{AppError, ErrorKind};

/// Standard API error response body.
///
/// Every error leaving the server has exactly this shape, with the HTTP
/// status equal to `statusCode`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// Always `false`.
    pub success: bool,
    /// Human-readable message.
    pub message: String,
    /// HTTP status code, duplicated into the body.
    pub status_code: u16,
}

impl ErrorBody {
    /// Creates an error body for the given message and status.
    pub fn new(message: impl Into<String>, status_code: u16) -> Self {
        Self {
            success: false,
            message: message.into(),
            status_code,
        }
    }
}

/// Newtype carrying an [`AppError`] out of a handler.
///
/// Handlers return `Result<_, ApiError>`; the `From` impl lets `?` lift
/// any `AppResult` failure straight into an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        if err.kind == ErrorKind::Internal {
            tracing::error!(error = %err.message, "Internal server error");
        }
        let status =
            StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorBody::new(err.client_message(), status.as_u16());
        (status, Json(body)).into_response()
    }
}
