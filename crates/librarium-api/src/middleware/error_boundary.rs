//! Terminal error normalization boundary.
//!
//! Every error response leaving the router — domain errors, framework
//! rejections, panics caught further in — is rewritten into the single
//! error envelope `{ success: false, message, statusCode }` with the
//! original status preserved. This middleware is infallible: whatever the
//! body looked like, a well-formed envelope goes out.

use axum::body::Body;
use axum::extract::Request;
use axum::http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use serde_json::Value;

use librarium_core::error::FALLBACK_ERROR_MESSAGE;

use crate::error::ErrorBody;

/// Largest error body the boundary will buffer.
const MAX_ERROR_BODY_BYTES: usize = 64 * 1024;

/// Rewrites any 4xx/5xx response into the error envelope.
pub async fn normalize_errors(request: Request, next: Next) -> Response {
    let response = next.run(request).await;
    let status = response.status();
    if !status.is_client_error() && !status.is_server_error() {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = axum::body::to_bytes(body, MAX_ERROR_BODY_BYTES)
        .await
        .unwrap_or_default();

    let body = ErrorBody::new(extract_message(&bytes), status.as_u16());
    let bytes = serde_json::to_vec(&body).unwrap_or_default();

    parts.headers.remove(CONTENT_LENGTH);
    parts
        .headers
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Response::from_parts(parts, Body::from(bytes))
}

/// Extracts a human-readable message from an arbitrary error payload.
///
/// Priority order:
/// 1. a plain string payload (JSON string or raw text) is used verbatim;
/// 2. an object with a `message` array joins the elements with `", "`,
///    an object with a `message` string uses it directly;
/// 3. anything else falls back to the generic message.
pub fn extract_message(payload: &[u8]) -> String {
    if let Ok(value) = serde_json::from_slice::<Value>(payload) {
        return message_from_value(&value);
    }
    match std::str::from_utf8(payload) {
        Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
        _ => FALLBACK_ERROR_MESSAGE.to_string(),
    }
}

fn message_from_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => match map.get("message") {
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(", "),
            Some(Value::String(s)) => s.clone(),
            _ => FALLBACK_ERROR_MESSAGE.to_string(),
        },
        _ => FALLBACK_ERROR_MESSAGE.to_string(),
    }
}
