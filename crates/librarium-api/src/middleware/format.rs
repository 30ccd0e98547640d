//! Success response envelope formatting.
//!
//! Wraps every 2xx JSON body into `{ data, meta?, message }`. Non-JSON
//! responses (CSV downloads) pass through untouched, and re-formatting an
//! already-enveloped body never nests `data` twice.

use axum::body::Body;
use axum::extract::Request;
use axum::http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde_json::{Map, Value, json};

use librarium_core::error::AppError;

use crate::error::ApiError;

/// Message substituted when a handler result carries none.
pub const SUCCESS_MESSAGE: &str = "Success";

/// Largest success body the formatter will buffer.
const MAX_FORMATTED_BODY_BYTES: usize = 4 * 1024 * 1024;

/// Wraps 2xx JSON responses into the success envelope.
pub async fn format_response(request: Request, next: Next) -> Response {
    let response = next.run(request).await;
    if !response.status().is_success() || !is_json(response.headers()) {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match axum::body::to_bytes(body, MAX_FORMATTED_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(_) => {
            return ApiError::from(AppError::internal("Response body exceeded formatting limit"))
                .into_response();
        }
    };
    if bytes.is_empty() {
        return Response::from_parts(parts, Body::empty());
    }

    let Ok(value) = serde_json::from_slice::<Value>(&bytes) else {
        // Declared JSON but unparsable; leave it alone.
        return Response::from_parts(parts, Body::from(bytes));
    };

    let bytes = serde_json::to_vec(&normalize_envelope(value)).unwrap_or_else(|_| bytes.to_vec());
    parts.headers.remove(CONTENT_LENGTH);
    Response::from_parts(parts, Body::from(bytes))
}

/// Shapes one handler result into the `{ data, meta?, message }` envelope.
///
/// A body with its own `data` key has `data`, `meta`, and `message` hoisted;
/// any other body becomes `data` wholesale, with `null` collapsing to the
/// empty-array sentinel. Idempotent over already-enveloped bodies.
pub fn normalize_envelope(value: Value) -> Value {
    let mut out = Map::new();
    match value {
        Value::Object(mut body) if body.contains_key("data") => {
            let data = match body.remove("data") {
                None | Some(Value::Null) => json!([]),
                Some(data) => data,
            };
            out.insert("data".to_string(), data);
            if let Some(meta) = body.remove("meta") {
                if !meta.is_null() {
                    out.insert("meta".to_string(), meta);
                }
            }
            let message = match body.remove("message") {
                Some(Value::String(message)) => message,
                _ => SUCCESS_MESSAGE.to_string(),
            };
            out.insert("message".to_string(), Value::String(message));
        }
        Value::Null => {
            out.insert("data".to_string(), json!([]));
            out.insert("message".to_string(), Value::String(SUCCESS_MESSAGE.into()));
        }
        other => {
            out.insert("data".to_string(), other);
            out.insert("message".to_string(), Value::String(SUCCESS_MESSAGE.into()));
        }
    }
    Value::Object(out)
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/json"))
}
