//! Status override for search/filter-as-POST endpoints.
//!
//! Some endpoints use POST to carry complex query bodies but are
//! semantically read-only, so a creation status must not leak out of them.

use axum::extract::Request;
use axum::http::{Method, StatusCode};
use axum::middleware::Next;
use axum::response::Response;

/// Path markers identifying read-only POST endpoints.
const QUERY_POST_MARKERS: [&str; 3] = ["/search", "/filter", "/advanced-filter"];

/// Whether a request is a read-only POST that must answer 200.
pub fn is_query_post(method: &Method, path: &str) -> bool {
    method == Method::POST && QUERY_POST_MARKERS.iter().any(|marker| path.contains(marker))
}

/// Forces successful responses of read-only POST endpoints to 200.
///
/// The body is untouched, and error statuses are never rewritten.
pub async fn override_query_post_status(request: Request, next: Next) -> Response {
    let applies = is_query_post(request.method(), request.uri().path());
    let mut response = next.run(request).await;
    if applies && response.status().is_success() && response.status() != StatusCode::OK {
        *response.status_mut() = StatusCode::OK;
    }
    response
}
