//! CSV download response type.

use axum::http::HeaderValue;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};

/// A CSV attachment produced by an export endpoint.
///
/// Serves the body as `text/csv` with a
/// `Content-Disposition: attachment; filename="<name>.csv"` header. The
/// envelope middleware leaves non-JSON responses alone, so the file goes
/// out exactly as encoded.
#[derive(Debug, Clone)]
pub struct CsvFile {
    /// Attachment name without the `.csv` extension.
    pub filename: String,
    /// Full CSV text.
    pub content: String,
}

impl CsvFile {
    /// Creates a CSV attachment response.
    pub fn new(filename: impl Into<String>, content: String) -> Self {
        Self {
            filename: filename.into(),
            content,
        }
    }
}

impl IntoResponse for CsvFile {
    fn into_response(self) -> Response {
        let disposition = format!("attachment; filename=\"{}.csv\"", self.filename);
        let disposition = HeaderValue::from_str(&disposition)
            .unwrap_or_else(|_| HeaderValue::from_static("attachment"));
        (
            [
                (CONTENT_TYPE, HeaderValue::from_static("text/csv")),
                (CONTENT_DISPOSITION, disposition),
            ],
            self.content,
        )
            .into_response()
    }
}
