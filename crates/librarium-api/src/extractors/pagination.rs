//! Pagination query parameter extractor.

use serde::{Deserialize, Serialize};

use librarium_core::config::catalog::CatalogConfig;
use librarium_core::types::PageRequest;

/// Query parameters for paginated endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Page number (1-based).
    pub page: Option<u64>,
    /// Items per page.
    pub limit: Option<u64>,
}

impl PaginationParams {
    /// Converts to a `PageRequest`, filling defaults and caps from config.
    pub fn into_page_request(self, config: &CatalogConfig) -> PageRequest {
        PageRequest::new(
            self.page.unwrap_or(1),
            self.limit
                .unwrap_or(config.default_page_size)
                .min(config.max_page_size),
        )
    }
}
