//! Catalog behavior configuration.

use serde::{Deserialize, Serialize};

/// Settings for catalog listing and export endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Default page size for list endpoints.
    #[serde(default = "default_page_size")]
    pub default_page_size: u64,
    /// Maximum page size a client may request.
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u64,
    /// Maximum number of rows a CSV export will emit.
    #[serde(default = "default_export_row_limit")]
    pub export_row_limit: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
            export_row_limit: default_export_row_limit(),
        }
    }
}

fn default_page_size() -> u64 {
    10
}

fn default_max_page_size() -> u64 {
    100
}

fn default_export_row_limit() -> usize {
    10_000
}
