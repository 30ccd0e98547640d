//! Response compression layer.

use tower_http::compression::CompressionLayer;

/// Build the gzip compression layer.
pub fn build_compression_layer() -> CompressionLayer {
    CompressionLayer::new()
}
