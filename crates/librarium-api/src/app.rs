//! Application builder — wires router + middleware + state into an Axum app.

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_middleware;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use librarium_core::config::AppConfig;
use librarium_core::error::AppError;
use librarium_core::result::AppResult;

use crate::middleware;
use crate::middleware::compression::build_compression_layer;
use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
///
/// Layer order matters: the status override and envelope formatter sit
/// closest to the handlers, and the error boundary wraps everything that
/// can produce an error status, including panics caught by
/// [`CatchPanicLayer`]. Every response therefore leaves in one of the two
/// normalized shapes.
pub fn build_app(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes;
    let cors = build_cors_layer(&state.config.server.cors);

    build_router(state)
        .layer(axum_middleware::from_fn(
            middleware::status_override::override_query_post_status,
        ))
        .layer(axum_middleware::from_fn(
            middleware::format::format_response,
        ))
        .layer(CatchPanicLayer::new())
        .layer(axum_middleware::from_fn(
            middleware::error_boundary::normalize_errors,
        ))
        .layer(DefaultBodyLimit::max(max_body))
        .layer(build_compression_layer())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
}

/// Runs the Librarium server with the given configuration.
pub async fn run_server(config: AppConfig) -> AppResult<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = AppState::new(config);
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Librarium server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {e}");
    }
}
