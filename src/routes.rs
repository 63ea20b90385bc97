//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{code}`      - Short link redirect
//! - `GET  /health`      - Health check: database and metrics store
//! - `GET  /api/links`   - List every stored link
//! - `POST /api/links`   - Create a short link
//! - `GET  /api/metrics` - Per-link click totals
//!
//! `/health` is a static segment and wins over the `/{code}` capture, so
//! the literal code "health" is never routed to the redirect handler.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{
    create_link_handler, health_handler, list_links_handler, metrics_handler, redirect_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let api_router = Router::new()
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route("/metrics", get(metrics_handler));

    let router = Router::new()
        .route("/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
