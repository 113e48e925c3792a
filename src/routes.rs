//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health` - Static health payload
//! - `GET  /{code}` - Short link redirect (public)
//! - `/api/*`       - JSON management API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling
//! - **Fallbacks** - JSON 400/404/405 for unmatched requests

use crate::api;
use crate::api::handlers::{
    fallback_handler, health_handler, method_not_allowed_handler, redirect_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/api/urls/` and
/// `/api/urls` reach the same handler.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// All routes with tracing applied, without path normalization.
///
/// Unmatched paths and methods answer with the JSON error body.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .nest("/api", api::routes::api_routes())
        .method_not_allowed_fallback(method_not_allowed_handler)
        .fallback(fallback_handler)
        .with_state(state)
        .layer(tracing::layer())
}
