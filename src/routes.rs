//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`                    - Health check (public)
//! - `/api/{version}/sessions/*`      - Session REST API (Bearer token required)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - Bearer token resolved to a caller identity
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the route tree: public health check plus the authenticated session
/// API under its versioned base path.
///
/// Kept separate from [`app_router`] so integration tests can drive the full
/// route/auth wiring without the outer path-normalization service.
pub fn api_router(state: AppState, api_version: &str) -> Router {
    let session_router = api::routes::session_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .route("/health", get(health_handler))
        .nest(&format!("/api/{api_version}/sessions"), session_router)
        .with_state(state)
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `api_version` - version segment of the base path, e.g. `v1` for
///   `/api/v1/sessions`
pub fn app_router(state: AppState, api_version: &str) -> NormalizePath<Router> {
    let router = api_router(state, api_version).layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
