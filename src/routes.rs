//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /pageviews`    - Monthly article pageviews
//! - `GET /healthcheck`  - Liveness/readiness probe
//! - `GET /ping`         - Connectivity check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket over every route
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{healthcheck_handler, ping_handler};
use crate::api::middleware::{rate_limit, tracing};
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
/// - `requests_per_second` / `burst` - per-client-IP rate limit
pub fn app_router(state: AppState, requests_per_second: u32, burst: u32) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/healthcheck", get(healthcheck_handler))
        .route("/ping", get(ping_handler))
        .merge(api::routes::routes())
        .with_state(state)
        .layer(rate_limit::layer(requests_per_second, burst))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
