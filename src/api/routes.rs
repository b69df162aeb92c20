//! API route configuration.

use crate::api::handlers::pageviews_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// Public query routes.
///
/// # Endpoints
///
/// - `GET /pageviews` - Monthly pageviews for an article (`title`, `date`)
pub fn routes() -> Router<AppState> {
    Router::new().route("/pageviews", get(pageviews_handler))
}
