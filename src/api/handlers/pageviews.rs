//! Handler for monthly article pageviews.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::pageviews::PageviewsQuery;
use crate::domain::entities::PageviewItem;
use crate::error::AppError;
use crate::state::AppState;

/// Returns monthly pageviews for an article.
///
/// # Endpoint
///
/// `GET /pageviews?title={title}&date={YYYYMM}`
///
/// # Query Parameters
///
/// - `title` (alias `article`): Article title, must not start lower case
/// - `date`: Year and month, e.g. `202402`
///
/// # Response
///
/// ```json
/// [
///   { "article": "Orca", "timestamp": "2024020100", "views": 250000 }
/// ]
/// ```
///
/// # Errors
///
/// All errors use the body `{"error": "<reason>"}`.
///
/// - **400 Bad Request**: Invalid title or date
/// - **404 Not Found**: No upstream data; the reason suggests a title-cased spelling
/// - **502 Bad Gateway**: Upstream unreachable, timed out, or replied unexpectedly
pub async fn pageviews_handler(
    State(state): State<AppState>,
    Query(params): Query<PageviewsQuery>,
) -> Result<Json<Vec<PageviewItem>>, AppError> {
    let items = state
        .pageview_service
        .handle(&params.title, &params.date)
        .await?;

    Ok(Json(items))
}
