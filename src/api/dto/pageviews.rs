//! DTOs for the pageviews endpoint.

use serde::Deserialize;

/// Query string of `GET /pageviews`.
///
/// Missing parameters deserialize as empty strings so they are reported by
/// the validators with their dedicated "cannot be empty" reasons.
#[derive(Debug, Default, Deserialize)]
pub struct PageviewsQuery {
    /// Article title, e.g. `Orca` or `Michael_Phelps`. Also accepted as `article`.
    #[serde(default, alias = "article")]
    pub title: String,

    /// Year and month in form `YYYYMM`.
    #[serde(default)]
    pub date: String,
}
