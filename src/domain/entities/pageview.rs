//! Pageview records returned by the upstream statistics API.

use serde::{Deserialize, Serialize};

/// One monthly pageview record for an article.
///
/// Produced by the upstream API and passed through untouched. Extra upstream
/// fields (`project`, `granularity`, `access`, `agent`) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageviewItem {
    pub article: String,
    pub timestamp: String,
    pub views: u64,
}

/// Upstream success body: `{"items": [...]}`.
#[derive(Debug, Deserialize)]
pub struct PageviewsEnvelope {
    pub items: Vec<PageviewItem>,
}
