//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod pageviews;

pub use health::{healthcheck_handler, ping_handler};
pub use pageviews::pageviews_handler;
