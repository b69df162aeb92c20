//! Application layer services implementing the request pipeline.
//!
//! Services compose domain validation, formatting helpers, and the upstream
//! [`crate::domain::http_client::HttpClient`] into a single operation that
//! HTTP handlers and the CLI call.
//!
//! # Available Services
//!
//! - [`services::pageview_service::PageviewService`] - Validates, queries upstream,
//!   and translates the upstream reply

pub mod services;
