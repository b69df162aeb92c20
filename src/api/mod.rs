//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into pageview queries and formats
//! responses according to API contracts.
//!
//! # Modules
//!
//! - [`dto`] - Query parameter deserialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Rate limiting and request tracing middleware
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
