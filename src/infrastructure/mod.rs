//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for talking to the upstream API.
//!
//! # Modules
//!
//! - [`http`] - `reqwest` implementation of the upstream HTTP client

pub mod http;
