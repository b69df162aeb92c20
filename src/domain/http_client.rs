//! Upstream HTTP transport abstraction.
//!
//! The orchestrator only talks to the upstream API through [`HttpClient`], so
//! tests can substitute a stub and production uses
//! [`crate::infrastructure::http::ReqwestClient`].

use async_trait::async_trait;
use axum::http::{HeaderMap, Method};
use url::Url;

/// A single outgoing request.
#[derive(Debug, Clone)]
pub struct UpstreamRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
}

/// Raw upstream reply: status code and undecoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: String,
}

impl UpstreamResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// The request never produced a response (DNS, connect, TLS, body read, ...).
#[derive(Debug, Clone, thiserror::Error)]
#[error("upstream transport error: {0}")]
pub struct TransportError(pub String);

/// Sends requests to the upstream API.
///
/// Implementations must not retry; one call is one upstream request.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::ReqwestClient`] - `reqwest` based client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Sends the request and returns whatever status the upstream replied with.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] only when no HTTP response was received.
    async fn send(&self, request: UpstreamRequest) -> Result<UpstreamResponse, TransportError>;
}
