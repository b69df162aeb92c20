//! # WikiViews
//!
//! A small HTTP gateway for monthly Wikipedia article pageviews built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Validated parameters, entities, and the upstream client trait
//! - **Application Layer** ([`application`]) - Query orchestration and error translation
//! - **Infrastructure Layer** ([`infrastructure`]) - `reqwest` upstream client
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//! - **Utilities** ([`utils`]) - Date range expansion and title-casing
//!
//! ## Request Pipeline
//!
//! 1. `title` and `date` are validated ([`domain::params`])
//! 2. `YYYYMM` is expanded into a first/last day range ([`utils::date_formatter`])
//! 3. One GET request is sent upstream with the configured `User-Agent`
//! 4. The reply is translated: items on success, a title-casing suggestion on 404,
//!    an upstream error otherwise
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//! curl 'http://localhost:8080/pageviews?title=Orca&date=202402'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod logging;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{Outcome, PageviewService};
    pub use crate::domain::entities::{DateRange, PageviewItem};
    pub use crate::domain::http_client::{
        HttpClient, TransportError, UpstreamRequest, UpstreamResponse,
    };
    pub use crate::domain::params::{ParamError, TitleParam, YearMonth};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
