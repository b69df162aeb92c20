//! Domain layer: request parameters, entities, and the upstream collaborator seam.
//!
//! # Modules
//!
//! - [`params`] - Validated request parameters (`title`, `date`)
//! - [`entities`] - Pageview records and derived date ranges
//! - [`http_client`] - Trait abstracting the upstream HTTP transport

pub mod entities;
pub mod http_client;
pub mod params;
