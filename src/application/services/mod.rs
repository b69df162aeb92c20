//! Business logic services.

pub mod pageview_service;

pub use pageview_service::{Outcome, PageviewService};
