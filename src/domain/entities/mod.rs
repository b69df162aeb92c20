//! Domain entities.
//!
//! All entities are transient and built fresh for every request.

pub mod date_range;
pub mod pageview;

pub use date_range::DateRange;
pub use pageview::{PageviewItem, PageviewsEnvelope};
