//! Data Transfer Objects for API requests.
//!
//! Response bodies reuse [`crate::domain::entities::PageviewItem`] directly,
//! errors are rendered by [`crate::error::AppError`].

pub mod pageviews;
