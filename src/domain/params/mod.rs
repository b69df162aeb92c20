//! Validated request parameters.
//!
//! Each parameter is a newtype that can only be built through its `parse`
//! constructor, so holding one proves the raw input passed validation.
//! Validation never touches the network and never reformats the input.

mod error;
mod title;
mod year_month;

pub use error::ParamError;
pub use title::{FORBIDDEN_CHARS, TitleParam};
pub use year_month::YearMonth;
