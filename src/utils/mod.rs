//! Parameter formatting helpers.
//!
//! This module provides pure functions used by the request pipeline:
//!
//! - [`date_formatter`] - Expands a `YYYYMM` date into a first/last day range
//! - [`title_formatter`] - Title-casing of underscore-delimited page titles
//! - [`suggestion`] - Remediation message for titles with no upstream results

pub mod date_formatter;
pub mod suggestion;
pub mod title_formatter;
