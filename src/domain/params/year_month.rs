//! Year-month (`YYYYMM`) date parameter.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::ParamError;

/// Four digit year starting with 1 or 2, followed by a month 01-12.
static YEAR_MONTH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[12][0-9]{3}(0[1-9]|1[0-2])$").unwrap());

/// A `YYYYMM` date that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearMonth {
    raw: String,
    year: u16,
    month: u8,
}

impl YearMonth {
    /// Validates a raw `YYYYMM` string.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::EmptyDate`] for an empty string and
    /// [`ParamError::InvalidDate`] for anything else that does not match.
    pub fn parse(raw: impl Into<String>) -> Result<Self, ParamError> {
        let raw = raw.into();

        if raw.is_empty() {
            return Err(ParamError::EmptyDate);
        }

        if !YEAR_MONTH_REGEX.is_match(&raw) {
            return Err(ParamError::InvalidDate);
        }

        let year = raw[..4].parse().map_err(|_| ParamError::InvalidDate)?;
        let month = raw[4..].parse().map_err(|_| ParamError::InvalidDate)?;

        Ok(Self { raw, year, month })
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    /// Month number, 1-12.
    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.raw.fmt(f)
    }
}
