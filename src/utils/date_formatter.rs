//! Expansion of a year-month into the day range the upstream API expects.

use crate::domain::entities::DateRange;
use crate::domain::params::YearMonth;

/// Days per month in a non-leap year, January first.
const MONTH_LENGTHS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Simplified leap year rule: every year divisible by 4.
///
/// Century years are NOT special-cased, so 1900 and 2100 count as leap years.
pub fn is_leap_year(year: u16) -> bool {
    year % 4 == 0
}

/// Number of days in the given month.
pub fn month_length(date: &YearMonth) -> u8 {
    if date.month() == 2 && is_leap_year(date.year()) {
        return 29;
    }

    MONTH_LENGTHS[usize::from(date.month() - 1)]
}

/// Expands `YYYYMM` into `(YYYYMM01, YYYYMMDD)` where `DD` is the last day.
///
/// # Examples
///
/// ```
/// use wikiviews::domain::params::YearMonth;
/// use wikiviews::utils::date_formatter::expand;
///
/// let range = expand(&YearMonth::parse("202402").unwrap());
/// assert_eq!(range.start, "20240201");
/// assert_eq!(range.end, "20240229");
/// ```
pub fn expand(date: &YearMonth) -> DateRange {
    DateRange::new(
        format!("{date}01"),
        format!("{date}{:02}", month_length(date)),
    )
}
