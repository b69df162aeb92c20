//! Remediation message for titles the upstream API has no data for.
//!
//! Most misses come from wrong capitalization (`michael_phelps` instead of
//! `Michael_Phelps`), so the message proposes title-cased alternatives.

use super::title_formatter::{is_multi_word, is_single_word, title_case};

/// Builds the user-facing message for an upstream 404.
///
/// - Single word: suggests the first-word-only title-cased form
/// - Multi word: suggests the first-word-only and the fully title-cased form
/// - Anything else: a generic `no results found`
pub fn not_found_message(title: &str) -> String {
    let suggestion = if is_single_word(title) {
        title_case(title, true)
    } else if is_multi_word(title) {
        format!("{} or {}", title_case(title, true), title_case(title, false))
    } else {
        return "no results found".to_string();
    };

    format!(
        "query for title {title} did not return any results. Consider title-casing it as {suggestion}."
    )
}
