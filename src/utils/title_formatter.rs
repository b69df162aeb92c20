//! Title-casing of underscore-delimited page titles.

use std::sync::LazyLock;

use regex::Regex;

/// Words kept lower case unless they open the title.
const ALWAYS_LOWER_WORDS: &[&str] = &["a", "an", "and", "in", "of", "on", "the", "to"];

/// Two or more word-character runs separated by single underscores.
static MULTI_WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\w+_)+\w+$").unwrap());

/// Returns true if `param` is a non-empty run of letters only.
pub fn is_single_word(param: &str) -> bool {
    !param.is_empty() && param.chars().all(char::is_alphabetic)
}

/// Returns true if `param` looks like `word_word[_word...]`.
pub fn is_multi_word(param: &str) -> bool {
    MULTI_WORD_REGEX.is_match(param)
}

/// Title-cases an underscore-delimited title.
///
/// The whole input is lower-cased first. With `first_word_only` set, only
/// the first segment gets a capital letter. Otherwise every segment does,
/// except [`ALWAYS_LOWER_WORDS`] after the first position.
///
/// # Examples
///
/// ```
/// use wikiviews::utils::title_formatter::title_case;
///
/// assert_eq!(title_case("call_of_the_wild", false), "Call_of_the_Wild");
/// assert_eq!(title_case("call_of_the_wild", true), "Call_of_the_wild");
/// ```
pub fn title_case(param: &str, first_word_only: bool) -> String {
    let lower = param.to_lowercase();

    lower
        .split('_')
        .enumerate()
        .map(|(i, word)| {
            if i == 0 {
                capitalize(word)
            } else if first_word_only || ALWAYS_LOWER_WORDS.contains(&word) {
                word.to_string()
            } else {
                capitalize(word)
            }
        })
        .collect::<Vec<_>>()
        .join("_")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        let cases = [
            ("michael_phelps", true, "Michael_phelps"),
            ("michael_phelps", false, "Michael_Phelps"),
            ("!!!", true, "!!!"),
            ("!!!", false, "!!!"),
            ("MICHAEL_PHELPS", true, "Michael_phelps"),
            ("MICHAEL_PHELPS", false, "Michael_Phelps"),
            ("mIcHaeL_pHeLPS", true, "Michael_phelps"),
            ("mIcHaeL_pHeLPS", false, "Michael_Phelps"),
            ("michael_Phelps", true, "Michael_phelps"),
            ("michael_Phelps", false, "Michael_Phelps"),
            ("MichaelPhelps", true, "Michaelphelps"),
            ("MichaelPhelps", false, "Michaelphelps"),
            ("Man_page", true, "Man_page"),
            ("MAN_PAGE", false, "Man_Page"),
            ("Orca", true, "Orca"),
            ("orca", false, "Orca"),
        ];

        for (param, first_word_only, expected) in cases {
            assert_eq!(
                title_case(param, first_word_only),
                expected,
                "title_case({param:?}, {first_word_only})"
            );
        }
    }

    #[test]
    fn test_stop_words_stay_lower_after_first_position() {
        assert_eq!(title_case("call_of_the_wild", false), "Call_of_the_Wild");
        assert_eq!(title_case("Call_Of_the_wild", false), "Call_of_the_Wild");
        assert_eq!(title_case("war_and_peace", false), "War_and_Peace");
        assert_eq!(title_case("gone_to_a_place", false), "Gone_to_a_Place");
    }

    #[test]
    fn test_stop_word_capitalized_when_first() {
        assert_eq!(title_case("on_golden_pond", false), "On_Golden_Pond");
        assert_eq!(title_case("the_an_a", false), "The_an_a");
        assert_eq!(title_case("a_tale", false), "A_Tale");
    }

    #[test]
    fn test_first_word_only_keeps_rest_lower() {
        assert_eq!(title_case("call_of_the_wild", true), "Call_of_the_wild");
        assert_eq!(title_case("On_golden_pond", true), "On_golden_pond");
    }

    #[test]
    fn test_empty_segments_survive() {
        assert_eq!(title_case("a__b", false), "A__B");
        assert_eq!(title_case("", false), "");
    }

    #[test]
    fn test_is_single_word() {
        assert!(is_single_word("Orca"));
        assert!(is_single_word("orca"));
        assert!(!is_single_word("michael_phelps"));
        assert!(!is_single_word("Michael_Phelps"));
        assert!(!is_single_word("R2D2"));
        assert!(!is_single_word(""));
        assert!(!is_single_word("!!!"));
    }

    #[test]
    fn test_is_multi_word() {
        assert!(is_multi_word("michael_phelps"));
        assert!(is_multi_word("Michael_Phelps"));
        assert!(is_multi_word("New_York_city"));
        assert!(is_multi_word("Apollo_11"));
        assert!(!is_multi_word("Orca"));
        assert!(!is_multi_word("orca"));
        assert!(!is_multi_word(""));
        assert!(!is_multi_word("!!!"));
        assert!(!is_multi_word("_ab"));
        assert!(!is_multi_word("ab_"));
    }
}
