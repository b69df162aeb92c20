//! Validation failures for request parameters.

/// Reason a raw query parameter was rejected.
///
/// The `Display` text is the human-readable reason returned to API clients.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParamError {
    #[error("title param is invalid: param cannot be empty")]
    EmptyTitle,

    #[error("title param {0} is invalid: param must not begin with a lower case character")]
    LowercaseTitle(String),

    #[error("title param {0} is invalid: param must not contain chars #<>[]{{}}|")]
    ForbiddenCharacters(String),

    #[error("date param is invalid: param cannot be empty. Please enter in form YYYYMM")]
    EmptyDate,

    #[error("date param is invalid: please enter a valid year and month in form YYYYMM")]
    InvalidDate,
}
