//! Article title parameter.

use std::fmt;

use super::ParamError;

/// Characters that can never appear in an article title.
pub const FORBIDDEN_CHARS: &[char] = &['#', '<', '>', '[', ']', '{', '}', '|'];

/// A page title that passed validation.
///
/// # Rules
///
/// Checked in order, first failure wins:
///
/// 1. Must not be empty
/// 2. Must not start with a lower case letter (digits and symbols are fine)
/// 3. Must not contain any of [`FORBIDDEN_CHARS`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleParam(String);

impl TitleParam {
    /// Validates a raw title.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::EmptyTitle`], [`ParamError::LowercaseTitle`] or
    /// [`ParamError::ForbiddenCharacters`] for the first rule that fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use wikiviews::domain::params::TitleParam;
    ///
    /// assert!(TitleParam::parse("Orca").is_ok());
    /// assert!(TitleParam::parse("123").is_ok());
    /// assert!(TitleParam::parse("orca").is_err());
    /// ```
    pub fn parse(raw: impl Into<String>) -> Result<Self, ParamError> {
        let raw = raw.into();

        let Some(first) = raw.chars().next() else {
            return Err(ParamError::EmptyTitle);
        };

        if first.is_alphabetic() && first.is_lowercase() {
            return Err(ParamError::LowercaseTitle(raw));
        }

        if raw.contains(FORBIDDEN_CHARS) {
            return Err(ParamError::ForbiddenCharacters(raw));
        }

        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for TitleParam {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TitleParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
