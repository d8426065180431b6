//! Validated list-name newtype.
//!
//! # Responsibility
//! - Parse and normalize user-supplied list names.
//! - Guarantee that accepted names are safe as storage namespace identifiers.
//!
//! # Invariants
//! - Accepted names match `[A-Za-z_][A-Za-z0-9_]*` and are at most
//!   `MAX_LIST_NAME_CHARS` characters long.
//! - A `ListName` is only ever constructed through `parse`, so downstream
//!   code can embed it in structural SQL positions without escaping.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Upper bound on list name length, in characters.
pub const MAX_LIST_NAME_CHARS: usize = 64;

static LIST_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid list name regex"));

/// User-facing name of a todo list, doubling as its storage namespace key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ListName(String);

/// Rejection reasons for list name input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListNameError {
    /// Input is empty after trimming surrounding whitespace.
    Empty,
    /// Input exceeds `MAX_LIST_NAME_CHARS` characters.
    TooLong { length: usize },
    /// Input starts with an ASCII digit.
    LeadingDigit,
    /// Input contains a character outside `[A-Za-z0-9_]`.
    InvalidChar(char),
}

impl Display for ListNameError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "list name cannot be empty"),
            Self::TooLong { length } => write!(
                f,
                "list name is {length} characters long; at most {MAX_LIST_NAME_CHARS} allowed"
            ),
            Self::LeadingDigit => write!(f, "list name cannot start with a digit"),
            Self::InvalidChar(ch) => write!(
                f,
                "list name contains `{ch}`; only letters, digits and `_` are allowed"
            ),
        }
    }
}

impl Error for ListNameError {}

impl ListName {
    /// Parses a user-supplied name into a validated `ListName`.
    ///
    /// Surrounding whitespace is trimmed before validation.
    ///
    /// # Errors
    /// - `Empty` when nothing remains after trimming.
    /// - `TooLong` when the name exceeds `MAX_LIST_NAME_CHARS` characters.
    /// - `LeadingDigit` / `InvalidChar` when the allow-list pattern fails.
    pub fn parse(input: &str) -> Result<Self, ListNameError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ListNameError::Empty);
        }

        let length = trimmed.chars().count();
        if length > MAX_LIST_NAME_CHARS {
            return Err(ListNameError::TooLong { length });
        }

        if !LIST_NAME_RE.is_match(trimmed) {
            if trimmed.starts_with(|ch: char| ch.is_ascii_digit()) {
                return Err(ListNameError::LeadingDigit);
            }
            let offending = trimmed
                .chars()
                .find(|ch| !ch.is_ascii_alphanumeric() && *ch != '_')
                .unwrap_or('?');
            return Err(ListNameError::InvalidChar(offending));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Returns the validated name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ListName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ListName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        ListName::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::{ListName, ListNameError, MAX_LIST_NAME_CHARS};

    #[test]
    fn parse_accepts_allowed_names() {
        for name in ["groceries", "work_2026", "_scratch", "A"] {
            let parsed = ListName::parse(name).expect("name should parse");
            assert_eq!(parsed.as_str(), name);
        }
    }

    #[test]
    fn parse_trims_surrounding_whitespace() {
        let parsed = ListName::parse("  errands \n").expect("name should parse");
        assert_eq!(parsed.as_str(), "errands");
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert_eq!(ListName::parse("   "), Err(ListNameError::Empty));
    }

    #[test]
    fn parse_rejects_overlong_input() {
        let raw = "a".repeat(MAX_LIST_NAME_CHARS + 1);
        assert_eq!(
            ListName::parse(&raw),
            Err(ListNameError::TooLong {
                length: MAX_LIST_NAME_CHARS + 1
            })
        );
    }

    #[test]
    fn parse_rejects_leading_digit() {
        assert_eq!(ListName::parse("2026_goals"), Err(ListNameError::LeadingDigit));
    }

    #[test]
    fn parse_rejects_structural_characters() {
        assert_eq!(
            ListName::parse("groceries; DROP TABLE tasks"),
            Err(ListNameError::InvalidChar(';'))
        );
        assert_eq!(
            ListName::parse("week plan"),
            Err(ListNameError::InvalidChar(' '))
        );
    }
}
