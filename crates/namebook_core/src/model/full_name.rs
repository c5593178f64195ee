//! Full-name parsing and comparison helpers.
//!
//! # Responsibility
//! - Split a stored full name into its first/last attribute parts.
//! - Provide the case-insensitive equality used by every lookup.
//! - Compose `"First Last"` strings from validated tokens.
//!
//! # Invariants
//! - Splitting never fails: a name without whitespace has no last part.
//! - `NameParts::last` is never `Some("")`.
//! - Case folding is per-codepoint and locale-independent.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static NAME_SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid name separator regex"));

/// First/last view over one stored full name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameParts<'a> {
    /// Text before the first whitespace run.
    pub first: &'a str,
    /// Text after the first whitespace run, if any.
    pub last: Option<&'a str>,
}

impl<'a> NameParts<'a> {
    /// Splits `full_name` into at most two parts on the first whitespace run.
    ///
    /// Leading whitespace is ignored so that `" Jane Doe"` still yields
    /// `first = "Jane"`. Trailing whitespace never produces an empty last part.
    pub fn split(full_name: &'a str) -> Self {
        let mut parts = NAME_SEPARATOR_RE.splitn(full_name.trim_start(), 2);
        let first = parts.next().unwrap_or_default();
        let last = parts
            .next()
            .map(str::trim_end)
            .filter(|value| !value.is_empty());
        Self { first, last }
    }
}

/// Compares two strings for equality ignoring letter case.
///
/// Both strings must have the same number of codepoints; each pair matches
/// when equal as-is, after single-char uppercasing, or after lowercasing the
/// uppercased forms.
pub fn eq_ignore_case(left: &str, right: &str) -> bool {
    left.chars().count() == right.chars().count()
        && left
            .chars()
            .zip(right.chars())
            .all(|(a, b)| chars_eq_ignore_case(a, b))
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    if a == b {
        return true;
    }
    let (upper_a, upper_b) = (simple_uppercase(a), simple_uppercase(b));
    upper_a == upper_b || simple_lowercase(upper_a) == simple_lowercase(upper_b)
}

// Why: multi-char expansions (`ß` -> `SS`, `İ` -> `i\u{307}`) would let
// names of different lengths compare equal; those chars map to themselves.
fn simple_uppercase(c: char) -> char {
    let mut mapped = c.to_uppercase();
    match (mapped.next(), mapped.next()) {
        (Some(upper), None) => upper,
        _ => c,
    }
}

fn simple_lowercase(c: char) -> char {
    let mut mapped = c.to_lowercase();
    match (mapped.next(), mapped.next()) {
        (Some(lower), None) => lower,
        _ => c,
    }
}

/// Validation errors for composing a full name from parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameFormatError {
    EmptyFirstName,
    EmptyLastName,
    /// A single name token contained whitespace.
    EmbeddedWhitespace(String),
}

impl Display for NameFormatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyFirstName => write!(f, "first name cannot be empty"),
            Self::EmptyLastName => write!(f, "last name cannot be empty"),
            Self::EmbeddedWhitespace(token) => {
                write!(f, "name token `{token}` must not contain whitespace")
            }
        }
    }
}

impl Error for NameFormatError {}

/// Builds a `"First Last"` full name from two single-word tokens.
///
/// Tokens are trimmed before validation.
///
/// # Errors
/// - `EmptyFirstName` / `EmptyLastName` when a token is blank.
/// - `EmbeddedWhitespace` when a token still contains whitespace after trim.
pub fn compose_full_name(first: &str, last: &str) -> Result<String, NameFormatError> {
    let first = first.trim();
    let last = last.trim();

    if first.is_empty() {
        return Err(NameFormatError::EmptyFirstName);
    }
    if last.is_empty() {
        return Err(NameFormatError::EmptyLastName);
    }
    for token in [first, last] {
        if NAME_SEPARATOR_RE.is_match(token) {
            return Err(NameFormatError::EmbeddedWhitespace(token.to_string()));
        }
    }

    Ok(format!("{first} {last}"))
}

#[cfg(test)]
mod tests {
    use super::{compose_full_name, eq_ignore_case, NameFormatError, NameParts};

    #[test]
    fn split_handles_two_tokens() {
        let parts = NameParts::split("Jane Doe");
        assert_eq!(parts.first, "Jane");
        assert_eq!(parts.last, Some("Doe"));
    }

    #[test]
    fn split_single_token_has_no_last_part() {
        let parts = NameParts::split("Madonna");
        assert_eq!(parts.first, "Madonna");
        assert_eq!(parts.last, None);

        let trailing = NameParts::split("Madonna   ");
        assert_eq!(trailing.first, "Madonna");
        assert_eq!(trailing.last, None);
    }

    #[test]
    fn split_keeps_remainder_after_first_separator() {
        let parts = NameParts::split("Mary Ann  Lee");
        assert_eq!(parts.first, "Mary");
        assert_eq!(parts.last, Some("Ann  Lee"));

        let tabbed = NameParts::split("Jane\t Doe");
        assert_eq!(tabbed.last, Some("Doe"));
    }

    #[test]
    fn split_ignores_leading_whitespace() {
        let parts = NameParts::split("  Jane Doe");
        assert_eq!(parts.first, "Jane");
        assert_eq!(parts.last, Some("Doe"));
    }

    #[test]
    fn split_empty_input_is_empty_first_part() {
        let parts = NameParts::split("");
        assert_eq!(parts.first, "");
        assert_eq!(parts.last, None);
    }

    #[test]
    fn eq_ignore_case_folds_ascii_and_unicode() {
        assert!(eq_ignore_case("JANE DOE", "jane doe"));
        assert!(eq_ignore_case("Ärla Öst", "ärla öst"));
        assert!(!eq_ignore_case("Jane Doe", "Jane Do"));
        assert!(!eq_ignore_case("Jane Doe", "Jane  Doe"));
    }

    #[test]
    fn eq_ignore_case_matches_final_sigma() {
        assert!(eq_ignore_case("ΟΔΥΣΣΕΥΣ Doe", "οδυσσευς doe"));
        assert!(eq_ignore_case("ς", "Σ"));
        assert!(eq_ignore_case("ς", "σ"));
    }

    #[test]
    fn eq_ignore_case_rejects_multi_char_expansions() {
        assert!(!eq_ignore_case("İ Lee", "i\u{307} lee"));
        assert!(!eq_ignore_case("Straße", "STRASSE"));
        assert!(eq_ignore_case("Straße", "STRAßE"));
    }

    #[test]
    fn compose_full_name_trims_and_joins() {
        assert_eq!(
            compose_full_name(" Jane ", "Doe").expect("valid tokens"),
            "Jane Doe"
        );
    }

    #[test]
    fn compose_full_name_rejects_bad_tokens() {
        assert_eq!(
            compose_full_name("  ", "Doe").expect_err("blank first token"),
            NameFormatError::EmptyFirstName
        );
        assert_eq!(
            compose_full_name("Jane", "").expect_err("empty last token"),
            NameFormatError::EmptyLastName
        );
        assert_eq!(
            compose_full_name("Mary Ann", "Lee").expect_err("first token has a space"),
            NameFormatError::EmbeddedWhitespace("Mary Ann".to_string())
        );
    }
}
