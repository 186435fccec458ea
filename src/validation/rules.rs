//! Built-in rule kinds.
//!
//! Every function here only declares a [`Rule`]; nothing is evaluated until the
//! rule is handed to [`validate`](super::validate) or a
//! [`ValidationDsl`](super::ValidationDsl). Except for [`not_null`], all content
//! checks skip absent candidates, so a missing value is reported only by an
//! explicit not-null rule.
//!
//! ```rust
//! use domain_primitives::validation::{rules, validate};
//!
//! let name = "42";
//! let outcome = validate([
//!     rules::not_blank(name, "must not be blank"),
//!     rules::min_length(name, "must have min length of 3", 3),
//! ]);
//!
//! assert_eq!(outcome.to_string(), "must have min length of 3");
//! ```

use super::rule::Rule;
use regex::Regex;
use rust_decimal::Decimal;

/// Fails when the candidate is absent.
pub fn not_null<'a, T: ?Sized + 'a>(
    candidate: Option<&'a T>,
    description: impl Into<String>,
) -> Rule<'a> {
    Rule::require_non_null(candidate, description)
}

/// Fails on an empty string.
pub fn not_empty<'a>(
    candidate: impl Into<Option<&'a str>>,
    description: impl Into<String>,
) -> Rule<'a> {
    Rule::skip_on_null(candidate.into(), description, |value: &str| {
        !value.is_empty()
    })
}

/// Fails on an empty or all-whitespace string.
pub fn not_blank<'a>(
    candidate: impl Into<Option<&'a str>>,
    description: impl Into<String>,
) -> Rule<'a> {
    Rule::skip_on_null(candidate.into(), description, |value: &str| {
        !value.trim().is_empty()
    })
}

/// Fails when the string has fewer than `min` characters.
pub fn min_length<'a>(
    candidate: impl Into<Option<&'a str>>,
    description: impl Into<String>,
    min: usize,
) -> Rule<'a> {
    Rule::skip_on_null(candidate.into(), description, move |value: &str| {
        value.chars().count() >= min
    })
}

/// Fails when the string has more than `max` characters.
pub fn max_length<'a>(
    candidate: impl Into<Option<&'a str>>,
    description: impl Into<String>,
    max: usize,
) -> Rule<'a> {
    Rule::skip_on_null(candidate.into(), description, move |value: &str| {
        value.chars().count() <= max
    })
}

/// Fails unless every character is an ASCII digit. The empty string passes.
pub fn only_digits<'a>(
    candidate: impl Into<Option<&'a str>>,
    description: impl Into<String>,
) -> Rule<'a> {
    Rule::skip_on_null(candidate.into(), description, |value: &str| {
        value.chars().all(|c| c.is_ascii_digit())
    })
}

/// Fails unless `pattern` matches the whole string. Unanchored patterns are
/// treated as anchored at both ends.
///
/// Inline flags (`(?i)`) carry over to the whole-string check; options set
/// through `RegexBuilder` only apply to the first search.
pub fn matches_pattern<'a>(
    candidate: impl Into<Option<&'a str>>,
    description: impl Into<String>,
    pattern: &'a Regex,
) -> Rule<'a> {
    Rule::skip_on_null(candidate.into(), description, move |value: &str| {
        matches_whole(pattern, value)
    })
}

fn matches_whole(pattern: &Regex, value: &str) -> bool {
    match pattern.find(value) {
        None => false,
        Some(found) if found.start() == 0 && found.end() == value.len() => true,
        // leftmost-first may have settled on a shorter alternative
        Some(_) => match Regex::new(&format!(r"\A(?:{})\z", pattern.as_str())) {
            Ok(anchored) => anchored.is_match(value),
            Err(err) => {
                log::debug!("cannot anchor pattern {}: {}", pattern.as_str(), err);
                false
            }
        },
    }
}

/// Fails on a numeric zero, whatever its scale.
pub fn not_zero<'a>(
    candidate: impl Into<Option<&'a Decimal>>,
    description: impl Into<String>,
) -> Rule<'a> {
    Rule::skip_on_null(candidate.into(), description, |value: &Decimal| {
        !value.is_zero()
    })
}

/// Fails on zero or negative numbers.
pub fn greater_than_zero<'a>(
    candidate: impl Into<Option<&'a Decimal>>,
    description: impl Into<String>,
) -> Rule<'a> {
    Rule::skip_on_null(candidate.into(), description, |value: &Decimal| {
        *value > Decimal::ZERO
    })
}

/// Fails when the number carries more than `max` fraction digits.
pub fn max_scale<'a>(
    candidate: impl Into<Option<&'a Decimal>>,
    description: impl Into<String>,
    max: u32,
) -> Rule<'a> {
    Rule::skip_on_null(candidate.into(), description, move |value: &Decimal| {
        value.scale() <= max
    })
}

/// Fails when the candidate is not one of `allowed`.
pub fn one_of<'a, T: PartialEq + 'a>(
    candidate: Option<&'a T>,
    description: impl Into<String>,
    allowed: &'a [T],
) -> Rule<'a> {
    Rule::skip_on_null(candidate, description, move |value: &T| {
        allowed.contains(value)
    })
}

/// Fails on an empty collection.
pub fn not_empty_items<'a, T: 'a>(
    candidate: Option<&'a [T]>,
    description: impl Into<String>,
) -> Rule<'a> {
    Rule::skip_on_null(candidate, description, |items: &[T]| !items.is_empty())
}

/// Arbitrary predicate over a present candidate.
pub fn check<'a, T: ?Sized + 'a>(
    candidate: Option<&'a T>,
    description: impl Into<String>,
    predicate: impl FnOnce(&T) -> bool + 'a,
) -> Rule<'a> {
    Rule::skip_on_null(candidate, description, predicate)
}

/// Arbitrary condition without a candidate; never skipped.
pub fn must<'a>(description: impl Into<String>, predicate: impl FnOnce() -> bool + 'a) -> Rule<'a> {
    Rule::standalone(description, predicate)
}
