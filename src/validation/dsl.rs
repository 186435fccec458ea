//! Rule composition.
//!
//! There is exactly one evaluation path, [`validate`]. The block-style
//! [`validation`] builder only collects rules and then hands them to it, so both
//! call shapes produce identical outcomes for identical rule sets.

use super::outcome::ValidationOutcome;
use super::rule::Rule;
use super::rules;
use regex::Regex;
use rust_decimal::Decimal;

/// Evaluate every rule in declaration order and collect all violations.
///
/// Evaluation never stops at the first failure.
pub fn validate<'a>(rules: impl IntoIterator<Item = Rule<'a>>) -> ValidationOutcome {
    rules.into_iter().filter_map(Rule::evaluate).collect()
}

/// Declare rules inside a block and evaluate them.
///
/// ```rust
/// use domain_primitives::validation;
///
/// let name = "  ";
/// let outcome = validation(|v| {
///     v.not_blank(name, "must not be blank");
///     v.min_length(name, "must have min length of 3", 3);
/// });
///
/// assert_eq!(outcome.to_string(), "must not be blank; must have min length of 3");
/// ```
pub fn validation<'a>(declare: impl FnOnce(&mut ValidationDsl<'a>)) -> ValidationOutcome {
    let mut dsl = ValidationDsl::new();
    declare(&mut dsl);
    dsl.finish()
}

/// Outcome for primitives that declare no rules.
pub fn no_validation() -> ValidationOutcome {
    ValidationOutcome::valid()
}

/// Imperative rule builder used by [`validation`].
///
/// Each method appends the rule of the same name from [`rules`] and returns the
/// builder, so declarations can be written as statements or chained.
#[derive(Debug, Default)]
pub struct ValidationDsl<'a> {
    rules: Vec<Rule<'a>>,
}

impl<'a> ValidationDsl<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an already built rule.
    pub fn rule(&mut self, rule: Rule<'a>) -> &mut Self {
        self.rules.push(rule);
        self
    }

    pub fn not_null<T: ?Sized + 'a>(
        &mut self,
        candidate: Option<&'a T>,
        description: impl Into<String>,
    ) -> &mut Self {
        self.rule(rules::not_null(candidate, description))
    }

    pub fn not_empty(
        &mut self,
        candidate: impl Into<Option<&'a str>>,
        description: impl Into<String>,
    ) -> &mut Self {
        self.rule(rules::not_empty(candidate, description))
    }

    pub fn not_blank(
        &mut self,
        candidate: impl Into<Option<&'a str>>,
        description: impl Into<String>,
    ) -> &mut Self {
        self.rule(rules::not_blank(candidate, description))
    }

    pub fn min_length(
        &mut self,
        candidate: impl Into<Option<&'a str>>,
        description: impl Into<String>,
        min: usize,
    ) -> &mut Self {
        self.rule(rules::min_length(candidate, description, min))
    }

    pub fn max_length(
        &mut self,
        candidate: impl Into<Option<&'a str>>,
        description: impl Into<String>,
        max: usize,
    ) -> &mut Self {
        self.rule(rules::max_length(candidate, description, max))
    }

    pub fn only_digits(
        &mut self,
        candidate: impl Into<Option<&'a str>>,
        description: impl Into<String>,
    ) -> &mut Self {
        self.rule(rules::only_digits(candidate, description))
    }

    pub fn matches_pattern(
        &mut self,
        candidate: impl Into<Option<&'a str>>,
        description: impl Into<String>,
        pattern: &'a Regex,
    ) -> &mut Self {
        self.rule(rules::matches_pattern(candidate, description, pattern))
    }

    pub fn not_zero(
        &mut self,
        candidate: impl Into<Option<&'a Decimal>>,
        description: impl Into<String>,
    ) -> &mut Self {
        self.rule(rules::not_zero(candidate, description))
    }

    pub fn greater_than_zero(
        &mut self,
        candidate: impl Into<Option<&'a Decimal>>,
        description: impl Into<String>,
    ) -> &mut Self {
        self.rule(rules::greater_than_zero(candidate, description))
    }

    pub fn max_scale(
        &mut self,
        candidate: impl Into<Option<&'a Decimal>>,
        description: impl Into<String>,
        max: u32,
    ) -> &mut Self {
        self.rule(rules::max_scale(candidate, description, max))
    }

    pub fn one_of<T: PartialEq + 'a>(
        &mut self,
        candidate: Option<&'a T>,
        description: impl Into<String>,
        allowed: &'a [T],
    ) -> &mut Self {
        self.rule(rules::one_of(candidate, description, allowed))
    }

    pub fn not_empty_items<T: 'a>(
        &mut self,
        candidate: Option<&'a [T]>,
        description: impl Into<String>,
    ) -> &mut Self {
        self.rule(rules::not_empty_items(candidate, description))
    }

    pub fn check<T: ?Sized + 'a>(
        &mut self,
        candidate: Option<&'a T>,
        description: impl Into<String>,
        predicate: impl FnOnce(&T) -> bool + 'a,
    ) -> &mut Self {
        self.rule(rules::check(candidate, description, predicate))
    }

    pub fn must(
        &mut self,
        description: impl Into<String>,
        predicate: impl FnOnce() -> bool + 'a,
    ) -> &mut Self {
        self.rule(rules::must(description, predicate))
    }

    /// Number of rules declared so far.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluate everything declared so far.
    pub fn finish(self) -> ValidationOutcome {
        validate(self.rules)
    }
}

impl<'a> Extend<Rule<'a>> for ValidationDsl<'a> {
    fn extend<I: IntoIterator<Item = Rule<'a>>>(&mut self, iter: I) {
        self.rules.extend(iter);
    }
}
