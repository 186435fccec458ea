//! Violations and the aggregated outcome of evaluating a rule set.
//!
//! A [`ValidationOutcome`] is the only thing the construction contract looks at:
//! an empty outcome lets a candidate through, anything else rejects it with every
//! collected [`Violation`] attached.

use crate::error::{ValidationResult, ValidationViolationError};
use std::fmt;

/// Description of a single failed rule.
///
/// The text is kept verbatim as declared by the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Violation(String);

impl Violation {
    pub fn new(description: impl Into<String>) -> Self {
        Self(description.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Violation {
    fn from(description: &str) -> Self {
        Self::new(description)
    }
}

impl From<String> for Violation {
    fn from(description: String) -> Self {
        Self(description)
    }
}

/// Ordered collection of violations produced by one validation pass.
///
/// Order follows rule declaration order. Nothing is deduplicated or truncated:
/// two rules with the same description that both fail contribute two entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ValidationOutcome {
    violations: Vec<Violation>,
}

impl ValidationOutcome {
    /// Separator placed between violation descriptions in rendered messages.
    pub const SEPARATOR: &'static str = "; ";

    /// An outcome without violations.
    pub fn valid() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    /// Descriptions of all violations, in declaration order.
    pub fn descriptions(&self) -> impl Iterator<Item = &str> {
        self.violations.iter().map(Violation::as_str)
    }

    /// Whether any violation carries exactly this description.
    pub fn contains(&self, description: &str) -> bool {
        self.descriptions().any(|d| d == description)
    }

    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Turn the outcome into a pass/fail signal for the named type.
    pub fn into_result(self, type_name: &'static str) -> ValidationResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ValidationViolationError::new(type_name, self))
        }
    }
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, violation) in self.violations.iter().enumerate() {
            if index > 0 {
                f.write_str(Self::SEPARATOR)?;
            }
            f.write_str(violation.as_str())?;
        }
        Ok(())
    }
}

impl FromIterator<Violation> for ValidationOutcome {
    fn from_iter<I: IntoIterator<Item = Violation>>(iter: I) -> Self {
        Self {
            violations: iter.into_iter().collect(),
        }
    }
}

impl Extend<Violation> for ValidationOutcome {
    fn extend<I: IntoIterator<Item = Violation>>(&mut self, iter: I) {
        self.violations.extend(iter);
    }
}

impl IntoIterator for ValidationOutcome {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationOutcome {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}
