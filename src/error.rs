//! Error type for rejected constructions.
//!
//! There is a single failure kind. It is raised once per failed construction
//! attempt and carries every violated rule, so callers can report all problems
//! with an input at once.

use crate::validation::{ValidationOutcome, Violation};

/// Result type returned by every validating constructor.
pub type ValidationResult<T> = Result<T, ValidationViolationError>;

/// A domain primitive could not be constructed because at least one rule failed.
///
/// The message has the form `"<TypeName> is not valid: <v1>; <v2>; ..."` with
/// every violation verbatim and in declaration order. The rejected candidate
/// values are not retained.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("{type_name} is not valid: {violations}")]
pub struct ValidationViolationError {
    type_name: &'static str,
    violations: ValidationOutcome,
}

impl ValidationViolationError {
    pub(crate) fn new(type_name: &'static str, violations: ValidationOutcome) -> Self {
        debug_assert!(violations.is_invalid());
        Self {
            type_name,
            violations,
        }
    }

    /// Name of the type whose construction was rejected.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn violations(&self) -> &ValidationOutcome {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations.into_violations()
    }

    /// Whether a violation with exactly this description was reported.
    pub fn has_violation(&self, description: &str) -> bool {
        self.violations.contains(description)
    }
}
