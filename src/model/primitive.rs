//! The construction protocol shared by every domain primitive.
//!
//! A construction attempt moves through
//! `CandidateReceived -> RulesEvaluated -> {Finalized, Rejected}` in a single
//! call: the candidate is assembled privately by the type's constructor, its
//! rules are evaluated, and only a candidate with an empty outcome is handed back.
//! A rejected candidate is dropped before the error reaches the caller.

use crate::error::ValidationResult;
use crate::validation::ValidationOutcome;

/// A type whose instances only exist in a validated state.
///
/// Implementors keep their fields private and route every constructor through
/// [`construct`]. There is no separate validate-then-build API.
///
/// ```rust
/// use domain_primitives::{DomainPrimitive, ValidationOutcome, ValidationResult, construct, validation};
///
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct CountryCode(String);
///
/// impl CountryCode {
///     fn new(code: impl Into<String>) -> ValidationResult<Self> {
///         construct(Self(code.into()))
///     }
/// }
///
/// impl DomainPrimitive for CountryCode {
///     const TYPE_NAME: &'static str = "CountryCode";
///
///     fn validate(&self) -> ValidationOutcome {
///         validation(|v| {
///             v.min_length(self.0.as_str(), "must have length of 2", 2);
///             v.max_length(self.0.as_str(), "must have length of 2", 2);
///         })
///     }
/// }
///
/// assert!(CountryCode::new("DE").is_ok());
/// let err = CountryCode::new("DEU").unwrap_err();
/// assert_eq!(err.to_string(), "CountryCode is not valid: must have length of 2");
/// ```
pub trait DomainPrimitive: Sized {
    /// Name reported in failure messages.
    const TYPE_NAME: &'static str;

    /// Evaluate this type's rules against the candidate's own fields.
    fn validate(&self) -> ValidationOutcome;

    /// Produce a changed copy, validated from scratch.
    ///
    /// `self` is left untouched; the changed candidate goes through
    /// [`construct`] like any other.
    fn revise(&self, change: impl FnOnce(&mut Self)) -> ValidationResult<Self>
    where
        Self: Clone,
    {
        let mut candidate = self.clone();
        change(&mut candidate);
        construct(candidate)
    }
}

/// Validate a candidate and either finalize it or reject it.
pub fn construct<T: DomainPrimitive>(candidate: T) -> ValidationResult<T> {
    let outcome = candidate.validate();
    finalize(T::TYPE_NAME, outcome, candidate)
}

/// Finish a construction whose outcome was computed by the caller.
///
/// `value` is returned only when `outcome` is empty.
pub fn finalize<T>(
    type_name: &'static str,
    outcome: ValidationOutcome,
    value: T,
) -> ValidationResult<T> {
    match outcome.into_result(type_name) {
        Ok(()) => {
            log::trace!("{} finalized", type_name);
            Ok(value)
        }
        Err(err) => {
            log::debug!(
                "{} rejected with {} violation(s)",
                type_name,
                err.violations().len()
            );
            Err(err)
        }
    }
}
