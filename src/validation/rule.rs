//! A single named predicate check and its null handling.

use super::outcome::Violation;
use std::fmt;

/// How a rule treats an absent candidate.
///
/// The two policies are distinct rule kinds: a content check never reports a
/// missing value, only an explicit not-null rule does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NullPolicy {
    /// An absent candidate is a violation; the predicate is not consulted.
    RequireNonNull,
    /// An absent candidate is out of scope; the predicate is never invoked.
    SkipOnNull,
}

/// Evaluate one check against a possibly absent candidate.
///
/// Returns the violation for `description` when the check fails, `None` when it
/// passes or is skipped.
pub fn evaluate<T: ?Sized>(
    candidate: Option<&T>,
    description: &str,
    predicate: impl FnOnce(&T) -> bool,
    policy: NullPolicy,
) -> Option<Violation> {
    judge(candidate.map(predicate), description, policy)
}

/// `verdict` is `None` when the candidate was absent.
fn judge(
    verdict: Option<bool>,
    description: impl Into<String>,
    policy: NullPolicy,
) -> Option<Violation> {
    match (verdict, policy) {
        (Some(true), _) | (None, NullPolicy::SkipOnNull) => None,
        (Some(false), _) | (None, NullPolicy::RequireNonNull) => Some(Violation::new(description)),
    }
}

/// A declared rule: a description, a null policy and a deferred check over a
/// borrowed candidate.
///
/// Rules are evaluated at most once; [`Rule::evaluate`] consumes the rule.
pub struct Rule<'a> {
    description: String,
    policy: Option<NullPolicy>,
    verdict: Box<dyn FnOnce() -> Option<bool> + 'a>,
}

impl<'a> Rule<'a> {
    pub fn new<T: ?Sized + 'a>(
        candidate: Option<&'a T>,
        description: impl Into<String>,
        policy: NullPolicy,
        predicate: impl FnOnce(&T) -> bool + 'a,
    ) -> Self {
        Self {
            description: description.into(),
            policy: Some(policy),
            verdict: Box::new(move || candidate.map(predicate)),
        }
    }

    /// A rule that only fails when the candidate is absent.
    pub fn require_non_null<T: ?Sized + 'a>(
        candidate: Option<&'a T>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(candidate, description, NullPolicy::RequireNonNull, |_| true)
    }

    /// A content check that ignores absent candidates.
    pub fn skip_on_null<T: ?Sized + 'a>(
        candidate: Option<&'a T>,
        description: impl Into<String>,
        predicate: impl FnOnce(&T) -> bool + 'a,
    ) -> Self {
        Self::new(candidate, description, NullPolicy::SkipOnNull, predicate)
    }

    /// A rule without a candidate, e.g. a condition spanning several fields.
    /// It is always evaluated and has no null policy.
    pub fn standalone(description: impl Into<String>, predicate: impl FnOnce() -> bool + 'a) -> Self {
        Self {
            description: description.into(),
            policy: None,
            verdict: Box::new(move || Some(predicate())),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// `None` for [`standalone`](Self::standalone) rules.
    pub fn policy(&self) -> Option<NullPolicy> {
        self.policy
    }

    pub fn evaluate(self) -> Option<Violation> {
        let Self {
            description,
            policy,
            verdict,
        } = self;

        // standalone rules always yield a verdict
        let policy = policy.unwrap_or(NullPolicy::RequireNonNull);
        let violation = judge(verdict(), description, policy);
        if let Some(violation) = &violation {
            log::trace!("rule violated: {}", violation);
        }
        violation
    }
}

impl fmt::Debug for Rule<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("description", &self.description)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
