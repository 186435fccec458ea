//! Rule declaration and evaluation.
//!
//! A rule is a description plus a predicate over a borrowed candidate. Rules are
//! declared either as a list ([`validate`]) or inside a block ([`validation`]);
//! both run through the same evaluation path and yield a [`ValidationOutcome`]
//! holding every violation, in declaration order.
//!
//! ## Null handling
//!
//! Candidates are `Option<&T>`. [`rules::not_null`] is the only built-in that
//! reports an absent candidate; every other built-in treats it as out of scope
//! and passes without consulting its predicate. See [`NullPolicy`].

mod dsl;
mod outcome;
mod rule;
pub mod rules;

pub use dsl::{ValidationDsl, no_validation, validate, validation};
pub use outcome::{ValidationOutcome, Violation};
pub use rule::{NullPolicy, Rule, evaluate};
