//! Self-validating domain primitives for Rust.
//!
//! Value objects, entities and aggregates whose construction is guarded by a
//! small rule engine. Every declared rule is evaluated, every failure is
//! collected, and construction either yields a consistent value or fails with a
//! single [`ValidationViolationError`] listing all violations.
//!
//! # Core Components
//!
//! - [`validation`](mod@validation) - rule declaration ([`rules`](validation::rules),
//!   [`ValidationDsl`]) and evaluation ([`validate`])
//! - [`DomainPrimitive`] / [`construct`] - the construction protocol
//! - [`SingleValueObject`] - generic wrapper for single-field value objects
//! - [`ValueObject`], [`Entity`], [`Aggregate`] - capabilities of domain types
//!
//! # Quick Start
//!
//! ```rust
//! use domain_primitives::{SingleValue, SingleValueObject, ValidationDsl};
//!
//! enum NameKind {}
//!
//! impl SingleValue for NameKind {
//!     type Value = String;
//!     const TYPE_NAME: &'static str = "Name";
//!
//!     fn rules<'a>(value: &'a String, rules: &mut ValidationDsl<'a>) {
//!         rules
//!             .not_blank(value.as_str(), "must not be blank")
//!             .min_length(value.as_str(), "must have min length of 3", 3)
//!             .max_length(value.as_str(), "must have max length of 20", 20);
//!     }
//! }
//!
//! type Name = SingleValueObject<NameKind>;
//!
//! assert_eq!(Name::new("Zaphod".to_string()).unwrap().value(), "Zaphod");
//!
//! let err = Name::new(" ".to_string()).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Name is not valid: must not be blank; must have min length of 3"
//! );
//! ```
//!
//! # Logging
//!
//! Rejections are logged at `debug` and individual violations at `trace`
//! through the [`log`] facade. No backend is installed by this crate.

pub mod error;
pub mod model;
pub mod validation;

pub use error::{ValidationResult, ValidationViolationError};
pub use model::{
    Aggregate, DomainPrimitive, Entity, SingleValue, SingleValueObject, ValueObject, construct,
    finalize,
};
pub use validation::{
    NullPolicy, Rule, ValidationDsl, ValidationOutcome, Violation, no_validation, validate,
    validation,
};
