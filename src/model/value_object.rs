//! Multi-field value objects and equality by value.
//!
//! Value objects have no identity: they are defined entirely by their field
//! values. Two value objects of the same type with pairwise-equal fields are
//! interchangeable for every purpose except address comparison.

use super::primitive::DomainPrimitive;
use std::fmt::Debug;
use std::hash::{DefaultHasher, Hash, Hasher};

/// Capability of an immutable, validated, structurally compared domain value.
///
/// Implementors derive `PartialEq`, `Eq` and `Hash` over all of their declared
/// fields, keep those fields private, and build instances only through
/// [`construct`](super::construct). Equality across different concrete types
/// is ruled out by the type system.
///
/// `rust_decimal::Decimal` compares numerically, ignoring scale. A value
/// object whose decimals must keep `12.10` and `12.1` apart implements
/// `PartialEq` and `Hash` by hand over each decimal and its `scale()`.
///
/// ```rust
/// use domain_primitives::{
///     DomainPrimitive, ValidationOutcome, ValidationResult, ValueObject, construct, validation,
/// };
///
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Range {
///     start: u32,
///     end: u32,
/// }
///
/// impl Range {
///     fn new(start: u32, end: u32) -> ValidationResult<Self> {
///         construct(Self { start, end })
///     }
/// }
///
/// impl DomainPrimitive for Range {
///     const TYPE_NAME: &'static str = "Range";
///
///     fn validate(&self) -> ValidationOutcome {
///         validation(|v| {
///             v.must("start must not exceed end", || self.start <= self.end);
///         })
///     }
/// }
///
/// impl ValueObject for Range {}
///
/// let a = Range::new(1, 5).unwrap();
/// let b = Range::new(1, 5).unwrap();
/// assert!(a.same_value_as(&b));
/// assert_eq!(a.value_hash(), b.value_hash());
/// assert!(Range::new(5, 1).is_err());
/// ```
pub trait ValueObject: DomainPrimitive + Clone + Eq + Hash + Debug {
    /// Whether both objects carry the same field values.
    fn same_value_as(&self, other: &Self) -> bool {
        self == other
    }

    /// Hash over all declared fields, consistent with [`same_value_as`](Self::same_value_as).
    ///
    /// Stable for the lifetime of the process only.
    fn value_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}
