//! Aggregate roots.

use super::primitive::DomainPrimitive;

/// Marker for the root of a consistency boundary.
///
/// An aggregate is built from parts that were each validated at their own
/// construction; its rules only cover conditions spanning those parts, such as
/// a non-empty item list or two addresses that must differ.
pub trait Aggregate: DomainPrimitive {}
