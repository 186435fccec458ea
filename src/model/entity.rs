//! Entities: validated domain primitives identified by a business key.

use super::primitive::DomainPrimitive;
use std::fmt::Debug;
use std::hash::Hash;

/// A domain primitive with identity.
///
/// Entities go through the same construction protocol as value objects, but two
/// entities denote the same thing when their business keys match, even if
/// other fields differ.
pub trait Entity: DomainPrimitive {
    type Key: Clone + Eq + Hash + Debug;

    fn business_key(&self) -> &Self::Key;

    fn same_identity_as(&self, other: &Self) -> bool {
        self.business_key() == other.business_key()
    }
}
