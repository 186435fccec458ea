//! Domain primitives gated by validation.
//!
//! Every type in this module shares one construction protocol
//! ([`DomainPrimitive`] + [`construct`]): rules are evaluated against the
//! candidate, and the candidate is returned only if none of them failed.
//!
//! ## Design Principles
//!
//! - **Immutable**: a change produces a new instance, validated from scratch
//! - **Self-validating**: construction is the only validation entry point
//! - **Exhaustive**: a rejected construction reports every violated rule
//! - **Structural**: value objects compare and hash by their fields

mod aggregate;
mod entity;
mod primitive;
mod single_value;
mod value_object;

pub use aggregate::Aggregate;
pub use entity::Entity;
pub use primitive::{DomainPrimitive, construct, finalize};
pub use single_value::{SingleValue, SingleValueObject};
pub use value_object::ValueObject;
