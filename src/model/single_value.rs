//! Single-field value objects.
//!
//! A domain type with one field is declared as a zero-sized kind implementing
//! [`SingleValue`] and used through the generic [`SingleValueObject`] wrapper.

use super::primitive::{DomainPrimitive, construct};
use super::value_object::ValueObject;
use crate::error::ValidationResult;
use crate::validation::{ValidationDsl, ValidationOutcome, validation};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Declares the payload type, name and rules of a single-field value object.
///
/// A payload that may be absent is declared as `Option<T>`; its rules then see
/// `Option<&T>` candidates through `value.as_ref()` or `value.as_deref()`.
///
/// ```rust
/// use domain_primitives::{SingleValue, SingleValueObject, ValidationDsl};
///
/// enum ArticleNumberKind {}
///
/// impl SingleValue for ArticleNumberKind {
///     type Value = String;
///     const TYPE_NAME: &'static str = "ArticleNumber";
///
///     fn rules<'a>(value: &'a String, rules: &mut ValidationDsl<'a>) {
///         rules
///             .not_blank(value.as_str(), "Article number must not be blank")
///             .only_digits(value.as_str(), "Article number must only consist of numbers");
///     }
/// }
///
/// type ArticleNumber = SingleValueObject<ArticleNumberKind>;
///
/// let number = ArticleNumber::new("456".to_string()).unwrap();
/// assert_eq!(number.value(), "456");
///
/// let err = ArticleNumber::new("45a".to_string()).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "ArticleNumber is not valid: Article number must only consist of numbers"
/// );
/// ```
pub trait SingleValue {
    type Value;

    /// Name reported in failure messages.
    const TYPE_NAME: &'static str;

    fn rules<'a>(value: &'a Self::Value, rules: &mut ValidationDsl<'a>);
}

/// Validated wrapper around the single payload of kind `K`.
///
/// Equality and hashing are those of the payload.
pub struct SingleValueObject<K: SingleValue> {
    value: K::Value,
    kind: PhantomData<fn() -> K>,
}

impl<K: SingleValue> SingleValueObject<K> {
    /// Validate `value` against the rules of `K`.
    pub fn new(value: K::Value) -> ValidationResult<Self> {
        construct(Self {
            value,
            kind: PhantomData,
        })
    }

    pub fn value(&self) -> &K::Value {
        &self.value
    }

    pub fn into_value(self) -> K::Value {
        self.value
    }
}

impl<K: SingleValue> DomainPrimitive for SingleValueObject<K> {
    const TYPE_NAME: &'static str = K::TYPE_NAME;

    fn validate(&self) -> ValidationOutcome {
        validation(|rules| K::rules(&self.value, rules))
    }
}

impl<K> ValueObject for SingleValueObject<K>
where
    K: SingleValue,
    K::Value: Clone + Eq + Hash + fmt::Debug,
{
}

impl<K> Clone for SingleValueObject<K>
where
    K: SingleValue,
    K::Value: Clone,
{
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            kind: PhantomData,
        }
    }
}

impl<K> PartialEq for SingleValueObject<K>
where
    K: SingleValue,
    K::Value: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<K> Eq for SingleValueObject<K>
where
    K: SingleValue,
    K::Value: Eq,
{
}

impl<K> Hash for SingleValueObject<K>
where
    K: SingleValue,
    K::Value: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<K> fmt::Debug for SingleValueObject<K>
where
    K: SingleValue,
    K::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(K::TYPE_NAME).field(&self.value).finish()
    }
}

impl<K> fmt::Display for SingleValueObject<K>
where
    K: SingleValue,
    K::Value: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<K: SingleValue> AsRef<K::Value> for SingleValueObject<K> {
    fn as_ref(&self) -> &K::Value {
        &self.value
    }
}

#[cfg(feature = "serde")]
impl<K> serde::Serialize for SingleValueObject<K>
where
    K: SingleValue,
    K::Value: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, K> serde::Deserialize<'de> for SingleValueObject<K>
where
    K: SingleValue,
    K::Value: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <K::Value as serde::Deserialize<'de>>::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
