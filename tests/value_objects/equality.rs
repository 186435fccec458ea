//! Equality and hashing by value.

use crate::common::money::{Currency, MonetaryAmount, Price, decimal};
use crate::common::orders::Address;
use crate::common::primitives::name;
use domain_primitives::ValueObject;
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::HashSet;

#[test]
fn test_equal_fields_mean_equal_objects() {
    let first = MonetaryAmount::of("12.12", Currency::Eur).unwrap();
    let second = MonetaryAmount::of("12.12", Currency::Eur).unwrap();

    assert_eq!(first, second);
    assert!(first.same_value_as(&second));
    assert_eq!(first.value_hash(), second.value_hash());
}

#[test]
fn test_one_differing_field_breaks_equality() {
    let euros = MonetaryAmount::of("12.12", Currency::Eur).unwrap();

    assert_ne!(euros, MonetaryAmount::of("12.13", Currency::Eur).unwrap());
    assert_ne!(euros, MonetaryAmount::of("12.12", Currency::Usd).unwrap());
    assert_ne!(euros, MonetaryAmount::new(None, Some(Currency::Eur)).unwrap());
}

#[test]
fn test_decimal_fields_compare_value_and_scale() {
    let scaled = MonetaryAmount::of("12.10", Currency::Eur).unwrap();
    let short = MonetaryAmount::of("12.1", Currency::Eur).unwrap();

    assert_ne!(scaled, short);
    assert!(!scaled.same_value_as(&short));
    assert_eq!(scaled, MonetaryAmount::of("12.10", Currency::Eur).unwrap());
    assert_eq!(
        scaled.value_hash(),
        MonetaryAmount::of("12.10", Currency::Eur).unwrap().value_hash()
    );

    let price = Price::new(decimal("9.90"), Currency::Chf).unwrap();
    assert_ne!(price, Price::new(decimal("9.9"), Currency::Chf).unwrap());
    assert_eq!(price, Price::new(decimal("9.90"), Currency::Chf).unwrap());
}

#[test]
fn test_scale_keeps_amounts_apart_in_hash_sets() {
    let amounts: HashSet<MonetaryAmount> = ["12.1", "12.10", "12.1"]
        .into_iter()
        .map(|amount| MonetaryAmount::of(amount, Currency::Usd).unwrap())
        .collect();

    assert_eq!(amounts.len(), 2);
}

#[test]
fn test_single_value_objects_compare_payloads() {
    let zaphod = name("Zaphod").unwrap();

    assert_eq!(zaphod, name("Zaphod").unwrap());
    assert_ne!(zaphod, name("Arthur").unwrap());
    assert!(zaphod.same_value_as(&zaphod.clone()));
    assert_eq!(zaphod.value_hash(), name("Zaphod").unwrap().value_hash());
}

#[test]
fn test_value_objects_deduplicate_in_hash_sets() {
    let mut cities = HashSet::new();
    for city in ["Berlin", "Zurich", "Berlin", "Vienna", "Zurich"] {
        cities.insert(Address::new("Mr. Test", "Test Street 45", "12345", city, Some("DE")).unwrap());
    }

    assert_eq!(cities.len(), 3);
    assert!(cities.contains(
        &Address::new("Mr. Test", "Test Street 45", "12345", "Vienna", Some("DE")).unwrap()
    ));
}

proptest! {
    #[test]
    fn equal_inputs_give_equal_hashes(cents in 1i64..1_000_000) {
        let first = MonetaryAmount::new(Some(Decimal::new(cents, 2)), Some(Currency::Chf)).unwrap();
        let second = MonetaryAmount::new(Some(Decimal::new(cents, 2)), Some(Currency::Chf)).unwrap();

        prop_assert!(first.same_value_as(&second));
        prop_assert_eq!(first.value_hash(), second.value_hash());
    }

    #[test]
    fn differing_amounts_are_never_equal(a in 1i64..1_000_000, b in 1i64..1_000_000) {
        prop_assume!(a != b);
        let first = MonetaryAmount::new(Some(Decimal::new(a, 2)), Some(Currency::Usd)).unwrap();
        let second = MonetaryAmount::new(Some(Decimal::new(b, 2)), Some(Currency::Usd)).unwrap();

        prop_assert_ne!(first, second);
    }

    #[test]
    fn names_equal_exactly_when_payloads_equal(a in "[a-z]{3,20}", b in "[a-z]{3,20}") {
        let first = name(&a).unwrap();
        let second = name(&b).unwrap();

        prop_assert_eq!(first == second, a == b);
    }
}

#[test]
fn test_decimal_helper_parses_scale() {
    assert_eq!(decimal("12.10").scale(), 2);
}
