//! Entities and aggregates built from validated parts.

use crate::common::money::{Currency, Price, decimal};
use crate::common::orders::{Address, Customer, Item, Order};
use crate::common::primitives::ArticleNumber;
use crate::{assert_error_message_contains, assert_validation_success, assert_violations};
use domain_primitives::Entity;

fn customer() -> Customer {
    Customer::new("123456", "asdf", "asdf@example.com", None).unwrap()
}

fn item(article_no: &str, price: &str) -> Item {
    Item::new(
        ArticleNumber::new(article_no.to_string()).unwrap(),
        Price::new(decimal(price), Currency::Eur).unwrap(),
    )
    .unwrap()
}

fn address(city: &str) -> Address {
    Address::new("Mr. Test", "Test Street 45", "12345", city, Some("DE")).unwrap()
}

#[test]
fn test_valid_order() {
    let order = Order::new(
        customer(),
        vec![item("456", "1.99"), item("798", "9.99")],
        address("Test City"),
        None,
    )
    .unwrap();

    assert_eq!(order.items().len(), 2);
    assert_eq!(order.items()[1].price().price(), decimal("9.99"));
    assert_eq!(order.customer().user_name(), "asdf");
}

#[test]
fn test_order_without_items() {
    let result = Order::new(customer(), vec![], address("Test City"), None);
    assert_error_message_contains!(&result, "Order is not valid");
    assert_violations!(result, ["Item List must not be empty"]);
}

#[test]
fn test_order_with_equal_addresses() {
    let result = Order::new(
        customer(),
        vec![],
        address("Test City"),
        Some(address("Test City")),
    );
    assert_violations!(
        result,
        [
            "Item List must not be empty",
            "Billing and shipping address must not be equal"
        ]
    );

    assert_validation_success!(Order::new(
        customer(),
        vec![item("456", "1.99")],
        address("Test City"),
        Some(address("Other City")),
    ));
}

#[test]
fn test_customer_with_blank_number() {
    let result = Customer::new("   ", "asdf", "asdf@example.com", None);
    assert_error_message_contains!(&result, "Customer number must not be blank");
    assert_error_message_contains!(&result, "Customer number must only consist of numbers");
}

#[test]
fn test_customer_with_invalid_email() {
    let result = Customer::new("123456", "asdf", "asdf@test@example.com", None);
    assert_violations!(result, ["email must be valid"]);
}

#[test]
fn test_customer_with_long_phone_number() {
    assert_validation_success!(Customer::new(
        "123456",
        "asdf",
        "asdf@example.com",
        Some("+49 123 456789")
    ));
    assert_violations!(
        Customer::new(
            "123456",
            "asdf",
            "asdf@example.com",
            Some("+49 123 456789 000 000 000 000 000")
        ),
        ["phone number must have max length of 30"]
    );
}

#[test]
fn test_customer_invalid_after_revision() {
    let customer = customer();

    let result = customer.with_customer_number("    ");
    assert_error_message_contains!(&result, "Customer number must not be blank");

    let renamed = customer.with_user_name("zaphod").unwrap();
    assert_eq!(renamed.user_name(), "zaphod");
    assert_eq!(customer.user_name(), "asdf");
}

#[test]
fn test_entities_compare_identity_by_business_key() {
    let original = customer();
    let renamed = original.with_user_name("zaphod").unwrap();

    assert_ne!(original, renamed);
    assert!(original.same_identity_as(&renamed));
    assert_eq!(original.business_key(), "123456");

    let cheap = item("456", "1.99");
    let expensive = item("456", "99.99");
    assert!(cheap.same_identity_as(&expensive));
    assert!(!cheap.same_identity_as(&item("798", "1.99")));
}

#[test]
fn test_address_country_code() {
    assert_validation_success!(Address::new("A", "B", "C", "D", None));
    assert_eq!(address("Test City").city(), "Test City");

    assert_violations!(
        Address::new("A", "B", "C", "D", Some("XX")),
        ["Country Code needs to be an existing one"]
    );
    assert_violations!(
        Address::new("", " ", "C", "D", Some("DE")),
        ["Name must not be blank", "Street must not be blank"]
    );
}
