//! Single-field value object scenarios.

use crate::common::primitives::{ArticleNumber, Name, name};
use crate::{assert_error_message_contains, assert_validation_success, assert_violations};
use domain_primitives::{DomainPrimitive, ValidationViolationError};

#[test]
fn test_valid_name_keeps_payload() {
    let zaphod = name("Zaphod").unwrap();
    assert_eq!(zaphod.value().as_deref(), Some("Zaphod"));
    assert_eq!(zaphod.to_owned().into_value(), Some("Zaphod".to_string()));
}

#[test]
fn test_null_name() {
    crate::init_logging();

    let result = Name::new(None);
    assert_error_message_contains!(&result, "Name is not valid");
    assert_error_message_contains!(&result, "must not be null");
    assert_violations!(result, ["must not be null"]);
}

#[test]
fn test_blank_names() {
    for blank in ["    ", "\t", "\n"] {
        let result = name(blank);
        assert_error_message_contains!(&result, "Name is not valid");
        assert_error_message_contains!(&result, "must not be blank");
    }
}

#[test]
fn test_empty_name_reports_all_violations() {
    assert_violations!(name(""), ["must not be blank", "must have min length of 3"]);
}

#[test]
fn test_name_too_short() {
    let result = name("42");
    assert_error_message_contains!(&result, "Name is not valid");
    assert_violations!(result, ["must have min length of 3"]);
}

#[test]
fn test_name_too_long() {
    let result = name("Great Green Arkleseizure");
    assert_error_message_contains!(&result, "Name is not valid");
    assert_violations!(result, ["must have max length of 20"]);
}

#[test]
fn test_name_length_bounds_are_inclusive() {
    assert_validation_success!(name("Ford"));
    assert_validation_success!(name("abc"));
    assert_validation_success!(name("abcdefghijklmnopqrst"));
}

#[test]
fn test_error_carries_type_name() {
    let err: ValidationViolationError = name("").unwrap_err();
    assert_eq!(err.type_name(), "Name");
    assert_eq!(Name::TYPE_NAME, "Name");
}

#[test]
fn test_article_number() {
    assert_validation_success!(ArticleNumber::new("456".to_string()));

    let result = ArticleNumber::new("  ".to_string());
    assert_violations!(
        result,
        [
            "Article number must not be blank",
            "Article number must only consist of numbers"
        ]
    );
}

#[test]
fn test_display_shows_payload() {
    let number = ArticleNumber::new("798".to_string()).unwrap();
    assert_eq!(number.to_string(), "798");
}
