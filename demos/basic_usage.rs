//! # Basic Usage Example
//!
//! Declares a single-field and a multi-field value object, constructs valid and
//! invalid instances, and prints every violation collected along the way.
//!
//! Run with `RUST_LOG=domain_primitives=trace cargo run --example basic_usage`
//! to see each rule as it is rejected.

use domain_primitives::{
    DomainPrimitive, SingleValue, SingleValueObject, ValidationDsl, ValidationOutcome,
    ValidationResult, ValueObject, construct, validation,
};
use rust_decimal::Decimal;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

enum UserNameKind {}

impl SingleValue for UserNameKind {
    type Value = Option<String>;
    const TYPE_NAME: &'static str = "UserName";

    fn rules<'a>(value: &'a Option<String>, rules: &mut ValidationDsl<'a>) {
        rules
            .not_null(value.as_ref(), "must not be null")
            .not_blank(value.as_deref(), "must not be blank")
            .min_length(value.as_deref(), "must have min length of 3", 3)
            .max_length(value.as_deref(), "must have max length of 20", 20);
    }
}

type UserName = SingleValueObject<UserNameKind>;

const SUPPORTED_CURRENCIES: [&str; 3] = ["EUR", "USD", "CHF"];

/// Compared by amount, scale and currency: `12.10 EUR` is not `12.1 EUR`.
#[derive(Debug, Clone)]
struct Money {
    amount: Option<Decimal>,
    currency: Option<String>,
}

impl Money {
    fn new(amount: Option<Decimal>, currency: Option<&str>) -> ValidationResult<Self> {
        construct(Self {
            amount,
            currency: currency.map(str::to_string),
        })
    }

    fn scale(&self) -> Option<u32> {
        self.amount.map(|amount| amount.scale())
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.amount == other.amount
            && self.scale() == other.scale()
            && self.currency == other.currency
    }
}

impl Eq for Money {}

impl Hash for Money {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.amount.hash(state);
        self.scale().hash(state);
        self.currency.hash(state);
    }
}

impl DomainPrimitive for Money {
    const TYPE_NAME: &'static str = "Money";

    fn validate(&self) -> ValidationOutcome {
        validation(|v| {
            v.not_null(self.currency.as_ref(), "currency must not be null")
                .not_zero(self.amount.as_ref(), "amount must not be zero")
                .max_scale(self.amount.as_ref(), "amount must match fraction digits of 2", 2)
                .check(
                    self.currency.as_deref(),
                    "currency must be one of EUR, USD, CHF",
                    |code: &str| SUPPORTED_CURRENCIES.contains(&code),
                );
        })
    }
}

impl ValueObject for Money {}

/// Parse and validate; malformed amounts are errors, never absent amounts.
fn money(amount: &str, currency: Option<&str>) -> Result<Money, Box<dyn std::error::Error>> {
    let amount = Decimal::from_str(amount)?;
    Ok(Money::new(Some(amount), currency)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .format_timestamp_secs()
        .init();

    log::info!("Single-field value objects");

    let zaphod = UserName::new(Some("Zaphod".to_string()))?;
    log::info!("constructed {:?}", zaphod);

    for candidate in [None, Some(""), Some("42"), Some("Great Green Arkleseizure")] {
        match UserName::new(candidate.map(str::to_string)) {
            Ok(name) => log::info!("constructed {:?}", name),
            Err(err) => println!("{}", err),
        }
    }

    log::info!("Multi-field value objects");

    let price = money("12.10", Some("EUR"))?;
    for other in ["12.10", "12.1"] {
        let other = money(other, Some("EUR"))?;
        println!(
            "{:?} equals {:?}: {}",
            price,
            other,
            price.same_value_as(&other)
        );
    }

    for (amount, currency) in [("12.123", Some("CHF")), ("0.000", Some("JPY")), ("1", None)] {
        let amount = Decimal::from_str(amount)?;
        if let Err(err) = Money::new(Some(amount), currency) {
            println!("{}", err);
            println!("  as JSON: {}", serde_json::to_string(&err)?);
        }
    }

    let revised = price.revise(|draft| draft.currency = Some("GBP".to_string()));
    if let Err(err) = revised {
        println!("revision rejected: {}", err);
    }

    Ok(())
}
