//! # Order Validation Pipeline
//!
//! Validates a raw JSON order payload field by field, accumulating every
//! violation rather than failing fast, then applies the USD→TWD
//! normalization. This is the single entry point the API layer calls.
//!
//! ## Check ordering invariant
//!
//! The price ceiling is checked against the amount *as submitted*, before
//! any currency conversion. Price and currency validation are independent:
//! a 100 USD order is never checked against the ceiling in its converted
//! TWD form.

use serde_json::{Map, Value};

use crate::currency::Currency;
use crate::error::{FieldError, FieldErrorMap, NON_FIELD_ERRORS};
use crate::order::{Address, Order};

/// Maximum accepted price, applied to the submitted (pre-conversion) amount.
pub const PRICE_CEILING: i64 = 2000;

/// Minimum accepted price. Together with [`PRICE_CEILING`] this bounds
/// every accepted amount so the USD→TWD multiplication cannot overflow.
pub const PRICE_FLOOR: i64 = 0;

/// Validate and normalize a raw order payload.
///
/// Returns the normalized [`Order`] (always TWD) when every check passes,
/// or a [`FieldErrorMap`] carrying every violation found. Pure function of
/// the input — no state survives between calls.
pub fn validate_order(raw: &Value) -> Result<Order, FieldErrorMap> {
    let mut errors = FieldErrorMap::new();

    let Some(object) = raw.as_object() else {
        errors.push(NON_FIELD_ERRORS, FieldError::NotAnObject);
        return Err(errors);
    };

    let id = string_field(object, "id", &mut errors);

    let name = string_field(object, "name", &mut errors);
    if let Some(name) = &name {
        for error in name_errors(name) {
            errors.push("name", error);
        }
    }

    let address = address_field(object, &mut errors);

    let price = integer_field(object, "price", &mut errors);
    if let Some(price) = price {
        if price < PRICE_FLOOR {
            errors.push("price", FieldError::PriceTooLow);
        } else if price > PRICE_CEILING {
            errors.push("price", FieldError::PriceTooHigh);
        }
    }

    let currency = currency_field(object, &mut errors);

    if errors.is_empty() {
        if let (Some(id), Some(name), Some(address), Some(price), Some(currency)) =
            (id, name, address, price, currency)
        {
            let order = Order {
                id,
                name,
                address,
                price,
                currency,
            };
            return Ok(order.into_twd());
        }
    }
    Err(errors)
}

/// Checks on a present, non-blank name. Independent of each other: a name
/// can fail both and both messages are reported.
fn name_errors(name: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if !name.is_ascii() {
        errors.push(FieldError::NonAsciiName);
    }
    let capitalized = name
        .split_whitespace()
        .all(|word| word.chars().next().is_some_and(char::is_uppercase));
    if !capitalized {
        errors.push(FieldError::NotCapitalized);
    }
    errors
}

/// Extract a required string field, recording missing/null/type/blank
/// violations against `key`. Surrounding whitespace is trimmed, so a
/// whitespace-only value is blank.
fn string_field(
    object: &Map<String, Value>,
    key: &str,
    errors: &mut FieldErrorMap,
) -> Option<String> {
    match object.get(key) {
        None => {
            errors.push(key, FieldError::Required);
            None
        }
        Some(Value::Null) => {
            errors.push(key, FieldError::Null);
            None
        }
        Some(Value::String(s)) if s.trim().is_empty() => {
            errors.push(key, FieldError::Blank);
            None
        }
        Some(Value::String(s)) => Some(s.trim().to_string()),
        Some(_) => {
            errors.push(key, FieldError::NotAString);
            None
        }
    }
}

/// Extract a required string sub-field of a nested object field,
/// recording violations under `field.sub_field`.
fn nested_string_field(
    fields: &Map<String, Value>,
    field: &str,
    sub_field: &str,
    errors: &mut FieldErrorMap,
) -> Option<String> {
    match fields.get(sub_field) {
        None => {
            errors.push_nested(field, sub_field, FieldError::Required);
            None
        }
        Some(Value::Null) => {
            errors.push_nested(field, sub_field, FieldError::Null);
            None
        }
        Some(Value::String(s)) if s.trim().is_empty() => {
            errors.push_nested(field, sub_field, FieldError::Blank);
            None
        }
        Some(Value::String(s)) => Some(s.trim().to_string()),
        Some(_) => {
            errors.push_nested(field, sub_field, FieldError::NotAString);
            None
        }
    }
}

/// Extract a required integer field.
fn integer_field(
    object: &Map<String, Value>,
    key: &str,
    errors: &mut FieldErrorMap,
) -> Option<i64> {
    match object.get(key) {
        None => {
            errors.push(key, FieldError::Required);
            None
        }
        Some(Value::Null) => {
            errors.push(key, FieldError::Null);
            None
        }
        Some(value) => match value.as_i64() {
            Some(n) => Some(n),
            None => {
                errors.push(key, FieldError::NotAnInteger);
                None
            }
        },
    }
}

/// Extract the required nested address, recording sub-field violations.
fn address_field(object: &Map<String, Value>, errors: &mut FieldErrorMap) -> Option<Address> {
    let fields = match object.get("address") {
        None => {
            errors.push("address", FieldError::Required);
            return None;
        }
        Some(Value::Null) => {
            errors.push("address", FieldError::Null);
            return None;
        }
        Some(Value::Object(fields)) => fields,
        Some(_) => {
            errors.push("address", FieldError::NotAnObject);
            return None;
        }
    };

    let city = nested_string_field(fields, "address", "city", errors);
    let district = nested_string_field(fields, "address", "district", errors);
    let street = nested_string_field(fields, "address", "street", errors);

    match (city, district, street) {
        (Some(city), Some(district), Some(street)) => Some(Address {
            city,
            district,
            street,
        }),
        _ => None,
    }
}

/// Extract and parse the required currency code.
fn currency_field(object: &Map<String, Value>, errors: &mut FieldErrorMap) -> Option<Currency> {
    let code = string_field(object, "currency", errors)?;
    match code.parse::<Currency>() {
        Ok(currency) => Some(currency),
        Err(error) => {
            errors.push("currency", error);
            None
        }
    }
}
