//! # Validation Errors — Field-Level Error Accumulation
//!
//! Defines the client-facing validation error messages and the ordered
//! field→messages map returned when an order payload is rejected.
//!
//! ## Design
//!
//! - Every error is a client input error. There is no retryable/fatal
//!   split and no internal error category at this layer.
//! - Errors accumulate: every applicable check runs for every field, and
//!   the map carries one ordered message list per failing field. Fields
//!   with no errors are omitted.
//! - Errors on `address` sub-fields nest one level, mirroring the request
//!   shape: `{"address": {"city": ["This field is required."]}}`.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Map key used for errors that cannot be attributed to a single field,
/// e.g. a payload that is valid JSON but not an object.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// A single validation error on one field.
///
/// The `Display` output of each variant is the exact message string sent
/// to clients; these are contract, not prose.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// A required field is absent from the payload.
    #[error("This field is required.")]
    Required,

    /// A field was submitted as JSON `null`.
    #[error("This field may not be null.")]
    Null,

    /// A required string field was submitted as the empty string.
    #[error("This field may not be blank.")]
    Blank,

    /// A string field was submitted with a non-string JSON type.
    #[error("Not a valid string.")]
    NotAString,

    /// The price field was submitted with a non-integer JSON type.
    #[error("A valid integer is required.")]
    NotAnInteger,

    /// A value that must be a JSON object was submitted as something else.
    #[error("Invalid data. Expected an object.")]
    NotAnObject,

    /// The name contains characters outside the ASCII range.
    #[error("Name contains non-English characters")]
    NonAsciiName,

    /// A whitespace-delimited token of the name does not start with an
    /// uppercase letter.
    #[error("Name is not capitalized")]
    NotCapitalized,

    /// The submitted price exceeds the ceiling.
    #[error("Price is over 2000")]
    PriceTooHigh,

    /// The submitted price is below the floor.
    #[error("Ensure this value is greater than or equal to 0.")]
    PriceTooLow,

    /// The currency code is outside the allow-list.
    #[error("Currency format is wrong")]
    InvalidCurrency,
}

impl Serialize for FieldError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The error list(s) recorded for one top-level field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
enum FieldErrorEntry {
    /// Messages attached directly to the field.
    Messages(Vec<FieldError>),
    /// Messages attached to sub-fields of a nested object (`address`).
    Nested(BTreeMap<String, Vec<FieldError>>),
}

/// Ordered mapping from field name to the validation errors for that field.
///
/// Serializes to the HTTP 400 response body. Field order is deterministic
/// (alphabetical), and the message list per field preserves the order in
/// which the checks ran.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrorMap {
    entries: BTreeMap<String, FieldErrorEntry>,
}

impl FieldErrorMap {
    /// Create an empty error map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error against a top-level field.
    pub fn push(&mut self, field: &str, error: FieldError) {
        let entry = self
            .entries
            .entry(field.to_string())
            .or_insert_with(|| FieldErrorEntry::Messages(Vec::new()));
        if let FieldErrorEntry::Messages(messages) = entry {
            messages.push(error);
        }
    }

    /// Record an error against a sub-field of a nested object field.
    pub fn push_nested(&mut self, field: &str, sub_field: &str, error: FieldError) {
        let entry = self
            .entries
            .entry(field.to_string())
            .or_insert_with(|| FieldErrorEntry::Nested(BTreeMap::new()));
        if let FieldErrorEntry::Nested(sub_entries) = entry {
            sub_entries
                .entry(sub_field.to_string())
                .or_default()
                .push(error);
        }
    }

    /// Returns true if no errors have been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of top-level fields carrying errors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The messages recorded directly against a top-level field, if any.
    pub fn messages(&self, field: &str) -> Option<&[FieldError]> {
        match self.entries.get(field)? {
            FieldErrorEntry::Messages(messages) => Some(messages),
            FieldErrorEntry::Nested(_) => None,
        }
    }

    /// The messages recorded against a sub-field of a nested field, if any.
    pub fn nested_messages(&self, field: &str, sub_field: &str) -> Option<&[FieldError]> {
        match self.entries.get(field)? {
            FieldErrorEntry::Nested(sub_entries) => {
                sub_entries.get(sub_field).map(Vec::as_slice)
            }
            FieldErrorEntry::Messages(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn field_error_serializes_to_contract_string() {
        let json = serde_json::to_value(FieldError::Required).unwrap();
        assert_eq!(json, json!("This field is required."));
        let json = serde_json::to_value(FieldError::PriceTooHigh).unwrap();
        assert_eq!(json, json!("Price is over 2000"));
        let json = serde_json::to_value(FieldError::PriceTooLow).unwrap();
        assert_eq!(json, json!("Ensure this value is greater than or equal to 0."));
    }

    #[test]
    fn empty_map_serializes_to_empty_object() {
        let map = FieldErrorMap::new();
        assert!(map.is_empty());
        assert_eq!(serde_json::to_value(&map).unwrap(), json!({}));
    }

    #[test]
    fn push_preserves_message_order() {
        let mut map = FieldErrorMap::new();
        map.push("name", FieldError::NonAsciiName);
        map.push("name", FieldError::NotCapitalized);
        assert_eq!(
            map.messages("name").unwrap(),
            &[FieldError::NonAsciiName, FieldError::NotCapitalized]
        );
        assert_eq!(
            serde_json::to_value(&map).unwrap(),
            json!({
                "name": [
                    "Name contains non-English characters",
                    "Name is not capitalized",
                ]
            })
        );
    }

    #[test]
    fn nested_entries_serialize_as_nested_map() {
        let mut map = FieldErrorMap::new();
        map.push_nested("address", "city", FieldError::Required);
        map.push_nested("address", "street", FieldError::Blank);
        assert_eq!(
            map.nested_messages("address", "city").unwrap(),
            &[FieldError::Required]
        );
        assert_eq!(
            serde_json::to_value(&map).unwrap(),
            json!({
                "address": {
                    "city": ["This field is required."],
                    "street": ["This field may not be blank."],
                }
            })
        );
    }

    #[test]
    fn fields_without_errors_are_omitted() {
        let mut map = FieldErrorMap::new();
        map.push("price", FieldError::PriceTooHigh);
        assert_eq!(map.len(), 1);
        assert!(map.messages("currency").is_none());
        let value = serde_json::to_value(&map).unwrap();
        assert!(value.get("currency").is_none());
    }

    #[test]
    fn field_order_is_deterministic() {
        let mut map = FieldErrorMap::new();
        map.push("price", FieldError::Required);
        map.push("id", FieldError::Required);
        map.push("currency", FieldError::Required);
        let serialized = serde_json::to_string(&map).unwrap();
        let currency = serialized.find("currency").unwrap();
        let id = serialized.find("id").unwrap();
        let price = serialized.find("price").unwrap();
        assert!(currency < id && id < price);
    }
}
