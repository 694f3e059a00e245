//! Utility functions shared by the validation algorithm and its callers.
//!
//! This module provides the decimal monetary value grammar check, request id
//! generation, and JSON serialization of opaque data members.

use crate::errors::Result;
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

lazy_static! {
    /// Grammar for a decimal monetary value: an optional leading minus, one
    /// or more digits, and an optional fractional part.
    static ref DECIMAL_MONETARY_VALUE: Regex =
        Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").expect("valid monetary value regex");
}

/// Checks a string against the decimal monetary value grammar
/// `^-?[0-9]+(\.[0-9]+)?$`.
///
/// # Examples
///
/// ```
/// use payment_request_rs::utils::is_valid_decimal_monetary_value;
///
/// assert!(is_valid_decimal_monetary_value("55.00"));
/// assert!(is_valid_decimal_monetary_value("-1.75"));
/// assert!(!is_valid_decimal_monetary_value("55."));
/// assert!(!is_valid_decimal_monetary_value("1,000"));
/// ```
pub fn is_valid_decimal_monetary_value(value: &str) -> bool {
    DECIMAL_MONETARY_VALUE.is_match(value)
}

/// Generates a fresh request id: 16 random bytes, hex encoded.
///
/// # Examples
///
/// ```
/// use payment_request_rs::utils::generate_request_id;
///
/// let id = generate_request_id();
/// assert_eq!(id.len(), 32);
/// ```
pub fn generate_request_id() -> String {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    let bytes: [u8; 16] = rng.gen();
    hex::encode(bytes)
}

/// Serializes an opaque data member to its JSON string form.
///
/// Serialization failures propagate untouched, wrapped as
/// [`PaymentRequestError::Serialization`](crate::errors::PaymentRequestError::Serialization).
///
/// # Examples
///
/// ```
/// use payment_request_rs::utils::serialize_opaque_data;
/// use serde_json::json;
///
/// let serialized = serialize_opaque_data(&json!({"foo": 1})).unwrap();
/// assert_eq!(serialized, r#"{"foo":1}"#);
/// ```
pub fn serialize_opaque_data(data: &Value) -> Result<String> {
    let serialized = serde_json::to_string(data)?;
    Ok(serialized)
}
