//! Error types for the payment-request-rs library.
//!
//! This module defines all error types that can occur while constructing,
//! validating, or presenting a payment request.

use thiserror::Error;

/// Main error type for payment request operations.
#[derive(Error, Debug)]
pub enum PaymentRequestError {
    /// The method-data sequence was empty or absent
    #[error("at least one payment method is required")]
    MissingMethodData,

    /// A method-data entry carried no payment method identifiers
    #[error("each payment method needs to include at least one payment method identifier")]
    MissingMethodIdentifier,

    /// The details dictionary was absent
    #[error("details is a required parameter")]
    MissingDetails,

    /// The details dictionary carried no total
    #[error("details must have a total")]
    MissingTotal,

    /// The total carried no amount
    #[error("details.total must have an amount")]
    MissingTotalAmount,

    /// An amount value did not match the decimal monetary value grammar
    #[error("invalid decimal monetary value: {0}")]
    InvalidAmount(String),

    /// The total amount value started with U+002D HYPHEN-MINUS
    #[error("total value amount cannot be negative")]
    NegativeTotal,

    /// A modifier total was missing its amount or failed the grammar
    #[error("invalid modifier total value: {0}")]
    InvalidModifierTotal(String),

    /// A modifier total amount value started with U+002D HYPHEN-MINUS
    #[error("modifier total value amount cannot be negative")]
    NegativeModifierTotal,

    /// The details dictionary pre-seeded the error member
    #[error("details.error cannot be set at construction")]
    ReservedFieldError,

    /// Error during JSON serialization of an opaque data member
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A lifecycle method was called in the wrong request state
    #[error("invalid request state: expected {expected}, got {actual}")]
    InvalidState {
        /// State the operation requires
        expected: &'static str,
        /// State the request was actually in
        actual: &'static str,
    },

    /// The end user dismissed the payment UI without paying
    #[error("payment request was aborted")]
    Aborted,

    /// The presenter reported a payment failure
    #[error("payment failed: {0}")]
    PaymentFailed(String),

    /// A shipping option id was selected that the request does not carry
    #[error("unknown shipping option: {0}")]
    UnknownShippingOption(String),

    /// A request with the same id is already registered
    #[error("a payment request with id {0} is already registered")]
    DuplicateRequestId(String),
}

/// Result type alias for payment request operations.
pub type Result<T> = std::result::Result<T, PaymentRequestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PaymentRequestError::InvalidAmount("12,50".to_string());
        assert_eq!(err.to_string(), "invalid decimal monetary value: 12,50");

        let err = PaymentRequestError::MissingMethodData;
        assert_eq!(err.to_string(), "at least one payment method is required");
    }

    #[test]
    fn test_error_conversion() {
        let json_err = serde_json::from_str::<i32>("not a number").unwrap_err();
        let err: PaymentRequestError = json_err.into();
        assert!(matches!(err, PaymentRequestError::Serialization(_)));
    }

    #[test]
    fn test_invalid_state_display() {
        let err = PaymentRequestError::InvalidState {
            expected: "created",
            actual: "closed",
        };
        assert_eq!(
            err.to_string(),
            "invalid request state: expected created, got closed"
        );
    }

    #[test]
    fn test_result_type() {
        fn returns_result() -> Result<i32> {
            Ok(42)
        }

        assert_eq!(returns_result().unwrap(), 42);
    }
}
