//! # payment-request-rs
//!
//! A Rust implementation of the W3C Payment Request API construction and
//! validation algorithm, for payment test harnesses.
//!
//! The Payment Request API specifies, step by step, how a browser must check
//! and normalize the method data, details, and options a merchant page hands
//! to the `PaymentRequest` constructor. This crate implements that algorithm
//! as a pure, synchronous validator with a typed error for every violated
//! rule, plus the thin lifecycle shell around it: the created / interactive
//! / closed state machine, an injectable presenter seam standing in for the
//! browser payment sheet, and a registry of live requests for harnesses that
//! drive several at once.
//!
//! ## Features
//!
//! - **Faithful validation**: the construction checks run in the order the
//!   API defines and stop at the first violation, including the quirk where
//!   a duplicated shipping option id silently empties the whole sequence
//! - **Typed errors**: every rule maps to a [`PaymentRequestError`] variant
//! - **Injectable environment**: the request id generator and the opaque
//!   data serializer are trait seams with in-crate defaults
//! - **Harness-friendly lifecycle**: presenters resolve requests
//!   programmatically; [`AutoPresenter`](present::auto::AutoPresenter)
//!   accepts, aborts, or fails on cue
//!
//! ## Quick Start
//!
//! ```
//! use payment_request_rs::types::*;
//! use payment_request_rs::validate::validate;
//!
//! let method_data = vec![PaymentMethodData {
//!     supported_methods: vec!["basic-card".to_string()],
//!     data: None,
//! }];
//! let details = PaymentDetailsInit {
//!     total: Some(PaymentItem {
//!         label: "Total".to_string(),
//!         amount: Some(PaymentCurrencyAmount {
//!             currency: "USD".to_string(),
//!             value: "55.00".to_string(),
//!         }),
//!     }),
//!     ..Default::default()
//! };
//!
//! let request = validate(&method_data, Some(&details), None).unwrap();
//! assert_eq!(request.details().total.amount.as_ref().unwrap().value, "55.00");
//! ```
//!
//! ## Validation Flow
//!
//! 1. **Method data**: at least one method, each with at least one
//!    identifier; opaque data serialized to strings
//! 2. **Total**: present, matching the decimal monetary value grammar,
//!    non-negative
//! 3. **Display items**: amounts matching the grammar, any sign
//! 4. **Shipping options**: amounts checked in order; a repeated id
//!    discards the whole sequence; the last `selected` flag wins
//! 5. **Modifiers**: non-negative totals, grammar-checked display items,
//!    data serialized into a side table and cleared
//! 6. **Error member**: must be absent at construction
//! 7. **Shipping type**: resolved from the options, defaulting to
//!    "shipping"
//!
//! ## References
//!
//! - [Payment Request API](https://www.w3.org/TR/payment-request/)
//! - [web-platform-tests for Payment Request](https://github.com/web-platform-tests/wpt/tree/master/payment-request)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod errors;
pub mod present;
pub mod registry;
pub mod request;
pub mod types;
pub mod utils;
pub mod validate;

// Re-export commonly used items
pub use errors::{PaymentRequestError, Result};
pub use present::{PaymentPresenter, PaymentResponse, PresentationOutcome};
pub use registry::RequestRegistry;
pub use request::{PaymentRequest, PaymentRequestState};
pub use types::{
    PaymentAddress, PaymentCurrencyAmount, PaymentDetails, PaymentDetailsInit,
    PaymentDetailsModifier, PaymentItem, PaymentMethodData, PaymentOptions, PaymentShippingOption,
    PaymentShippingType, SerializedMethodData, ValidatedPaymentRequest,
};
pub use validate::{validate, Validator};
