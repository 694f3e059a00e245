//! Core type definitions for the Payment Request API.
//!
//! This module contains the dictionary types a caller hands to the
//! constructor (method data, details, options) and the normalized record the
//! validation algorithm produces. Member names serialize with their W3C
//! spelling (camelCase) so fixtures written for browser test harnesses can be
//! loaded unchanged.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A monetary amount: a currency code and a decimal string value.
///
/// The `value` member must match the decimal monetary value grammar
/// `^-?[0-9]+(\.[0-9]+)?$`. The currency code is carried through untouched.
///
/// # Examples
///
/// ```
/// use payment_request_rs::types::PaymentCurrencyAmount;
///
/// let amount = PaymentCurrencyAmount {
///     currency: "USD".to_string(),
///     value: "55.00".to_string(),
/// };
/// assert_eq!(amount.value, "55.00");
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PaymentCurrencyAmount {
    /// Currency code (e.g., "USD")
    pub currency: String,

    /// Decimal monetary value as a string
    pub value: String,
}

/// A line item: a label and an amount.
///
/// Used for the total, for display items, and for modifier display items.
/// The amount is optional at the type level so that validation, not
/// deserialization, reports a missing amount.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PaymentItem {
    /// Human-readable description of the item
    #[serde(default)]
    pub label: String,

    /// Amount of the item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<PaymentCurrencyAmount>,
}

/// A payment method accepted by the merchant, with optional method-specific
/// configuration.
///
/// # Examples
///
/// ```
/// use payment_request_rs::types::PaymentMethodData;
/// use serde_json::json;
///
/// let method = PaymentMethodData {
///     supported_methods: vec!["basic-card".to_string()],
///     data: Some(json!({"supportedNetworks": ["visa"]})),
/// };
/// assert_eq!(method.supported_methods.len(), 1);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodData {
    /// Payment method identifiers (e.g., "basic-card")
    #[serde(default)]
    pub supported_methods: Vec<String>,

    /// Opaque method-specific data, serialized during validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// The normalized form of a [`PaymentMethodData`] entry: the identifiers
/// paired with the JSON serialization of the opaque data member.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SerializedMethodData {
    /// Payment method identifiers, in input order
    pub supported_methods: Vec<String>,

    /// JSON serialization of the data member, or `None` if it was absent
    pub serialized_data: Option<String>,
}

/// A shipping option the merchant offers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentShippingOption {
    /// Identifier, unique within one shippingOptions sequence
    pub id: String,

    /// Human-readable description of the option
    #[serde(default)]
    pub label: String,

    /// Shipping cost; any sign is allowed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<PaymentCurrencyAmount>,

    /// Whether the merchant pre-selected this option
    #[serde(default)]
    pub selected: bool,
}

/// A conditional adjustment to the total and display items, scoped to a
/// specific payment method.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetailsModifier {
    /// Replacement total when this modifier applies; must be non-negative
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<PaymentItem>,

    /// Extra line items when this modifier applies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_display_items: Option<Vec<PaymentItem>>,

    /// Opaque method-specific data; serialized during validation and then
    /// cleared from the normalized modifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// The details dictionary handed to the constructor.
///
/// Every member is optional at the type level; the validation algorithm
/// reports what is missing, in its fixed order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetailsInit {
    /// Caller-chosen request id; a fresh one is generated when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Total of the request; required, non-negative
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<PaymentItem>,

    /// Line items shown to the end user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_items: Option<Vec<PaymentItem>>,

    /// Shipping options; duplicate ids collapse the whole sequence to empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_options: Option<Vec<PaymentShippingOption>>,

    /// Method-scoped adjustments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<Vec<PaymentDetailsModifier>>,

    /// Must be absent at construction; reserved for later updates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// The normalized details record produced by validation.
///
/// Shape-stable: the sequences are always present (possibly empty), the
/// total carries a validated amount, and modifier data members are cleared.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetails {
    /// Request id, if the caller supplied one
    pub id: Option<String>,

    /// Validated, non-negative total
    pub total: PaymentItem,

    /// Validated line items
    pub display_items: Vec<PaymentItem>,

    /// Validated shipping options; empty when the input sequence carried a
    /// duplicate id
    pub shipping_options: Vec<PaymentShippingOption>,

    /// Validated modifiers with their data members cleared
    pub modifiers: Vec<PaymentDetailsModifier>,
}

impl From<PaymentDetails> for PaymentDetailsInit {
    /// Re-wraps a normalized details record as constructor input, e.g. to
    /// build a follow-up request for the same cart.
    fn from(details: PaymentDetails) -> Self {
        PaymentDetailsInit {
            id: details.id,
            total: Some(details.total),
            display_items: Some(details.display_items),
            shipping_options: Some(details.shipping_options),
            modifiers: Some(details.modifiers),
            error: None,
        }
    }
}

/// How the accepted payment will be fulfilled.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentShippingType {
    /// Physical delivery to a shipping address
    Shipping,
    /// Physical delivery, worded as "delivery" in the UI
    Delivery,
    /// The end user collects the goods
    Pickup,
}

impl PaymentShippingType {
    /// Parses a shipping type keyword, returning `None` for anything that is
    /// not one of "shipping", "delivery" or "pickup".
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "shipping" => Some(PaymentShippingType::Shipping),
            "delivery" => Some(PaymentShippingType::Delivery),
            "pickup" => Some(PaymentShippingType::Pickup),
            _ => None,
        }
    }

    /// Returns the keyword form of this shipping type.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentShippingType::Shipping => "shipping",
            PaymentShippingType::Delivery => "delivery",
            PaymentShippingType::Pickup => "pickup",
        }
    }
}

impl std::fmt::Display for PaymentShippingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The options dictionary handed to the constructor.
///
/// # Examples
///
/// ```
/// use payment_request_rs::types::PaymentOptions;
///
/// let options = PaymentOptions {
///     request_shipping: true,
///     shipping_type: Some("pickup".to_string()),
/// };
/// assert!(options.request_shipping);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOptions {
    /// Whether the request collects a shipping address and option
    #[serde(default)]
    pub request_shipping: bool,

    /// Requested shipping type keyword; invalid values resolve to "shipping"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_type: Option<String>,
}

/// A shipping address collected by the payment UI.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAddress {
    /// ISO 3166-1 alpha-2 country code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Street address lines
    #[serde(default)]
    pub address_line: Vec<String>,

    /// Top-level administrative subdivision
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// City or town
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// Sublocality below city level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependent_locality: Option<String>,

    /// Postal or ZIP code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// Sorting code, where postal systems use one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorting_code: Option<String>,

    /// BCP 47 language tag of the address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,

    /// Organization at the address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,

    /// Name of the recipient
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,

    /// Phone number of the recipient
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// The validated, frozen record the validation algorithm produces.
///
/// Fields are reachable only through accessors; the record never mutates
/// after construction.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedPaymentRequest {
    pub(crate) id: String,
    pub(crate) method_data: Vec<SerializedMethodData>,
    pub(crate) details: PaymentDetails,
    pub(crate) shipping_option: Option<String>,
    pub(crate) shipping_type: Option<PaymentShippingType>,
    pub(crate) serialized_modifier_data: Vec<Option<String>>,
}

impl ValidatedPaymentRequest {
    /// The request id: the caller-supplied `details.id`, or a generated one.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Normalized method data, in input order.
    pub fn method_data(&self) -> &[SerializedMethodData] {
        &self.method_data
    }

    /// The normalized details record.
    pub fn details(&self) -> &PaymentDetails {
        &self.details
    }

    /// Id of the pre-selected shipping option, if any survived validation.
    pub fn shipping_option(&self) -> Option<&str> {
        self.shipping_option.as_deref()
    }

    /// Resolved shipping type; `None` unless shipping was requested.
    pub fn shipping_type(&self) -> Option<PaymentShippingType> {
        self.shipping_type
    }

    /// JSON serializations of the modifier data members, in modifier order.
    pub fn serialized_modifier_data(&self) -> &[Option<String>] {
        &self.serialized_modifier_data
    }
}
