//! The Payment Request construction algorithm.
//!
//! This module implements the structural checks and normalizations the W3C
//! Payment Request API performs at construction time: method data
//! processing, total and display item validation, shipping option
//! processing, modifier processing, and shipping type resolution. The
//! checks are pure, synchronous, fail-fast, and run in a fixed order.

use crate::errors::{PaymentRequestError, Result};
use crate::types::{
    PaymentCurrencyAmount, PaymentDetails, PaymentDetailsInit, PaymentItem, PaymentMethodData,
    PaymentOptions, PaymentShippingType, SerializedMethodData, ValidatedPaymentRequest,
};
use crate::utils::{generate_request_id, is_valid_decimal_monetary_value, serialize_opaque_data};
use serde_json::Value;
use std::collections::HashSet;

/// Source of fresh request ids, injected by the embedding environment.
pub trait RequestIdGenerator: Send + Sync {
    /// Returns a fresh id, unique within the embedding environment.
    fn generate_id(&self) -> String;
}

/// Serializer for the opaque `data` members of method data and modifiers.
pub trait OpaqueDataSerializer: Send + Sync {
    /// Serializes an opaque data member to its string form.
    fn serialize(&self, data: &Value) -> Result<String>;
}

/// Default id generator: random hex ids from [`generate_request_id`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl RequestIdGenerator for RandomIdGenerator {
    fn generate_id(&self) -> String {
        generate_request_id()
    }
}

/// Default serializer: JSON via [`serialize_opaque_data`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

impl OpaqueDataSerializer for JsonSerializer {
    fn serialize(&self, data: &Value) -> Result<String> {
        serialize_opaque_data(data)
    }
}

/// Runs the Payment Request construction algorithm over caller-supplied
/// method data, details, and options.
///
/// The validator owns its id generator and data serializer; both default to
/// the in-crate implementations and can be replaced for embedding.
///
/// # Examples
///
/// ```
/// use payment_request_rs::types::*;
/// use payment_request_rs::validate::Validator;
///
/// let method_data = vec![PaymentMethodData {
///     supported_methods: vec!["basic-card".to_string()],
///     data: None,
/// }];
/// let details = PaymentDetailsInit {
///     total: Some(PaymentItem {
///         label: "Total".to_string(),
///         amount: Some(PaymentCurrencyAmount {
///             currency: "USD".to_string(),
///             value: "55.00".to_string(),
///         }),
///     }),
///     ..Default::default()
/// };
///
/// let request = Validator::new()
///     .validate(&method_data, Some(&details), None)
///     .unwrap();
/// assert_eq!(request.details().total.amount.as_ref().unwrap().value, "55.00");
/// assert!(request.shipping_type().is_none());
/// ```
pub struct Validator {
    id_generator: Box<dyn RequestIdGenerator>,
    serializer: Box<dyn OpaqueDataSerializer>,
}

impl Validator {
    /// Creates a validator with the default id generator and serializer.
    pub fn new() -> Self {
        Self {
            id_generator: Box::new(RandomIdGenerator),
            serializer: Box::new(JsonSerializer),
        }
    }

    /// Replaces the id generator used when `details.id` is absent.
    pub fn with_id_generator(mut self, generator: impl RequestIdGenerator + 'static) -> Self {
        self.id_generator = Box::new(generator);
        self
    }

    /// Replaces the serializer used for opaque data members.
    pub fn with_serializer(mut self, serializer: impl OpaqueDataSerializer + 'static) -> Self {
        self.serializer = Box::new(serializer);
        self
    }

    /// Validates and normalizes a payment request.
    ///
    /// Checks run in the construction algorithm's fixed order and stop at
    /// the first violation:
    ///
    /// 1. `method_data` must be non-empty; each entry must carry at least
    ///    one method identifier, and its opaque data is serialized.
    /// 2. `details` and `details.total` must be present, and the total
    ///    amount must be a non-negative decimal monetary value.
    /// 3. Display item amounts must be decimal monetary values (any sign).
    /// 4. Shipping options are validated in order; a repeated option id
    ///    discards the whole sequence, and the last option flagged
    ///    `selected` becomes the selected shipping option.
    /// 5. Modifier totals must be non-negative decimal monetary values,
    ///    modifier display item amounts decimal monetary values; modifier
    ///    data is serialized and cleared from the normalized modifier.
    /// 6. `details.error` must be absent.
    /// 7. The shipping type resolves from `options` when shipping is
    ///    requested, defaulting to [`PaymentShippingType::Shipping`].
    pub fn validate(
        &self,
        method_data: &[PaymentMethodData],
        details: Option<&PaymentDetailsInit>,
        options: Option<&PaymentOptions>,
    ) -> Result<ValidatedPaymentRequest> {
        // Process payment methods. At least one method is required, and
        // each method needs at least one identifier.
        if method_data.is_empty() {
            return Err(PaymentRequestError::MissingMethodData);
        }
        let mut serialized_method_data = Vec::with_capacity(method_data.len());
        for method in method_data {
            if method.supported_methods.is_empty() {
                return Err(PaymentRequestError::MissingMethodIdentifier);
            }
            let serialized_data = match &method.data {
                Some(data) => Some(self.serializer.serialize(data)?),
                None => None,
            };
            serialized_method_data.push(SerializedMethodData {
                supported_methods: method.supported_methods.clone(),
                serialized_data,
            });
        }

        // Process the total. It must be present, match the grammar, and not
        // start with U+002D HYPHEN-MINUS.
        // TODO: validate the currency code as well, at least structurally.
        let details = details.ok_or(PaymentRequestError::MissingDetails)?;
        let total = details
            .total
            .as_ref()
            .ok_or(PaymentRequestError::MissingTotal)?;
        let total_amount = total
            .amount
            .as_ref()
            .ok_or(PaymentRequestError::MissingTotalAmount)?;
        if !is_valid_decimal_monetary_value(&total_amount.value) {
            return Err(PaymentRequestError::InvalidAmount(
                total_amount.value.clone(),
            ));
        }
        if total_amount.value.starts_with('-') {
            return Err(PaymentRequestError::NegativeTotal);
        }

        // Display items may carry any sign, but must match the grammar.
        let display_items = details.display_items.clone().unwrap_or_default();
        for item in &display_items {
            checked_amount(item.amount.as_ref())?;
        }

        // Process shipping options. The amount check runs before the
        // duplicate-id check; a repeated id discards the whole sequence and
        // ends the pass, leaving later options uninspected. The selected
        // option is then taken from the surviving sequence, last flag wins.
        let mut shipping_options = Vec::new();
        let mut selected_shipping_option = None;
        if let Some(input_options) = &details.shipping_options {
            let mut seen_ids = HashSet::new();
            for option in input_options {
                checked_amount(option.amount.as_ref())?;
                if !seen_ids.insert(option.id.clone()) {
                    shipping_options.clear();
                    break;
                }
                shipping_options.push(option.clone());
            }
            for option in &shipping_options {
                if option.selected {
                    selected_shipping_option = Some(option.id.clone());
                }
            }
        }

        // Process modifiers. Each modifier total must be a non-negative
        // decimal monetary value; additional display items may carry any
        // sign. The opaque data member is serialized into the side table
        // and removed from the normalized modifier.
        let mut modifiers = Vec::new();
        let mut serialized_modifier_data = Vec::new();
        if let Some(input_modifiers) = &details.modifiers {
            for modifier in input_modifiers {
                if let Some(modifier_total) = &modifier.total {
                    let amount = modifier_total.amount.as_ref().ok_or_else(|| {
                        PaymentRequestError::InvalidModifierTotal(String::new())
                    })?;
                    if !is_valid_decimal_monetary_value(&amount.value) {
                        return Err(PaymentRequestError::InvalidModifierTotal(
                            amount.value.clone(),
                        ));
                    }
                    if amount.value.starts_with('-') {
                        return Err(PaymentRequestError::NegativeModifierTotal);
                    }
                }
                if let Some(items) = &modifier.additional_display_items {
                    for item in items {
                        checked_amount(item.amount.as_ref())?;
                    }
                }
                let serialized = match &modifier.data {
                    Some(data) => Some(self.serializer.serialize(data)?),
                    None => None,
                };
                serialized_modifier_data.push(serialized);
                let mut normalized = modifier.clone();
                normalized.data = None;
                modifiers.push(normalized);
            }
        }

        // The error member is reserved for later updates and cannot be
        // seeded at construction.
        if details.error.is_some() {
            return Err(PaymentRequestError::ReservedFieldError);
        }

        // Resolve the shipping type. Only meaningful when shipping was
        // requested; unknown keywords fall back to "shipping".
        let shipping_type = match options {
            Some(options) if options.request_shipping => Some(
                options
                    .shipping_type
                    .as_deref()
                    .and_then(PaymentShippingType::parse)
                    .unwrap_or(PaymentShippingType::Shipping),
            ),
            _ => None,
        };

        let id = match &details.id {
            Some(id) => id.clone(),
            None => self.id_generator.generate_id(),
        };

        Ok(ValidatedPaymentRequest {
            id,
            method_data: serialized_method_data,
            details: PaymentDetails {
                id: details.id.clone(),
                total: PaymentItem {
                    label: total.label.clone(),
                    amount: Some(total_amount.clone()),
                },
                display_items,
                shipping_options,
                modifiers,
            },
            shipping_option: selected_shipping_option,
            shipping_type,
            serialized_modifier_data,
        })
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

/// Validates and normalizes a payment request with the default id generator
/// and serializer.
///
/// # Examples
///
/// ```
/// use payment_request_rs::types::*;
/// use payment_request_rs::validate::validate;
///
/// let method_data = vec![PaymentMethodData {
///     supported_methods: vec!["basic-card".to_string()],
///     data: None,
/// }];
///
/// let err = validate(&[], None, None).unwrap_err();
/// assert_eq!(err.to_string(), "at least one payment method is required");
///
/// let details = PaymentDetailsInit {
///     total: Some(PaymentItem {
///         label: "Total".to_string(),
///         amount: Some(PaymentCurrencyAmount {
///             currency: "USD".to_string(),
///             value: "5.00".to_string(),
///         }),
///     }),
///     ..Default::default()
/// };
/// assert!(validate(&method_data, Some(&details), None).is_ok());
/// ```
pub fn validate(
    method_data: &[PaymentMethodData],
    details: Option<&PaymentDetailsInit>,
    options: Option<&PaymentOptions>,
) -> Result<ValidatedPaymentRequest> {
    Validator::new().validate(method_data, details, options)
}

fn checked_amount(amount: Option<&PaymentCurrencyAmount>) -> Result<&PaymentCurrencyAmount> {
    let amount = amount
        .ok_or_else(|| PaymentRequestError::InvalidAmount(String::new()))?;
    if !is_valid_decimal_monetary_value(&amount.value) {
        return Err(PaymentRequestError::InvalidAmount(amount.value.clone()));
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PaymentDetailsModifier, PaymentShippingOption};
    use serde_json::json;

    fn usd(value: &str) -> PaymentCurrencyAmount {
        PaymentCurrencyAmount {
            currency: "USD".to_string(),
            value: value.to_string(),
        }
    }

    fn item(label: &str, value: &str) -> PaymentItem {
        PaymentItem {
            label: label.to_string(),
            amount: Some(usd(value)),
        }
    }

    fn shipping_option(id: &str, value: &str, selected: bool) -> PaymentShippingOption {
        PaymentShippingOption {
            id: id.to_string(),
            label: id.to_string(),
            amount: Some(usd(value)),
            selected,
        }
    }

    fn basic_method() -> Vec<PaymentMethodData> {
        vec![PaymentMethodData {
            supported_methods: vec!["basic-card".to_string()],
            data: None,
        }]
    }

    fn minimal_details() -> PaymentDetailsInit {
        PaymentDetailsInit {
            total: Some(item("Total", "55.00")),
            ..Default::default()
        }
    }

    struct FixedIdGenerator(&'static str);

    impl RequestIdGenerator for FixedIdGenerator {
        fn generate_id(&self) -> String {
            self.0.to_string()
        }
    }

    struct FailingSerializer;

    impl OpaqueDataSerializer for FailingSerializer {
        fn serialize(&self, _data: &Value) -> Result<String> {
            Err(PaymentRequestError::Serialization(
                <serde_json::Error as serde::ser::Error>::custom("boom"),
            ))
        }
    }

    #[test]
    fn test_empty_method_data_is_rejected() {
        let err = validate(&[], Some(&minimal_details()), None).unwrap_err();
        assert!(matches!(err, PaymentRequestError::MissingMethodData));
    }

    #[test]
    fn test_method_entry_without_identifier_is_rejected() {
        let method_data = vec![PaymentMethodData {
            supported_methods: vec![],
            data: None,
        }];
        let err = validate(&method_data, Some(&minimal_details()), None).unwrap_err();
        assert!(matches!(err, PaymentRequestError::MissingMethodIdentifier));
    }

    #[test]
    fn test_method_data_is_serialized_in_order() {
        let method_data = vec![
            PaymentMethodData {
                supported_methods: vec!["basic-card".to_string()],
                data: Some(json!({"supportedNetworks": ["visa"]})),
            },
            PaymentMethodData {
                supported_methods: vec!["https://example.com/pay".to_string()],
                data: None,
            },
        ];

        let request = validate(&method_data, Some(&minimal_details()), None).unwrap();
        assert_eq!(request.method_data().len(), 2);
        assert_eq!(
            request.method_data()[0].serialized_data.as_deref(),
            Some(r#"{"supportedNetworks":["visa"]}"#)
        );
        assert!(request.method_data()[1].serialized_data.is_none());
    }

    #[test]
    fn test_missing_details_chain() {
        let err = validate(&basic_method(), None, None).unwrap_err();
        assert!(matches!(err, PaymentRequestError::MissingDetails));

        let details = PaymentDetailsInit::default();
        let err = validate(&basic_method(), Some(&details), None).unwrap_err();
        assert!(matches!(err, PaymentRequestError::MissingTotal));

        let details = PaymentDetailsInit {
            total: Some(PaymentItem {
                label: "Total".to_string(),
                amount: None,
            }),
            ..Default::default()
        };
        let err = validate(&basic_method(), Some(&details), None).unwrap_err();
        assert!(matches!(err, PaymentRequestError::MissingTotalAmount));
    }

    #[test]
    fn test_total_grammar_and_sign() {
        let details = PaymentDetailsInit {
            total: Some(item("Total", "1,000.00")),
            ..Default::default()
        };
        let err = validate(&basic_method(), Some(&details), None).unwrap_err();
        assert!(matches!(err, PaymentRequestError::InvalidAmount(v) if v == "1,000.00"));

        let details = PaymentDetailsInit {
            total: Some(item("Total", "-5.00")),
            ..Default::default()
        };
        let err = validate(&basic_method(), Some(&details), None).unwrap_err();
        assert!(matches!(err, PaymentRequestError::NegativeTotal));

        let details = PaymentDetailsInit {
            total: Some(item("Total", "5.00")),
            ..Default::default()
        };
        assert!(validate(&basic_method(), Some(&details), None).is_ok());
    }

    #[test]
    fn test_display_items_allow_negative_amounts() {
        let details = PaymentDetailsInit {
            total: Some(item("Total", "55.00")),
            display_items: Some(vec![item("Subtotal", "60.00"), item("Discount", "-5.00")]),
            ..Default::default()
        };
        let request = validate(&basic_method(), Some(&details), None).unwrap();
        assert_eq!(request.details().display_items.len(), 2);
    }

    #[test]
    fn test_display_item_with_bad_amount_is_rejected() {
        let details = PaymentDetailsInit {
            total: Some(item("Total", "55.00")),
            display_items: Some(vec![item("Subtotal", "sixty")]),
            ..Default::default()
        };
        let err = validate(&basic_method(), Some(&details), None).unwrap_err();
        assert!(matches!(err, PaymentRequestError::InvalidAmount(v) if v == "sixty"));

        let details = PaymentDetailsInit {
            total: Some(item("Total", "55.00")),
            display_items: Some(vec![PaymentItem {
                label: "Subtotal".to_string(),
                amount: None,
            }]),
            ..Default::default()
        };
        let err = validate(&basic_method(), Some(&details), None).unwrap_err();
        assert!(matches!(err, PaymentRequestError::InvalidAmount(_)));
    }

    #[test]
    fn test_duplicate_shipping_ids_collapse_the_sequence() {
        let details = PaymentDetailsInit {
            total: Some(item("Total", "55.00")),
            shipping_options: Some(vec![
                shipping_option("fast", "10.00", true),
                shipping_option("fast", "20.00", false),
            ]),
            ..Default::default()
        };

        let request = validate(&basic_method(), Some(&details), None).unwrap();
        assert!(request.details().shipping_options.is_empty());
        assert!(request.shipping_option().is_none());
    }

    #[test]
    fn test_duplicate_shipping_id_stops_the_pass() {
        // The third option never gets its amount inspected once the second
        // repeats an id.
        let details = PaymentDetailsInit {
            total: Some(item("Total", "55.00")),
            shipping_options: Some(vec![
                shipping_option("a", "1.00", false),
                shipping_option("a", "2.00", false),
                shipping_option("b", "not-a-number", false),
            ]),
            ..Default::default()
        };

        let request = validate(&basic_method(), Some(&details), None).unwrap();
        assert!(request.details().shipping_options.is_empty());
    }

    #[test]
    fn test_shipping_amount_is_checked_before_duplicate_id() {
        let details = PaymentDetailsInit {
            total: Some(item("Total", "55.00")),
            shipping_options: Some(vec![
                shipping_option("a", "1.00", false),
                shipping_option("a", "bogus", false),
            ]),
            ..Default::default()
        };

        let err = validate(&basic_method(), Some(&details), None).unwrap_err();
        assert!(matches!(err, PaymentRequestError::InvalidAmount(v) if v == "bogus"));
    }

    #[test]
    fn test_last_selected_shipping_option_wins() {
        let details = PaymentDetailsInit {
            total: Some(item("Total", "55.00")),
            shipping_options: Some(vec![
                shipping_option("a", "1.00", true),
                shipping_option("b", "2.00", true),
            ]),
            ..Default::default()
        };

        let request = validate(&basic_method(), Some(&details), None).unwrap();
        assert_eq!(request.shipping_option(), Some("b"));
    }

    #[test]
    fn test_shipping_amounts_allow_negative_values() {
        let details = PaymentDetailsInit {
            total: Some(item("Total", "55.00")),
            shipping_options: Some(vec![shipping_option("free", "-2.00", true)]),
            ..Default::default()
        };

        let request = validate(&basic_method(), Some(&details), None).unwrap();
        assert_eq!(request.shipping_option(), Some("free"));
    }

    #[test]
    fn test_modifier_total_checks() {
        let details = PaymentDetailsInit {
            total: Some(item("Total", "55.00")),
            modifiers: Some(vec![PaymentDetailsModifier {
                total: Some(item("Card total", "nope")),
                ..Default::default()
            }]),
            ..Default::default()
        };
        let err = validate(&basic_method(), Some(&details), None).unwrap_err();
        assert!(matches!(err, PaymentRequestError::InvalidModifierTotal(v) if v == "nope"));

        let details = PaymentDetailsInit {
            total: Some(item("Total", "55.00")),
            modifiers: Some(vec![PaymentDetailsModifier {
                total: Some(item("Card total", "-1.00")),
                ..Default::default()
            }]),
            ..Default::default()
        };
        let err = validate(&basic_method(), Some(&details), None).unwrap_err();
        assert!(matches!(err, PaymentRequestError::NegativeModifierTotal));

        let details = PaymentDetailsInit {
            total: Some(item("Total", "55.00")),
            modifiers: Some(vec![PaymentDetailsModifier {
                total: Some(PaymentItem {
                    label: "Card total".to_string(),
                    amount: None,
                }),
                ..Default::default()
            }]),
            ..Default::default()
        };
        let err = validate(&basic_method(), Some(&details), None).unwrap_err();
        assert!(matches!(err, PaymentRequestError::InvalidModifierTotal(_)));
    }

    #[test]
    fn test_modifier_data_is_serialized_and_cleared() {
        let details = PaymentDetailsInit {
            total: Some(item("Total", "55.00")),
            modifiers: Some(vec![
                PaymentDetailsModifier {
                    data: Some(json!({"foo": 1})),
                    ..Default::default()
                },
                PaymentDetailsModifier::default(),
            ]),
            ..Default::default()
        };

        let request = validate(&basic_method(), Some(&details), None).unwrap();
        assert_eq!(
            request.serialized_modifier_data(),
            &[Some(r#"{"foo":1}"#.to_string()), None]
        );
        assert!(request.details().modifiers[0].data.is_none());
        assert!(request.details().modifiers[1].data.is_none());
    }

    #[test]
    fn test_modifier_additional_display_items_any_sign() {
        let details = PaymentDetailsInit {
            total: Some(item("Total", "55.00")),
            modifiers: Some(vec![PaymentDetailsModifier {
                additional_display_items: Some(vec![item("Card discount", "-2.00")]),
                ..Default::default()
            }]),
            ..Default::default()
        };
        assert!(validate(&basic_method(), Some(&details), None).is_ok());

        let details = PaymentDetailsInit {
            total: Some(item("Total", "55.00")),
            modifiers: Some(vec![PaymentDetailsModifier {
                additional_display_items: Some(vec![item("Card discount", "two")]),
                ..Default::default()
            }]),
            ..Default::default()
        };
        let err = validate(&basic_method(), Some(&details), None).unwrap_err();
        assert!(matches!(err, PaymentRequestError::InvalidAmount(v) if v == "two"));
    }

    #[test]
    fn test_preseeded_error_member_is_rejected() {
        let details = PaymentDetailsInit {
            total: Some(item("Total", "55.00")),
            error: Some("card declined".to_string()),
            ..Default::default()
        };
        let err = validate(&basic_method(), Some(&details), None).unwrap_err();
        assert!(matches!(err, PaymentRequestError::ReservedFieldError));
    }

    #[test]
    fn test_shipping_type_resolution() {
        let options = PaymentOptions {
            request_shipping: true,
            shipping_type: Some("pickup".to_string()),
        };
        let request =
            validate(&basic_method(), Some(&minimal_details()), Some(&options)).unwrap();
        assert_eq!(request.shipping_type(), Some(PaymentShippingType::Pickup));

        let options = PaymentOptions {
            request_shipping: true,
            shipping_type: Some("bogus".to_string()),
        };
        let request =
            validate(&basic_method(), Some(&minimal_details()), Some(&options)).unwrap();
        assert_eq!(request.shipping_type(), Some(PaymentShippingType::Shipping));

        let options = PaymentOptions {
            request_shipping: false,
            shipping_type: Some("pickup".to_string()),
        };
        let request =
            validate(&basic_method(), Some(&minimal_details()), Some(&options)).unwrap();
        assert!(request.shipping_type().is_none());

        let request = validate(&basic_method(), Some(&minimal_details()), None).unwrap();
        assert!(request.shipping_type().is_none());
    }

    #[test]
    fn test_caller_id_is_kept_and_generated_otherwise() {
        let details = PaymentDetailsInit {
            id: Some("order-123".to_string()),
            total: Some(item("Total", "55.00")),
            ..Default::default()
        };
        let request = validate(&basic_method(), Some(&details), None).unwrap();
        assert_eq!(request.id(), "order-123");

        let validator = Validator::new().with_id_generator(FixedIdGenerator("generated"));
        let request = validator
            .validate(&basic_method(), Some(&minimal_details()), None)
            .unwrap();
        assert_eq!(request.id(), "generated");
    }

    #[test]
    fn test_serializer_failures_propagate() {
        let method_data = vec![PaymentMethodData {
            supported_methods: vec!["basic-card".to_string()],
            data: Some(json!({})),
        }];
        let validator = Validator::new().with_serializer(FailingSerializer);
        let err = validator
            .validate(&method_data, Some(&minimal_details()), None)
            .unwrap_err();
        assert!(matches!(err, PaymentRequestError::Serialization(_)));
    }

    // Violations must surface in the documented order when several coexist
    // in one input.
    #[test]
    fn test_error_order_method_data_before_details() {
        let err = validate(&[], None, None).unwrap_err();
        assert!(matches!(err, PaymentRequestError::MissingMethodData));

        let method_data = vec![PaymentMethodData {
            supported_methods: vec![],
            data: None,
        }];
        let details = PaymentDetailsInit {
            total: Some(item("Total", "-5.00")),
            error: Some("seeded".to_string()),
            ..Default::default()
        };
        let err = validate(&method_data, Some(&details), None).unwrap_err();
        assert!(matches!(err, PaymentRequestError::MissingMethodIdentifier));
    }

    #[test]
    fn test_error_order_total_before_shipping_options() {
        let details = PaymentDetailsInit {
            total: Some(item("Total", "-5.00")),
            shipping_options: Some(vec![shipping_option("a", "bogus", false)]),
            ..Default::default()
        };
        let err = validate(&basic_method(), Some(&details), None).unwrap_err();
        assert!(matches!(err, PaymentRequestError::NegativeTotal));
    }

    #[test]
    fn test_error_order_display_items_before_shipping_options() {
        let details = PaymentDetailsInit {
            total: Some(item("Total", "55.00")),
            display_items: Some(vec![item("Subtotal", "abc")]),
            shipping_options: Some(vec![
                shipping_option("a", "1.00", false),
                shipping_option("a", "1.00", false),
            ]),
            ..Default::default()
        };
        let err = validate(&basic_method(), Some(&details), None).unwrap_err();
        assert!(matches!(err, PaymentRequestError::InvalidAmount(v) if v == "abc"));
    }

    #[test]
    fn test_error_order_modifiers_before_reserved_error() {
        let details = PaymentDetailsInit {
            total: Some(item("Total", "55.00")),
            modifiers: Some(vec![PaymentDetailsModifier {
                total: Some(item("Card total", "-1.00")),
                ..Default::default()
            }]),
            error: Some("seeded".to_string()),
            ..Default::default()
        };
        let err = validate(&basic_method(), Some(&details), None).unwrap_err();
        assert!(matches!(err, PaymentRequestError::NegativeModifierTotal));
    }

    #[test]
    fn test_normalized_sequences_are_always_present() {
        let request = validate(&basic_method(), Some(&minimal_details()), None).unwrap();
        assert!(request.details().display_items.is_empty());
        assert!(request.details().shipping_options.is_empty());
        assert!(request.details().modifiers.is_empty());
        assert!(request.serialized_modifier_data().is_empty());
    }
}
