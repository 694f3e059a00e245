//! Payment request lifecycle.
//!
//! A [`PaymentRequest`] wraps a validated record in the created /
//! interactive / closed state machine of the API. `show` opens the
//! interactive phase; while it lasts, the embedding harness can play the end
//! user (change the shipping address, pick a shipping option, abort), and
//! `settle` hands the request to a [`PaymentPresenter`] for the final
//! decision. The pending-promise shape of the browser API maps onto
//! `settle`'s future.

use crate::errors::{PaymentRequestError, Result};
use crate::present::{PaymentPresenter, PaymentResponse, PresentationOutcome};
use crate::types::{
    PaymentAddress, PaymentDetailsInit, PaymentMethodData, PaymentOptions, PaymentShippingType,
    ValidatedPaymentRequest,
};
use crate::validate::validate;

/// Lifecycle state of a payment request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentRequestState {
    /// Constructed and validated, not yet shown
    Created,
    /// Shown to the end user, awaiting a decision
    Interactive,
    /// Settled, aborted, or failed
    Closed,
}

impl PaymentRequestState {
    /// Returns the keyword form of this state.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentRequestState::Created => "created",
            PaymentRequestState::Interactive => "interactive",
            PaymentRequestState::Closed => "closed",
        }
    }
}

type AddressListener = Box<dyn Fn(&PaymentAddress) + Send + Sync>;
type OptionListener = Box<dyn Fn(&str) + Send + Sync>;

/// A validated payment request with its lifecycle state.
///
/// # Examples
///
/// ```
/// use payment_request_rs::request::PaymentRequest;
/// use payment_request_rs::types::*;
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
/// let request = PaymentRequest::new(&method_data, Some(&details), None).unwrap();
/// assert_eq!(request.state().as_str(), "created");
/// ```
pub struct PaymentRequest {
    record: ValidatedPaymentRequest,
    state: PaymentRequestState,
    shipping_address: Option<PaymentAddress>,
    shipping_option: Option<String>,
    address_listeners: Vec<AddressListener>,
    option_listeners: Vec<OptionListener>,
}

impl PaymentRequest {
    /// Constructs a request by running the validation algorithm with the
    /// default id generator and serializer.
    pub fn new(
        method_data: &[PaymentMethodData],
        details: Option<&PaymentDetailsInit>,
        options: Option<&PaymentOptions>,
    ) -> Result<Self> {
        let record = validate(method_data, details, options)?;
        Ok(Self::from_record(record))
    }

    /// Wraps an already-validated record.
    pub fn from_record(record: ValidatedPaymentRequest) -> Self {
        let shipping_option = record.shipping_option().map(str::to_string);
        Self {
            record,
            state: PaymentRequestState::Created,
            shipping_address: None,
            shipping_option,
            address_listeners: Vec::new(),
            option_listeners: Vec::new(),
        }
    }

    /// The request id.
    pub fn id(&self) -> &str {
        self.record.id()
    }

    /// The current lifecycle state.
    pub fn state(&self) -> PaymentRequestState {
        self.state
    }

    /// The frozen validated record this request wraps.
    pub fn record(&self) -> &ValidatedPaymentRequest {
        &self.record
    }

    /// The shipping address collected so far, if any.
    pub fn shipping_address(&self) -> Option<&PaymentAddress> {
        self.shipping_address.as_ref()
    }

    /// The currently selected shipping option id, if any.
    pub fn shipping_option(&self) -> Option<&str> {
        self.shipping_option.as_deref()
    }

    /// The resolved shipping type, if shipping was requested.
    pub fn shipping_type(&self) -> Option<PaymentShippingType> {
        self.record.shipping_type()
    }

    /// Registers a listener for shipping address changes.
    pub fn on_shipping_address_change(
        &mut self,
        listener: impl Fn(&PaymentAddress) + Send + Sync + 'static,
    ) {
        self.address_listeners.push(Box::new(listener));
    }

    /// Registers a listener for shipping option changes.
    pub fn on_shipping_option_change(
        &mut self,
        listener: impl Fn(&str) + Send + Sync + 'static,
    ) {
        self.option_listeners.push(Box::new(listener));
    }

    /// Opens the interactive phase.
    ///
    /// Allowed exactly once, from the created state. While the request is
    /// interactive the harness can change the shipping address, pick a
    /// shipping option, abort, or [`settle`](Self::settle) it.
    pub fn show(&mut self) -> Result<()> {
        self.require_state(PaymentRequestState::Created)?;
        self.state = PaymentRequestState::Interactive;
        #[cfg(feature = "tracing")]
        tracing::debug!(id = %self.record.id(), "payment request shown");
        Ok(())
    }

    /// Sets the shipping address and notifies registered listeners.
    ///
    /// Only allowed while interactive.
    pub fn update_shipping_address(&mut self, address: PaymentAddress) -> Result<()> {
        self.require_state(PaymentRequestState::Interactive)?;
        for listener in &self.address_listeners {
            listener(&address);
        }
        self.shipping_address = Some(address);
        Ok(())
    }

    /// Selects one of the request's shipping options and notifies registered
    /// listeners.
    ///
    /// Only allowed while interactive; the id must name an option that
    /// survived validation.
    pub fn select_shipping_option(&mut self, id: &str) -> Result<()> {
        self.require_state(PaymentRequestState::Interactive)?;
        if !self
            .record
            .details()
            .shipping_options
            .iter()
            .any(|option| option.id == id)
        {
            return Err(PaymentRequestError::UnknownShippingOption(id.to_string()));
        }
        self.shipping_option = Some(id.to_string());
        for listener in &self.option_listeners {
            listener(id);
        }
        Ok(())
    }

    /// Hands the request to a presenter for the end user's decision and
    /// closes it.
    ///
    /// Only allowed while interactive. Accept resolves with the
    /// [`PaymentResponse`]; abort and failure surface as
    /// [`PaymentRequestError::Aborted`] and
    /// [`PaymentRequestError::PaymentFailed`]. The request is closed
    /// afterwards either way.
    pub async fn settle(&mut self, presenter: &dyn PaymentPresenter) -> Result<PaymentResponse> {
        self.require_state(PaymentRequestState::Interactive)?;
        let outcome = presenter.present(&self.record).await;
        self.state = PaymentRequestState::Closed;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            id = %self.record.id(),
            presenter = presenter.name(),
            "payment request settled"
        );
        match outcome? {
            PresentationOutcome::Accepted(response) => Ok(response),
            PresentationOutcome::Aborted => Err(PaymentRequestError::Aborted),
            PresentationOutcome::Failed(reason) => Err(PaymentRequestError::PaymentFailed(reason)),
        }
    }

    /// Shows the request and immediately settles it with the given
    /// presenter: the one-call path for harnesses that do not script the
    /// interactive phase.
    pub async fn show_and_settle(
        &mut self,
        presenter: &dyn PaymentPresenter,
    ) -> Result<PaymentResponse> {
        self.show()?;
        self.settle(presenter).await
    }

    /// Aborts the interactive phase, closing the request.
    pub fn abort(&mut self) -> Result<()> {
        self.require_state(PaymentRequestState::Interactive)?;
        self.state = PaymentRequestState::Closed;
        #[cfg(feature = "tracing")]
        tracing::debug!(id = %self.record.id(), "payment request aborted");
        Ok(())
    }

    fn require_state(&self, expected: PaymentRequestState) -> Result<()> {
        if self.state != expected {
            return Err(PaymentRequestError::InvalidState {
                expected: expected.as_str(),
                actual: self.state.as_str(),
            });
        }
        Ok(())
    }
}
