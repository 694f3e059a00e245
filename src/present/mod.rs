//! Payment UI presenters.
//!
//! This module contains the trait a presentation layer implements to collect
//! the end user's decision on a validated request, and an auto-resolving
//! implementation for test harnesses.

pub mod auto;

use crate::errors::Result;
use crate::types::ValidatedPaymentRequest;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The accept result a presenter hands back when the end user pays.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    /// Id of the request this response settles
    pub request_id: String,

    /// Identifier of the payment method the end user picked
    pub method_name: String,

    /// Method-specific response data
    pub details: Value,
}

/// What the end user decided.
#[derive(Debug, Clone, PartialEq)]
pub enum PresentationOutcome {
    /// The end user paid
    Accepted(PaymentResponse),
    /// The end user dismissed the UI
    Aborted,
    /// The UI could not complete the payment (e.g., no matching method)
    Failed(String),
}

/// Trait for payment UI presenters.
///
/// A presenter renders a validated request to the end user and resolves with
/// their decision. The request record it receives is frozen; any state the
/// presenter needs across requests (such as a registry of live requests) is
/// its own to manage.
#[async_trait]
pub trait PaymentPresenter: Send + Sync {
    /// Returns the name of this presenter (e.g., "auto").
    fn name(&self) -> &str;

    /// Presents a request and resolves with the end user's decision.
    ///
    /// # Arguments
    ///
    /// * `request` - The validated request to render
    ///
    /// # Returns
    ///
    /// The end user's decision, or an error if presentation itself failed
    async fn present(&self, request: &ValidatedPaymentRequest) -> Result<PresentationOutcome>;
}
