//! Auto-resolving presenter for test harnesses.
//!
//! The real API defers to a browser-rendered payment sheet; in a test
//! harness there is no one to click it. [`AutoPresenter`] stands in for the
//! sheet and resolves immediately with a configured decision, mirroring the
//! accept/abort/error actions a stub overlay would offer.

use crate::errors::Result;
use crate::present::{PaymentPresenter, PaymentResponse, PresentationOutcome};
use crate::types::ValidatedPaymentRequest;
use async_trait::async_trait;
use serde_json::Value;

enum AutoDecision {
    Accept { details: Value },
    Abort,
    Fail(String),
}

/// A presenter that resolves every request immediately with a configured
/// decision.
///
/// # Examples
///
/// ```
/// use payment_request_rs::present::auto::AutoPresenter;
///
/// let accepts = AutoPresenter::accepting();
/// let aborts = AutoPresenter::aborting();
/// let fails = AutoPresenter::failing("no-match");
/// # let _ = (accepts, aborts, fails);
/// ```
pub struct AutoPresenter {
    decision: AutoDecision,
}

impl AutoPresenter {
    /// A presenter that accepts every request with the first supported
    /// method identifier and empty response details.
    pub fn accepting() -> Self {
        Self {
            decision: AutoDecision::Accept {
                details: Value::Null,
            },
        }
    }

    /// A presenter that accepts every request with the given method-specific
    /// response details.
    pub fn accepting_with_details(details: Value) -> Self {
        Self {
            decision: AutoDecision::Accept { details },
        }
    }

    /// A presenter that aborts every request, like an end user dismissing
    /// the sheet.
    pub fn aborting() -> Self {
        Self {
            decision: AutoDecision::Abort,
        }
    }

    /// A presenter that fails every request with the given reason, like the
    /// sheet reporting "no-match".
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            decision: AutoDecision::Fail(reason.into()),
        }
    }
}

#[async_trait]
impl PaymentPresenter for AutoPresenter {
    fn name(&self) -> &str {
        "auto"
    }

    async fn present(&self, request: &ValidatedPaymentRequest) -> Result<PresentationOutcome> {
        match &self.decision {
            AutoDecision::Accept { details } => {
                let method_name = request
                    .method_data()
                    .first()
                    .and_then(|method| method.supported_methods.first())
                    .cloned()
                    .unwrap_or_default();
                Ok(PresentationOutcome::Accepted(PaymentResponse {
                    request_id: request.id().to_string(),
                    method_name,
                    details: details.clone(),
                }))
            }
            AutoDecision::Abort => Ok(PresentationOutcome::Aborted),
            AutoDecision::Fail(reason) => Ok(PresentationOutcome::Failed(reason.clone())),
        }
    }
}
