//! Registry of live payment requests.
//!
//! A presentation layer typically tracks the requests it has on screen so
//! that out-of-band actions (an overlay button, a harness command) can find
//! them by id. [`RequestRegistry`] is that map as an explicit, cloneable
//! handle owned by the presentation layer, not global state.

use crate::errors::{PaymentRequestError, Result};
use crate::types::ValidatedPaymentRequest;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A shared map of validated requests keyed by request id.
///
/// Cloning the registry clones the handle; all clones see the same map.
///
/// # Examples
///
/// ```
/// use payment_request_rs::registry::RequestRegistry;
///
/// let registry = RequestRegistry::new();
/// let handle = registry.clone();
/// # let _ = handle;
/// ```
#[derive(Clone, Default)]
pub struct RequestRegistry {
    requests: Arc<RwLock<HashMap<String, ValidatedPaymentRequest>>>,
}

impl RequestRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            requests: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Registers a validated request under its id.
    ///
    /// Ids are unique within one registry; registering a second request with
    /// the same id is rejected.
    pub async fn register(&self, record: ValidatedPaymentRequest) -> Result<()> {
        let mut requests = self.requests.write().await;
        if requests.contains_key(record.id()) {
            return Err(PaymentRequestError::DuplicateRequestId(
                record.id().to_string(),
            ));
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(id = %record.id(), "payment request registered");
        requests.insert(record.id().to_string(), record);
        Ok(())
    }

    /// Returns a copy of the request with the given id, if registered.
    pub async fn get(&self, id: &str) -> Option<ValidatedPaymentRequest> {
        self.requests.read().await.get(id).cloned()
    }

    /// Removes and returns the request with the given id, if registered.
    pub async fn remove(&self, id: &str) -> Option<ValidatedPaymentRequest> {
        self.requests.write().await.remove(id)
    }

    /// Ids of all registered requests, in no particular order.
    pub async fn ids(&self) -> Vec<String> {
        self.requests.read().await.keys().cloned().collect()
    }

    /// Number of registered requests.
    pub async fn len(&self) -> usize {
        self.requests.read().await.len()
    }

    /// Whether the registry is empty.
    pub async fn is_empty(&self) -> bool {
        self.requests.read().await.is_empty()
    }
}
