//! The transport collaborator boundary.

use async_trait::async_trait;

use crate::request::{DirectionsRequest, TransportResponse};

/// Failure reported by a transport implementation.
///
/// The message is propagated verbatim to the caller; this crate never
/// interprets or retries around transport failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("transport failure: {message}")]
pub struct TransportError {
    /// Description of the failure, as reported by the transport.
    pub message: String,
}

impl TransportError {
    /// Create a transport error from a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Executes assembled requests against the network.
///
/// Uses `#[async_trait]` so implementations can be held as
/// `Arc<dyn DirectionsTransport>`. Connection pooling, timeouts, retries,
/// and cancellation are the implementation's responsibility; each call is
/// treated here as one independent round trip.
#[async_trait]
pub trait DirectionsTransport: Send + Sync {
    /// Execute the request and return the raw response.
    async fn issue(&self, request: DirectionsRequest) -> Result<TransportResponse, TransportError>;
}
