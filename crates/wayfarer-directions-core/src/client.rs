//! The directions client.

use std::fmt;
use std::sync::Arc;

use wayfarer_directions_http::DirectionsTransport;
use wayfarer_directions_model::DirectionsResponse;

use crate::directions::Directions;
use crate::error::DirectionsResult;
use crate::reconcile::reconcile;

/// Executes finalized [`Directions`] requests against a transport.
///
/// The client is cheap to clone and safe to share: it holds only the
/// transport handle, and every request is independently assembled from an
/// immutable `Directions`, so concurrent calls share no mutable state.
/// Timeouts, retries, and cancellation belong to the transport
/// implementation.
#[derive(Clone)]
pub struct DirectionsClient {
    transport: Arc<dyn DirectionsTransport>,
}

impl DirectionsClient {
    /// Create a client over the given transport.
    #[must_use]
    pub fn new(transport: Arc<dyn DirectionsTransport>) -> Self {
        Self { transport }
    }

    /// Issue the request and reconcile the response. The caller awaits
    /// the full round trip; transport failures propagate verbatim.
    pub async fn execute(&self, directions: &Directions) -> DirectionsResult<DirectionsResponse> {
        let request = directions.to_request();
        tracing::debug!(method = %request.method, url = %request.url, "issuing directions request");
        let raw = self.transport.issue(request).await?;
        reconcile(directions, &raw)
    }

    /// Issue the request on a background task and hand the outcome to
    /// `on_complete`. The callback runs on the tokio runtime; the
    /// returned handle can be awaited or dropped.
    pub fn enqueue<F>(&self, directions: Directions, on_complete: F) -> tokio::task::JoinHandle<()>
    where
        F: FnOnce(DirectionsResult<DirectionsResponse>) + Send + 'static,
    {
        let client = self.clone();
        tokio::spawn(async move {
            on_complete(client.execute(&directions).await);
        })
    }
}

impl fmt::Debug for DirectionsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectionsClient").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use wayfarer_directions_http::{DirectionsRequest, TransportError, TransportResponse};
    use wayfarer_directions_model::Point;

    use super::*;
    use crate::error::DirectionsError;

    struct CannedTransport {
        body: String,
    }

    #[async_trait]
    impl DirectionsTransport for CannedTransport {
        async fn issue(
            &self,
            _request: DirectionsRequest,
        ) -> Result<TransportResponse, TransportError> {
            Ok(TransportResponse::new(200, self.body.clone()))
        }
    }

    struct FailingTransport;

    #[async_trait]
    impl DirectionsTransport for FailingTransport {
        async fn issue(
            &self,
            _request: DirectionsRequest,
        ) -> Result<TransportResponse, TransportError> {
            Err(TransportError::new("connection refused"))
        }
    }

    fn directions() -> Directions {
        Directions::builder()
            .access_token("pk.test")
            .origin(Point::new(13.4301, 52.5109))
            .destination(Point::new(13.4265, 52.508))
            .build()
            .unwrap()
    }

    fn ok_body() -> String {
        r#"{
            "code": "Ok",
            "uuid": "req-1",
            "routes": [{"distance": 100.0, "duration": 60.0}]
        }"#
        .to_owned()
    }

    #[tokio::test]
    async fn test_should_execute_and_reconcile() {
        let client = DirectionsClient::new(Arc::new(CannedTransport { body: ok_body() }));
        let response = client.execute(&directions()).await.unwrap();
        assert_eq!(response.routes.len(), 1);
        let options = response.routes[0].route_options.as_ref().unwrap();
        assert_eq!(options.request_uuid, "req-1");
    }

    #[tokio::test]
    async fn test_should_propagate_transport_failure() {
        let client = DirectionsClient::new(Arc::new(FailingTransport));
        let err = client.execute(&directions()).await.unwrap_err();
        assert!(matches!(err, DirectionsError::Transport(_)));
        assert!(err.to_string().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_should_deliver_result_through_enqueue() {
        let client = DirectionsClient::new(Arc::new(CannedTransport { body: ok_body() }));
        let (tx, rx) = tokio::sync::oneshot::channel();

        let handle = client.enqueue(directions(), move |result| {
            tx.send(result.map(|response| response.routes.len()))
                .expect("receiver alive");
        });
        handle.await.unwrap();

        assert_eq!(rx.await.unwrap().unwrap(), 1);
    }
}
