//! Integration tests for the Wayfarer directions client.
//!
//! The full request flow runs against an in-process [`StubTransport`]
//! that records every assembled request and answers with a canned JSON
//! body, so no network or live service is involved.

use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use wayfarer_directions_core::{Directions, DirectionsClient};
use wayfarer_directions_http::{
    DirectionsRequest, DirectionsTransport, TransportError, TransportResponse,
};
use wayfarer_directions_model::Point;

static INIT: Once = Once::new();

/// Initialize tracing (once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Transport stub that records every request and replies with a fixed
/// response.
#[derive(Debug)]
pub struct StubTransport {
    /// Every request the client issued, in order.
    pub requests: Mutex<Vec<DirectionsRequest>>,
    response: Result<TransportResponse, TransportError>,
}

impl StubTransport {
    /// Reply to every request with a 200 response carrying `body`.
    #[must_use]
    pub fn replying(body: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            response: Ok(TransportResponse::new(200, body.into())),
        })
    }

    /// Fail every request with the given transport error message.
    #[must_use]
    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            response: Err(TransportError::new(message)),
        })
    }

    /// The single request the client issued, panicking if there was not
    /// exactly one.
    #[must_use]
    pub fn only_request(&self) -> DirectionsRequest {
        let requests = self.requests.lock().unwrap();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests[0].clone()
    }
}

#[async_trait]
impl DirectionsTransport for StubTransport {
    async fn issue(&self, request: DirectionsRequest) -> Result<TransportResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.response.clone()
    }
}

/// A client wired to the given stub.
#[must_use]
pub fn client(transport: Arc<StubTransport>) -> DirectionsClient {
    init_tracing();
    DirectionsClient::new(transport)
}

/// A small valid request: Berlin Alexanderplatz to Potsdamer Platz.
#[must_use]
pub fn berlin_directions() -> Directions {
    Directions::builder()
        .access_token("pk.integration")
        .origin(Point::new(13.4132, 52.5219))
        .destination(Point::new(13.3759, 52.5096))
        .steps(true)
        .build()
        .expect("valid request")
}

/// A canned successful response with `route_count` routes and a fresh
/// request UUID.
#[must_use]
pub fn ok_body(route_count: usize) -> (String, String) {
    let uuid = uuid::Uuid::new_v4().to_string();
    let routes: Vec<serde_json::Value> = (0..route_count)
        .map(|i| {
            serde_json::json!({
                "distance": 1800.0 + i as f64,
                "duration": 420.0,
                "geometry": "mock-polyline6",
                "weight": 430.5,
                "weight_name": "routability"
            })
        })
        .collect();
    let body = serde_json::json!({
        "code": "Ok",
        "uuid": uuid,
        "routes": routes,
        "waypoints": [
            {"name": "Alexanderplatz", "location": [13.4132, 52.5219]},
            {"name": "Potsdamer Platz", "location": [13.3759, 52.5096]}
        ]
    });
    (body.to_string(), uuid)
}

mod test_error;
mod test_flow;
mod test_policy;
