//! HTTP request and response types for the host-does-IO boundary.
//!
//! Requests and responses are plain data. This crate builds
//! [`DirectionsRequest`] values; a [`DirectionsTransport`] implementation
//! executes them and hands back a [`TransportResponse`]. Owned fields keep
//! the types free of lifetime concerns across the async boundary.
//!
//! [`DirectionsTransport`]: crate::transport::DirectionsTransport

use http::Method;

/// Content type of the POST request body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Build the `User-Agent` header value, optionally prefixed with the
/// calling application's identifier.
#[must_use]
pub fn user_agent(client_app_name: Option<&str>) -> String {
    let base = concat!("wayfarer-rust/", env!("CARGO_PKG_VERSION"));
    match client_app_name {
        Some(app) => format!("{app} {base}"),
        None => base.to_owned(),
    }
}

/// A fully assembled directions request, described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionsRequest {
    /// HTTP method selected by the transport policy.
    pub method: Method,
    /// Complete request URL; for GET it carries the query string.
    pub url: String,
    /// Header name/value pairs.
    pub headers: Vec<(String, String)>,
    /// Form-encoded body; present for POST, absent for GET.
    pub body: Option<String>,
}

/// The raw result of executing a [`DirectionsRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body, assumed UTF-8 JSON.
    pub body: String,
}

impl TransportResponse {
    /// Create a response from a status code and body.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}
