//! GET/POST transport-method selection.

use http::Method;

use crate::query::{RequestParams, get_request, post_request};
use crate::request::DirectionsRequest;

/// Service-imposed ceiling on GET URL length. Requests whose encoded URL
/// reaches this size fall back to POST.
pub const MAX_URL_SIZE: usize = 1024 * 8;

/// Assemble the request, honoring an explicit method pin or selecting by
/// URL length.
///
/// Without a pin, the GET-style URL is constructed first; if it stays
/// under [`MAX_URL_SIZE`] it is used as-is, otherwise the same parameters
/// are re-issued as a POST with a form body. The decision is made fresh on
/// every call — parameter sets differ per request, so the outcome is never
/// cached.
#[must_use]
pub fn resolve_request(params: &RequestParams, pinned: Option<Method>) -> DirectionsRequest {
    match pinned {
        Some(method) if method == Method::POST => post_request(params),
        Some(_) => get_request(params),
        None => {
            let get = get_request(params);
            if get.url.len() < MAX_URL_SIZE {
                get
            } else {
                tracing::debug!(
                    url_length = get.url.len(),
                    "encoded URL exceeds GET ceiling, falling back to POST"
                );
                post_request(params)
            }
        }
    }
}
