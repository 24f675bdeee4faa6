//! Endpoint and query-string assembly.
//!
//! Parameters arrive here already encoded into the wire grammar; this
//! module only places them. GET carries the coordinates in the endpoint
//! path and everything else in the query string; POST carries the same
//! parameters, coordinates included, in a form-encoded body.

use http::Method;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::request::{DirectionsRequest, FORM_CONTENT_TYPE, user_agent};

/// Characters percent-encoded inside the coordinates path segment.
/// Semicolons and commas are part of the wire grammar and stay raw.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Wire name of the coordinates parameter in a POST body.
const COORDINATES_PARAM: &str = "coordinates";

/// Everything needed to place a finalized request on the wire.
///
/// All list-valued parameters are already in their canonical string
/// encoding; `query` holds them in a fixed order so assembled URLs are
/// deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParams {
    /// Base URL of the API endpoint.
    pub base_url: String,
    /// Account the directions engine runs on.
    pub user: String,
    /// Routing profile wire name.
    pub profile: String,
    /// Encoded coordinate sequence.
    pub coordinates: String,
    /// Calling application identifier folded into `User-Agent`.
    pub client_app_name: Option<String>,
    /// Named query parameters, in emission order.
    pub query: Vec<(&'static str, String)>,
}

impl RequestParams {
    /// The endpoint path for this request, without coordinates.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!(
            "{}/directions/v5/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.user,
            self.profile
        )
    }

    fn headers(&self) -> Vec<(String, String)> {
        vec![(
            "user-agent".to_owned(),
            user_agent(self.client_app_name.as_deref()),
        )]
    }
}

/// Assemble the GET flavor of a request: coordinates in the path,
/// parameters in the query string.
#[must_use]
pub fn get_request(params: &RequestParams) -> DirectionsRequest {
    let coordinates = utf8_percent_encode(&params.coordinates, PATH_SEGMENT);
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (name, value) in &params.query {
        serializer.append_pair(name, value);
    }
    let url = format!("{}/{}?{}", params.endpoint(), coordinates, serializer.finish());

    DirectionsRequest {
        method: Method::GET,
        url,
        headers: params.headers(),
        body: None,
    }
}

/// Assemble the POST flavor of a request: the same parameters, carried in
/// a form-encoded body together with the coordinates.
#[must_use]
pub fn post_request(params: &RequestParams) -> DirectionsRequest {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    serializer.append_pair(COORDINATES_PARAM, &params.coordinates);
    for (name, value) in &params.query {
        serializer.append_pair(name, value);
    }

    let mut headers = params.headers();
    headers.push(("content-type".to_owned(), FORM_CONTENT_TYPE.to_owned()));

    DirectionsRequest {
        method: Method::POST,
        url: params.endpoint(),
        headers,
        body: Some(serializer.finish()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> RequestParams {
        RequestParams {
            base_url: "https://api.wayfarer.dev".to_owned(),
            user: "wayfarer".to_owned(),
            profile: "driving".to_owned(),
            coordinates: "13.4301,52.5109;13.4265,52.508".to_owned(),
            client_app_name: None,
            query: vec![
                ("access_token", "pk.test".to_owned()),
                ("steps", "true".to_owned()),
            ],
        }
    }

    #[test]
    fn test_should_place_coordinates_in_get_path() {
        let request = get_request(&params());
        assert_eq!(request.method, Method::GET);
        assert_eq!(
            request.url,
            "https://api.wayfarer.dev/directions/v5/wayfarer/driving/\
             13.4301,52.5109;13.4265,52.508?access_token=pk.test&steps=true"
        );
        assert!(request.body.is_none());
    }

    #[test]
    fn test_should_place_coordinates_in_post_body() {
        let request = post_request(&params());
        assert_eq!(request.method, Method::POST);
        assert_eq!(
            request.url,
            "https://api.wayfarer.dev/directions/v5/wayfarer/driving"
        );
        let body = request.body.unwrap();
        assert!(body.starts_with("coordinates=13.4301%2C52.5109%3B13.4265%2C52.508"));
        assert!(body.contains("access_token=pk.test"));
        assert!(
            request
                .headers
                .iter()
                .any(|(name, value)| name == "content-type" && value == FORM_CONTENT_TYPE)
        );
    }

    #[test]
    fn test_should_trim_trailing_slash_from_base_url() {
        let mut p = params();
        p.base_url = "https://api.wayfarer.dev/".to_owned();
        assert_eq!(
            p.endpoint(),
            "https://api.wayfarer.dev/directions/v5/wayfarer/driving"
        );
    }
}
