//! Attaches request context to a decoded response.
//!
//! The service assigns the request UUID, so the public [`RouteOptions`]
//! record can only exist after the response arrives. This module is the
//! single place that constructs it: the originating [`Directions`] is
//! decoded back into typed values, stamped with the response UUID, and
//! attached to every returned route along with its position index.

use wayfarer_directions_http::TransportResponse;
use wayfarer_directions_model::response::CODE_OK;
use wayfarer_directions_model::{
    DirectionsResponse, Exclude, Overview, RouteOptions, VoiceUnits, codec,
};

use crate::directions::Directions;
use crate::error::{DirectionsError, DirectionsResult};

/// Decode a raw transport response and attach the originating request to
/// every route.
///
/// A body that does not parse, a non-`Ok` status code, an empty route
/// list, or a missing request identifier is a decode failure — nothing is
/// defaulted silently.
pub fn reconcile(
    directions: &Directions,
    raw: &TransportResponse,
) -> DirectionsResult<DirectionsResponse> {
    let mut response: DirectionsResponse = serde_json::from_str(&raw.body)
        .map_err(|err| DirectionsError::decode(format!("malformed response body: {err}")))?;

    if response.code != CODE_OK {
        let message = response.message.as_deref().unwrap_or("no message");
        return Err(DirectionsError::decode(format!(
            "service returned {}: {message}",
            response.code
        )));
    }
    if response.routes.is_empty() {
        return Err(DirectionsError::decode("response contained no routes"));
    }
    let uuid = response
        .uuid
        .clone()
        .ok_or_else(|| DirectionsError::decode("response is missing a request identifier"))?;

    let options = route_options(directions, &uuid)?;
    for (index, route) in response.routes.iter_mut().enumerate() {
        route.route_index = Some(index.to_string());
        route.route_options = Some(options.clone());
    }

    tracing::debug!(
        routes = response.routes.len(),
        uuid = %uuid,
        "reconciled directions response"
    );
    Ok(response)
}

/// Rebuild the typed options record from a frozen request, stamping in
/// the service-assigned identifier.
fn route_options(directions: &Directions, uuid: &str) -> DirectionsResult<RouteOptions> {
    Ok(RouteOptions {
        base_url: directions.base_url.clone(),
        user: directions.user.clone(),
        profile: directions.profile,
        coordinates: directions.coordinates.clone(),
        alternatives: directions.alternatives,
        language: directions.language.clone(),
        radiuses: directions
            .radiuses
            .as_deref()
            .map(codec::parse_radiuses)
            .transpose()?,
        bearings: directions
            .bearings
            .as_deref()
            .map(codec::parse_bearings)
            .transpose()?,
        continue_straight: directions.continue_straight,
        roundabout_exits: directions.roundabout_exits,
        geometries: directions.geometries,
        overview: directions.overview.as_deref().and_then(Overview::from_name),
        steps: directions.steps,
        annotations: directions.annotations.clone(),
        exclude: directions.exclude.as_deref().and_then(Exclude::from_name),
        voice_instructions: directions.voice_instructions,
        banner_instructions: directions.banner_instructions,
        voice_units: directions
            .voice_units
            .as_deref()
            .and_then(VoiceUnits::from_name),
        access_token: directions.access_token.as_str().to_owned(),
        request_uuid: uuid.to_owned(),
        approaches: directions
            .approaches
            .as_deref()
            .map(codec::parse_approaches)
            .transpose()?,
        waypoint_indices: directions
            .waypoint_indices
            .as_deref()
            .map(codec::parse_indices)
            .transpose()?,
        waypoint_names: directions.waypoint_names.as_deref().map(codec::parse_names),
        waypoint_targets: directions
            .waypoint_targets
            .as_deref()
            .map(codec::parse_point_list)
            .transpose()?,
        walking_options: directions.walking_options,
        origin_trace: directions
            .origin_trace
            .as_deref()
            .map(codec::parse_points)
            .transpose()?,
        origin_trace_radiuses: directions
            .origin_trace_radiuses
            .as_deref()
            .map(codec::parse_integers)
            .transpose()?,
        origin_trace_timestamps: directions
            .origin_trace_timestamps
            .as_deref()
            .map(codec::parse_longs)
            .transpose()?,
    })
}

#[cfg(test)]
mod tests {
    use wayfarer_directions_model::{Approach, Bearing, Point, Profile};

    use super::*;
    use crate::builder::DirectionsBuilder;

    fn directions() -> Directions {
        DirectionsBuilder::new()
            .access_token("pk.test")
            .origin(Point::new(13.4301, 52.5109))
            .destination(Point::new(13.4265, 52.508))
            .bearings(vec![Some(Bearing::new(60.0, 45.0)), None])
            .approaches(vec![Some(Approach::Curb), None])
            .steps(true)
            .build()
            .unwrap()
    }

    fn ok_body() -> String {
        r#"{
            "code": "Ok",
            "uuid": "req-abc",
            "routes": [
                {"distance": 1200.0, "duration": 240.0, "geometry": "a"},
                {"distance": 1350.0, "duration": 250.0, "geometry": "b"}
            ]
        }"#
        .to_owned()
    }

    #[test]
    fn test_should_attach_options_and_index_to_every_route() {
        let response = reconcile(&directions(), &TransportResponse::new(200, ok_body())).unwrap();
        assert_eq!(response.routes.len(), 2);

        let first = &response.routes[0];
        assert_eq!(first.route_index.as_deref(), Some("0"));
        let options = first.route_options.as_ref().unwrap();
        assert_eq!(options.request_uuid, "req-abc");
        assert_eq!(options.profile, Profile::Driving);
        assert_eq!(
            options.bearings.as_deref(),
            Some(&[Some(Bearing::new(60.0, 45.0)), None][..])
        );
        assert_eq!(
            options.approaches.as_deref(),
            Some(&[Some(Approach::Curb), None][..])
        );

        assert_eq!(response.routes[1].route_index.as_deref(), Some("1"));
    }

    #[test]
    fn test_should_fail_on_malformed_body() {
        let err = reconcile(&directions(), &TransportResponse::new(200, "not json")).unwrap_err();
        assert!(matches!(err, DirectionsError::Decode { .. }));
    }

    #[test]
    fn test_should_fail_on_service_error_code() {
        let body = r#"{"code": "NoRoute", "message": "No route found"}"#;
        let err = reconcile(&directions(), &TransportResponse::new(200, body)).unwrap_err();
        assert!(err.to_string().contains("NoRoute"));
    }

    #[test]
    fn test_should_fail_on_empty_route_list() {
        let body = r#"{"code": "Ok", "uuid": "req-abc", "routes": []}"#;
        let err = reconcile(&directions(), &TransportResponse::new(200, body)).unwrap_err();
        assert!(err.to_string().contains("no routes"));
    }

    #[test]
    fn test_should_fail_on_missing_uuid() {
        let body = r#"{"code": "Ok", "routes": [{"distance": 1.0, "duration": 2.0}]}"#;
        let err = reconcile(&directions(), &TransportResponse::new(200, body)).unwrap_err();
        assert!(err.to_string().contains("request identifier"));
    }

    #[test]
    fn test_should_rebuild_builder_from_reconciled_options() {
        let original = directions();
        let response = reconcile(&original, &TransportResponse::new(200, ok_body())).unwrap();
        let options = response.routes[0].route_options.as_ref().unwrap();

        let rebuilt = DirectionsBuilder::from_route_options(options)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(rebuilt, original);
    }
}
