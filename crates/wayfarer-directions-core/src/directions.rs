//! The finalized, immutable directions request.

use http::Method;
use wayfarer_core::AccessToken;
use wayfarer_directions_http::{DirectionsRequest, RequestParams, resolve_request};
use wayfarer_directions_model::codec;
use wayfarer_directions_model::{Geometries, Point, Profile, WalkingOptions};

use crate::builder::DirectionsBuilder;

/// A validated directions request, frozen by [`DirectionsBuilder::build`].
///
/// Coordinates stay typed; every other list-valued parameter is held in
/// its canonical wire encoding, produced once at build time. A
/// `Directions` is pre-flight state: it carries no request UUID because
/// the service has not assigned one yet. Mutation goes through
/// [`to_builder`](Self::to_builder), which yields a pre-populated builder
/// for the copy-construct-then-override reuse path.
#[derive(Debug, Clone, PartialEq)]
pub struct Directions {
    pub(crate) base_url: String,
    pub(crate) user: String,
    pub(crate) profile: Profile,
    pub(crate) coordinates: Vec<Point>,
    pub(crate) access_token: AccessToken,
    pub(crate) alternatives: Option<bool>,
    pub(crate) geometries: Geometries,
    pub(crate) overview: Option<String>,
    pub(crate) radiuses: Option<String>,
    pub(crate) steps: Option<bool>,
    pub(crate) bearings: Option<String>,
    pub(crate) continue_straight: Option<bool>,
    pub(crate) annotations: Option<String>,
    pub(crate) language: Option<String>,
    pub(crate) roundabout_exits: Option<bool>,
    pub(crate) voice_instructions: Option<bool>,
    pub(crate) banner_instructions: Option<bool>,
    pub(crate) voice_units: Option<String>,
    pub(crate) exclude: Option<String>,
    pub(crate) approaches: Option<String>,
    pub(crate) waypoint_indices: Option<String>,
    pub(crate) waypoint_names: Option<String>,
    pub(crate) waypoint_targets: Option<String>,
    pub(crate) enable_refresh: Option<bool>,
    pub(crate) walking_options: Option<WalkingOptions>,
    pub(crate) origin_trace: Option<String>,
    pub(crate) origin_trace_radiuses: Option<String>,
    pub(crate) origin_trace_timestamps: Option<String>,
    pub(crate) client_app_name: Option<String>,
    pub(crate) pinned_method: Option<Method>,
}

impl Directions {
    /// Start a new builder with the client defaults.
    #[must_use]
    pub fn builder() -> DirectionsBuilder {
        DirectionsBuilder::new()
    }

    /// The coordinates of the request: origin, waypoints, destination.
    #[must_use]
    pub fn coordinates(&self) -> &[Point] {
        &self.coordinates
    }

    /// The routing profile of the request.
    #[must_use]
    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// The base URL the request targets.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The account the directions engine runs on.
    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }

    /// The method explicitly pinned by the caller, if any.
    #[must_use]
    pub fn pinned_method(&self) -> Option<&Method> {
        self.pinned_method.as_ref()
    }

    /// Lay out the wire parameters for this request, in emission order.
    #[must_use]
    pub fn request_params(&self) -> RequestParams {
        let mut query: Vec<(&'static str, String)> = Vec::new();
        query.push(("access_token", self.access_token.as_str().to_owned()));

        push_bool(&mut query, "alternatives", self.alternatives);
        query.push(("geometries", self.geometries.as_str().to_owned()));
        push_str(&mut query, "overview", self.overview.as_deref());
        push_str(&mut query, "radiuses", self.radiuses.as_deref());
        push_bool(&mut query, "steps", self.steps);
        push_str(&mut query, "bearings", self.bearings.as_deref());
        push_bool(&mut query, "continue_straight", self.continue_straight);
        push_str(&mut query, "annotations", self.annotations.as_deref());
        push_str(&mut query, "language", self.language.as_deref());
        push_bool(&mut query, "roundabout_exits", self.roundabout_exits);
        push_bool(&mut query, "voice_instructions", self.voice_instructions);
        push_bool(&mut query, "banner_instructions", self.banner_instructions);
        push_str(&mut query, "voice_units", self.voice_units.as_deref());
        push_str(&mut query, "exclude", self.exclude.as_deref());
        push_str(&mut query, "approaches", self.approaches.as_deref());
        push_str(&mut query, "waypoints", self.waypoint_indices.as_deref());
        push_str(&mut query, "waypoint_names", self.waypoint_names.as_deref());
        push_str(&mut query, "waypoint_targets", self.waypoint_targets.as_deref());
        push_bool(&mut query, "enable_refresh", self.enable_refresh);

        if let Some(walking) = &self.walking_options {
            push_f64(&mut query, "walking_speed", walking.walking_speed);
            push_f64(&mut query, "walkway_bias", walking.walkway_bias);
            push_f64(&mut query, "alley_bias", walking.alley_bias);
        }

        push_str(&mut query, "origin_trace", self.origin_trace.as_deref());
        push_str(
            &mut query,
            "origin_trace_radiuses",
            self.origin_trace_radiuses.as_deref(),
        );
        push_str(
            &mut query,
            "origin_trace_timestamps",
            self.origin_trace_timestamps.as_deref(),
        );

        RequestParams {
            base_url: self.base_url.clone(),
            user: self.user.clone(),
            profile: self.profile.as_str().to_owned(),
            coordinates: codec::format_points(&self.coordinates),
            client_app_name: self.client_app_name.clone(),
            query,
        }
    }

    /// Assemble the transport request, applying the GET/POST policy.
    #[must_use]
    pub fn to_request(&self) -> DirectionsRequest {
        resolve_request(&self.request_params(), self.pinned_method.clone())
    }

    /// Reconstruct a builder pre-populated with this request's values.
    ///
    /// The encoded list fields are run back through the codec decoders;
    /// since they were produced by the codec at build time, decoding
    /// cannot fail. Rebuilding without changes yields a value-equal
    /// `Directions`.
    #[must_use]
    pub fn to_builder(&self) -> DirectionsBuilder {
        DirectionsBuilder::from_directions(self)
            .expect("canonical wire encoding always decodes")
    }
}

fn push_str(query: &mut Vec<(&'static str, String)>, name: &'static str, value: Option<&str>) {
    if let Some(value) = value {
        query.push((name, value.to_owned()));
    }
}

fn push_bool(query: &mut Vec<(&'static str, String)>, name: &'static str, value: Option<bool>) {
    if let Some(value) = value {
        query.push((name, value.to_string()));
    }
}

fn push_f64(query: &mut Vec<(&'static str, String)>, name: &'static str, value: Option<f64>) {
    if let Some(value) = value {
        query.push((name, value.to_string()));
    }
}
