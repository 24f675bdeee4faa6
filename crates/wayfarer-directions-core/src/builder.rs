//! The mutable accumulator that collects and validates request options.

use http::Method;
use wayfarer_core::config::{BASE_API_URL, DEFAULT_USER};
use wayfarer_core::{AccessToken, PrefixTokenValidator, TokenValidator, WayfarerConfig};
use wayfarer_directions_model::codec;
use wayfarer_directions_model::{
    Annotation, Approach, Bearing, Exclude, Geometries, Overview, Point, Profile, RouteOptions,
    VoiceUnits, WalkingOptions,
};

use crate::directions::Directions;
use crate::error::{DirectionsError, DirectionsResult};

/// Longest combined waypoint-names string the service accepts.
const MAX_WAYPOINT_NAMES_LEN: usize = 500;

/// Smallest and largest usable origin-trace length.
const TRACE_LEN_RANGE: std::ops::RangeInclusive<usize> = 2..=20;

/// Collects raw request options and freezes them into a [`Directions`].
///
/// Setters may be called in any order; calling one again overwrites the
/// previous value, and `add_*` variants append to list fields. A builder
/// belongs to one logical caller — it is plain mutable state with no
/// internal synchronization.
///
/// `build()` merges the `origin`/`destination` convenience values into
/// the coordinate sequence, checks every cross-field invariant, encodes
/// the list fields into their canonical wire form, verifies the access
/// token, and only then produces a value. A failed build returns an error
/// naming the offending field; no partial request is ever produced.
///
/// # Examples
///
/// ```
/// use wayfarer_directions_core::Directions;
/// use wayfarer_directions_model::Point;
///
/// let directions = Directions::builder()
///     .access_token("pk.example")
///     .origin(Point::new(13.4301, 52.5109))
///     .destination(Point::new(13.4265, 52.508))
///     .steps(true)
///     .build()
///     .unwrap();
/// assert_eq!(directions.coordinates().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DirectionsBuilder {
    base_url: Option<String>,
    user: Option<String>,
    profile: Profile,
    geometries: Geometries,
    access_token: Option<String>,
    origin: Option<Point>,
    destination: Option<Point>,
    coordinates: Vec<Point>,
    alternatives: Option<bool>,
    language: Option<String>,
    radiuses: Vec<f64>,
    bearings: Vec<Option<Bearing>>,
    continue_straight: Option<bool>,
    roundabout_exits: Option<bool>,
    overview: Option<Overview>,
    steps: Option<bool>,
    annotations: Vec<Annotation>,
    exclude: Option<Exclude>,
    voice_instructions: Option<bool>,
    banner_instructions: Option<bool>,
    voice_units: Option<VoiceUnits>,
    approaches: Vec<Option<Approach>>,
    waypoint_indices: Vec<usize>,
    waypoint_names: Vec<String>,
    waypoint_targets: Vec<Option<Point>>,
    enable_refresh: Option<bool>,
    walking_options: Option<WalkingOptions>,
    origin_trace: Vec<Point>,
    origin_trace_radiuses: Vec<u32>,
    origin_trace_timestamps: Vec<i64>,
    client_app_name: Option<String>,
    pinned_method: Option<Method>,
}

impl DirectionsBuilder {
    /// Start an empty builder with the client defaults: production base
    /// URL, default user, driving profile, polyline6 geometry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a builder seeded from a [`WayfarerConfig`]: base URL, user,
    /// and access token (when configured) are taken from it.
    #[must_use]
    pub fn from_config(config: &WayfarerConfig) -> Self {
        let mut builder = Self::new().base_url(&config.base_url).user(&config.user);
        if let Some(token) = &config.access_token {
            builder = builder.access_token(token.as_str());
        }
        builder
    }

    /// Override the API base URL.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Override the account the directions engine runs on.
    #[must_use]
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Select the mode of transportation.
    #[must_use]
    pub fn profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    /// Select the returned geometry format.
    #[must_use]
    pub fn geometries(mut self, geometries: Geometries) -> Self {
        self.geometries = geometries;
        self
    }

    /// Set the access token; required before a request can be built.
    #[must_use]
    pub fn access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    /// Set the route's starting point. Merged to the front of the
    /// coordinate sequence at build time.
    #[must_use]
    pub fn origin(mut self, origin: Point) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Set the route's ending point. Merged to the back of the
    /// coordinate sequence at build time.
    #[must_use]
    pub fn destination(mut self, destination: Point) -> Self {
        self.destination = Some(destination);
        self
    }

    /// Replace the full coordinate sequence (origin through destination).
    #[must_use]
    pub fn waypoints(mut self, coordinates: Vec<Point>) -> Self {
        self.coordinates = coordinates;
        self
    }

    /// Append an in-between stop to the coordinate sequence.
    #[must_use]
    pub fn add_waypoint(mut self, waypoint: Point) -> Self {
        self.coordinates.push(waypoint);
        self
    }

    /// Request (or suppress) alternative routes.
    #[must_use]
    pub fn alternatives(mut self, alternatives: bool) -> Self {
        self.alternatives = Some(alternatives);
        self
    }

    /// Set the instruction language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Replace the per-coordinate snapping radiuses. Values must be
    /// non-negative; `f64::INFINITY` requests an unlimited radius.
    #[must_use]
    pub fn radiuses(mut self, radiuses: Vec<f64>) -> Self {
        self.radiuses = radiuses;
        self
    }

    /// Replace the per-coordinate bearings; `None` skips a coordinate
    /// while keeping its position.
    #[must_use]
    pub fn bearings(mut self, bearings: Vec<Option<Bearing>>) -> Self {
        self.bearings = bearings;
        self
    }

    /// Append one bearing entry; `None` skips the coordinate in place.
    #[must_use]
    pub fn add_bearing(mut self, bearing: Option<Bearing>) -> Self {
        self.bearings.push(bearing);
        self
    }

    /// Keep (or drop) the direction of travel when leaving intermediate
    /// waypoints.
    #[must_use]
    pub fn continue_straight(mut self, continue_straight: bool) -> Self {
        self.continue_straight = Some(continue_straight);
        self
    }

    /// Request extra instructions when exiting roundabouts and rotaries.
    #[must_use]
    pub fn roundabout_exits(mut self, roundabout_exits: bool) -> Self {
        self.roundabout_exits = Some(roundabout_exits);
        self
    }

    /// Select the overview geometry detail level.
    #[must_use]
    pub fn overview(mut self, overview: Overview) -> Self {
        self.overview = Some(overview);
        self
    }

    /// Request turn-by-turn steps.
    #[must_use]
    pub fn steps(mut self, steps: bool) -> Self {
        self.steps = Some(steps);
        self
    }

    /// Replace the requested annotation tags.
    #[must_use]
    pub fn annotations(mut self, annotations: Vec<Annotation>) -> Self {
        self.annotations = annotations;
        self
    }

    /// Append one annotation tag.
    #[must_use]
    pub fn add_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Exclude a road class from routing.
    #[must_use]
    pub fn exclude(mut self, exclude: Exclude) -> Self {
        self.exclude = Some(exclude);
        self
    }

    /// Request spoken instruction objects.
    #[must_use]
    pub fn voice_instructions(mut self, voice_instructions: bool) -> Self {
        self.voice_instructions = Some(voice_instructions);
        self
    }

    /// Request banner instruction objects.
    #[must_use]
    pub fn banner_instructions(mut self, banner_instructions: bool) -> Self {
        self.banner_instructions = Some(banner_instructions);
        self
    }

    /// Select the unit system for instructions.
    #[must_use]
    pub fn voice_units(mut self, voice_units: VoiceUnits) -> Self {
        self.voice_units = Some(voice_units);
        self
    }

    /// Replace the per-coordinate approach hints; `None` skips a
    /// coordinate while keeping its position.
    #[must_use]
    pub fn approaches(mut self, approaches: Vec<Option<Approach>>) -> Self {
        self.approaches = approaches;
        self
    }

    /// Append one approach hint.
    #[must_use]
    pub fn add_approach(mut self, approach: Option<Approach>) -> Self {
        self.approaches.push(approach);
        self
    }

    /// Replace the set of coordinate positions treated as waypoints.
    /// Positions left out act as silent shaping points.
    #[must_use]
    pub fn waypoint_indices(mut self, waypoint_indices: Vec<usize>) -> Self {
        self.waypoint_indices = waypoint_indices;
        self
    }

    /// Append one waypoint index.
    #[must_use]
    pub fn add_waypoint_index(mut self, index: usize) -> Self {
        self.waypoint_indices.push(index);
        self
    }

    /// Replace the per-coordinate arrival labels; empty strings skip a
    /// coordinate while keeping its position.
    #[must_use]
    pub fn waypoint_names(mut self, waypoint_names: Vec<String>) -> Self {
        self.waypoint_names = waypoint_names;
        self
    }

    /// Replace the per-coordinate alternate drop-off points; `None`
    /// skips a coordinate while keeping its position.
    #[must_use]
    pub fn waypoint_targets(mut self, waypoint_targets: Vec<Option<Point>>) -> Self {
        self.waypoint_targets = waypoint_targets;
        self
    }

    /// Make the returned routes refreshable through the route-refresh
    /// endpoint.
    #[must_use]
    pub fn enable_refresh(mut self, enable_refresh: bool) -> Self {
        self.enable_refresh = Some(enable_refresh);
        self
    }

    /// Attach walking-profile tuning parameters.
    #[must_use]
    pub fn walking_options(mut self, walking_options: WalkingOptions) -> Self {
        self.walking_options = Some(walking_options);
        self
    }

    /// Replace the breadcrumb locations leading up to the origin. Must be
    /// used together with radiuses and timestamps of the same length.
    #[must_use]
    pub fn origin_trace(mut self, origin_trace: Vec<Point>) -> Self {
        self.origin_trace = origin_trace;
        self
    }

    /// Replace the per-breadcrumb accuracy radiuses in meters.
    #[must_use]
    pub fn origin_trace_radiuses(mut self, origin_trace_radiuses: Vec<u32>) -> Self {
        self.origin_trace_radiuses = origin_trace_radiuses;
        self
    }

    /// Replace the per-breadcrumb capture timestamps.
    #[must_use]
    pub fn origin_trace_timestamps(mut self, origin_trace_timestamps: Vec<i64>) -> Self {
        self.origin_trace_timestamps = origin_trace_timestamps;
        self
    }

    /// Identify the calling application inside the `User-Agent` header.
    #[must_use]
    pub fn client_app_name(mut self, client_app_name: impl Into<String>) -> Self {
        self.client_app_name = Some(client_app_name.into());
        self
    }

    /// Pin the request to POST regardless of URL length.
    #[must_use]
    pub fn post(mut self) -> Self {
        self.pinned_method = Some(Method::POST);
        self
    }

    /// Pin the request to GET regardless of URL length.
    #[must_use]
    pub fn get(mut self) -> Self {
        self.pinned_method = Some(Method::GET);
        self
    }

    /// Validate the accumulated options and freeze them, using the
    /// default token validator.
    pub fn build(self) -> DirectionsResult<Directions> {
        self.build_with(&PrefixTokenValidator)
    }

    /// Validate the accumulated options and freeze them, checking the
    /// access token with the given validator.
    pub fn build_with(mut self, validator: &dyn TokenValidator) -> DirectionsResult<Directions> {
        if let Some(origin) = self.origin.take() {
            self.coordinates.insert(0, origin);
        }
        if let Some(destination) = self.destination.take() {
            self.coordinates.push(destination);
        }

        self.check_invariants()?;

        let token = self
            .access_token
            .as_deref()
            .filter(|token| validator.is_valid(token))
            .ok_or_else(|| {
                DirectionsError::validation("access_token", "a valid access token is required")
            })?;
        let access_token = AccessToken::new(token)
            .map_err(|err| DirectionsError::validation("access_token", err.to_string()))?;

        tracing::debug!(
            coordinates = self.coordinates.len(),
            profile = %self.profile,
            "directions request validated"
        );

        Ok(Directions {
            base_url: self.base_url.unwrap_or_else(|| BASE_API_URL.to_owned()),
            user: self.user.unwrap_or_else(|| DEFAULT_USER.to_owned()),
            profile: self.profile,
            coordinates: self.coordinates,
            access_token,
            alternatives: self.alternatives,
            geometries: self.geometries,
            overview: self.overview.map(|overview| overview.as_str().to_owned()),
            radiuses: codec::format_radiuses(&self.radiuses),
            steps: self.steps,
            bearings: codec::format_bearings(&self.bearings),
            continue_straight: self.continue_straight,
            annotations: codec::join_annotations(&self.annotations),
            language: self.language,
            roundabout_exits: self.roundabout_exits,
            voice_instructions: self.voice_instructions,
            banner_instructions: self.banner_instructions,
            voice_units: self.voice_units.map(|units| units.as_str().to_owned()),
            exclude: self.exclude.map(|exclude| exclude.as_str().to_owned()),
            approaches: codec::format_approaches(&self.approaches),
            waypoint_indices: codec::join_list(&self.waypoint_indices),
            waypoint_names: codec::format_waypoint_names(&self.waypoint_names),
            waypoint_targets: codec::format_point_list(&self.waypoint_targets),
            enable_refresh: self.enable_refresh,
            walking_options: self.walking_options,
            origin_trace: if self.origin_trace.is_empty() {
                None
            } else {
                Some(codec::format_points(&self.origin_trace))
            },
            origin_trace_radiuses: codec::join_list(&self.origin_trace_radiuses),
            origin_trace_timestamps: codec::join_list(&self.origin_trace_timestamps),
            client_app_name: self.client_app_name,
            pinned_method: self.pinned_method,
        })
    }

    fn check_invariants(&self) -> DirectionsResult<()> {
        let coordinate_count = self.coordinates.len();
        if coordinate_count < 2 {
            return Err(DirectionsError::validation(
                "coordinates",
                "an origin and a destination are required before issuing a directions request",
            ));
        }

        if !self.waypoint_indices.is_empty() {
            if self.waypoint_indices.len() < 2 {
                return Err(DirectionsError::validation(
                    "waypoint_indices",
                    "must contain at least two indexes",
                ));
            }
            let first = self.waypoint_indices[0];
            let last = self.waypoint_indices[self.waypoint_indices.len() - 1];
            if first != 0 || last != coordinate_count - 1 {
                return Err(DirectionsError::validation(
                    "waypoint_indices",
                    "must contain the indices of the first and last coordinates",
                ));
            }
            for &index in &self.waypoint_indices[1..self.waypoint_indices.len() - 1] {
                if index >= coordinate_count {
                    return Err(DirectionsError::validation(
                        "waypoint_indices",
                        format!("index {index} has no corresponding coordinate"),
                    ));
                }
            }
        }

        if !self.waypoint_names.is_empty() {
            let combined = self.waypoint_names.join(";");
            if combined.len() > MAX_WAYPOINT_NAMES_LEN {
                return Err(DirectionsError::validation(
                    "waypoint_names",
                    format!("combined length must not exceed {MAX_WAYPOINT_NAMES_LEN} characters"),
                ));
            }
        }

        if !self.waypoint_targets.is_empty() && self.waypoint_targets.len() != coordinate_count {
            return Err(DirectionsError::validation(
                "waypoint_targets",
                format!("must match the number of coordinates ({coordinate_count})"),
            ));
        }

        if !self.approaches.is_empty() && self.approaches.len() != coordinate_count {
            return Err(DirectionsError::validation(
                "approaches",
                format!("must match the number of coordinates ({coordinate_count})"),
            ));
        }

        for bearing in self.bearings.iter().flatten() {
            let in_range = |value: f64| (0.0..=360.0).contains(&value);
            if !in_range(bearing.angle) || !in_range(bearing.tolerance) {
                return Err(DirectionsError::validation(
                    "bearings",
                    "angle and tolerance must be between 0 and 360",
                ));
            }
        }

        for &radius in &self.radiuses {
            if radius.is_nan() || radius < 0.0 {
                return Err(DirectionsError::validation(
                    "radiuses",
                    "each radius must be non-negative, or unlimited",
                ));
            }
        }

        self.check_trace_invariants()
    }

    fn check_trace_invariants(&self) -> DirectionsResult<()> {
        let trace = self.origin_trace.len();
        let radiuses = self.origin_trace_radiuses.len();
        let timestamps = self.origin_trace_timestamps.len();

        if trace == 0 && radiuses == 0 && timestamps == 0 {
            return Ok(());
        }
        if trace == 0 || radiuses == 0 || timestamps == 0 {
            return Err(DirectionsError::validation(
                "origin_trace",
                "origin trace, radiuses and timestamps must be used at the same time",
            ));
        }
        if trace != radiuses || trace != timestamps {
            return Err(DirectionsError::validation(
                "origin_trace",
                "origin trace, radiuses and timestamps must have the same size",
            ));
        }
        if !TRACE_LEN_RANGE.contains(&trace) {
            return Err(DirectionsError::validation(
                "origin_trace",
                "origin trace must contain between 2 and 20 items",
            ));
        }
        Ok(())
    }

    /// Reconstruct a builder from a frozen [`Directions`], decoding the
    /// canonical wire strings back into typed values.
    pub(crate) fn from_directions(directions: &Directions) -> DirectionsResult<Self> {
        let mut builder = Self::new()
            .base_url(&directions.base_url)
            .user(&directions.user)
            .profile(directions.profile)
            .geometries(directions.geometries)
            .access_token(directions.access_token.as_str())
            .waypoints(directions.coordinates.clone());

        if let Some(encoded) = &directions.radiuses {
            builder = builder.radiuses(codec::parse_radiuses(encoded)?);
        }
        if let Some(encoded) = &directions.bearings {
            builder = builder.bearings(codec::parse_bearings(encoded)?);
        }
        if let Some(encoded) = &directions.annotations {
            builder = builder.annotations(codec::parse_annotations(encoded)?);
        }
        if let Some(encoded) = &directions.approaches {
            builder = builder.approaches(codec::parse_approaches(encoded)?);
        }
        if let Some(encoded) = &directions.waypoint_indices {
            builder = builder.waypoint_indices(codec::parse_indices(encoded)?);
        }
        if let Some(encoded) = &directions.waypoint_names {
            builder = builder.waypoint_names(codec::parse_names(encoded));
        }
        if let Some(encoded) = &directions.waypoint_targets {
            builder = builder.waypoint_targets(codec::parse_point_list(encoded)?);
        }
        if let Some(encoded) = &directions.origin_trace {
            builder = builder.origin_trace(codec::parse_points(encoded)?);
        }
        if let Some(encoded) = &directions.origin_trace_radiuses {
            builder = builder.origin_trace_radiuses(codec::parse_integers(encoded)?);
        }
        if let Some(encoded) = &directions.origin_trace_timestamps {
            builder = builder.origin_trace_timestamps(codec::parse_longs(encoded)?);
        }
        if let Some(overview) = directions
            .overview
            .as_deref()
            .and_then(Overview::from_name)
        {
            builder = builder.overview(overview);
        }
        if let Some(units) = directions
            .voice_units
            .as_deref()
            .and_then(VoiceUnits::from_name)
        {
            builder = builder.voice_units(units);
        }
        if let Some(exclude) = directions.exclude.as_deref().and_then(Exclude::from_name) {
            builder = builder.exclude(exclude);
        }
        if let Some(language) = &directions.language {
            builder = builder.language(language);
        }
        if let Some(walking) = directions.walking_options {
            builder = builder.walking_options(walking);
        }
        if let Some(app) = &directions.client_app_name {
            builder = builder.client_app_name(app);
        }

        builder.alternatives = directions.alternatives;
        builder.continue_straight = directions.continue_straight;
        builder.roundabout_exits = directions.roundabout_exits;
        builder.steps = directions.steps;
        builder.voice_instructions = directions.voice_instructions;
        builder.banner_instructions = directions.banner_instructions;
        builder.enable_refresh = directions.enable_refresh;
        builder.pinned_method = directions.pinned_method.clone();

        Ok(builder)
    }

    /// Reconstruct a builder from a post-response [`RouteOptions`]
    /// record. Everything except the remote-assigned request UUID carries
    /// over, so the rebuilt request reproduces the original.
    pub fn from_route_options(options: &RouteOptions) -> DirectionsResult<Self> {
        let mut builder = Self::new()
            .base_url(&options.base_url)
            .user(&options.user)
            .profile(options.profile)
            .geometries(options.geometries)
            .access_token(&options.access_token)
            .waypoints(options.coordinates.clone());

        if let Some(radiuses) = &options.radiuses {
            builder = builder.radiuses(radiuses.clone());
        }
        if let Some(bearings) = &options.bearings {
            builder = builder.bearings(bearings.clone());
        }
        if let Some(annotations) = &options.annotations {
            builder = builder.annotations(codec::parse_annotations(annotations)?);
        }
        if let Some(approaches) = &options.approaches {
            builder = builder.approaches(approaches.clone());
        }
        if let Some(indices) = &options.waypoint_indices {
            builder = builder.waypoint_indices(indices.clone());
        }
        if let Some(names) = &options.waypoint_names {
            builder = builder.waypoint_names(names.clone());
        }
        if let Some(targets) = &options.waypoint_targets {
            builder = builder.waypoint_targets(targets.clone());
        }
        if let Some(trace) = &options.origin_trace {
            builder = builder.origin_trace(trace.clone());
        }
        if let Some(radiuses) = &options.origin_trace_radiuses {
            builder = builder.origin_trace_radiuses(radiuses.clone());
        }
        if let Some(timestamps) = &options.origin_trace_timestamps {
            builder = builder.origin_trace_timestamps(timestamps.clone());
        }
        if let Some(overview) = options.overview {
            builder = builder.overview(overview);
        }
        if let Some(units) = options.voice_units {
            builder = builder.voice_units(units);
        }
        if let Some(exclude) = options.exclude {
            builder = builder.exclude(exclude);
        }
        if let Some(language) = &options.language {
            builder = builder.language(language);
        }
        if let Some(walking) = options.walking_options {
            builder = builder.walking_options(walking);
        }

        builder.alternatives = options.alternatives;
        builder.continue_straight = options.continue_straight;
        builder.roundabout_exits = options.roundabout_exits;
        builder.steps = options.steps;
        builder.voice_instructions = options.voice_instructions;
        builder.banner_instructions = options.banner_instructions;

        Ok(builder)
    }
}
