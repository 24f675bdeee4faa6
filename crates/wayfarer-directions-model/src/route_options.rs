//! The immutable record of a previously issued directions request.

use serde::{Deserialize, Serialize};

use crate::criteria::{Approach, Exclude, Geometries, Overview, Profile, VoiceUnits};
use crate::point::{Bearing, Point};
use crate::walking::WalkingOptions;

/// Every parameter of a directions request, plus the identifiers the
/// service assigned to it.
///
/// A `RouteOptions` is attached to each route of a reconciled response.
/// It exists so a caller who kept only the response can still reproduce
/// the request: convert it back into a builder, change one field, and
/// reissue. Instances are only ever constructed after a response has
/// arrived, which is why [`request_uuid`](Self::request_uuid) is always
/// present — the service assigns it, never the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteOptions {
    /// Base URL the request was issued against.
    pub base_url: String,

    /// Account the directions engine ran on.
    pub user: String,

    /// Routing profile of the request.
    pub profile: Profile,

    /// Origin, waypoints, and destination, in request order. These are
    /// the raw coordinates as sent, not the road-snapped ones returned
    /// in the response.
    pub coordinates: Vec<Point>,

    /// Whether alternative routes were requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternatives: Option<bool>,

    /// Instruction language of the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Per-coordinate snapping radiuses in meters; `f64::INFINITY`
    /// stands for the unlimited radius.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radiuses: Option<Vec<f64>>,

    /// Per-coordinate bearings; `None` entries were skipped positions.
    /// Worth recalculating before a reissue — headings go stale fast.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearings: Option<Vec<Option<Bearing>>>,

    /// Whether departures from intermediate waypoints kept the original
    /// direction of travel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continue_straight: Option<bool>,

    /// Whether roundabout-exit instructions were requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roundabout_exits: Option<bool>,

    /// Geometry format of the returned routes.
    pub geometries: Geometries,

    /// Overview geometry detail level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<Overview>,

    /// Whether turn-by-turn steps were requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<bool>,

    /// Requested annotation tags in their comma-joined wire form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<String>,

    /// Road class excluded from routing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Exclude>,

    /// Whether spoken instructions were requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_instructions: Option<bool>,

    /// Whether banner instructions were requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_instructions: Option<bool>,

    /// Unit system of the spoken instructions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_units: Option<VoiceUnits>,

    /// Access token the request was made with.
    pub access_token: String,

    /// Identifier the service assigned to the request. Only known after
    /// the response arrived; used to reference this exact route later.
    #[serde(rename = "uuid")]
    pub request_uuid: String,

    /// Per-coordinate side-of-road arrival hints; `None` entries were
    /// skipped positions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approaches: Option<Vec<Option<Approach>>>,

    /// Which coordinate positions were treated as waypoints; the rest
    /// acted as silent shaping points.
    #[serde(rename = "waypoints", default, skip_serializing_if = "Option::is_none")]
    pub waypoint_indices: Option<Vec<usize>>,

    /// Per-coordinate arrival-instruction labels; empty strings were
    /// skipped positions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waypoint_names: Option<Vec<String>>,

    /// Per-coordinate alternate drop-off points; `None` entries were
    /// skipped positions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waypoint_targets: Option<Vec<Option<Point>>>,

    /// Walking-profile tuning, when the walking profile was used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub walking_options: Option<WalkingOptions>,

    /// Breadcrumb locations leading up to the origin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_trace: Option<Vec<Point>>,

    /// Accuracy radius in meters for each breadcrumb.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_trace_radiuses: Option<Vec<u32>>,

    /// Capture timestamp for each breadcrumb.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_trace_timestamps: Option<Vec<i64>>,
}

impl RouteOptions {
    /// Parse a `RouteOptions` from its JSON representation.
    ///
    /// # Errors
    /// Returns the underlying decode error if the JSON is malformed or
    /// missing required fields.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize this record to its JSON representation.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("JSON serialization of route options cannot fail")
    }
}
