//! Response model for the directions service.
//!
//! Only the envelope is modeled here: status code, the service-assigned
//! request UUID, and the route list with the slots the reconciler fills
//! in (`route_index`, `route_options`). Leg and step details beyond the
//! summary fields are out of scope for this client core.

use serde::{Deserialize, Serialize};

use crate::point::Point;
use crate::route_options::RouteOptions;

/// Status code the service uses for a successful response.
pub const CODE_OK: &str = "Ok";

/// A decoded directions response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionsResponse {
    /// Service status code; `"Ok"` on success, an error code otherwise.
    pub code: String,

    /// Human-readable explanation accompanying a non-`Ok` code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Identifier the service assigned to this request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,

    /// Returned route alternatives, best first.
    #[serde(default)]
    pub routes: Vec<DirectionsRoute>,

    /// Input coordinates snapped to the road network.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waypoints: Option<Vec<DirectionsWaypoint>>,
}

/// A single route alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionsRoute {
    /// Route length in meters.
    pub distance: f64,

    /// Estimated travel time in seconds.
    pub duration: f64,

    /// Encoded route geometry, in the format the request asked for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<String>,

    /// Routing weight the engine minimized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    /// Name of the weight metric, e.g. `routability`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_name: Option<String>,

    /// Position of this route among the returned alternatives, as a
    /// string. Assigned by the reconciler, absent on the raw response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_index: Option<String>,

    /// The request that produced this route. Assigned by the
    /// reconciler, absent on the raw response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_options: Option<RouteOptions>,
}

/// An input coordinate snapped to the road network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionsWaypoint {
    /// Name of the road the coordinate snapped to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Snapped location.
    pub location: Point,
}
