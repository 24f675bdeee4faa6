//! Directions model types for the Wayfarer client.
//!
//! This crate is pure data: the criteria vocabulary, geographic points and
//! bearings, the immutable [`RouteOptions`] record, the response model, and
//! the codec translating typed values to and from the service's
//! semicolon/comma-delimited wire grammar. Behavior (validation, transport
//! selection, reconciliation) lives in the companion crates.

pub mod codec;
pub mod criteria;
pub mod error;
pub mod point;
pub mod response;
pub mod route_options;
pub mod walking;

pub use criteria::{Annotation, Approach, Exclude, Geometries, Overview, Profile, VoiceUnits};
pub use error::EncodingError;
pub use point::{Bearing, Point};
pub use response::{DirectionsResponse, DirectionsRoute, DirectionsWaypoint};
pub use route_options::RouteOptions;
pub use walking::WalkingOptions;
