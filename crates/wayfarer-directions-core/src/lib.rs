//! Request building, validation, and response reconciliation for the
//! Wayfarer directions service.
//!
//! The flow: accumulate raw options in a [`DirectionsBuilder`], freeze
//! them with `build()` into an immutable [`Directions`] request, execute
//! it through a [`DirectionsClient`], and receive a response whose routes
//! each carry the [`RouteOptions`] record that produced them. The record
//! converts back into a builder, so "change one field and reissue" never
//! re-derives defaults.
//!
//! [`RouteOptions`]: wayfarer_directions_model::RouteOptions

pub mod builder;
pub mod client;
pub mod directions;
pub mod error;
pub mod reconcile;

pub use builder::DirectionsBuilder;
pub use client::DirectionsClient;
pub use directions::Directions;
pub use error::{DirectionsError, DirectionsResult};
pub use reconcile::reconcile;
