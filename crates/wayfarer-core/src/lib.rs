//! Shared foundation for the Wayfarer client workspace.
//!
//! Provides the access-token type and validation predicate, environment
//! driven configuration, and the core error type used across the
//! directions crates.

pub mod config;
pub mod error;
pub mod types;

pub use config::WayfarerConfig;
pub use error::{WayfarerError, WayfarerResult};
pub use types::{AccessToken, PrefixTokenValidator, TokenValidator};
