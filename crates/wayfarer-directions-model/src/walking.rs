//! Tuning parameters for the walking profile.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Tuning parameters that only apply to [`Profile::Walking`] requests.
///
/// All fields are optional; unset fields use the service defaults. This is
/// a plain data container with no validation of its own.
///
/// [`Profile::Walking`]: crate::criteria::Profile::Walking
///
/// # Examples
///
/// ```
/// use wayfarer_directions_model::WalkingOptions;
///
/// let options = WalkingOptions::builder().walking_speed(1.3).build();
/// assert_eq!(options.walking_speed, Some(1.3));
/// assert!(options.alley_bias.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TypedBuilder)]
pub struct WalkingOptions {
    /// Walking speed in meters per second.
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub walking_speed: Option<f64>,

    /// Bias for preferring (> 0) or avoiding (< 0) walkways, in [-1, 1].
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub walkway_bias: Option<f64>,

    /// Bias for preferring (> 0) or avoiding (< 0) alleys, in [-1, 1].
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alley_bias: Option<f64>,
}
