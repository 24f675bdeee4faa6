//! Criteria vocabulary for directions requests.
//!
//! Closed enums for every string-valued request parameter with a fixed
//! vocabulary. Each type exposes `as_str`/`from_name` and serializes as its
//! wire name.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Routing profile selecting the mode of transportation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Profile {
    /// Car routing without live traffic.
    #[default]
    #[serde(rename = "driving")]
    Driving,
    /// Car routing biased by live traffic conditions.
    #[serde(rename = "driving-traffic")]
    DrivingTraffic,
    /// Pedestrian routing.
    #[serde(rename = "walking")]
    Walking,
    /// Bicycle routing.
    #[serde(rename = "cycling")]
    Cycling,
}

impl Profile {
    /// Returns the wire name of the profile.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::DrivingTraffic => "driving-traffic",
            Self::Walking => "walking",
            Self::Cycling => "cycling",
        }
    }

    /// Parse a wire name into a `Profile`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "driving" => Some(Self::Driving),
            "driving-traffic" => Some(Self::DrivingTraffic),
            "walking" => Some(Self::Walking),
            "cycling" => Some(Self::Cycling),
            _ => None,
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format of the returned route geometry.
///
/// The client defaults to `polyline6`; an encoded polyline is
/// significantly smaller on the wire than raw coordinate arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Geometries {
    /// Polyline with five decimal places of precision.
    #[serde(rename = "polyline")]
    Polyline,
    /// Polyline with six decimal places of precision.
    #[default]
    #[serde(rename = "polyline6")]
    Polyline6,
}

impl Geometries {
    /// Returns the wire name of the geometry format.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Polyline => "polyline",
            Self::Polyline6 => "polyline6",
        }
    }

    /// Parse a wire name into a `Geometries`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "polyline" => Some(Self::Polyline),
            "polyline6" => Some(Self::Polyline6),
            _ => None,
        }
    }
}

impl fmt::Display for Geometries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detail level of the overview geometry returned with a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Overview {
    /// The most detailed geometry available.
    #[serde(rename = "full")]
    Full,
    /// A simplified version of the full geometry.
    #[serde(rename = "simplified")]
    Simplified,
    /// No overview geometry at all.
    #[serde(rename = "false")]
    False,
}

impl Overview {
    /// Returns the wire name of the overview level.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Simplified => "simplified",
            Self::False => "false",
        }
    }

    /// Parse a wire name into an `Overview`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "full" => Some(Self::Full),
            "simplified" => Some(Self::Simplified),
            "false" => Some(Self::False),
            _ => None,
        }
    }
}

impl fmt::Display for Overview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-segment metadata that can be requested along the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Annotation {
    /// Segment duration in seconds.
    #[serde(rename = "duration")]
    Duration,
    /// Segment distance in meters.
    #[serde(rename = "distance")]
    Distance,
    /// Segment speed in meters per second.
    #[serde(rename = "speed")]
    Speed,
    /// Live congestion level on the segment.
    #[serde(rename = "congestion")]
    Congestion,
    /// Posted speed limit on the segment.
    #[serde(rename = "maxspeed")]
    Maxspeed,
}

impl Annotation {
    /// Returns the wire name of the annotation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Duration => "duration",
            Self::Distance => "distance",
            Self::Speed => "speed",
            Self::Congestion => "congestion",
            Self::Maxspeed => "maxspeed",
        }
    }

    /// Parse a wire name into an `Annotation`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "duration" => Some(Self::Duration),
            "distance" => Some(Self::Distance),
            "speed" => Some(Self::Speed),
            "congestion" => Some(Self::Congestion),
            "maxspeed" => Some(Self::Maxspeed),
            _ => None,
        }
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Road classes that can be excluded from routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Exclude {
    /// Avoid toll roads.
    #[serde(rename = "toll")]
    Toll,
    /// Avoid motorways.
    #[serde(rename = "motorway")]
    Motorway,
    /// Avoid ferry routes.
    #[serde(rename = "ferry")]
    Ferry,
}

impl Exclude {
    /// Returns the wire name of the exclusion.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Toll => "toll",
            Self::Motorway => "motorway",
            Self::Ferry => "ferry",
        }
    }

    /// Parse a wire name into an `Exclude`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "toll" => Some(Self::Toll),
            "motorway" => Some(Self::Motorway),
            "ferry" => Some(Self::Ferry),
            _ => None,
        }
    }
}

impl fmt::Display for Exclude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit system used in spoken and banner instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoiceUnits {
    /// Miles and feet.
    #[serde(rename = "imperial")]
    Imperial,
    /// Kilometers and meters.
    #[serde(rename = "metric")]
    Metric,
}

impl VoiceUnits {
    /// Returns the wire name of the unit system.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Imperial => "imperial",
            Self::Metric => "metric",
        }
    }

    /// Parse a wire name into a `VoiceUnits`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "imperial" => Some(Self::Imperial),
            "metric" => Some(Self::Metric),
            _ => None,
        }
    }
}

impl fmt::Display for VoiceUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Side-of-road constraint for arriving at a coordinate.
///
/// `Unrestricted` lets the route approach from either side; `Curb`
/// guarantees arrival on the side matching the region's driving side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Approach {
    /// Approach the waypoint from either side of the road.
    #[default]
    #[serde(rename = "unrestricted")]
    Unrestricted,
    /// Arrive on the side of the road matching the regional driving side.
    #[serde(rename = "curb")]
    Curb,
}

impl Approach {
    /// Returns the wire name of the approach.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unrestricted => "unrestricted",
            Self::Curb => "curb",
        }
    }

    /// Parse a wire name into an `Approach`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "unrestricted" => Some(Self::Unrestricted),
            "curb" => Some(Self::Curb),
            _ => None,
        }
    }
}

impl fmt::Display for Approach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
