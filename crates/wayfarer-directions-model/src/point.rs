//! Geographic point and bearing types.
//!
//! `Point` uses the `[lon, lat]` wire shape everywhere: JSON documents
//! carry it as a two-element array, and the query-string codec renders it
//! as `lon,lat`. `Bearing` follows the same pattern with
//! `[angle, tolerance]`.

use std::fmt;

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A geographic location as a longitude/latitude pair.
///
/// Longitude is bounded to [-180, 180] and latitude to [-90, 90] by the
/// projection the service uses; out-of-range values are passed through to
/// the service untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Latitude in decimal degrees.
    pub latitude: f64,
}

impl Point {
    /// Create a point from a longitude/latitude pair.
    #[must_use]
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }
}

impl Serialize for Point {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(2))?;
        seq.serialize_element(&self.longitude)?;
        seq.serialize_element(&self.latitude)?;
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Point {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PointVisitor;

        impl<'de> Visitor<'de> for PointVisitor {
            type Value = Point;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a [longitude, latitude] array")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Point, A::Error> {
                let longitude = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let latitude = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                if seq.next_element::<f64>()?.is_some() {
                    return Err(de::Error::invalid_length(3, &self));
                }
                Ok(Point {
                    longitude,
                    latitude,
                })
            }
        }

        deserializer.deserialize_seq(PointVisitor)
    }
}

/// A directional constraint at a coordinate.
///
/// `angle` is measured clockwise from true north; `tolerance` is the range
/// of degrees the angle may deviate by. Both are bounded to [0, 360] at
/// request-build time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bearing {
    /// Angle of travel, clockwise from true north.
    pub angle: f64,
    /// Allowed deviation from the angle, in degrees.
    pub tolerance: f64,
}

impl Bearing {
    /// Create a bearing from an angle/tolerance pair.
    #[must_use]
    pub fn new(angle: f64, tolerance: f64) -> Self {
        Self { angle, tolerance }
    }
}

impl Serialize for Bearing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(2))?;
        seq.serialize_element(&self.angle)?;
        seq.serialize_element(&self.tolerance)?;
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Bearing {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BearingVisitor;

        impl<'de> Visitor<'de> for BearingVisitor {
            type Value = Bearing;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("an [angle, tolerance] array")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Bearing, A::Error> {
                let angle = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let tolerance = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                if seq.next_element::<f64>()?.is_some() {
                    return Err(de::Error::invalid_length(3, &self));
                }
                Ok(Bearing { angle, tolerance })
            }
        }

        deserializer.deserialize_seq(BearingVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_serialize_point_as_lon_lat_array() {
        let point = Point::new(13.4301, 52.5109);
        let json = serde_json::to_string(&point).unwrap();
        assert_eq!(json, "[13.4301,52.5109]");
    }

    #[test]
    fn test_should_deserialize_point_from_array() {
        let point: Point = serde_json::from_str("[13.4301,52.5109]").unwrap();
        assert_eq!(point, Point::new(13.4301, 52.5109));
    }

    #[test]
    fn test_should_reject_point_with_wrong_arity() {
        assert!(serde_json::from_str::<Point>("[13.4]").is_err());
        assert!(serde_json::from_str::<Point>("[1.0,2.0,3.0]").is_err());
    }

    #[test]
    fn test_should_round_trip_bearing() {
        let bearing = Bearing::new(60.0, 45.0);
        let json = serde_json::to_string(&bearing).unwrap();
        assert_eq!(json, "[60.0,45.0]");
        let back: Bearing = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bearing);
    }
}
