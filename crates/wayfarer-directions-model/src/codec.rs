//! Codec for the request wire grammar.
//!
//! List-valued request parameters travel as `segment(;segment)*` strings
//! where each segment may itself be a `value(,value)*` tuple. Encoders map
//! typed values into that grammar; an empty input list encodes to `None`
//! so the parameter is omitted from the request entirely. Positional lists
//! (waypoint targets, approaches, bearings) keep absent entries as empty
//! segments so the position survives the round trip.
//!
//! Decoders perform the inverse and are used when reconstructing a builder
//! from a previously issued request. Numeric formatting is locale
//! independent and stable: encode → decode → encode yields the identical
//! string.

use std::fmt;
use std::str::FromStr;

use crate::criteria::{Annotation, Approach};
use crate::error::EncodingError;
use crate::point::{Bearing, Point};

/// Separator between segments.
const SEMICOLON: &str = ";";

/// Separator between values inside a segment.
const COMMA: &str = ",";

/// Wire value for an unbounded snapping radius.
const UNLIMITED: &str = "unlimited";

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// Format a coordinate (or any coordinate-scaled number) for the wire.
///
/// Uses six decimal places with trailing zeros (and a bare trailing dot)
/// stripped, independent of host locale.
///
/// # Examples
///
/// ```
/// use wayfarer_directions_model::codec::format_coordinate;
///
/// assert_eq!(format_coordinate(13.4), "13.4");
/// assert_eq!(format_coordinate(52.0), "52");
/// assert_eq!(format_coordinate(13.456_789_012), "13.456789");
/// ```
#[must_use]
pub fn format_coordinate(value: f64) -> String {
    let formatted = format!("{value:.6}");
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_owned()
}

/// Encode a sequence of points as `lon,lat(;lon,lat)*`.
#[must_use]
pub fn format_points(points: &[Point]) -> String {
    points
        .iter()
        .map(|point| {
            format!(
                "{},{}",
                format_coordinate(point.longitude),
                format_coordinate(point.latitude)
            )
        })
        .collect::<Vec<_>>()
        .join(SEMICOLON)
}

/// Encode a positional point list where `None` becomes an empty segment.
///
/// Used for per-waypoint optional fields: the empty segment preserves the
/// entry's position without emitting coordinates.
#[must_use]
pub fn format_point_list(points: &[Option<Point>]) -> Option<String> {
    if points.is_empty() {
        return None;
    }
    let joined = points
        .iter()
        .map(|entry| match entry {
            Some(point) => format!(
                "{},{}",
                format_coordinate(point.longitude),
                format_coordinate(point.latitude)
            ),
            None => String::new(),
        })
        .collect::<Vec<_>>()
        .join(SEMICOLON);
    Some(joined)
}

/// Encode bearings as `angle,tolerance` segments; `None` entries stay
/// empty to skip a coordinate while preserving its position.
#[must_use]
pub fn format_bearings(bearings: &[Option<Bearing>]) -> Option<String> {
    if bearings.is_empty() {
        return None;
    }
    let joined = bearings
        .iter()
        .map(|entry| match entry {
            Some(bearing) => format!(
                "{},{}",
                format_coordinate(bearing.angle),
                format_coordinate(bearing.tolerance)
            ),
            None => String::new(),
        })
        .collect::<Vec<_>>()
        .join(SEMICOLON);
    Some(joined)
}

/// Encode snapping radiuses; `f64::INFINITY` encodes as `unlimited`.
#[must_use]
pub fn format_radiuses(radiuses: &[f64]) -> Option<String> {
    if radiuses.is_empty() {
        return None;
    }
    let joined = radiuses
        .iter()
        .map(|radius| {
            if radius.is_infinite() {
                UNLIMITED.to_owned()
            } else {
                format_coordinate(*radius)
            }
        })
        .collect::<Vec<_>>()
        .join(SEMICOLON);
    Some(joined)
}

/// Encode per-coordinate approach hints; `None` entries stay empty.
#[must_use]
pub fn format_approaches(approaches: &[Option<Approach>]) -> Option<String> {
    if approaches.is_empty() {
        return None;
    }
    let joined = approaches
        .iter()
        .map(|entry| entry.map_or("", |a| a.as_str()))
        .collect::<Vec<_>>()
        .join(SEMICOLON);
    Some(joined)
}

/// Encode waypoint names; empty strings skip a coordinate in place.
#[must_use]
pub fn format_waypoint_names(names: &[String]) -> Option<String> {
    if names.is_empty() {
        return None;
    }
    Some(names.join(SEMICOLON))
}

/// Join any displayable list with `;`, the wire list separator.
#[must_use]
pub fn join_list<T: fmt::Display>(values: &[T]) -> Option<String> {
    if values.is_empty() {
        return None;
    }
    let joined = values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(SEMICOLON);
    Some(joined)
}

/// Join annotation tags with `,`; annotations are the one comma-joined
/// top-level parameter.
#[must_use]
pub fn join_annotations(annotations: &[Annotation]) -> Option<String> {
    if annotations.is_empty() {
        return None;
    }
    let joined = annotations
        .iter()
        .map(|annotation| annotation.as_str())
        .collect::<Vec<_>>()
        .join(COMMA);
    Some(joined)
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

fn parse_number<T: FromStr>(segment: &str) -> Result<T, EncodingError> {
    segment.parse().map_err(|_| EncodingError::Number {
        value: segment.to_owned(),
    })
}

fn parse_pair(segment: &str) -> Result<(f64, f64), EncodingError> {
    let mut values = segment.split(COMMA);
    let (Some(first), Some(second), None) = (values.next(), values.next(), values.next()) else {
        return Err(EncodingError::Point {
            segment: segment.to_owned(),
        });
    };
    Ok((parse_number(first)?, parse_number(second)?))
}

/// Decode `lon,lat(;lon,lat)*` into points, skipping empty segments.
pub fn parse_points(encoded: &str) -> Result<Vec<Point>, EncodingError> {
    encoded
        .split(SEMICOLON)
        .filter(|segment| !segment.is_empty())
        .map(|segment| parse_pair(segment).map(|(lon, lat)| Point::new(lon, lat)))
        .collect()
}

/// Decode a positional point list; empty segments become `None` entries.
pub fn parse_point_list(encoded: &str) -> Result<Vec<Option<Point>>, EncodingError> {
    encoded
        .split(SEMICOLON)
        .map(|segment| {
            if segment.is_empty() {
                Ok(None)
            } else {
                parse_pair(segment).map(|(lon, lat)| Some(Point::new(lon, lat)))
            }
        })
        .collect()
}

/// Decode bearing segments; empty segments become `None` entries.
pub fn parse_bearings(encoded: &str) -> Result<Vec<Option<Bearing>>, EncodingError> {
    encoded
        .split(SEMICOLON)
        .map(|segment| {
            if segment.is_empty() {
                return Ok(None);
            }
            let (angle, tolerance) = parse_pair(segment).map_err(|_| EncodingError::Bearing {
                segment: segment.to_owned(),
            })?;
            Ok(Some(Bearing::new(angle, tolerance)))
        })
        .collect()
}

/// Decode snapping radiuses; `unlimited` becomes `f64::INFINITY`.
pub fn parse_radiuses(encoded: &str) -> Result<Vec<f64>, EncodingError> {
    encoded
        .split(SEMICOLON)
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            if segment == UNLIMITED {
                Ok(f64::INFINITY)
            } else {
                parse_number(segment)
            }
        })
        .collect()
}

/// Decode approach hints; empty segments become `None` entries.
pub fn parse_approaches(encoded: &str) -> Result<Vec<Option<Approach>>, EncodingError> {
    encoded
        .split(SEMICOLON)
        .map(|segment| {
            if segment.is_empty() {
                return Ok(None);
            }
            Approach::from_name(segment)
                .map(Some)
                .ok_or_else(|| EncodingError::Approach {
                    value: segment.to_owned(),
                })
        })
        .collect()
}

/// Decode a `;`-joined index list, skipping empty segments.
pub fn parse_indices(encoded: &str) -> Result<Vec<usize>, EncodingError> {
    parse_list(encoded)
}

/// Decode a `;`-joined integer list, skipping empty segments.
pub fn parse_integers(encoded: &str) -> Result<Vec<u32>, EncodingError> {
    parse_list(encoded)
}

/// Decode a `;`-joined timestamp list, skipping empty segments.
pub fn parse_longs(encoded: &str) -> Result<Vec<i64>, EncodingError> {
    parse_list(encoded)
}

fn parse_list<T: FromStr>(encoded: &str) -> Result<Vec<T>, EncodingError> {
    encoded
        .split(SEMICOLON)
        .filter(|segment| !segment.is_empty())
        .map(parse_number)
        .collect()
}

/// Decode waypoint names, keeping empty segments as empty strings so the
/// skipped positions survive.
#[must_use]
pub fn parse_names(encoded: &str) -> Vec<String> {
    encoded.split(SEMICOLON).map(ToOwned::to_owned).collect()
}

/// Decode comma-joined annotation tags.
pub fn parse_annotations(encoded: &str) -> Result<Vec<Annotation>, EncodingError> {
    encoded
        .split(COMMA)
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            Annotation::from_name(segment).ok_or_else(|| EncodingError::Annotation {
                value: segment.to_owned(),
            })
        })
        .collect()
}
