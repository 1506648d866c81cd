//! Location, segment, and route types

use crate::coordinates::Coordinates;
use crate::error::{Error, Result};
use crate::traversal::Weight;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Strictly positive, finite segment length
///
/// Used as the edge label of the campus graph. Because NaN, infinities,
/// zero and negatives are rejected on construction, bitwise equality and
/// `total_cmp` ordering agree with numeric comparison.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Length(f64);

impl Length {
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(Error::InvalidLength(value))
        }
    }

    pub fn get(&self) -> f64 {
        self.0
    }
}

impl PartialEq for Length {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Length {}

impl Hash for Length {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl PartialOrd for Length {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Length {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl TryFrom<f64> for Length {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Length::new(value)
    }
}

impl From<Length> for f64 {
    fn from(length: Length) -> Self {
        length.0
    }
}

impl Weight for Length {
    fn cost(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named point of interest on the map
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Short unique identifier (e.g. "CSE")
    pub id: String,

    /// Full display name
    pub name: String,

    /// Where the location sits on the map
    pub coordinates: Coordinates,
}

impl Location {
    pub fn new(id: impl Into<String>, name: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            coordinates,
        }
    }

    /// Check that the record is usable as a map entry
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Validation("location id cannot be empty".to_string()));
        }
        Ok(())
    }
}

/// A walkable segment between two coordinates
///
/// Segments are undirected in meaning; the map stores each one as a pair
/// of opposing directed edges.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    pub origin: Coordinates,
    pub destination: Coordinates,
    pub length: Length,
}

impl Segment {
    pub fn new(origin: Coordinates, destination: Coordinates, length: Length) -> Self {
        Self {
            origin,
            destination,
            length,
        }
    }

}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.origin, self.destination, self.length)
    }
}

/// An ordered walk across the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Segments in traversal order
    pub segments: Vec<Segment>,

    /// Sum of segment lengths
    pub total_length: f64,
}

impl Route {
    pub fn new(segments: Vec<Segment>) -> Self {
        let total_length = segments.iter().fold(0.0, |sum, s| sum + s.length.get());
        Self {
            segments,
            total_length,
        }
    }

    /// Number of segments walked
    pub fn hops(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(x: f64, y: f64) -> Coordinates {
        Coordinates::new(x, y).unwrap()
    }

    #[test]
    fn test_length_rejects_non_positive() {
        assert!(Length::new(1.5).is_ok());
        assert!(matches!(Length::new(0.0), Err(Error::InvalidLength(_))));
        assert!(Length::new(-3.0).is_err());
        assert!(Length::new(f64::NAN).is_err());
        assert!(Length::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_length_ordering() {
        let short = Length::new(1.0).unwrap();
        let long = Length::new(2.5).unwrap();
        assert!(short < long);
        assert_eq!(short, Length::new(1.0).unwrap());
    }

    #[test]
    fn test_length_serde_validates() {
        let length: Length = serde_json::from_str("12.5").unwrap();
        assert_eq!(length.get(), 12.5);
        assert!(serde_json::from_str::<Length>("-1").is_err());
    }

    #[test]
    fn test_location_validate() {
        let origin = coords(0.0, 0.0);
        assert!(Location::new("CSE", "Computer Science", origin).validate().is_ok());
        assert!(Location::new("  ", "Nowhere", origin).validate().is_err());
    }

    #[test]
    fn test_route_total_length() {
        let a = coords(0.0, 0.0);
        let b = coords(10.0, 0.0);
        let c = coords(10.0, 10.0);
        let route = Route::new(vec![
            Segment::new(a, b, Length::new(10.0).unwrap()),
            Segment::new(b, c, Length::new(12.5).unwrap()),
        ]);

        assert_eq!(route.hops(), 2);
        assert!((route.total_length - 22.5).abs() < 1e-9);
        assert!(Route::new(Vec::new()).is_empty());
    }

    #[test]
    fn test_empty_route_is_positive_zero() {
        let route = Route::new(Vec::new());
        assert!(route.total_length.is_sign_positive());

        let json = serde_json::to_string(&route).unwrap();
        assert_eq!(json, r#"{"segments":[],"total_length":0.0}"#);
    }
}
