//! Map coordinates with exact, hashable identity

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed-point units per coordinate unit (micro-units)
const SCALE: f64 = 1_000_000.0;

/// A point on the map
///
/// Both components are stored as fixed-point micro-units: `x` and `y` are
/// rounded to the nearest 1e-6 on construction, and equality, hashing and
/// ordering all use the rounded value. Two coordinates that agree to six
/// decimal places are the same graph node; anything finer is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Point", into = "Point")]
pub struct Coordinates {
    x: i64,
    y: i64,
}

impl Coordinates {
    /// Create coordinates, rejecting non-finite or out-of-range components
    pub fn new(x: f64, y: f64) -> Result<Self> {
        match (to_fixed(x), to_fixed(y)) {
            (Some(fx), Some(fy)) => Ok(Self { x: fx, y: fy }),
            _ => Err(Error::InvalidCoordinates { x, y }),
        }
    }

    pub fn x(&self) -> f64 {
        self.x as f64 / SCALE
    }

    pub fn y(&self) -> f64 {
        self.y as f64 / SCALE
    }
}

fn to_fixed(value: f64) -> Option<i64> {
    let scaled = (value * SCALE).round();
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range
    if scaled.is_finite() && scaled.abs() < i64::MAX as f64 {
        Some(scaled as i64)
    } else {
        None
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x(), self.y())
    }
}

/// Wire form of [`Coordinates`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct Point {
    x: f64,
    y: f64,
}

impl TryFrom<Point> for Coordinates {
    type Error = Error;

    fn try_from(point: Point) -> Result<Self> {
        Coordinates::new(point.x, point.y)
    }
}

impl From<Coordinates> for Point {
    fn from(c: Coordinates) -> Self {
        Point { x: c.x(), y: c.y() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_coordinates_roundtrip_values() {
        let c = Coordinates::new(1868.7262, -1230.5).unwrap();
        assert!((c.x() - 1868.7262).abs() < 1e-9);
        assert!((c.y() + 1230.5).abs() < 1e-9);
    }

    #[test]
    fn test_identity_is_fixed_point() {
        let a = Coordinates::new(0.1 + 0.2, 1.0).unwrap();
        let b = Coordinates::new(0.3, 1.0).unwrap();
        assert_eq!(a, b);

        let c = Coordinates::new(0.300001, 1.0).unwrap();
        assert_ne!(a, c);

        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
        assert!(Coordinates::new(0.0, f64::INFINITY).is_err());
        assert!(Coordinates::new(1e300, 0.0).is_err());
    }

    #[test]
    fn test_ordering_is_x_then_y() {
        let a = Coordinates::new(0.0, 5.0).unwrap();
        let b = Coordinates::new(1.0, 0.0).unwrap();
        let c = Coordinates::new(1.0, 2.0).unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_serde() {
        let c = Coordinates::new(10.5, -2.25).unwrap();
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"x":10.5,"y":-2.25}"#);

        let back: Coordinates = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);

        let bad = serde_json::from_str::<Coordinates>(r#"{"x":1e300,"y":0}"#);
        assert!(bad.is_err());
    }
}
