//! Planar points and straight-line distance.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PointParseError;

/// A location in the plane.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Point;
///
/// let a = Point::origin();
/// let b = Point::new(3.0, 4.0);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
///
/// let parsed: Point = "(-116.78,76.80)".parse().unwrap();
/// assert_eq!(parsed, Point::new(-116.78, 76.80));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X-coordinate.
    pub x: f64,
    /// Y-coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The point `(0, 0)`, the default depot.
    pub fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::origin()
    }
}

/// Euclidean distance between two points.
pub fn distance(a: &Point, b: &Point) -> f64 {
    a.distance_to(b)
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = PointParseError;

    /// Parses the `(x,y)` form used by load files.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| PointParseError::MissingParentheses(trimmed.to_string()))?;

        let mut parts = inner.split(',');
        let (Some(sx), Some(sy), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(PointParseError::WrongArity(trimmed.to_string()));
        };

        let parse = |part: &str| {
            part.trim()
                .parse::<f64>()
                .map_err(|_| PointParseError::InvalidNumber(part.trim().to_string()))
        };
        Ok(Self::new(parse(sx)?, parse(sy)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_distance_known() {
        let a = Point::new(1.0, 1.0);
        let b = Point::new(4.0, 5.0);
        assert!((distance(&a, &b) - 5.0).abs() < 1e-10);
        assert_eq!(distance(&a, &a), 0.0);
    }

    #[test]
    fn test_parse_valid() {
        let p: Point = " (-116.78442279683607,76.80147820713637) "
            .parse()
            .expect("valid");
        assert!((p.x + 116.78442279683607).abs() < 1e-12);
        assert!((p.y - 76.80147820713637).abs() < 1e-12);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "1.0,2.0".parse::<Point>(),
            Err(PointParseError::MissingParentheses(_))
        ));
        assert!(matches!(
            "(1.0)".parse::<Point>(),
            Err(PointParseError::WrongArity(_))
        ));
        assert!(matches!(
            "(1.0,2.0,3.0)".parse::<Point>(),
            Err(PointParseError::WrongArity(_))
        ));
        assert_eq!(
            "(1.0,abc)".parse::<Point>(),
            Err(PointParseError::InvalidNumber("abc".into()))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::new(1.5, -2.0).to_string(), "(1.5,-2)");
    }

    proptest! {
        #[test]
        fn prop_distance_symmetric(
            ax in -500.0f64..500.0, ay in -500.0f64..500.0,
            bx in -500.0f64..500.0, by in -500.0f64..500.0,
        ) {
            let a = Point::new(ax, ay);
            let b = Point::new(bx, by);
            prop_assert_eq!(distance(&a, &b), distance(&b, &a));
            prop_assert!(distance(&a, &b) >= 0.0);
        }

        #[test]
        fn prop_triangle_inequality(
            ax in -500.0f64..500.0, ay in -500.0f64..500.0,
            bx in -500.0f64..500.0, by in -500.0f64..500.0,
            cx in -500.0f64..500.0, cy in -500.0f64..500.0,
        ) {
            let (a, b, c) = (Point::new(ax, ay), Point::new(bx, by), Point::new(cx, cy));
            prop_assert!(distance(&a, &c) <= distance(&a, &b) + distance(&b, &c) + 1e-9);
        }
    }
}
