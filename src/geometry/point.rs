//! Two-dimensional point record.
//!
//! [`Point`] compares for equality by exact coordinates and orders by squared
//! distance from the origin. The two relations disagree: the
//! points `(3, 4)` and `(4, 3)` tie under [`TotalOrder`] yet are not equal.
//!
//! # Examples
//!
//! ```rust
//! use seqlab::geometry::Point;
//! use seqlab::typeclass::TotalOrder;
//!
//! let near = Point::new(1.0, 1.0);
//! let far = Point::new(7.0, 4.0);
//! assert!(near.precedes(&far));
//!
//! let (a, b) = (Point::new(3.0, 4.0), Point::new(4.0, 3.0));
//! assert!(a.ties_with(&b));
//! assert_ne!(a, b);
//! ```

use std::cmp::Ordering;
use std::fmt;

use super::Planar;
use crate::typeclass::TotalOrder;

/// A point in the plane with `f64` coordinates.
///
/// # Examples
///
/// ```rust
/// use seqlab::geometry::Point;
///
/// let point = Point::new(6.0, 9.0);
/// assert_eq!(point.to_string(), "Point(6, 9)");
/// assert_eq!(point.squared_distance_from_origin(), 117.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a point from its coordinates.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin, `Point(0, 0)`.
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Returns the x-coordinate.
    #[inline]
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate.
    #[inline]
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Returns `x * x + y * y`, the key [`TotalOrder`] compares.
    #[inline]
    #[must_use]
    #[allow(clippy::suboptimal_flops)]
    pub fn squared_distance_from_origin(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }
}

impl TotalOrder for Point {
    #[inline]
    fn total_order(&self, other: &Self) -> Ordering {
        self.squared_distance_from_origin()
            .total_cmp(&other.squared_distance_from_origin())
    }
}

impl Planar for Point {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Point({}, {})", self.x, self.y)
    }
}
