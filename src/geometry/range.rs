//! Inclusive axis-aligned range test.
//!
//! [`RangePredicate`] captures four bounds by value and answers whether a
//! [`Planar`] element lies inside the closed rectangle they describe. It is
//! `Copy`, holds no state besides the bounds, and can be reused across any
//! number of scans.

use super::Planar;

/// Closed rectangle `[x_min, x_max] x [y_min, y_max]`.
///
/// # Examples
///
/// ```rust
/// use seqlab::geometry::{Point, RangePredicate};
///
/// let window = RangePredicate::new(2.0, 5.0, 3.0, 10.0);
/// assert!(window.test(&Point::new(5.0, 3.0)));
/// assert!(!window.test(&Point::new(6.0, 9.0)));
///
/// // As a closure for iterator adapters
/// let inside = [Point::new(1.0, 2.0), Point::new(4.0, 9.0)]
///     .iter()
///     .filter(|point| window.test(*point))
///     .count();
/// assert_eq!(inside, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangePredicate {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl RangePredicate {
    /// Creates a predicate from inclusive bounds on both axes.
    ///
    /// Bounds where `min > max` describe an empty range; every test fails.
    #[inline]
    #[must_use]
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Returns `true` iff both coordinates of `element` fall within the bounds.
    #[inline]
    #[must_use]
    pub fn test<P: Planar + ?Sized>(&self, element: &P) -> bool {
        let (x, y) = (element.x(), element.y());
        (self.x_min..=self.x_max).contains(&x) && (self.y_min..=self.y_max).contains(&y)
    }

    /// Returns the predicate as a `Copy` closure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlab::collection::Sequence;
    /// use seqlab::geometry::{Point, RangePredicate};
    ///
    /// let points: Sequence<Point> = [Point::new(4.0, 9.0), Point::new(7.0, 4.0)]
    ///     .into_iter()
    ///     .collect();
    /// let window = RangePredicate::new(3.0, 8.0, 1.0, 5.0).as_fn::<Point>();
    /// assert!(points.any_matching(window));
    /// ```
    #[inline]
    #[must_use]
    pub fn as_fn<P: Planar>(self) -> impl Fn(&P) -> bool + Copy {
        move |element| self.test(element)
    }

    /// Returns the `(x_min, x_max)` bounds.
    #[inline]
    #[must_use]
    pub const fn x_bounds(&self) -> (f64, f64) {
        (self.x_min, self.x_max)
    }

    /// Returns the `(y_min, y_max)` bounds.
    #[inline]
    #[must_use]
    pub const fn y_bounds(&self) -> (f64, f64) {
        (self.y_min, self.y_max)
    }
}

/// Free-function form of [`RangePredicate::as_fn`].
///
/// # Examples
///
/// ```rust
/// use seqlab::geometry::{in_range, Point};
///
/// let is_inside = in_range::<Point>(2.0, 5.0, 3.0, 10.0);
/// assert!(is_inside(&Point::new(2.0, 4.0)));
/// assert!(!is_inside(&Point::new(1.0, 3.0)));
/// ```
#[inline]
#[must_use]
pub fn in_range<P: Planar>(
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
) -> impl Fn(&P) -> bool + Copy {
    RangePredicate::new(x_min, x_max, y_min, y_max).as_fn()
}
