//! Planar element types and range tests.
//!
//! - [`Point`]: `f64` point ordered by squared distance from the origin
//! - [`Planar`]: anything with an x and a y coordinate
//! - [`RangePredicate`]: inclusive rectangle test over [`Planar`] elements
//!
//! # Examples
//!
//! ```rust
//! use seqlab::geometry::{in_range, Point};
//!
//! let points = [Point::new(1.0, 2.0), Point::new(5.0, 3.0), Point::new(0.0, -5.0)];
//! let is_inside = in_range::<Point>(2.0, 5.0, 3.0, 10.0);
//! let found = points.iter().find(|point| is_inside(*point));
//! assert_eq!(found, Some(&Point::new(5.0, 3.0)));
//! ```

mod point;
mod range;

pub use point::Point;
pub use range::{RangePredicate, in_range};

/// Access to the two coordinates of a planar element.
pub trait Planar {
    /// Returns the x-coordinate.
    fn x(&self) -> f64;

    /// Returns the y-coordinate.
    fn y(&self) -> f64;
}

impl Planar for (f64, f64) {
    #[inline]
    fn x(&self) -> f64 {
        self.0
    }

    #[inline]
    fn y(&self) -> f64 {
        self.1
    }
}

impl<P: Planar + ?Sized> Planar for &P {
    #[inline]
    fn x(&self) -> f64 {
        P::x(*self)
    }

    #[inline]
    fn y(&self) -> f64 {
        P::y(*self)
    }
}

static_assertions::assert_impl_all!(Point: Send, Sync, Copy);
static_assertions::assert_impl_all!(RangePredicate: Send, Sync, Copy);
