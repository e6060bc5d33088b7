//! # seqlab
//!
//! Ordered sequence utilities and an ordered-unique projection.
//!
//! ## Overview
//!
//! - **Type Classes**: [`TotalOrder`](typeclass::TotalOrder), an explicit
//!   ordering capability that may disagree with `PartialEq`
//! - **Collections**: [`Sequence`](collection::Sequence), a mutable
//!   insertion-ordered container, and
//!   [`OrderedUniqueSet`](collection::OrderedUniqueSet), a sorted container
//!   that deduplicates by equality while ordering by `TotalOrder`
//! - **Geometry**: [`Point`](geometry::Point) and the inclusive
//!   [`RangePredicate`](geometry::RangePredicate)
//! - **Scenarios**: the three console walkthroughs shipped with the `seqlab`
//!   binary
//!
//! ## Feature Flags
//!
//! - `typeclass`: the `TotalOrder` capability
//! - `collection`: `Sequence` and `OrderedUniqueSet`
//! - `geometry`: `Point`, `Planar` and `RangePredicate`
//! - `scenario`: the console scenarios
//! - `cli`: the `seqlab` binary
//! - `serde`: serialization support
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use seqlab::prelude::*;
//!
//! let points: Sequence<Point> = [Point::new(1.0, 2.0), Point::new(5.0, 3.0), Point::new(7.0, 2.0)]
//!     .into_iter()
//!     .collect();
//! let window = RangePredicate::new(2.0, 5.0, 3.0, 10.0);
//!
//! let set = OrderedUniqueSet::build_from(&points, window.as_fn::<Point>());
//! assert_eq!(set.to_sequence().as_slice(), &[Point::new(5.0, 3.0)]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use seqlab::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "geometry")]
    pub use crate::geometry::*;

    pub use crate::error::SequenceError;
    pub use crate::show::{render_line, show};
}

pub mod error;
pub mod show;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "geometry")]
pub mod geometry;

#[cfg(feature = "scenario")]
pub mod scenario;
