//! Type class traits used by the collections.
//!
//! - [`TotalOrder`]: an explicit total ordering, independent of `PartialEq`
//!
//! Collections in this crate take their ordering from `TotalOrder` and their
//! notion of duplicates from `PartialEq`. Keeping the two apart lets an
//! element type order by a derived key (such as distance from the origin)
//! without collapsing distinct values that share the key.
//!
//! # Examples
//!
//! ```rust
//! use seqlab::typeclass::TotalOrder;
//!
//! let mut values = vec![3.5, -1.0, 2.0];
//! values.sort_by(TotalOrder::total_order);
//! assert_eq!(values, vec![-1.0, 2.0, 3.5]);
//! ```

mod total_order;

pub use total_order::TotalOrder;
