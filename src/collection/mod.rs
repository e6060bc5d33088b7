//! Mutable collections.
//!
//! - [`Sequence`]: insertion-ordered container with positional mutation and
//!   predicate search
//! - [`OrderedUniqueSet`]: sorted container that drops `PartialEq` duplicates
//!   and orders by [`TotalOrder`](crate::typeclass::TotalOrder)
//!
//! The two meet in [`OrderedUniqueSet::build_from`], which projects the
//! matching elements of a sequence into a set, and in
//! [`OrderedUniqueSet::to_sequence`], which copies a set back out.
//!
//! # Examples
//!
//! ```rust
//! use seqlab::collection::{OrderedUniqueSet, Sequence};
//!
//! let mut numbers: Sequence<i32> = [4, 1, 4, 9, 1].into_iter().collect();
//! let unique = OrderedUniqueSet::build_from(&numbers, |value| *value > 1);
//! assert_eq!(unique.as_slice(), &[4, 9]);
//!
//! numbers.append_range(unique.iter());
//! assert_eq!(numbers.len(), 7);
//! ```

mod ordered_unique_set;
mod sequence;

pub use ordered_unique_set::{
    OrderedUniqueSet, OrderedUniqueSetIntoIterator, OrderedUniqueSetIterator,
};
pub use sequence::{MatchingPositions, Matches, Sequence};

static_assertions::assert_impl_all!(Sequence<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(OrderedUniqueSet<i32>: Send, Sync, Clone);
