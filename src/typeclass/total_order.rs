//! `TotalOrder` type class - an explicit ordering relation.
//!
//! `TotalOrder` is the ordering capability used by
//! [`Sequence::sort_ascending`](crate::collection::Sequence::sort_ascending)
//! and [`OrderedUniqueSet`](crate::collection::OrderedUniqueSet). Unlike
//! [`Ord`], it is not required to agree with `PartialEq`: two elements may
//! compare `Equal` under `TotalOrder` while being unequal under `==`.
//! [`Point`](crate::geometry::Point) is the motivating case, ordered by
//! squared distance from the origin but compared for equality by exact
//! coordinates.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Antisymmetry
//!
//! ```text
//! a.total_order(b) == b.total_order(a).reverse()
//! ```
//!
//! ## Transitivity
//!
//! ```text
//! a.total_order(b) != Greater && b.total_order(c) != Greater
//!     implies a.total_order(c) != Greater
//! ```
//!
//! ## Consistency with `precedes` / `follows`
//!
//! ```text
//! a.precedes(b) == (a.total_order(b) == Less)
//! a.follows(b)  == (a.total_order(b) == Greater)
//! ```
//!
//! ## Equality implies a tie
//!
//! ```text
//! a == b implies a.ties_with(b)
//! ```
//!
//! The converse need not hold.
//!
//! # Examples
//!
//! ```rust
//! use seqlab::typeclass::TotalOrder;
//! use std::cmp::Ordering;
//!
//! assert_eq!(3_i32.total_order(&7), Ordering::Less);
//! assert!(2.5_f64.follows(&-1.0));
//! assert!("apple".precedes("banana"));
//! ```

use std::cmp::Ordering;

/// A type class for types with an explicit total ordering relation.
///
/// # Laws
///
/// Implementations must be antisymmetric and transitive, and every pair of
/// values must be comparable. Values equal under `PartialEq` must tie;
/// values that tie need not be equal.
///
/// # Examples
///
/// ```rust
/// use seqlab::typeclass::TotalOrder;
/// use std::cmp::Ordering;
///
/// struct Version(u32, u32);
///
/// impl TotalOrder for Version {
///     fn total_order(&self, other: &Self) -> Ordering {
///         (self.0, self.1).cmp(&(other.0, other.1))
///     }
/// }
///
/// assert!(Version(1, 2).precedes(&Version(1, 10)));
/// ```
pub trait TotalOrder {
    /// Compares `self` with `other`.
    fn total_order(&self, other: &Self) -> Ordering;

    /// Returns `true` if `self` is strictly less than `other`.
    #[inline]
    fn precedes(&self, other: &Self) -> bool {
        self.total_order(other) == Ordering::Less
    }

    /// Returns `true` if `self` is strictly greater than `other`.
    #[inline]
    fn follows(&self, other: &Self) -> bool {
        self.total_order(other) == Ordering::Greater
    }

    /// Returns `true` if neither element precedes the other.
    ///
    /// Ties are not necessarily equal under `PartialEq`.
    #[inline]
    fn ties_with(&self, other: &Self) -> bool {
        self.total_order(other) == Ordering::Equal
    }
}

// =============================================================================
// Standard Implementations
// =============================================================================

macro_rules! impl_total_order_via_ord {
    ($($type:ty),* $(,)?) => {
        $(
            impl TotalOrder for $type {
                #[inline]
                fn total_order(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )*
    };
}

impl_total_order_via_ord!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, str, String,
);

// `total_cmp` after folding `-0.0` into `0.0`, so the two zeros tie.
impl TotalOrder for f32 {
    #[inline]
    fn total_order(&self, other: &Self) -> Ordering {
        let fold = |value: f32| if value == 0.0 { 0.0 } else { value };
        fold(*self).total_cmp(&fold(*other))
    }
}

impl TotalOrder for f64 {
    #[inline]
    fn total_order(&self, other: &Self) -> Ordering {
        let fold = |value: f64| if value == 0.0 { 0.0 } else { value };
        fold(*self).total_cmp(&fold(*other))
    }
}

impl<T: TotalOrder + ?Sized> TotalOrder for &T {
    #[inline]
    fn total_order(&self, other: &Self) -> Ordering {
        T::total_order(*self, *other)
    }
}

impl<A: TotalOrder, B: TotalOrder> TotalOrder for (A, B) {
    fn total_order(&self, other: &Self) -> Ordering {
        self.0
            .total_order(&other.0)
            .then_with(|| self.1.total_order(&other.1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 2, Ordering::Less)]
    #[case(2, 2, Ordering::Equal)]
    #[case(3, 2, Ordering::Greater)]
    fn test_integer_total_order(#[case] left: i32, #[case] right: i32, #[case] expected: Ordering) {
        assert_eq!(left.total_order(&right), expected);
    }

    #[rstest]
    fn test_float_total_order_handles_nan() {
        assert_eq!(f64::NAN.total_order(&f64::NAN), Ordering::Equal);
        assert!(1.0_f64.precedes(&f64::NAN));
    }

    #[rstest]
    #[case(-0.0_f64, 0.0_f64)]
    #[case(0.0_f64, -0.0_f64)]
    #[case(-0.0_f64, -0.0_f64)]
    fn test_float_signed_zeros_tie(#[case] left: f64, #[case] right: f64) {
        assert_eq!(left, right);
        assert!(left.ties_with(&right));
        #[allow(clippy::cast_possible_truncation)]
        let (narrow_left, narrow_right) = (left as f32, right as f32);
        assert!(narrow_left.ties_with(&narrow_right));
    }

    #[rstest]
    fn test_float_zero_still_orders_against_neighbours() {
        assert!((-0.0_f64).follows(&-f64::MIN_POSITIVE));
        assert!((-0.0_f64).precedes(&f64::MIN_POSITIVE));
    }

    #[rstest]
    fn test_reference_delegates() {
        let (left, right) = (&1_u8, &9_u8);
        assert!(<&u8 as TotalOrder>::precedes(&left, &right));
    }

    #[rstest]
    fn test_pair_is_lexicographic() {
        assert!((1_i32, 9_i32).precedes(&(2, 0)));
        assert!((2_i32, 1_i32).follows(&(2, 0)));
        assert!((2_i32, 1_i32).ties_with(&(2, 1)));
    }
}
