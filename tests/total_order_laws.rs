//! Property-based tests for TotalOrder.
//!
//! These tests verify the total order laws for the provided instances and
//! for `Point`, whose order disagrees with its equality.

#![cfg(all(feature = "typeclass", feature = "geometry"))]

use std::cmp::Ordering;

use proptest::prelude::*;
use seqlab::geometry::Point;
use seqlab::typeclass::TotalOrder;

/// Floats biased toward both signed zeros so that equal pairs occur often.
fn float_with_zeros() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0_f64), Just(-0.0_f64), -2.0..2.0_f64, any::<f64>()]
}

fn point_strategy() -> impl Strategy<Value = Point> {
    (-100.0..100.0_f64, -100.0..100.0_f64).prop_map(Point::from)
}

proptest! {
    // =========================================================================
    // Integers agree with Ord
    // =========================================================================

    #[test]
    fn prop_integer_order_matches_ord(left: i64, right: i64) {
        prop_assert_eq!(left.total_order(&right), left.cmp(&right));
    }

    // =========================================================================
    // Floats
    // =========================================================================

    #[test]
    fn prop_float_antisymmetry(left: f64, right: f64) {
        prop_assert_eq!(left.total_order(&right), right.total_order(&left).reverse());
    }

    #[test]
    fn prop_float_reflexive(value: f64) {
        prop_assert_eq!(value.total_order(&value), Ordering::Equal);
    }

    #[test]
    fn prop_float_equality_implies_tie(left in float_with_zeros(), right in float_with_zeros()) {
        if left == right {
            prop_assert!(left.ties_with(&right));
        }
    }

    #[test]
    fn prop_float_negation_of_equal_zero_ties(value in float_with_zeros()) {
        let negated = -value;
        if value == negated {
            prop_assert!(value.ties_with(&negated));
        }
    }

    // =========================================================================
    // Point
    // =========================================================================

    #[test]
    fn prop_point_antisymmetry(left in point_strategy(), right in point_strategy()) {
        prop_assert_eq!(left.total_order(&right), right.total_order(&left).reverse());
    }

    #[test]
    fn prop_point_transitivity(
        first in point_strategy(),
        second in point_strategy(),
        third in point_strategy(),
    ) {
        let mut sorted = [first, second, third];
        sorted.sort_by(TotalOrder::total_order);
        prop_assert!(!sorted[1].precedes(&sorted[0]));
        prop_assert!(!sorted[2].precedes(&sorted[1]));
        prop_assert!(!sorted[2].precedes(&sorted[0]));
    }

    #[test]
    fn prop_point_equality_implies_tie(point in point_strategy()) {
        let copy = point;
        prop_assert_eq!(point, copy);
        prop_assert!(point.ties_with(&copy));
    }

    #[test]
    fn prop_point_swapped_coordinates_tie(x in -100.0..100.0_f64, y in -100.0..100.0_f64) {
        let point = Point::new(x, y);
        let swapped = Point::new(y, x);
        prop_assert!(point.ties_with(&swapped));
    }

    #[test]
    fn prop_exactly_one_relation_holds(left in point_strategy(), right in point_strategy()) {
        let relations = [left.precedes(&right), left.ties_with(&right), left.follows(&right)];
        prop_assert_eq!(relations.iter().filter(|holds| **holds).count(), 1);
    }
}
