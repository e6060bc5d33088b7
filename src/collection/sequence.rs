//! Mutable insertion-ordered sequence.
//!
//! This module provides [`Sequence`], an ordered container that permits
//! duplicates and supports positional mutation in place.
//!
//! # Overview
//!
//! Positions are `usize` indices. The *end* position is [`Sequence::len`]:
//! inserting at the end appends, and searches that find nothing return it.
//!
//! - Value removal (`remove`) and positional removal (`remove_at`, `erase_range`)
//! - Positional insertion (`insert_at`) and bulk copy (`append_range`)
//! - Sorting by [`TotalOrder`] (`sort_ascending`) and reversal (`reverse`)
//! - Predicate search (`find_first_matching`) and the lazy enumeration of all
//!   matches built on it (`matching_positions`, `matches`)
//!
//! # Time Complexity
//!
//! | Operation             | Complexity   |
//! |-----------------------|--------------|
//! | `len`                 | O(1)         |
//! | `get`                 | O(1)         |
//! | `remove`              | O(n)         |
//! | `insert_at`           | O(n)         |
//! | `erase_range`         | O(n)         |
//! | `append_range`        | O(m)         |
//! | `sort_ascending`      | O(n log n)   |
//! | `reverse`             | O(n)         |
//! | `find_first_matching` | O(n)         |
//!
//! # Examples
//!
//! ```rust
//! use seqlab::collection::Sequence;
//!
//! let mut sequence: Sequence<i32> = [1, 6, 2, 8, 2, 0].into_iter().collect();
//! sequence.remove(&6);
//! sequence.insert_at(1, 7);
//! assert_eq!(sequence.as_slice(), &[1, 7, 2, 8, 2, 0]);
//!
//! let tail: Sequence<i32> = [15, 42, 64].into_iter().collect();
//! sequence.erase_range(3..);
//! sequence.append_range(&tail);
//! assert_eq!(sequence.as_slice(), &[1, 7, 2, 15, 42, 64]);
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::ops::{Bound, Index, Range, RangeBounds};

use crate::error::SequenceError;
use crate::typeclass::TotalOrder;

/// A mutable, insertion-ordered sequence that permits duplicates.
///
/// Every operation mutates the sequence in place. Order changes only when the
/// caller sorts, reverses, inserts or erases.
///
/// # Examples
///
/// ```rust
/// use seqlab::collection::Sequence;
///
/// let mut sequence = Sequence::from_vec(vec![3, 1, 2]);
/// sequence.sort_ascending();
/// sequence.reverse();
/// assert_eq!(sequence.as_slice(), &[3, 2, 1]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Sequence<T> {
    elements: Vec<T>,
}

impl<T> Sequence<T> {
    /// Creates a new empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlab::collection::Sequence;
    ///
    /// let sequence: Sequence<i32> = Sequence::new();
    /// assert!(sequence.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Creates an empty sequence with room for `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Wraps an existing `Vec`, keeping its order.
    #[inline]
    #[must_use]
    pub const fn from_vec(elements: Vec<T>) -> Self {
        Self { elements }
    }

    /// Returns the number of elements, which is also the end position.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the sequence contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the element at `position`, or `None` at or past the end.
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&T> {
        self.elements.get(position)
    }

    /// Returns the first element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns the last element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Returns the elements as a slice, in sequence order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns an iterator over references to the elements, in sequence order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Consumes the sequence and returns the underlying `Vec`.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Inserts `value` immediately before `position`.
    ///
    /// Inserting at `len()` appends. All other elements keep their relative
    /// order.
    ///
    /// # Panics
    ///
    /// Panics if `position > len()`. Use [`Sequence::try_insert_at`] to get an
    /// error instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlab::collection::Sequence;
    ///
    /// let mut sequence = Sequence::from_vec(vec![1, 2, 8]);
    /// sequence.insert_at(1, 7);
    /// assert_eq!(sequence.as_slice(), &[1, 7, 2, 8]);
    /// ```
    pub fn insert_at(&mut self, position: usize, value: T) {
        if let Err(error) = self.try_insert_at(position, value) {
            panic!("insert_at: {error}");
        }
    }

    /// Inserts `value` immediately before `position`, reporting a position
    /// past the end as an error.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::PositionOutOfBounds`] if `position > len()`;
    /// the sequence is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlab::collection::Sequence;
    /// use seqlab::error::SequenceError;
    ///
    /// let mut sequence = Sequence::from_vec(vec![1, 2]);
    /// assert_eq!(
    ///     sequence.try_insert_at(5, 9),
    ///     Err(SequenceError::PositionOutOfBounds { position: 5, length: 2 })
    /// );
    /// assert_eq!(sequence.try_insert_at(2, 9), Ok(()));
    /// assert_eq!(sequence.as_slice(), &[1, 2, 9]);
    /// ```
    pub fn try_insert_at(&mut self, position: usize, value: T) -> Result<(), SequenceError> {
        if position > self.len() {
            return Err(SequenceError::PositionOutOfBounds {
                position,
                length: self.len(),
            });
        }
        self.elements.insert(position, value);
        Ok(())
    }

    /// Removes and returns the element at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position >= len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlab::collection::Sequence;
    ///
    /// let mut sequence = Sequence::from_vec(vec!['a', 'b', 'c']);
    /// assert_eq!(sequence.remove_at(1), 'b');
    /// assert_eq!(sequence.as_slice(), &['a', 'c']);
    /// ```
    pub fn remove_at(&mut self, position: usize) -> T {
        match self.try_remove_at(position) {
            Ok(value) => value,
            Err(error) => panic!("remove_at: {error}"),
        }
    }

    /// Removes and returns the element at `position`, reporting a position at
    /// or past the end as an error.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::PositionOutOfBounds`] if `position >= len()`.
    pub fn try_remove_at(&mut self, position: usize) -> Result<T, SequenceError> {
        if position >= self.len() {
            return Err(SequenceError::PositionOutOfBounds {
                position,
                length: self.len(),
            });
        }
        Ok(self.elements.remove(position))
    }

    /// Removes the half-open range of positions `range`.
    ///
    /// Any `RangeBounds<usize>` is accepted; `from..` erases through the end.
    ///
    /// # Panics
    ///
    /// Panics if the range is reversed or ends past `len()`. Use
    /// [`Sequence::try_erase_range`] to get an error instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlab::collection::Sequence;
    ///
    /// let mut sequence = Sequence::from_vec(vec![1, 7, 2, 8, 2, 0]);
    /// sequence.erase_range(3..);
    /// assert_eq!(sequence.as_slice(), &[1, 7, 2]);
    ///
    /// sequence.erase_range(0..1);
    /// assert_eq!(sequence.as_slice(), &[7, 2]);
    /// ```
    pub fn erase_range<R: RangeBounds<usize>>(&mut self, range: R) {
        if let Err(error) = self.try_erase_range(range) {
            panic!("erase_range: {error}");
        }
    }

    /// Removes the half-open range of positions `range`, reporting a malformed
    /// range as an error.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidRange`] if the resolved start follows
    /// the resolved end, or the end lies past `len()`; the sequence is left
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlab::collection::Sequence;
    /// use seqlab::error::SequenceError;
    ///
    /// let mut sequence = Sequence::from_vec(vec![1, 2, 3]);
    /// assert_eq!(
    ///     sequence.try_erase_range(2..1),
    ///     Err(SequenceError::InvalidRange { start: 2, end: 1, length: 3 })
    /// );
    /// assert_eq!(sequence.len(), 3);
    /// ```
    pub fn try_erase_range<R: RangeBounds<usize>>(
        &mut self,
        range: R,
    ) -> Result<(), SequenceError> {
        let range = resolve_range(&range, self.len())?;
        self.elements.drain(range);
        Ok(())
    }

    /// Reverses the order of the elements in place.
    #[inline]
    pub fn reverse(&mut self) {
        self.elements.reverse();
    }

    /// Sorts the elements with a caller-supplied comparator.
    ///
    /// The sort is stable: elements comparing `Equal` keep their relative
    /// order.
    #[inline]
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering,
    {
        self.elements.sort_by(compare);
    }

    /// Returns the position of the first element at or after `from` that
    /// satisfies `predicate`, or `len()` if there is none.
    ///
    /// Starting at or past the end returns `len()` without calling the
    /// predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlab::collection::Sequence;
    ///
    /// let sequence = Sequence::from_vec(vec![4, 7, 2, 7]);
    /// assert_eq!(sequence.find_first_matching(0, |value| *value == 7), 1);
    /// assert_eq!(sequence.find_first_matching(2, |value| *value == 7), 3);
    /// assert_eq!(sequence.find_first_matching(0, |value| *value == 9), sequence.len());
    /// ```
    pub fn find_first_matching<P>(&self, from: usize, predicate: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        find_from(&self.elements, from, predicate)
    }

    /// Returns a lazy iterator over the positions of every element satisfying
    /// `predicate`, in sequence order.
    ///
    /// Each step resumes the search just past the previous match and the
    /// iterator ends once a search reaches the end position. To restart,
    /// call this method again.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlab::collection::Sequence;
    ///
    /// let sequence = Sequence::from_vec(vec![3, 8, 5, 10, 1]);
    /// let positions: Vec<usize> = sequence.matching_positions(|value| *value > 4).collect();
    /// assert_eq!(positions, vec![1, 2, 3]);
    /// ```
    #[inline]
    pub fn matching_positions<P>(&self, predicate: P) -> MatchingPositions<'_, T, P>
    where
        P: FnMut(&T) -> bool,
    {
        MatchingPositions {
            elements: &self.elements,
            cursor: 0,
            predicate,
        }
    }

    /// Returns a lazy iterator over every element satisfying `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlab::collection::Sequence;
    ///
    /// let sequence = Sequence::from_vec(vec![3, 8, 5, 10, 1]);
    /// let even: Vec<&i32> = sequence.matches(|value| value % 2 == 0).collect();
    /// assert_eq!(even, vec![&8, &10]);
    /// ```
    #[inline]
    pub fn matches<P>(&self, predicate: P) -> Matches<'_, T, P>
    where
        P: FnMut(&T) -> bool,
    {
        Matches {
            positions: self.matching_positions(predicate),
        }
    }

    /// Counts the elements satisfying `predicate`.
    #[inline]
    #[must_use]
    pub fn count_matching<P>(&self, predicate: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        self.matching_positions(predicate).count()
    }

    /// Returns `true` if any element satisfies `predicate`.
    #[inline]
    #[must_use]
    pub fn any_matching<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.find_first_matching(0, predicate) != self.len()
    }
}

impl<T: PartialEq> Sequence<T> {
    /// Removes every element equal to `value` and returns how many were
    /// removed.
    ///
    /// The remaining elements keep their relative order. Removing a value
    /// that is not present is a no-op.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlab::collection::Sequence;
    ///
    /// let mut sequence = Sequence::from_vec(vec![1, 2, 8, 2, 0]);
    /// assert_eq!(sequence.remove(&2), 2);
    /// assert_eq!(sequence.as_slice(), &[1, 8, 0]);
    /// assert_eq!(sequence.remove(&42), 0);
    /// ```
    pub fn remove(&mut self, value: &T) -> usize {
        let before = self.len();
        self.elements.retain(|element| element != value);
        before - self.len()
    }

    /// Returns `true` if some element equals `value`.
    #[inline]
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.elements.contains(value)
    }
}

impl<T: Clone> Sequence<T> {
    /// Appends a clone of each element of `source`, preserving its order.
    ///
    /// `source` may be another sequence, a slice, an
    /// [`OrderedUniqueSet`](super::OrderedUniqueSet) or any iterator of
    /// references.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlab::collection::Sequence;
    ///
    /// let mut sequence = Sequence::from_vec(vec![1, 7, 2]);
    /// let other = Sequence::from_vec(vec![15, 42, 64]);
    /// sequence.append_range(&other);
    /// sequence.append_range(&other.as_slice()[..1]);
    /// assert_eq!(sequence.as_slice(), &[1, 7, 2, 15, 42, 64, 15]);
    /// assert_eq!(other.len(), 3);
    /// ```
    pub fn append_range<'a, I>(&mut self, source: I)
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        self.elements.extend(source.into_iter().cloned());
    }
}

impl<T: TotalOrder> Sequence<T> {
    /// Sorts the elements in ascending [`TotalOrder`].
    ///
    /// The sort is stable, so ties keep their relative order and sorting an
    /// already sorted sequence leaves it unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlab::collection::Sequence;
    /// use seqlab::geometry::Point;
    ///
    /// let mut points = Sequence::from_vec(vec![Point::new(7.0, 4.0), Point::new(1.0, 1.0)]);
    /// points.sort_ascending();
    /// assert_eq!(points.first(), Some(&Point::new(1.0, 1.0)));
    /// ```
    #[inline]
    pub fn sort_ascending(&mut self) {
        self.elements.sort_by(TotalOrder::total_order);
    }

    /// Returns `true` if no element follows its successor.
    #[must_use]
    pub fn is_sorted_ascending(&self) -> bool {
        self.elements
            .windows(2)
            .all(|window| !window[0].follows(&window[1]))
    }
}

// =============================================================================
// Range Resolution
// =============================================================================

fn resolve_range<R: RangeBounds<usize>>(
    range: &R,
    length: usize,
) -> Result<Range<usize>, SequenceError> {
    let start = match range.start_bound() {
        Bound::Included(&start) => Some(start),
        Bound::Excluded(&start) => start.checked_add(1),
        Bound::Unbounded => Some(0),
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => end.checked_add(1),
        Bound::Excluded(&end) => Some(end),
        Bound::Unbounded => Some(length),
    };

    match (start, end) {
        (Some(start), Some(end)) if start <= end && end <= length => Ok(start..end),
        (start, end) => Err(SequenceError::InvalidRange {
            start: start.unwrap_or(usize::MAX),
            end: end.unwrap_or(usize::MAX),
            length,
        }),
    }
}

fn find_from<T, P>(elements: &[T], from: usize, predicate: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    elements
        .get(from..)
        .and_then(|rest| rest.iter().position(predicate))
        .map_or(elements.len(), |offset| from + offset)
}

// =============================================================================
// Iterator Implementations
// =============================================================================

/// Iterator over the positions of matching elements.
///
/// Created by [`Sequence::matching_positions`].
pub struct MatchingPositions<'a, T, P> {
    elements: &'a [T],
    cursor: usize,
    predicate: P,
}

impl<T, P> Iterator for MatchingPositions<'_, T, P>
where
    P: FnMut(&T) -> bool,
{
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.elements.len() {
            return None;
        }

        let found = find_from(self.elements, self.cursor, &mut self.predicate);
        if found == self.elements.len() {
            self.cursor = found;
            None
        } else {
            self.cursor = found + 1;
            Some(found)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.elements.len().saturating_sub(self.cursor)))
    }
}

impl<T, P> FusedIterator for MatchingPositions<'_, T, P> where P: FnMut(&T) -> bool {}

/// Iterator over references to matching elements.
///
/// Created by [`Sequence::matches`].
pub struct Matches<'a, T, P> {
    positions: MatchingPositions<'a, T, P>,
}

impl<'a, T, P> Iterator for Matches<'a, T, P>
where
    P: FnMut(&T) -> bool,
{
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let elements = self.positions.elements;
        self.positions.next().map(|position| &elements[position])
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.positions.size_hint()
    }
}

impl<T, P> FusedIterator for Matches<'_, T, P> where P: FnMut(&T) -> bool {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    #[inline]
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

impl<T> From<Sequence<T>> for Vec<T> {
    #[inline]
    fn from(sequence: Sequence<T>) -> Self {
        sequence.into_vec()
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.elements
    }
}

impl<T> Index<usize> for Sequence<T> {
    type Output = T;

    #[inline]
    fn index(&self, position: usize) -> &Self::Output {
        &self.elements[position]
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Sequence<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Sequence<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Vec::<T>::deserialize(deserializer).map(Self::from_vec)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn numbers() -> Sequence<i32> {
        Sequence::from_vec(vec![1, 6, 2, 8, 2, 0])
    }

    // =========================================================================
    // remove / insert_at
    // =========================================================================

    #[rstest]
    fn test_remove_single_occurrence() {
        let mut sequence = numbers();
        assert_eq!(sequence.remove(&6), 1);
        assert_eq!(sequence.as_slice(), &[1, 2, 8, 2, 0]);
    }

    #[rstest]
    fn test_remove_all_occurrences_keeps_order() {
        let mut sequence = numbers();
        assert_eq!(sequence.remove(&2), 2);
        assert_eq!(sequence.as_slice(), &[1, 6, 8, 0]);
    }

    #[rstest]
    fn test_remove_from_empty_is_noop() {
        let mut sequence: Sequence<i32> = Sequence::new();
        assert_eq!(sequence.remove(&1), 0);
        assert!(sequence.is_empty());
    }

    #[rstest]
    #[case::front(0, vec![7, 1, 6, 2, 8, 2, 0])]
    #[case::second(1, vec![1, 7, 6, 2, 8, 2, 0])]
    #[case::end(6, vec![1, 6, 2, 8, 2, 0, 7])]
    fn test_insert_at(#[case] position: usize, #[case] expected: Vec<i32>) {
        let mut sequence = numbers();
        sequence.insert_at(position, 7);
        assert_eq!(sequence.into_vec(), expected);
    }

    #[rstest]
    #[should_panic(expected = "out of bounds")]
    fn test_insert_at_past_end_panics() {
        let mut sequence = numbers();
        sequence.insert_at(7, 1);
    }

    #[rstest]
    fn test_try_insert_at_past_end_leaves_sequence_unchanged() {
        let mut sequence = numbers();
        let result = sequence.try_insert_at(10, 1);
        assert_eq!(
            result,
            Err(SequenceError::PositionOutOfBounds {
                position: 10,
                length: 6
            })
        );
        assert_eq!(sequence, numbers());
    }

    #[rstest]
    fn test_remove_at_returns_element() {
        let mut sequence = numbers();
        assert_eq!(sequence.remove_at(1), 6);
        assert_eq!(sequence.as_slice(), &[1, 2, 8, 2, 0]);
    }

    #[rstest]
    fn test_try_remove_at_end_is_error() {
        let mut sequence = numbers();
        assert_eq!(
            sequence.try_remove_at(6),
            Err(SequenceError::PositionOutOfBounds {
                position: 6,
                length: 6
            })
        );
    }

    // =========================================================================
    // erase_range / append_range
    // =========================================================================

    #[rstest]
    #[case::to_end(3.., vec![1, 6, 2])]
    #[case::whole(0.., vec![])]
    #[case::empty_at_end(6.., vec![1, 6, 2, 8, 2, 0])]
    fn test_erase_range_from(
        #[case] range: std::ops::RangeFrom<usize>,
        #[case] expected: Vec<i32>,
    ) {
        let mut sequence = numbers();
        sequence.erase_range(range);
        assert_eq!(sequence.into_vec(), expected);
    }

    #[rstest]
    fn test_erase_range_bounded_and_inclusive() {
        let mut sequence = numbers();
        sequence.erase_range(1..3);
        assert_eq!(sequence.as_slice(), &[1, 8, 2, 0]);
        sequence.erase_range(0..=1);
        assert_eq!(sequence.as_slice(), &[2, 0]);
    }

    #[rstest]
    fn test_erase_full_range() {
        let mut sequence = numbers();
        sequence.erase_range(..);
        assert!(sequence.is_empty());
    }

    #[rstest]
    fn test_try_erase_range_reversed() {
        let mut sequence = numbers();
        assert_eq!(
            sequence.try_erase_range(4..2),
            Err(SequenceError::InvalidRange {
                start: 4,
                end: 2,
                length: 6
            })
        );
        assert_eq!(sequence, numbers());
    }

    #[rstest]
    fn test_try_erase_range_past_end() {
        let mut sequence = numbers();
        assert_eq!(
            sequence.try_erase_range(2..=6),
            Err(SequenceError::InvalidRange {
                start: 2,
                end: 7,
                length: 6
            })
        );
    }

    #[rstest]
    #[should_panic(expected = "invalid")]
    fn test_erase_range_reversed_panics() {
        let mut sequence = numbers();
        #[allow(clippy::reversed_empty_ranges)]
        sequence.erase_range(5..1);
    }

    #[rstest]
    fn test_erase_then_append_round_trip() {
        let mut sequence = numbers();
        let other = Sequence::from_vec(vec![15, 42, 64]);
        sequence.erase_range(3..);
        sequence.append_range(&other);
        assert_eq!(sequence.as_slice(), &[1, 6, 2, 15, 42, 64]);
        assert_eq!(other.as_slice(), &[15, 42, 64]);
    }

    #[rstest]
    fn test_append_range_from_self_clone() {
        let mut sequence = Sequence::from_vec(vec![1, 2]);
        let snapshot = sequence.clone();
        sequence.append_range(&snapshot);
        assert_eq!(sequence.as_slice(), &[1, 2, 1, 2]);
    }

    // =========================================================================
    // sort / reverse
    // =========================================================================

    #[rstest]
    fn test_sort_ascending_and_idempotent() {
        let mut sequence = numbers();
        sequence.sort_ascending();
        assert_eq!(sequence.as_slice(), &[0, 1, 2, 2, 6, 8]);
        let sorted = sequence.clone();
        sequence.sort_ascending();
        assert_eq!(sequence, sorted);
        assert!(sequence.is_sorted_ascending());
    }

    #[rstest]
    fn test_sort_by_descending() {
        let mut sequence = numbers();
        sequence.sort_by(|left, right| right.cmp(left));
        assert_eq!(sequence.as_slice(), &[8, 6, 2, 2, 1, 0]);
    }

    #[rstest]
    fn test_reverse() {
        let mut sequence = numbers();
        sequence.reverse();
        assert_eq!(sequence.as_slice(), &[0, 2, 8, 2, 6, 1]);
    }

    // =========================================================================
    // Search
    // =========================================================================

    #[rstest]
    fn test_find_first_matching_returns_end_when_absent() {
        let sequence = numbers();
        assert_eq!(sequence.find_first_matching(0, |value| *value > 100), 6);
    }

    #[rstest]
    fn test_find_first_matching_past_end_returns_end() {
        let sequence = numbers();
        assert_eq!(sequence.find_first_matching(42, |_| true), 6);
    }

    #[rstest]
    fn test_matching_positions_restarts_after_each_match() {
        let sequence = numbers();
        let positions: Vec<usize> = sequence.matching_positions(|value| *value == 2).collect();
        assert_eq!(positions, vec![2, 4]);
    }

    #[rstest]
    fn test_matching_positions_adjacent_matches() {
        let sequence = Sequence::from_vec(vec![5, 5, 5]);
        let positions: Vec<usize> = sequence.matching_positions(|value| *value == 5).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[rstest]
    fn test_matching_positions_is_fused() {
        let sequence = Sequence::from_vec(vec![1]);
        let mut positions = sequence.matching_positions(|value| *value == 1);
        assert_eq!(positions.next(), Some(0));
        assert_eq!(positions.next(), None);
        assert_eq!(positions.next(), None);
    }

    #[rstest]
    fn test_matching_positions_calls_predicate_once_per_element() {
        let sequence = numbers();
        let mut calls = 0;
        let count = sequence
            .matching_positions(|value| {
                calls += 1;
                *value % 2 == 0
            })
            .count();
        assert_eq!(count, 5);
        assert_eq!(calls, 6);
    }

    #[rstest]
    fn test_matches_and_count() {
        let sequence = numbers();
        let matched: Vec<i32> = sequence.matches(|value| *value > 1).copied().collect();
        assert_eq!(matched, vec![6, 2, 8, 2]);
        assert_eq!(sequence.count_matching(|value| *value > 1), 4);
        assert!(sequence.any_matching(|value| *value == 0));
        assert!(!sequence.any_matching(|value| *value < 0));
    }

    // =========================================================================
    // Display / Debug
    // =========================================================================

    #[rstest]
    fn test_display() {
        assert_eq!(format!("{}", Sequence::from_vec(vec![1, 7, 2])), "[1, 7, 2]");
        assert_eq!(format!("{}", Sequence::<i32>::new()), "[]");
    }

    #[rstest]
    fn test_debug() {
        assert_eq!(format!("{:?}", Sequence::from_vec(vec!["a"])), "[\"a\"]");
    }
}
