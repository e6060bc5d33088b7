//! Ordered unique set with automatic state transitions.
//!
//! This module provides [`OrderedUniqueSet`], a sorted container that keeps
//! at most one element per `PartialEq` equivalence class and orders its
//! elements by [`TotalOrder`].
//!
//! # Overview
//!
//! The duplicate key and the order key are separate relations:
//!
//! - Two elements are duplicates iff they are equal under `PartialEq`
//! - Elements are kept in ascending [`TotalOrder`]
//!
//! Elements that tie under the ordering but are not equal are all retained,
//! in the order they were first inserted. With [`Point`](crate::geometry::Point),
//! `(3, 4)` and `(4, 3)` lie at the same distance from the origin and both
//! stay in the set.
//!
//! Storage switches automatically between an inline `SmallVec` for small
//! collections (up to 8 elements) and a heap `Vec` beyond that. Both are kept
//! sorted, so iteration is always in ascending order.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity                  |
//! |----------------|-----------------------------|
//! | `insert`       | O(log n + k + n)            |
//! | `remove`       | O(log n + k + n)            |
//! | `contains`     | O(log n + k)                |
//! | `len`          | O(1)                        |
//! | `iter`         | O(1) + O(n)                 |
//! | `build_from`   | O(m (log n + k + n))        |
//!
//! `k` is the number of elements tying with the probe under the ordering.
//!
//! # Examples
//!
//! ```rust
//! use seqlab::collection::OrderedUniqueSet;
//!
//! let mut set = OrderedUniqueSet::new();
//! assert!(set.insert(3));
//! assert!(set.insert(1));
//! assert!(!set.insert(3)); // duplicate insertion is a no-op
//!
//! let sorted: Vec<&i32> = set.iter().collect();
//! assert_eq!(sorted, vec![&1, &3]);
//! ```
//!
//! # State Transitions
//!
//! ```text
//!                    insert (n < 8)
//!     Empty ─────────────────────────────► Small
//!       ▲                                    │
//!       │ remove (n == 0)                    │ insert (n == 8)
//!       │                                    ▼
//!       └─────────────── Small ◄──────── Large
//!                     remove (n == 8)
//! ```

use smallvec::SmallVec;
use std::fmt;
use std::iter::FusedIterator;

use super::Sequence;
use crate::typeclass::TotalOrder;

/// The threshold for transitioning between Small and Large states.
/// Collections with more than this many elements use a heap `Vec`.
const SMALL_THRESHOLD: usize = 8;

/// Internal representation of the collection state.
#[derive(Clone)]
enum OrderedUniqueSetInner<T> {
    Empty,
    Small(SmallVec<[T; SMALL_THRESHOLD]>),
    Large(Vec<T>),
}

impl<T> Default for OrderedUniqueSetInner<T> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<T> OrderedUniqueSetInner<T> {
    #[inline]
    fn as_slice(&self) -> &[T] {
        match self {
            Self::Empty => &[],
            Self::Small(vec) => vec.as_slice(),
            Self::Large(vec) => vec.as_slice(),
        }
    }
}

/// A sorted collection that deduplicates by `PartialEq` and orders by
/// [`TotalOrder`].
///
/// All mutating operations work in place. Insertion of an element equal to
/// one already present leaves the set unchanged.
///
/// # Type Parameters
///
/// * `T` - The element type. Operations require `PartialEq + TotalOrder`.
///
/// # Examples
///
/// ```rust
/// use seqlab::collection::OrderedUniqueSet;
/// use seqlab::geometry::Point;
///
/// let set: OrderedUniqueSet<Point> = [
///     Point::new(4.0, 3.0),
///     Point::new(1.0, 1.0),
///     Point::new(3.0, 4.0),
///     Point::new(4.0, 3.0),
/// ]
/// .into_iter()
/// .collect();
///
/// // (4, 3) and (3, 4) tie on distance but are distinct points
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.first(), Some(&Point::new(1.0, 1.0)));
/// ```
#[derive(Clone)]
pub struct OrderedUniqueSet<T> {
    inner: OrderedUniqueSetInner<T>,
}

impl<T> OrderedUniqueSet<T> {
    /// Creates a new empty collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlab::collection::OrderedUniqueSet;
    ///
    /// let collection: OrderedUniqueSet<i32> = OrderedUniqueSet::new();
    /// assert!(collection.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: OrderedUniqueSetInner::Empty,
        }
    }

    /// Returns the number of elements in the collection.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.inner {
            OrderedUniqueSetInner::Empty => 0,
            OrderedUniqueSetInner::Small(vec) => vec.len(),
            OrderedUniqueSetInner::Large(vec) => vec.len(),
        }
    }

    /// Returns `true` if the collection contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self.inner, OrderedUniqueSetInner::Empty)
    }

    /// Returns the elements as a slice in ascending order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }

    /// Returns an iterator over references to the elements in ascending
    /// order.
    #[inline]
    pub fn iter(&self) -> OrderedUniqueSetIterator<'_, T> {
        OrderedUniqueSetIterator {
            inner: self.as_slice().iter(),
        }
    }

    /// Returns a reference to the smallest element, or `None` if empty.
    ///
    /// When several elements tie for smallest, the earliest inserted one is
    /// returned.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns a reference to the largest element, or `None` if empty.
    ///
    /// When several elements tie for largest, the latest inserted one is
    /// returned.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Consumes the set and returns its elements as a [`Sequence`] in set
    /// order.
    #[must_use]
    pub fn into_sequence(self) -> Sequence<T> {
        self.into_iter().collect()
    }

    /// Returns `true` if the collection is in the Empty state.
    #[cfg(test)]
    const fn is_empty_state(&self) -> bool {
        matches!(self.inner, OrderedUniqueSetInner::Empty)
    }

    /// Returns `true` if the collection is in the Small state.
    #[cfg(test)]
    const fn is_small_state(&self) -> bool {
        matches!(self.inner, OrderedUniqueSetInner::Small(_))
    }

    /// Returns `true` if the collection is in the Large state.
    #[cfg(test)]
    const fn is_large_state(&self) -> bool {
        matches!(self.inner, OrderedUniqueSetInner::Large(_))
    }
}

impl<T: PartialEq + TotalOrder> OrderedUniqueSet<T> {
    /// Returns `true` if an element equal to `element` is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlab::collection::OrderedUniqueSet;
    /// use seqlab::geometry::Point;
    ///
    /// let set: OrderedUniqueSet<Point> = [Point::new(3.0, 4.0)].into_iter().collect();
    /// assert!(set.contains(&Point::new(3.0, 4.0)));
    /// assert!(!set.contains(&Point::new(4.0, 3.0))); // same distance, different point
    /// ```
    #[inline]
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        locate(self.as_slice(), element).is_ok()
    }

    /// Inserts an element, returning `true` if it was not already present.
    ///
    /// A new element is placed after every element it does not precede, so
    /// ties keep their insertion order.
    ///
    /// # State Transitions
    ///
    /// - `Empty` -> `Small` when inserting the first element
    /// - `Small` -> `Large` when inserting the 9th element
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlab::collection::OrderedUniqueSet;
    ///
    /// let mut set = OrderedUniqueSet::new();
    /// assert!(set.insert(42));
    /// assert!(!set.insert(42));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, element: T) -> bool {
        let position = match locate(self.as_slice(), &element) {
            Ok(_) => return false,
            Err(position) => position,
        };

        self.inner = match std::mem::take(&mut self.inner) {
            OrderedUniqueSetInner::Empty => {
                let mut vec = SmallVec::new();
                vec.push(element);
                OrderedUniqueSetInner::Small(vec)
            }
            OrderedUniqueSetInner::Small(mut vec) if vec.len() < SMALL_THRESHOLD => {
                vec.insert(position, element);
                OrderedUniqueSetInner::Small(vec)
            }
            OrderedUniqueSetInner::Small(vec) => {
                // Transition to Large state
                let mut large = Vec::with_capacity(vec.len() + 1);
                large.extend(vec);
                large.insert(position, element);
                OrderedUniqueSetInner::Large(large)
            }
            OrderedUniqueSetInner::Large(mut vec) => {
                vec.insert(position, element);
                OrderedUniqueSetInner::Large(vec)
            }
        };
        true
    }

    /// Removes the element equal to `element`, returning `true` if one was
    /// present.
    ///
    /// # State Transitions
    ///
    /// - `Small` -> `Empty` when removing the last element
    /// - `Large` -> `Small` when size drops to 8 or fewer elements
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlab::collection::OrderedUniqueSet;
    ///
    /// let mut set: OrderedUniqueSet<i32> = (1..=3).collect();
    /// assert!(set.remove(&2));
    /// assert!(!set.remove(&2));
    /// assert_eq!(set.as_slice(), &[1, 3]);
    /// ```
    pub fn remove(&mut self, element: &T) -> bool {
        let Ok(position) = locate(self.as_slice(), element) else {
            return false;
        };

        self.inner = match std::mem::take(&mut self.inner) {
            OrderedUniqueSetInner::Empty => OrderedUniqueSetInner::Empty,
            OrderedUniqueSetInner::Small(mut vec) => {
                vec.remove(position);
                if vec.is_empty() {
                    OrderedUniqueSetInner::Empty
                } else {
                    OrderedUniqueSetInner::Small(vec)
                }
            }
            OrderedUniqueSetInner::Large(mut vec) => {
                vec.remove(position);
                if vec.len() <= SMALL_THRESHOLD {
                    OrderedUniqueSetInner::Small(SmallVec::from_vec(vec))
                } else {
                    OrderedUniqueSetInner::Large(vec)
                }
            }
        };
        true
    }

    /// Builds a set from every element of `sequence` satisfying `predicate`.
    ///
    /// The sequence is scanned with
    /// [`Sequence::matching_positions`]; each match is cloned into the set
    /// and duplicates are absorbed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlab::collection::{OrderedUniqueSet, Sequence};
    /// use seqlab::geometry::{Point, RangePredicate};
    ///
    /// let points = Sequence::from_vec(vec![
    ///     Point::new(4.0, 9.0),
    ///     Point::new(7.0, 4.0),
    ///     Point::new(2.0, 4.0),
    ///     Point::new(4.0, 9.0),
    /// ]);
    /// let window = RangePredicate::new(2.0, 5.0, 3.0, 10.0);
    ///
    /// let set = OrderedUniqueSet::build_from(&points, window.as_fn::<Point>());
    /// assert_eq!(set.as_slice(), &[Point::new(2.0, 4.0), Point::new(4.0, 9.0)]);
    /// ```
    pub fn build_from<P>(sequence: &Sequence<T>, predicate: P) -> Self
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        let mut set = Self::new();
        let mut matched = 0_usize;
        for element in sequence.matches(predicate) {
            matched += 1;
            set.insert(element.clone());
        }
        tracing::trace!(
            scanned = sequence.len(),
            matched,
            retained = set.len(),
            "built ordered unique projection"
        );
        set
    }
}

impl<T: Clone> OrderedUniqueSet<T> {
    /// Returns a new [`Sequence`] containing clones of the elements in set
    /// order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlab::collection::OrderedUniqueSet;
    ///
    /// let set: OrderedUniqueSet<i32> = [3, 1, 2, 1].into_iter().collect();
    /// assert_eq!(set.to_sequence().as_slice(), &[1, 2, 3]);
    /// ```
    #[must_use]
    pub fn to_sequence(&self) -> Sequence<T> {
        Sequence::from_vec(self.as_slice().to_vec())
    }
}

/// Finds `element` among the elements tying with it.
///
/// Returns `Ok(position)` of the equal element, or `Err(position)` just past
/// the tie block, where a new element belongs.
///
/// Only the tie block is scanned, so `T` must satisfy the `TotalOrder` law
/// that equal values tie.
fn locate<T: PartialEq + TotalOrder>(slice: &[T], element: &T) -> Result<usize, usize> {
    let lower = slice.partition_point(|item| item.precedes(element));
    let ties = slice[lower..].partition_point(|item| !element.precedes(item));
    slice[lower..lower + ties]
        .iter()
        .position(|item| item == element)
        .map(|offset| lower + offset)
        .ok_or(lower + ties)
}

impl<T> Default for OrderedUniqueSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Iterator Implementations
// =============================================================================

/// Iterator over references to elements of an `OrderedUniqueSet`, in
/// ascending order.
pub struct OrderedUniqueSetIterator<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for OrderedUniqueSetIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for OrderedUniqueSetIterator<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for OrderedUniqueSetIterator<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for OrderedUniqueSetIterator<'_, T> {}

/// Owning iterator over the elements of an `OrderedUniqueSet`, in ascending
/// order.
pub struct OrderedUniqueSetIntoIterator<T> {
    inner: IntoIteratorInner<T>,
}

enum IntoIteratorInner<T> {
    Empty,
    Small(smallvec::IntoIter<[T; SMALL_THRESHOLD]>),
    Large(std::vec::IntoIter<T>),
}

impl<T> Iterator for OrderedUniqueSetIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            IntoIteratorInner::Empty => None,
            IntoIteratorInner::Small(iter) => iter.next(),
            IntoIteratorInner::Large(iter) => iter.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            IntoIteratorInner::Empty => (0, Some(0)),
            IntoIteratorInner::Small(iter) => iter.size_hint(),
            IntoIteratorInner::Large(iter) => iter.size_hint(),
        }
    }
}

impl<T> ExactSizeIterator for OrderedUniqueSetIntoIterator<T> {}

impl<T> IntoIterator for OrderedUniqueSet<T> {
    type Item = T;
    type IntoIter = OrderedUniqueSetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        OrderedUniqueSetIntoIterator {
            inner: match self.inner {
                OrderedUniqueSetInner::Empty => IntoIteratorInner::Empty,
                OrderedUniqueSetInner::Small(vec) => IntoIteratorInner::Small(vec.into_iter()),
                OrderedUniqueSetInner::Large(vec) => IntoIteratorInner::Large(vec.into_iter()),
            },
        }
    }
}

impl<'a, T> IntoIterator for &'a OrderedUniqueSet<T> {
    type Item = &'a T;
    type IntoIter = OrderedUniqueSetIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T: PartialEq + TotalOrder> FromIterator<T> for OrderedUniqueSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: PartialEq + TotalOrder> Extend<T> for OrderedUniqueSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T: PartialEq + TotalOrder> PartialEq for OrderedUniqueSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|element| other.contains(element))
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedUniqueSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for OrderedUniqueSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for OrderedUniqueSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
struct OrderedUniqueSetVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for OrderedUniqueSetVisitor<T>
where
    T: serde::Deserialize<'de> + PartialEq + TotalOrder,
{
    type Value = OrderedUniqueSet<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // Re-inserting restores the ordering and drops duplicates.
        let mut set = OrderedUniqueSet::new();
        while let Some(element) = access.next_element()? {
            set.insert(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for OrderedUniqueSet<T>
where
    T: serde::Deserialize<'de> + PartialEq + TotalOrder,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(OrderedUniqueSetVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
