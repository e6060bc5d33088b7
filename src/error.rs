//! Error types for positional sequence operations.
//!
//! The panicking operations on [`Sequence`](crate::collection::Sequence)
//! behave like their `Vec` counterparts. Their `try_*` twins report caller
//! misuse through [`SequenceError`] instead.

/// Represents a position or range that does not fit the sequence it was
/// applied to.
///
/// # Examples
///
/// ```rust
/// use seqlab::error::SequenceError;
///
/// let error = SequenceError::PositionOutOfBounds { position: 7, length: 3 };
/// assert_eq!(
///     error.to_string(),
///     "position 7 is out of bounds for a sequence of length 3"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    /// The position lies past the end of the sequence.
    #[error("position {position} is out of bounds for a sequence of length {length}")]
    PositionOutOfBounds {
        /// The requested position.
        position: usize,
        /// The length of the sequence at the time of the call.
        length: usize,
    },

    /// The range is reversed or ends past the end of the sequence.
    #[error("range {start}..{end} is invalid for a sequence of length {length}")]
    InvalidRange {
        /// The resolved inclusive start of the range.
        start: usize,
        /// The resolved exclusive end of the range.
        end: usize,
        /// The length of the sequence at the time of the call.
        length: usize,
    },
}
