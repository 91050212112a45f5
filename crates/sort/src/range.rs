//! Inclusive index ranges used by the quick sort entry points.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("range end {high} is out of bounds for a sequence of length {len}")]
    OutOfBounds { high: usize, len: usize },
    #[error("range start {low} is past range end {high} + 1")]
    Inverted { low: usize, high: usize },
}

/// An inclusive `[low, high]` span of a sequence.
///
/// A range is valid for a sequence of length `len` when
/// `low <= high + 1 <= len`. The empty range starting at `low` is written
/// `high + 1 == low`, so it cannot start at index 0; use [`SortRange::full`]
/// to describe a whole slice, which yields `None` when the slice is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortRange {
    pub low: usize,
    pub high: usize,
}

impl SortRange {
    pub fn new(low: usize, high: usize) -> Self {
        Self { low, high }
    }

    /// The range covering an entire sequence of `len` elements.
    ///
    /// # Example
    ///
    /// ```
    /// use algo_practice_sort::SortRange;
    ///
    /// assert_eq!(SortRange::full(5), Some(SortRange::new(0, 4)));
    /// assert_eq!(SortRange::full(0), None);
    /// ```
    pub fn full(len: usize) -> Option<Self> {
        len.checked_sub(1).map(|high| Self { low: 0, high })
    }

    /// Number of elements in the range.
    pub fn len(&self) -> usize {
        self.high.saturating_add(1).saturating_sub(self.low)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when the range holds at most one element and needs no sorting.
    pub fn is_trivial(&self) -> bool {
        self.low >= self.high
    }

    /// Check the range against a sequence of length `len`.
    ///
    /// # Errors
    ///
    /// - [`RangeError::Inverted`] when `low > high + 1`
    /// - [`RangeError::OutOfBounds`] when a non-empty range ends at or past `len`
    ///
    /// # Example
    ///
    /// ```
    /// use algo_practice_sort::{RangeError, SortRange};
    ///
    /// SortRange::new(0, 7).validate(8).unwrap();
    /// SortRange::new(3, 2).validate(8).unwrap(); // empty
    /// assert_eq!(
    ///     SortRange::new(0, 8).validate(8),
    ///     Err(RangeError::OutOfBounds { high: 8, len: 8 })
    /// );
    /// ```
    pub fn validate(&self, len: usize) -> Result<(), RangeError> {
        if self.low > self.high.saturating_add(1) {
            return Err(RangeError::Inverted {
                low: self.low,
                high: self.high,
            });
        }
        // An empty range may sit one past the end: low == len, high == len - 1.
        if self.high >= len && !(self.is_empty() && self.low <= len) {
            return Err(RangeError::OutOfBounds {
                high: self.high,
                len,
            });
        }
        Ok(())
    }
}
