//! algo-practice-sort - Merge sort and quick sort over mutable slices
//!
//! Two independent divide-and-conquer sorts:
//!
//! - [`merge_sort`]: stable, splits at the midpoint and merges owned copies
//!   of the halves back into the slice.
//! - [`quick_sort`]: in place, partitions around the last element of each
//!   range. [`quick_sort_iterative`] runs the same partition off an explicit
//!   work stack to bound memory on sorted input.
//!
//! # Example
//!
//! ```
//! use algo_practice_sort::{merge_sort, quick_sort};
//!
//! let mut a = vec![2, 3, 5, 1, 7, 4, 4, 4, 2, 6, 0];
//! merge_sort(&mut a);
//! assert_eq!(a, vec![0, 1, 2, 2, 3, 4, 4, 4, 5, 6, 7]);
//!
//! let mut b = vec![22, 11, 88, 66, 55, 77, 33, 44];
//! quick_sort(&mut b);
//! assert_eq!(b, vec![11, 22, 33, 44, 55, 66, 77, 88]);
//! ```

pub mod algorithm;
pub mod merge;
pub mod quick;
pub mod range;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use merge::{merge_sort, merge_sort_by, merge_sort_by_key};
pub use quick::{
    partition, quick_sort, quick_sort_by, quick_sort_iterative, quick_sort_iterative_by,
    quick_sort_range, quick_sort_range_by,
};
pub use range::{RangeError, SortRange};
