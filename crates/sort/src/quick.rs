use std::cmp::Ordering;

use crate::range::{RangeError, SortRange};

/// In-place quick sort with natural ordering.
///
/// The pivot is always the last element of the current range, so sorted and
/// reverse-sorted inputs take the O(n²) path and recurse n levels deep. Use
/// [`quick_sort_iterative`] when the input may be adversarial.
///
/// # Performance
///
/// - Time complexity: O(n log n) average, O(n²) worst case
/// - Space complexity: O(1) auxiliary, O(log n) average recursion depth
/// - Not stable
///
/// # Examples
///
/// ```
/// use algo_practice_sort::quick_sort;
///
/// let mut arr = vec![22, 11, 88, 66, 55, 77, 33, 44];
/// quick_sort(&mut arr);
/// assert_eq!(arr, vec![11, 22, 33, 44, 55, 66, 77, 88]);
/// ```
pub fn quick_sort<T: Ord>(arr: &mut [T]) {
    quick_sort_by(arr, T::cmp);
}

/// In-place quick sort with a custom comparator.
pub fn quick_sort_by<T, F>(arr: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    tracing::debug!(len = arr.len(), "quick sort");
    if let Some(range) = SortRange::full(arr.len()) {
        sort_range(arr, range.low, range.high, &mut compare);
    }
}

/// Quick sort the inclusive sub-range `[low, high]` of `arr`.
///
/// Elements outside the range are left untouched. An empty range
/// (`low == high + 1`) is accepted and does nothing.
///
/// # Errors
///
/// Returns a [`RangeError`] without modifying `arr` when the range does not
/// satisfy `low <= high + 1 <= arr.len()`.
///
/// # Examples
///
/// ```
/// use algo_practice_sort::quick_sort_range;
///
/// let mut arr = vec![9, 5, 4, 3, 0];
/// quick_sort_range(&mut arr, 1, 3).unwrap();
/// assert_eq!(arr, vec![9, 3, 4, 5, 0]);
///
/// assert!(quick_sort_range(&mut arr, 0, 5).is_err());
/// ```
pub fn quick_sort_range<T: Ord>(arr: &mut [T], low: usize, high: usize) -> Result<(), RangeError> {
    quick_sort_range_by(arr, low, high, T::cmp)
}

/// Comparator variant of [`quick_sort_range`].
pub fn quick_sort_range_by<T, F>(
    arr: &mut [T],
    low: usize,
    high: usize,
    mut compare: F,
) -> Result<(), RangeError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    SortRange::new(low, high).validate(arr.len())?;
    tracing::debug!(len = arr.len(), low, high, "quick sort range");
    sort_range(arr, low, high, &mut compare);
    Ok(())
}

fn sort_range<T, F>(arr: &mut [T], low: usize, high: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if low >= high {
        return;
    }
    let p = partition(arr, low, high, compare);
    if p > low {
        sort_range(arr, low, p - 1, compare);
    }
    sort_range(arr, p + 1, high, compare);
}

/// Hoare-style partition of `[low, high]` around the pivot `arr[high]`.
///
/// `i` walks forward past elements less than the pivot, `j` walks backward
/// past elements not less than it, and out-of-place pairs are swapped until
/// the cursors meet. The pivot is then swapped into `i` only if `arr[i]` is
/// strictly greater than it. When `arr[i]` equals the pivot no swap happens
/// and `i` is still returned: the element at `i` has the pivot's value, so
/// everything left of `i` is less and everything right of it is not less.
///
/// Requires `low < high < arr.len()`.
///
/// # Examples
///
/// ```
/// use algo_practice_sort::partition;
///
/// let mut arr = [22, 11, 88, 66, 55, 77, 33, 44];
/// let p = partition(&mut arr, 0, 7, &mut i32::cmp);
/// assert_eq!(arr[p], 44);
/// assert!(arr[..p].iter().all(|&x| x < 44));
/// assert!(arr[p + 1..].iter().all(|&x| x >= 44));
/// ```
pub fn partition<T, F>(arr: &mut [T], low: usize, high: usize, compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    debug_assert!(low < high && high < arr.len());
    let mut i = low;
    let mut j = high - 1;
    loop {
        while i < high && compare(&arr[i], &arr[high]) == Ordering::Less {
            i += 1;
        }
        while j > low && compare(&arr[j], &arr[high]) != Ordering::Less {
            j -= 1;
        }
        if i >= j {
            break;
        }
        arr.swap(i, j);
    }
    if compare(&arr[i], &arr[high]) == Ordering::Greater {
        arr.swap(i, high);
    }
    i
}

/// Quick sort driven by an explicit work stack instead of recursion.
///
/// Uses the same [`partition`] as [`quick_sort`], so both produce the same
/// result. After each partition the larger side is pushed and the smaller
/// side is sorted next, which keeps the stack at O(log n) entries even for
/// sorted or reverse-sorted input.
///
/// # Examples
///
/// ```
/// use algo_practice_sort::quick_sort_iterative;
///
/// let mut arr: Vec<u32> = (0..2_000).collect();
/// quick_sort_iterative(&mut arr);
/// assert!(arr.windows(2).all(|w| w[0] <= w[1]));
/// ```
pub fn quick_sort_iterative<T: Ord>(arr: &mut [T]) {
    quick_sort_iterative_by(arr, T::cmp);
}

/// Comparator variant of [`quick_sort_iterative`].
pub fn quick_sort_iterative_by<T, F>(arr: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    tracing::debug!(len = arr.len(), "quick sort iterative");
    let max_depth = sort_with_work_stack(arr, &mut compare);
    tracing::trace!(max_depth, "work stack drained");
}

/// Runs the work-stack loop and returns the deepest the stack got.
pub(crate) fn sort_with_work_stack<T, F>(arr: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let Some(full) = SortRange::full(arr.len()) else {
        return 0;
    };
    let mut stack = vec![full];
    let mut max_depth = 1;
    while let Some(mut range) = stack.pop() {
        while !range.is_trivial() {
            let p = partition(arr, range.low, range.high, compare);
            tracing::trace!(low = range.low, high = range.high, pivot = p, "partitioned");
            let left = (p > range.low).then(|| SortRange::new(range.low, p - 1));
            let right = SortRange::new(p + 1, range.high);
            match left {
                Some(left) if left.len() > right.len() => {
                    stack.push(left);
                    range = right;
                }
                Some(left) => {
                    stack.push(right);
                    range = left;
                }
                None => range = right,
            }
            max_depth = max_depth.max(stack.len());
        }
    }
    max_depth
}
