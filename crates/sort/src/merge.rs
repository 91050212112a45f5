use std::cmp::Ordering;

/// Stable merge sort with natural ordering.
///
/// Each level splits the slice at `len / 2` (the extra element of an odd
/// length goes to the right half), sorts owned copies of both halves, then
/// merges them back into `arr`.
///
/// # Performance
///
/// - Time complexity: O(n log n)
/// - Space complexity: O(n) auxiliary per merge level
/// - Stable: equal elements keep their input order
///
/// # Examples
///
/// ```
/// use algo_practice_sort::merge_sort;
///
/// let mut arr = vec![2, 3, 5, 1, 7, 4, 4, 4, 2, 6, 0];
/// merge_sort(&mut arr);
/// assert_eq!(arr, vec![0, 1, 2, 2, 3, 4, 4, 4, 5, 6, 7]);
/// ```
pub fn merge_sort<T: Ord + Clone>(arr: &mut [T]) {
    tracing::debug!(len = arr.len(), "merge sort");
    sort_by(arr, &mut T::cmp);
}

/// Stable merge sort with a custom comparator.
///
/// # Examples
///
/// ```
/// use algo_practice_sort::merge_sort_by;
///
/// let mut arr = vec![3, 1, 4, 1, 5];
/// merge_sort_by(&mut arr, |a, b| b.cmp(a));
/// assert_eq!(arr, vec![5, 4, 3, 1, 1]);
/// ```
pub fn merge_sort_by<T, F>(arr: &mut [T], mut compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    tracing::debug!(len = arr.len(), "merge sort by comparator");
    sort_by(arr, &mut compare);
}

/// Stable merge sort with a key extraction function.
///
/// # Examples
///
/// ```
/// use algo_practice_sort::merge_sort_by_key;
///
/// let mut arr = vec!["ccc", "a", "bb", "d"];
/// merge_sort_by_key(&mut arr, |s| s.len());
/// assert_eq!(arr, vec!["a", "d", "bb", "ccc"]);
/// ```
pub fn merge_sort_by_key<T, K, F>(arr: &mut [T], mut key: F)
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    tracing::debug!(len = arr.len(), "merge sort by key");
    sort_by(arr, &mut |a: &T, b: &T| key(a).cmp(&key(b)));
}

fn sort_by<T, F>(arr: &mut [T], compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if arr.len() <= 1 {
        return;
    }
    let mid = arr.len() / 2;
    let mut left = arr[..mid].to_vec();
    let mut right = arr[mid..].to_vec();
    sort_by(&mut left, compare);
    sort_by(&mut right, compare);
    merge(&left, &right, arr, compare);
}

/// Merge two sorted runs into `out`.
///
/// On ties the element from `left` is written first, which is what makes
/// [`merge_sort`] stable. `out` must be exactly `left.len() + right.len()`
/// long.
///
/// # Examples
///
/// ```
/// use algo_practice_sort::merge::merge;
///
/// let mut out = [0; 5];
/// merge(&[1, 4, 9], &[2, 4], &mut out, &mut i32::cmp);
/// assert_eq!(out, [1, 2, 4, 4, 9]);
/// ```
pub fn merge<T, F>(left: &[T], right: &[T], out: &mut [T], compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    debug_assert_eq!(out.len(), left.len() + right.len());
    let (mut i, mut j, mut k) = (0, 0, 0);
    while i < left.len() && j < right.len() {
        if compare(&right[j], &left[i]) == Ordering::Less {
            out[k] = right[j].clone();
            j += 1;
        } else {
            out[k] = left[i].clone();
            i += 1;
        }
        k += 1;
    }
    for item in left[i..].iter().chain(&right[j..]) {
        out[k] = item.clone();
        k += 1;
    }
}
