//! Ordering, permutation and stability predicates shared by the test suites.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

/// True when every adjacent pair is in non-decreasing order.
///
/// # Examples
///
/// ```
/// use algo_practice_util::check::is_sorted;
///
/// assert!(is_sorted(&[1, 2, 2, 3]));
/// assert!(!is_sorted(&[2, 1]));
/// assert!(is_sorted::<i32>(&[]));
/// ```
pub fn is_sorted<T: Ord>(arr: &[T]) -> bool {
    is_sorted_by(arr, T::cmp)
}

pub fn is_sorted_by<T, F>(arr: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    arr.windows(2)
        .all(|w| compare(&w[0], &w[1]) != Ordering::Greater)
}

/// True when `a` and `b` hold the same multiset of elements.
///
/// # Examples
///
/// ```
/// use algo_practice_util::check::is_permutation_of;
///
/// assert!(is_permutation_of(&[3, 1, 1], &[1, 3, 1]));
/// assert!(!is_permutation_of(&[3, 1, 1], &[1, 3, 3]));
/// ```
pub fn is_permutation_of<T: Eq + Hash>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut counts: HashMap<&T, isize> = HashMap::new();
    for item in a {
        *counts.entry(item).or_default() += 1;
    }
    for item in b {
        match counts.get_mut(item) {
            Some(count) if *count > 0 => *count -= 1,
            _ => return false,
        }
    }
    true
}

/// True when `(key, tag)` pairs with equal keys appear in ascending tag
/// order.
///
/// Tag each input element with its original index before sorting by key;
/// a stable sort keeps the tags of every equal-key run increasing.
pub fn is_stable<K: Eq, T: Ord>(arr: &[(K, T)]) -> bool {
    arr.windows(2)
        .all(|w| w[0].0 != w[1].0 || w[0].1 < w[1].1)
}

/// Pair each element with its position, for use with [`is_stable`].
pub fn tag_positions<K: Clone>(arr: &[K]) -> Vec<(K, usize)> {
    arr.iter().cloned().zip(0..).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_sorted_by_descending() {
        assert!(is_sorted_by(&[3, 2, 2, 1], |a: &i32, b: &i32| b.cmp(a)));
        assert!(!is_sorted_by(&[1, 2], |a: &i32, b: &i32| b.cmp(a)));
    }

    #[test]
    fn test_is_permutation_of_length_mismatch() {
        assert!(!is_permutation_of(&[1, 2], &[1, 2, 2]));
    }

    #[test]
    fn test_is_permutation_of_empty() {
        assert!(is_permutation_of::<i32>(&[], &[]));
    }

    #[test]
    fn test_is_stable() {
        assert!(is_stable(&[(1, 0), (1, 2), (2, 1)]));
        assert!(!is_stable(&[(1, 2), (1, 0), (2, 1)]));
    }

    #[test]
    fn test_tag_positions() {
        assert_eq!(tag_positions(&['a', 'b']), vec![('a', 0), ('b', 1)]);
    }
}
