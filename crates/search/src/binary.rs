use std::cmp::Ordering;

/// Find `target` in a slice sorted in non-decreasing order.
///
/// Probes the midpoint of the live range, returns it on a match, and
/// otherwise discards the half that cannot hold `target`. With duplicates
/// the first equal element probed wins, which is not necessarily the
/// leftmost one.
///
/// # Examples
///
/// ```
/// use algo_practice_search::binary_search;
///
/// let arr = [2, 3, 4, 10, 40];
/// assert_eq!(binary_search(&arr, &10), Some(3));
/// assert_eq!(binary_search(&arr, &25), None);
/// ```
pub fn binary_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    binary_search_by(arr, |probe| probe.cmp(target))
}

/// Binary search with a probe function.
///
/// `f` reports how the probed element compares to the element sought:
/// `Less` means the target lies to the right, `Greater` to the left.
///
/// # Examples
///
/// ```
/// use algo_practice_search::binary_search_by;
///
/// let people = [("ada", 36), ("alan", 41), ("grace", 85)];
/// assert_eq!(binary_search_by(&people, |p| p.1.cmp(&41)), Some(1));
/// ```
pub fn binary_search_by<T, F>(arr: &[T], mut f: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    tracing::debug!(len = arr.len(), "binary search");
    // Half-open [low, high) so an empty slice and `mid - 1` never underflow.
    let mut low = 0;
    let mut high = arr.len();
    while low < high {
        let mid = low + (high - 1 - low) / 2;
        match f(&arr[mid]) {
            Ordering::Equal => return Some(mid),
            Ordering::Greater => high = mid,
            Ordering::Less => low = mid + 1,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_search_absent_target() {
        assert_eq!(binary_search(&[2, 3, 4, 10, 40], &25), None);
    }

    #[test]
    fn test_binary_search_every_element() {
        let arr = [2, 3, 4, 10, 40];
        for (i, x) in arr.iter().enumerate() {
            assert_eq!(binary_search(&arr, x), Some(i));
        }
    }

    #[test]
    fn test_binary_search_below_and_above() {
        let arr = [2, 3, 4, 10, 40];
        assert_eq!(binary_search(&arr, &1), None);
        assert_eq!(binary_search(&arr, &41), None);
    }

    #[test]
    fn test_binary_search_empty() {
        let arr: [i32; 0] = [];
        assert_eq!(binary_search(&arr, &1), None);
    }

    #[test]
    fn test_binary_search_probes_midpoint_first() {
        // mid = (0 + 4) / 2 = 2 on the first probe.
        assert_eq!(binary_search(&[7, 7, 7, 7, 7], &7), Some(2));
        // mid = (0 + 3) / 2 = 1 for an even length.
        assert_eq!(binary_search(&[7, 7, 7, 7], &7), Some(1));
    }

    #[test]
    fn test_binary_search_strings() {
        let arr = ["apple", "fig", "pear"];
        assert_eq!(binary_search(&arr, &"pear"), Some(2));
        assert_eq!(binary_search(&arr, &"kiwi"), None);
    }
}
