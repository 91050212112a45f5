use algo_practice_util::check::{is_permutation_of, is_sorted, is_stable, tag_positions};
use algo_practice_util::fuzzer::{Fuzzer, Shape};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_reversal_is_a_permutation(input in prop::collection::vec(0u8..10, 0..100)) {
        let reversed: Vec<u8> = input.iter().rev().copied().collect();
        prop_assert!(is_permutation_of(&input, &reversed));
    }

    #[test]
    fn prop_std_sort_output_is_sorted(mut input in prop::collection::vec(any::<i32>(), 0..100)) {
        input.sort();
        prop_assert!(is_sorted(&input));
    }

    #[test]
    fn prop_std_stable_sort_passes_stability_check(keys in prop::collection::vec(0u8..4, 0..100)) {
        let mut tagged = tag_positions(&keys);
        tagged.sort_by_key(|&(k, _)| k);
        prop_assert!(is_stable(&tagged));
    }

    #[test]
    fn prop_seeded_sequences_repeat(seed in any::<[u8; 32]>(), len in 0usize..64) {
        let a = Fuzzer::new(Some(seed)).sequence(Shape::DuplicateHeavy, len);
        let b = Fuzzer::new(Some(seed)).sequence(Shape::DuplicateHeavy, len);
        prop_assert_eq!(a, b);
    }
}

#[test]
fn test_changed_element_breaks_permutation() {
    assert!(!is_permutation_of(&[1, 2, 3], &[1, 2, 4]));
}
