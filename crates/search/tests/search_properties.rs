use algo_practice_search::{binary_search, Graph};
use algo_practice_sort::merge_sort;
use algo_practice_util::fuzzer::Fuzzer;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_binary_search_finds_present_values(
        mut input in prop::collection::vec(-1000i64..1000, 1..200),
        pick in any::<prop::sample::Index>(),
    ) {
        merge_sort(&mut input);
        let target = input[pick.index(input.len())];
        let found = binary_search(&input, &target);
        prop_assert!(found.is_some());
        prop_assert_eq!(input[found.unwrap()], target);
    }

    #[test]
    fn prop_binary_search_rejects_absent_values(
        mut input in prop::collection::vec(-1000i64..1000, 0..200),
        target in -1000i64..1000,
    ) {
        merge_sort(&mut input);
        let expected = input.contains(&target);
        prop_assert_eq!(binary_search(&input, &target).is_some(), expected);
    }

    #[test]
    fn prop_bfs_all_visits_every_vertex_once(
        n in 1usize..60,
        raw in prop::collection::vec((any::<prop::sample::Index>(), any::<prop::sample::Index>()), 0..120),
    ) {
        let edges: Vec<(usize, usize)> = raw.iter().map(|(a, b)| (a.index(n), b.index(n))).collect();
        let graph = Graph::from_edges(&edges, n).unwrap();
        let mut order = graph.bfs_all();
        prop_assert_eq!(order.len(), n);
        order.sort();
        prop_assert_eq!(order, (0..n).collect::<Vec<_>>());
    }
}

#[test]
fn test_binary_search_practice_input() {
    assert_eq!(binary_search(&[2, 3, 4, 10, 40], &25), None);
}

#[test]
fn test_search_after_sorting_seeded_input() {
    let fuzzer = Fuzzer::new(Some([9u8; 32]));
    let mut input = fuzzer.random_sequence(500, -10_000, 10_000);
    merge_sort(&mut input);
    for &x in input.iter().step_by(7) {
        let i = binary_search(&input, &x).unwrap();
        assert_eq!(input[i], x);
    }
}

#[test]
fn test_bfs_from_start_is_first() {
    let graph = Graph::from_edges(&[(0, 1), (1, 2), (2, 3)], 4).unwrap();
    assert_eq!(graph.bfs_from(2), vec![2, 1, 3, 0]);
}
