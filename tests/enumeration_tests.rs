//! Integration tests for the enumerating combinators: allocations,
//! permutations, and the power set.

use pipework::core::OrderedMap;
use pipework::{lazy, pipe, seq};
use rstest::rstest;

#[rstest]
fn allocations_cover_every_split_in_order() {
    let result = pipe!(
        seq! { "x" => (), "y" => () },
        lazy::allocate(3).unwrap(),
        lazy::collect,
    );
    assert_eq!(
        result,
        seq![
            seq! { "x" => 0, "y" => 3 },
            seq! { "x" => 1, "y" => 2 },
            seq! { "x" => 2, "y" => 1 },
            seq! { "x" => 3, "y" => 0 },
        ],
    );
}

#[rstest]
fn allocation_slots_keep_integer_keys() {
    let result = pipe!(
        seq![(), ()],
        lazy::allocate(1).unwrap(),
        lazy::collect,
    );
    assert_eq!(
        result,
        seq![seq! { 0 => 0, 1 => 1 }, seq! { 0 => 1, 1 => 0 }],
    );
}

#[rstest]
fn every_allocation_sums_to_the_total() {
    let result = pipe!(
        seq! { "a" => (), "b" => (), "c" => (), "d" => () },
        lazy::allocate(4).unwrap(),
        lazy::collect,
    );
    // C(4 + 4 - 1, 4 - 1) splits of 4 over 4 slots.
    assert_eq!(result.len(), 35);
    for allocation in result.values() {
        assert_eq!(allocation.values().sum::<i64>(), 4);
    }
}

#[rstest]
fn permutations_of_three_letters() {
    let result = pipe!(seq!['x', 'y', 'z'], lazy::permutations, lazy::collect);
    assert_eq!(result.len(), 6);
    assert_eq!(result.get(&0.into()), Some(&vec!['x', 'y', 'z']));
    assert_eq!(result.get(&5.into()), Some(&vec!['z', 'y', 'x']));
}

#[rstest]
fn permutations_remain_lazy() {
    let result = pipe!(
        seq![1, 2, 3, 4, 5, 6, 7, 8],
        lazy::permutations,
        lazy::take(3),
        lazy::collect,
    );
    assert_eq!(
        result,
        seq![
            vec![1, 2, 3, 4, 5, 6, 7, 8],
            vec![1, 2, 3, 4, 5, 6, 8, 7],
            vec![1, 2, 3, 4, 5, 7, 6, 8],
        ],
    );
}

#[rstest]
fn power_set_runs_from_empty_to_full() {
    let result = pipe!(
        seq! { "a" => 1, "b" => 2 },
        lazy::combinations_all,
        lazy::collect,
    );
    assert_eq!(
        result,
        seq![
            OrderedMap::new(),
            seq! { "a" => 1 },
            seq! { "b" => 2 },
            seq! { "a" => 1, "b" => 2 },
        ],
    );
}

#[rstest]
fn power_set_subsets_preserve_relative_order() {
    let result = pipe!(
        seq! { "a" => 1, "b" => 2, "c" => 3 },
        lazy::combinations_all,
        lazy::collect,
    );
    // Mask 0b101: first and third elements, original order kept.
    assert_eq!(result.get(&5.into()), Some(&seq! { "a" => 1, "c" => 3 }));
}

#[rstest]
fn power_set_works_over_a_one_shot_source() {
    let stream = pipe!(seq![1, 2], lazy::map(|n: i32| n * 10));
    let result = lazy::collect(lazy::combinations_all(stream));
    assert_eq!(result.len(), 4);
    assert_eq!(result.get(&3.into()), Some(&seq![10, 20]));
}
