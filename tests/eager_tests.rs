//! Integration tests for the eager transformers, exercised through
//! pipelines.

use pipework::core::{Key, Nested, OrderedMap};
use pipework::{eager, pipe, seq};
use rstest::rstest;

#[rstest]
fn map_and_filter_preserve_keys() {
    let result = pipe!(
        seq! { "a" => 1, 5 => 2, "b" => 3 },
        eager::map(|n: i32| n * 10),
        eager::filter(|n: &i32| *n >= 20),
    );
    assert_eq!(result, seq! { 5 => 20, "b" => 30 });
}

#[rstest]
fn chunk_reindexes_unless_asked_otherwise() {
    let subject = seq! { "a" => 1, "b" => 2, "c" => 3 };
    let plain = pipe!(subject.clone(), eager::chunk(2, false).unwrap());
    assert_eq!(plain, seq![seq![1, 2], seq![3]]);

    let preserved = pipe!(subject, eager::chunk(2, true).unwrap());
    assert_eq!(
        preserved,
        seq![seq! { "a" => 1, "b" => 2 }, seq! { "c" => 3 }],
    );
}

#[rstest]
#[case(1, None, false, seq![2, 3, 4])]
#[case(-2, None, false, seq![3, 4])]
#[case(0, Some(-1), false, seq![1, 2, 3])]
#[case(1, Some(2), true, seq! { 1 => 2, 2 => 3 })]
#[case(10, None, false, seq!())]
fn slice_handles_negative_bounds(
    #[case] offset: i64,
    #[case] length: Option<i64>,
    #[case] preserve_keys: bool,
    #[case] expected: OrderedMap<i32>,
) {
    let result = pipe!(seq![1, 2, 3, 4], eager::slice(offset, length, preserve_keys));
    assert_eq!(result, expected);
}

#[rstest]
fn slice_always_keeps_string_keys() {
    let result = pipe!(
        seq! { 0 => 1, "name" => 2, 1 => 3 },
        eager::slice(1, None, false),
    );
    assert_eq!(result, seq! { "name" => 2, 0 => 3 });
}

#[rstest]
fn nth_counts_from_the_end_when_negative() {
    let subject = seq! { "a" => 1, "b" => 2, "c" => 3 };
    assert_eq!(pipe!(subject.clone(), eager::nth(1)), Some(2));
    assert_eq!(pipe!(subject.clone(), eager::nth(-1)), Some(3));
    assert_eq!(pipe!(subject, eager::nth(5)), None);
}

#[rstest]
fn without_ignores_missing_keys() {
    let result = pipe!(
        seq! { "a" => 1, "b" => 2, 0 => 3 },
        eager::without(vec![Key::from("b"), Key::from("zz")]),
    );
    assert_eq!(result, seq! { "a" => 1, 0 => 3 });
}

#[rstest]
fn unique_keeps_the_first_occurrence() {
    let result = pipe!(
        seq! { "a" => 1, "b" => 2, "c" => 1, "d" => 2 },
        eager::unique(),
    );
    assert_eq!(result, seq! { "a" => 1, "b" => 2 });
}

#[rstest]
fn flatten_merges_string_keys_and_renumbers_integers() {
    let nested = seq![
        seq! { "a" => 1, 0 => 2 },
        seq! { "a" => 3, 5 => 4 },
    ];
    let result = pipe!(nested, eager::flatten());
    assert_eq!(result, seq! { "a" => 3, 0 => 2, 1 => 4 });
}

#[rstest]
fn sum_and_reduce_agree_on_totals() {
    let subject = seq![1, 2, 3, 4];
    let total: i32 = pipe!(subject.clone(), eager::sum(|n: i32| n));
    let folded = pipe!(subject, eager::reduce(|acc, n| acc + n, 0));
    assert_eq!(total, 10);
    assert_eq!(folded, 10);
}

#[rstest]
fn reduce_until_reports_the_triggering_entry() {
    let (total, key, value) = pipe!(
        seq! { "a" => 4, "b" => 5, "c" => 6 },
        eager::reduce_until(|acc, v, _| acc + v, |acc, _, _| *acc > 8, 0),
    );
    assert_eq!((total, key, value), (9, Some(Key::from("b")), Some(5)));
}

#[rstest]
fn reduce_until_on_empty_input_returns_the_seed() {
    let (total, key, value) = pipe!(
        OrderedMap::<i32>::new(),
        eager::reduce_until(|acc, v, _| acc + v, |_, _, _| true, 7),
    );
    assert_eq!((total, key, value), (7, None, None));
}

#[rstest]
fn all_is_vacuously_true_and_any_vacuously_false() {
    let empty = OrderedMap::<i32>::new();
    assert!(pipe!(empty.clone(), eager::all(|_, _| false)));
    assert!(!pipe!(empty, eager::any(|_, _| true)));
}

#[rstest]
fn sorting_reindexes_and_preserving_variant_keeps_keys() {
    let subject = seq! { "x" => 3, "y" => 1, "z" => 2 };
    assert_eq!(pipe!(subject.clone(), eager::sort()), seq![1, 2, 3]);
    assert_eq!(pipe!(subject.clone(), eager::rsort()), seq![3, 2, 1]);
    assert_eq!(
        pipe!(subject, eager::sort_by_preserving(|a: &i32, b: &i32| a.cmp(b))),
        seq! { "y" => 1, "z" => 2, "x" => 3 },
    );
}

#[rstest]
fn transpose_pads_ragged_rows_with_none() {
    let rows = seq! {
        "r1" => seq! { "a" => 1, "b" => 2 },
        "r2" => seq! { "b" => 3, "c" => 4 },
    };
    let result = pipe!(rows, eager::transpose());
    assert_eq!(
        result,
        seq! {
            "a" => seq! { "r1" => Some(1), "r2" => None },
            "b" => seq! { "r1" => Some(2), "r2" => Some(3) },
            "c" => seq! { "r1" => None, "r2" => Some(4) },
        },
    );
}

#[rstest]
fn zip_map_folds_each_column() {
    let rows = seq![seq![1, 2, 3], seq![10, 20]];
    let result = pipe!(
        rows,
        eager::zip_map(|column: Vec<Option<i32>>| {
            column.into_iter().flatten().sum::<i32>()
        }),
    );
    assert_eq!(result, seq![11, 22, 3]);
}

#[rstest]
fn map_recursive_touches_leaves_only() {
    let tree = seq! {
        "a" => Nested::Leaf(1),
        "b" => Nested::Map(seq! {
            "c" => Nested::Leaf(2),
            "d" => Nested::Map(seq! { 0 => Nested::Leaf(3) }),
        }),
    };
    let result = pipe!(tree, eager::map_recursive(|n: i32| n * 100));
    assert_eq!(
        result,
        seq! {
            "a" => Nested::Leaf(100),
            "b" => Nested::Map(seq! {
                "c" => Nested::Leaf(200),
                "d" => Nested::Map(seq! { 0 => Nested::Leaf(300) }),
            }),
        },
    );
}

#[rstest]
fn map_recursive_with_path_sees_the_full_key_trail() {
    let tree = seq! {
        "outer" => Nested::Map(seq! { "inner" => Nested::Leaf("v") }),
    };
    let result = pipe!(
        tree,
        eager::map_recursive_with_path(|value: &str, path: &[Key]| {
            let trail: Vec<String> = path.iter().map(ToString::to_string).collect();
            format!("{}@{}", value, trail.join("."))
        }),
    );
    assert_eq!(
        result,
        seq! {
            "outer" => Nested::Map(seq! {
                "inner" => Nested::Leaf("v@outer.inner".to_owned()),
            }),
        },
    );
}
