//! Integration tests for the lazy adapters and sources: results and,
//! just as importantly, how much of the source each pipeline consumes.

use std::cell::Cell;
use std::rc::Rc;

use pipework::core::OrderedMap;
use pipework::{lazy, pipe, seq};
use rstest::rstest;

fn counting<I>(source: I, pulls: &Rc<Cell<usize>>) -> impl Iterator<Item = I::Item> + use<I>
where
    I: IntoIterator,
{
    let counter = Rc::clone(pulls);
    source.into_iter().inspect(move |_| {
        counter.set(counter.get() + 1);
    })
}

#[rstest]
fn a_pipeline_runs_nothing_until_collected() {
    let calls = Cell::new(0_usize);
    let stream = pipe!(
        seq![1, 2, 3],
        lazy::map(|n: i32| {
            calls.set(calls.get() + 1);
            n * 2
        }),
    );
    assert_eq!(calls.get(), 0);

    let result = lazy::collect(stream);
    assert_eq!(result, seq![2, 4, 6]);
    assert_eq!(calls.get(), 3);
}

#[rstest]
fn take_bounds_consumption_of_an_infinite_source() {
    let result = pipe!(
        lazy::ticker(5),
        lazy::filter(|n: &i64, _| n % 2 == 1),
        lazy::take(3),
        lazy::collect,
    );
    assert_eq!(result, seq! { 0 => 5, 2 => 7, 4 => 9 });
}

#[rstest]
fn first_consumes_exactly_one_element() {
    let pulls = Rc::new(Cell::new(0));
    let source = lazy::indexed(counting([10, 20, 30], &pulls));
    assert_eq!(lazy::first(source), Some(10));
    assert_eq!(pulls.get(), 1);
}

#[rstest]
fn chunk_streams_groups_of_the_requested_size() {
    let result = pipe!(
        lazy::ticker(0),
        lazy::take(5),
        lazy::chunk(2, false).unwrap(),
        lazy::collect,
    );
    assert_eq!(result, seq![seq![0, 1], seq![2, 3], seq![4]]);
}

#[rstest]
fn iterate_applies_the_step_only_for_consumed_values() {
    let calls = Cell::new(0_usize);
    let stream = pipe!(
        "a".to_owned(),
        lazy::iterate(
            |s: &String| {
                calls.set(calls.get() + 1);
                format!("{s}{s}")
            },
            true,
        ),
        lazy::take(3),
    );
    let result = lazy::collect(stream);
    assert_eq!(
        result,
        seq!["a".to_owned(), "aa".to_owned(), "aaaa".to_owned()],
    );
    assert_eq!(calls.get(), 2);
}

#[rstest]
fn iterate_can_skip_the_seed() {
    let result = pipe!(
        1,
        lazy::iterate(|n: &i32| n * 3, false),
        lazy::take(3),
        lazy::collect,
    );
    assert_eq!(result, seq![3, 9, 27]);
}

#[rstest]
fn flatten_defers_both_outer_and_inner_pulls() {
    let pulls = Rc::new(Cell::new(0));
    let nested = seq![seq![1, 2], seq![3, 4]];
    let stream = pipe!(
        counting(nested, &pulls),
        lazy::flatten(false),
        lazy::take(3),
    );
    assert_eq!(pulls.get(), 0);
    assert_eq!(lazy::collect(stream), seq![1, 2, 3]);
    assert_eq!(pulls.get(), 2);
}

#[rstest]
fn reduce_folds_with_keys_in_order() {
    let trail = pipe!(
        seq! { "a" => 1, "b" => 2 },
        lazy::reduce(
            |mut acc: Vec<String>, value: i32, key: &pipework::core::Key| {
                acc.push(format!("{key}={value}"));
                acc
            },
            Vec::new(),
        ),
    );
    assert_eq!(trail, vec!["a=1".to_owned(), "b=2".to_owned()]);
}

#[rstest]
fn any_short_circuits_the_source() {
    let pulls = Rc::new(Cell::new(0));
    let source = lazy::indexed(counting([1, 2, 3, 4], &pulls));
    assert!(lazy::any(|n: &i32| *n == 2)(source));
    assert_eq!(pulls.get(), 2);
}

#[rstest]
fn collect_of_an_empty_stream_is_the_empty_sequence() {
    let result = pipe!(
        OrderedMap::<i32>::new(),
        lazy::filter(|_, _| true),
        lazy::collect,
    );
    assert_eq!(result, seq!());
}
