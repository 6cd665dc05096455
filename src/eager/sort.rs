//! Sorting combinators.
//!
//! Comparison modes are trait bounds or explicit comparators, not runtime
//! flags: an unsupported mode is unrepresentable.

use std::cmp::Ordering;

use crate::core::OrderedMap;

/// Returns a transformer that sorts values ascending and reindexes keys
/// from `0`.
///
/// # Examples
///
/// ```rust
/// use pipework::eager;
/// use pipework::{pipe, seq};
///
/// let sorted = pipe!(seq! { 10 => 'b', 20 => 'a', 30 => 'c' }, eager::sort());
/// assert_eq!(sorted, seq!['a', 'b', 'c']);
/// ```
pub fn sort<V>() -> impl Fn(OrderedMap<V>) -> OrderedMap<V>
where
    V: Ord,
{
    |subject| {
        let mut values: Vec<V> = subject.into_values().collect();
        values.sort();
        OrderedMap::from_values(values)
    }
}

/// Returns a transformer that sorts values descending and reindexes keys
/// from `0`.
pub fn rsort<V>() -> impl Fn(OrderedMap<V>) -> OrderedMap<V>
where
    V: Ord,
{
    |subject| {
        let mut values: Vec<V> = subject.into_values().collect();
        values.sort_by(|left, right| right.cmp(left));
        OrderedMap::from_values(values)
    }
}

/// Returns a transformer that sorts values with `comparator` and reindexes
/// keys from `0`.
pub fn sort_by<V, C>(comparator: C) -> impl Fn(OrderedMap<V>) -> OrderedMap<V>
where
    C: Fn(&V, &V) -> Ordering,
{
    move |subject| {
        let mut values: Vec<V> = subject.into_values().collect();
        values.sort_by(&comparator);
        OrderedMap::from_values(values)
    }
}

/// Returns a transformer that sorts values with `comparator` while keeping
/// each value associated with its original key.
///
/// # Examples
///
/// ```rust
/// use pipework::eager;
/// use pipework::{pipe, seq};
///
/// let ranked = pipe!(
///     seq! { "b" => 2, "c" => 1, "a" => 3 },
///     eager::sort_by_preserving(|left: &i32, right| left.cmp(right)),
/// );
/// assert_eq!(ranked, seq! { "c" => 1, "b" => 2, "a" => 3 });
/// ```
pub fn sort_by_preserving<V, C>(comparator: C) -> impl Fn(OrderedMap<V>) -> OrderedMap<V>
where
    C: Fn(&V, &V) -> Ordering,
{
    move |subject| {
        let mut entries: Vec<_> = subject.into_iter().collect();
        entries.sort_by(|(_, left), (_, right)| comparator(left, right));
        entries.into_iter().collect()
    }
}
