//! Folds and short-circuiting quantifiers over materialized sequences.

use crate::core::{Key, OrderedMap};

/// Returns a transformer that maps every value through `transform` and sums
/// the results. Empty input sums to zero.
///
/// # Examples
///
/// ```rust
/// use pipework::eager;
/// use pipework::{pipe, seq};
///
/// let squares: i32 = pipe!(seq![1, 2, 3], eager::sum(|v| v * v));
/// assert_eq!(squares, 14);
/// ```
pub fn sum<V, N, F>(transform: F) -> impl Fn(OrderedMap<V>) -> N
where
    F: Fn(V) -> N,
    N: std::iter::Sum<N>,
{
    move |subject| subject.into_values().map(&transform).sum()
}

/// Returns a transformer that folds the values left to right with `step`,
/// starting from `initial`.
///
/// The step callback never runs for empty input; the initial value is
/// returned unchanged.
pub fn reduce<V, A, S>(step: S, initial: A) -> impl Fn(OrderedMap<V>) -> A
where
    S: Fn(A, V) -> A,
    A: Clone,
{
    move |subject| subject.into_values().fold(initial.clone(), &step)
}

/// Returns a transformer that folds left to right until a stopping predicate
/// fires.
///
/// After each element the accumulator is advanced with
/// `step(accumulator, &value, &key)` and then tested with
/// `until(&accumulator, &value, &key)`. The first time `until` signals true,
/// folding stops and the triggering element is reported:
/// `(accumulator, Some(key), Some(value))`. If the predicate never fires the
/// result is `(accumulator, None, None)`; for empty input neither callback
/// runs and the initial accumulator is returned.
///
/// # Examples
///
/// ```rust
/// use pipework::core::Key;
/// use pipework::eager;
/// use pipework::{pipe, seq};
///
/// let (total, key, value) = pipe!(
///     seq! { "a" => 2, "b" => 3, "c" => 4 },
///     eager::reduce_until(|acc, v, _| acc + v, |acc, _, _| *acc >= 5, 0),
/// );
/// assert_eq!(total, 5);
/// assert_eq!(key, Some(Key::from("b")));
/// assert_eq!(value, Some(3));
/// ```
pub fn reduce_until<V, A, S, U>(
    step: S,
    until: U,
    initial: A,
) -> impl Fn(OrderedMap<V>) -> (A, Option<Key>, Option<V>)
where
    S: Fn(A, &V, &Key) -> A,
    U: Fn(&A, &V, &Key) -> bool,
    A: Clone,
{
    move |subject| {
        let mut accumulator = initial.clone();
        for (key, value) in subject {
            accumulator = step(accumulator, &value, &key);
            if until(&accumulator, &value, &key) {
                return (accumulator, Some(key), Some(value));
            }
        }
        (accumulator, None, None)
    }
}

/// Returns a transformer that reports whether `predicate` holds for every
/// entry. Vacuously true for empty input; short-circuits on the first
/// failure.
pub fn all<V, P>(predicate: P) -> impl Fn(OrderedMap<V>) -> bool
where
    P: Fn(&V, &Key) -> bool,
{
    move |subject| subject.iter().all(|(key, value)| predicate(value, key))
}

/// Returns a transformer that reports whether `predicate` holds for at least
/// one entry. False for empty input; short-circuits on the first match.
pub fn any<V, P>(predicate: P) -> impl Fn(OrderedMap<V>) -> bool
where
    P: Fn(&V, &Key) -> bool,
{
    move |subject| subject.iter().any(|(key, value)| predicate(value, key))
}
