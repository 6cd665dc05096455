//! Scalar combinators: branching, constants, taps, and argument dispatch.
//!
//! Everything here follows the factory shape of the rest of the crate: a
//! configuring call returns the unary transformer that a pipeline applies.

use crate::core::{Key, OrderedMap, PipeError};

/// Returns a transformer that applies `transform` when `predicate` holds
/// and passes the value through unchanged otherwise.
///
/// The untaken callback is never invoked; the predicate runs once per
/// application.
///
/// # Examples
///
/// ```rust
/// use pipework::{pipe, scalar};
///
/// let clamped = pipe!(12, scalar::when(|n: &i32| *n > 10, |_| 10));
/// assert_eq!(clamped, 10);
/// ```
pub fn when<T, P, F>(predicate: P, transform: F) -> impl FnOnce(T) -> T
where
    P: FnOnce(&T) -> bool,
    F: FnOnce(T) -> T,
{
    move |value| {
        if predicate(&value) {
            transform(value)
        } else {
            value
        }
    }
}

/// Returns a transformer that applies `transform` when `predicate` does
/// not hold. The complement of [`when`].
pub fn unless<T, P, F>(predicate: P, transform: F) -> impl FnOnce(T) -> T
where
    P: FnOnce(&T) -> bool,
    F: FnOnce(T) -> T,
{
    move |value| {
        if predicate(&value) {
            value
        } else {
            transform(value)
        }
    }
}

/// Returns a transformer that routes the value into `on_true` or
/// `on_false` depending on `predicate`. Only the taken arm sees the value.
pub fn if_else<T, U, P, F, G>(predicate: P, on_true: F, on_false: G) -> impl FnOnce(T) -> U
where
    P: FnOnce(&T) -> bool,
    F: FnOnce(T) -> U,
    G: FnOnce(T) -> U,
{
    move |value| {
        if predicate(&value) {
            on_true(value)
        } else {
            on_false(value)
        }
    }
}

/// Returns the logical complement of `predicate`.
pub fn not<T, P>(predicate: P) -> impl FnMut(&T) -> bool
where
    P: FnMut(&T) -> bool,
{
    let mut predicate = predicate;
    move |value| !predicate(value)
}

/// Returns a predicate that holds exactly when the value equals
/// `expected`.
pub fn equals<T>(expected: T) -> impl Fn(&T) -> bool
where
    T: PartialEq,
{
    move |value| *value == expected
}

/// Returns a transformer that discards its input and produces `constant`.
pub fn value<T, U>(constant: U) -> impl FnOnce(T) -> U {
    move |_| constant
}

/// Returns a transformer that runs `effect` on a reference to the value
/// and then returns the value unchanged.
///
/// # Examples
///
/// ```rust
/// use pipework::{pipe, scalar};
///
/// let mut seen = Vec::new();
/// let through = pipe!(5, scalar::tap(|n: &i32| seen.push(*n)));
/// assert_eq!(through, 5);
/// assert_eq!(seen, vec![5]);
/// ```
pub fn tap<T, F>(effect: F) -> impl FnOnce(T) -> T
where
    F: FnOnce(&T),
{
    move |value| {
        effect(&value);
        value
    }
}

/// Returns a transformer that adds `by` to the value.
pub fn increment<T>(by: T) -> impl FnOnce(T) -> T::Output
where
    T: std::ops::Add<T>,
{
    move |value| value + by
}

/// The argument shape [`apply`] hands to its callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arguments<V> {
    /// All keys were integers; values in iteration order.
    Positional(Vec<V>),
    /// All keys were strings; name/value pairs in iteration order.
    Named(Vec<(String, V)>),
}

/// Returns a transformer that dispatches a keyed sequence to `callback`
/// as either positional or named arguments.
///
/// All keys are scanned before the callback runs: an all-integer key set
/// (or an empty sequence) becomes [`Arguments::Positional`], an all-string
/// key set becomes [`Arguments::Named`].
///
/// # Errors
///
/// The transformer fails with [`PipeError::MixedArgumentKeys`] when the
/// sequence mixes integer and string keys; the callback is not invoked.
pub fn apply<V, U, F>(callback: F) -> impl FnOnce(OrderedMap<V>) -> Result<U, PipeError>
where
    F: FnOnce(Arguments<V>) -> U,
{
    move |subject| {
        let all_int = subject.keys().all(Key::is_int);
        let all_str = subject.keys().all(Key::is_str);
        let arguments = if all_int {
            Arguments::Positional(subject.into_values().collect())
        } else if all_str {
            Arguments::Named(
                subject
                    .into_iter()
                    .filter_map(|(key, value)| match key {
                        Key::Str(name) => Some((name, value)),
                        Key::Int(_) => None,
                    })
                    .collect(),
            )
        } else {
            return Err(PipeError::MixedArgumentKeys);
        };
        Ok(callback(arguments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn when_skips_the_callback_if_the_predicate_fails() {
        let calls = Cell::new(0);
        let result = when(
            |n: &i32| *n > 10,
            |n| {
                calls.set(calls.get() + 1);
                n * 2
            },
        )(3);
        assert_eq!(result, 3);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn unless_applies_on_a_failing_predicate() {
        assert_eq!(unless(|n: &i32| *n > 10, |n| n * 2)(3), 6);
        assert_eq!(unless(|n: &i32| *n > 10, |n| n * 2)(11), 11);
    }

    #[rstest]
    fn if_else_routes_to_a_single_arm() {
        let label = if_else(|n: &i32| *n % 2 == 0, |_| "even", |_| "odd");
        assert_eq!(label(4), "even");
    }

    #[rstest]
    fn not_negates_and_equals_compares() {
        let mut odd = not(|n: &i32| *n % 2 == 0);
        assert!(odd(&3));
        assert!(equals(5)(&5));
        assert!(!equals(5)(&6));
    }

    #[rstest]
    fn value_ignores_its_input() {
        assert_eq!(value::<i32, _>("fixed")(99), "fixed");
    }

    #[rstest]
    fn increment_handles_negative_and_float_steps() {
        assert_eq!(increment(1)(41), 42);
        assert_eq!(increment(-3)(10), 7);
        assert!((increment(0.5)(1.0_f64) - 1.5).abs() < f64::EPSILON);
    }

    #[rstest]
    fn apply_dispatches_positionally_for_integer_keys() {
        let result = apply(|arguments| arguments)(seq![10, 20]);
        assert_eq!(result, Ok(Arguments::Positional(vec![10, 20])));
    }

    #[rstest]
    fn apply_dispatches_named_for_string_keys() {
        let result = apply(|arguments| arguments)(seq! { "x" => 1, "y" => 2 });
        assert_eq!(
            result,
            Ok(Arguments::Named(vec![
                ("x".to_owned(), 1),
                ("y".to_owned(), 2),
            ])),
        );
    }

    #[rstest]
    fn apply_treats_an_empty_sequence_as_positional() {
        let result = apply(|arguments| arguments)(crate::core::OrderedMap::<i32>::new());
        assert_eq!(result, Ok(Arguments::Positional(Vec::new())));
    }

    #[rstest]
    fn apply_rejects_mixed_keys_before_the_callback_runs() {
        let calls = Cell::new(0);
        let result = apply(|arguments: Arguments<i32>| {
            calls.set(calls.get() + 1);
            arguments
        })(seq! { 0 => 1, "x" => 2 });
        assert_eq!(result, Err(PipeError::MixedArgumentKeys));
        assert_eq!(calls.get(), 0);
    }
}
