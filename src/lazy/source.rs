//! Sequence sources: key adaptation, counters, and unfolding.

use crate::core::{Entry, Key};

/// Adapts a plain value iterator into a keyed sequence with integer keys
/// counting from `0`, the shape a generator takes when it never names its keys.
///
/// # Examples
///
/// ```rust
/// use pipework::{lazy, seq};
///
/// let keyed = lazy::collect(lazy::indexed(["a", "b"]));
/// assert_eq!(keyed, seq!["a", "b"]);
/// ```
pub fn indexed<I>(source: I) -> Indexed<I::IntoIter>
where
    I: IntoIterator,
{
    Indexed {
        source: source.into_iter(),
        index: 0,
    }
}

/// Iterator behind [`indexed`].
#[derive(Debug)]
pub struct Indexed<I> {
    source: I,
    index: i64,
}

impl<I> Iterator for Indexed<I>
where
    I: Iterator,
{
    type Item = Entry<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.source.next()?;
        let key = Key::Int(self.index);
        self.index += 1;
        Some((key, value))
    }
}

/// An infinite counter: values `start, start + 1, ...` under keys `0..`.
///
/// # Examples
///
/// ```rust
/// use pipework::{lazy, pipe, seq};
///
/// let first = pipe!(lazy::ticker(5), lazy::take(3), lazy::collect);
/// assert_eq!(first, seq![5, 6, 7]);
/// ```
pub const fn ticker(start: i64) -> Ticker {
    Ticker {
        value: start,
        index: 0,
    }
}

/// Iterator behind [`ticker`].
#[derive(Debug)]
pub struct Ticker {
    value: i64,
    index: i64,
}

impl Iterator for Ticker {
    type Item = Entry<i64>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = (Key::Int(self.index), self.value);
        self.index += 1;
        self.value += 1;
        Some(entry)
    }
}

/// Returns a transformer that unfolds a seed into the infinite sequence
/// `seed, step(seed), step(step(seed)), ...` under keys `0..`.
///
/// With `include_seed` unset the sequence starts at `step(seed)`. The step
/// callback runs only for values the consumer actually pulls.
///
/// # Examples
///
/// ```rust
/// use pipework::{lazy, pipe, seq};
///
/// let powers = pipe!(1, lazy::iterate(|v| v * 2, true), lazy::take(4), lazy::collect);
/// assert_eq!(powers, seq![1, 2, 4, 8]);
/// ```
pub fn iterate<T, F>(step: F, include_seed: bool) -> impl FnOnce(T) -> Iterate<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    move |seed| Iterate {
        state: seed,
        step,
        index: 0,
        pending_step: !include_seed,
    }
}

/// Iterator behind [`iterate`].
#[derive(Debug)]
pub struct Iterate<T, F> {
    state: T,
    step: F,
    index: i64,
    pending_step: bool,
}

impl<T, F> Iterator for Iterate<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    type Item = Entry<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pending_step {
            self.state = (self.step)(&self.state);
        } else {
            self.pending_step = true;
        }
        let key = Key::Int(self.index);
        self.index += 1;
        Some((key, self.state.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn ticker_can_be_advanced_manually() {
        let mut counter = ticker(10);
        assert_eq!(counter.next(), Some((Key::Int(0), 10)));
        assert_eq!(counter.next(), Some((Key::Int(1), 11)));
        assert_eq!(counter.next(), Some((Key::Int(2), 12)));
    }

    #[rstest]
    fn iterate_only_steps_for_consumed_values() {
        let calls = Cell::new(0);
        let mut unfolded = iterate(
            |text: &String| {
                calls.set(calls.get() + 1);
                format!("{text}{text}")
            },
            true,
        )(String::from("a"));

        assert_eq!(calls.get(), 0);
        assert_eq!(unfolded.next().map(|(_, v)| v), Some(String::from("a")));
        assert_eq!(unfolded.next().map(|(_, v)| v), Some(String::from("aa")));
        assert_eq!(unfolded.next().map(|(_, v)| v), Some(String::from("aaaa")));
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    fn iterate_can_exclude_the_seed() {
        let mut unfolded = iterate(|v: &i32| v + 1, false)(0);
        assert_eq!(unfolded.next(), Some((Key::Int(0), 1)));
        assert_eq!(unfolded.next(), Some((Key::Int(1), 2)));
    }
}
