//! Mapping, filtering, slicing, and merging over materialized sequences.

use crate::core::{Key, OrderedMap, PipeError};

/// Returns a transformer that maps every value through `transform`,
/// preserving keys.
///
/// # Examples
///
/// ```rust
/// use pipework::eager;
/// use pipework::{pipe, seq};
///
/// let doubled = pipe!(seq! { 10 => 1, "x" => 3 }, eager::map(|v| v * 2));
/// assert_eq!(doubled, seq! { 10 => 2, "x" => 6 });
/// ```
pub fn map<V, U, F>(transform: F) -> impl Fn(OrderedMap<V>) -> OrderedMap<U>
where
    F: Fn(V) -> U,
{
    move |subject| {
        subject
            .into_iter()
            .map(|(key, value)| (key, transform(value)))
            .collect()
    }
}

/// Returns a transformer that keeps the entries whose value satisfies
/// `predicate`, preserving keys.
pub fn filter<V, P>(predicate: P) -> impl Fn(OrderedMap<V>) -> OrderedMap<V>
where
    P: Fn(&V) -> bool,
{
    move |subject| {
        subject
            .into_iter()
            .filter(|(_, value)| predicate(value))
            .collect()
    }
}

/// Returns a transformer that splits a sequence into chunks of at most
/// `size` entries.
///
/// Chunks are keyed `0..`; inner keys are reindexed from `0` unless
/// `preserve_keys` is set.
///
/// # Errors
///
/// Fails at factory time if `size` is zero.
pub fn chunk<V>(
    size: usize,
    preserve_keys: bool,
) -> Result<impl Fn(OrderedMap<V>) -> OrderedMap<OrderedMap<V>>, PipeError> {
    if size == 0 {
        return Err(PipeError::invalid_config("chunk", "size must be at least 1"));
    }
    Ok(move |subject: OrderedMap<V>| {
        let mut chunks = OrderedMap::new();
        let mut current = OrderedMap::with_capacity(size);
        for (key, value) in subject {
            if preserve_keys {
                current.insert(key, value);
            } else {
                current.push(value);
            }
            if current.len() == size {
                chunks.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            chunks.push(current);
        }
        chunks
    })
}

/// Returns a transformer that extracts a run of entries.
///
/// A negative `offset` counts from the end; a negative `length` stops that
/// many entries before the end; `None` slices to the end. String keys are
/// always preserved; integer keys are reindexed from `0` unless
/// `preserve_keys` is set.
///
/// # Examples
///
/// ```rust
/// use pipework::eager;
/// use pipework::{pipe, seq};
///
/// let tail = pipe!(seq![1, 2, 3, 4, 5], eager::slice(-3, Some(2), false));
/// assert_eq!(tail, seq![3, 4]);
/// ```
pub fn slice<V>(
    offset: i64,
    length: Option<i64>,
    preserve_keys: bool,
) -> impl Fn(OrderedMap<V>) -> OrderedMap<V> {
    move |subject| {
        let total = i64::try_from(subject.len()).unwrap_or(i64::MAX);
        let start = if offset < 0 {
            (total + offset).max(0)
        } else {
            offset.min(total)
        };
        let end = match length {
            None => total,
            Some(len) if len < 0 => (total + len).max(start),
            Some(len) => (start + len).min(total),
        };

        let mut result = OrderedMap::new();
        for (position, (key, value)) in subject.into_iter().enumerate() {
            let position = i64::try_from(position).unwrap_or(i64::MAX);
            if position < start || position >= end {
                continue;
            }
            match key {
                Key::Str(name) => {
                    result.insert(Key::Str(name), value);
                }
                Key::Int(index) if preserve_keys => {
                    result.insert(Key::Int(index), value);
                }
                Key::Int(_) => result.push(value),
            }
        }
        result
    }
}

/// Returns a transformer that extracts the value at iteration position
/// `index`, counting from the end when negative. Out of bounds yields
/// `None`.
pub fn nth<V>(index: i64) -> impl Fn(OrderedMap<V>) -> Option<V> {
    move |subject| {
        let total = i64::try_from(subject.len()).unwrap_or(i64::MAX);
        let position = if index < 0 { total + index } else { index };
        let position = usize::try_from(position).ok()?;
        subject.into_values().nth(position)
    }
}

/// Returns a transformer that removes the named keys. Missing keys are
/// ignored.
///
/// # Examples
///
/// ```rust
/// use pipework::core::Key;
/// use pipework::eager;
/// use pipework::{pipe, seq};
///
/// let trimmed = pipe!(
///     seq! { "a" => 1, "b" => 2, "c" => 3 },
///     eager::without([Key::from("a"), Key::from("c")]),
/// );
/// assert_eq!(trimmed, seq! { "b" => 2 });
/// ```
pub fn without<V, K>(keys: K) -> impl Fn(OrderedMap<V>) -> OrderedMap<V>
where
    K: IntoIterator,
    K::Item: Into<Key>,
{
    let dropped: Vec<Key> = keys.into_iter().map(Into::into).collect();
    move |subject| {
        subject
            .into_iter()
            .filter(|(key, _)| !dropped.contains(key))
            .collect()
    }
}

/// Returns a transformer that drops duplicate values, keeping the key and
/// position of each value's first occurrence.
pub fn unique<V>() -> impl Fn(OrderedMap<V>) -> OrderedMap<V>
where
    V: PartialEq,
{
    |subject| {
        let mut result = OrderedMap::new();
        for (key, value) in subject {
            if !result.values().any(|existing| *existing == value) {
                result.insert(key, value);
            }
        }
        result
    }
}

/// Returns a transformer that flattens one level of nesting.
///
/// Inner string keys are merged with last-write-wins (the first write keeps
/// its position); inner integer keys are renumbered `0..` in encounter
/// order.
///
/// # Examples
///
/// ```rust
/// use pipework::eager;
/// use pipework::{pipe, seq};
///
/// let flat = pipe!(
///     seq![seq! { "a" => 1 }, seq! { "a" => 9, "b" => 2 }],
///     eager::flatten(),
/// );
/// assert_eq!(flat, seq! { "a" => 9, "b" => 2 });
/// ```
pub fn flatten<V>() -> impl Fn(OrderedMap<OrderedMap<V>>) -> OrderedMap<V> {
    |subject| {
        let mut result = OrderedMap::new();
        for inner in subject.into_values() {
            for (key, value) in inner {
                match key {
                    Key::Str(name) => {
                        result.insert(Key::Str(name), value);
                    }
                    Key::Int(_) => result.push(value),
                }
            }
        }
        result
    }
}
