//! Element-wise lazy adapters: map, filter, take, chunk, and the consuming
//! terminals over keyed sequences.

use crate::core::{Entry, Key, OrderedMap, PipeError};

/// Returns a transformer that lazily maps values through `transform`,
/// preserving keys. The callback does not run until elements are pulled.
pub fn map<I, V, U, F>(transform: F) -> impl FnOnce(I) -> Map<I::IntoIter, F>
where
    I: IntoIterator<Item = Entry<V>>,
    F: FnMut(V) -> U,
{
    move |source| Map {
        source: source.into_iter(),
        transform,
    }
}

/// Iterator behind [`map`].
#[derive(Debug)]
pub struct Map<I, F> {
    source: I,
    transform: F,
}

impl<I, V, U, F> Iterator for Map<I, F>
where
    I: Iterator<Item = Entry<V>>,
    F: FnMut(V) -> U,
{
    type Item = Entry<U>;

    fn next(&mut self) -> Option<Self::Item> {
        let (key, value) = self.source.next()?;
        Some((key, (self.transform)(value)))
    }
}

/// Returns a transformer that lazily keeps the entries whose
/// `(value, key)` pair satisfies `predicate`, preserving keys.
pub fn filter<I, V, P>(predicate: P) -> impl FnOnce(I) -> Filter<I::IntoIter, P>
where
    I: IntoIterator<Item = Entry<V>>,
    P: FnMut(&V, &Key) -> bool,
{
    move |source| Filter {
        source: source.into_iter(),
        predicate,
    }
}

/// Iterator behind [`filter`].
#[derive(Debug)]
pub struct Filter<I, P> {
    source: I,
    predicate: P,
}

impl<I, V, P> Iterator for Filter<I, P>
where
    I: Iterator<Item = Entry<V>>,
    P: FnMut(&V, &Key) -> bool,
{
    type Item = Entry<V>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (key, value) = self.source.next()?;
            if (self.predicate)(&value, &key) {
                return Some((key, value));
            }
        }
    }
}

/// Returns a transformer that passes through the first `count` entries,
/// preserving keys.
///
/// Never pulls more than `count` elements from the source; `take(0)` pulls
/// nothing at all.
///
/// # Examples
///
/// ```rust
/// use pipework::{lazy, pipe, seq};
///
/// let head = pipe!(seq! { 2 => 'a', 10 => 'b', 11 => 'c' }, lazy::take(2), lazy::collect);
/// assert_eq!(head, seq! { 2 => 'a', 10 => 'b' });
/// ```
pub fn take<I, V>(count: usize) -> impl Fn(I) -> Take<I::IntoIter>
where
    I: IntoIterator<Item = Entry<V>>,
{
    move |source| Take {
        source: source.into_iter(),
        remaining: count,
    }
}

/// Iterator behind [`take`].
#[derive(Debug)]
pub struct Take<I> {
    source: I,
    remaining: usize,
}

impl<I> Iterator for Take<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.source.next()
    }
}

/// Returns a transformer that lazily groups entries into chunks of `size`.
///
/// Chunks are keyed `0..`; inner keys are reindexed unless `preserve_keys`
/// is set. The final chunk may be short.
///
/// # Errors
///
/// Fails at factory time if `size` is zero.
pub fn chunk<I, V>(
    size: usize,
    preserve_keys: bool,
) -> Result<impl Fn(I) -> Chunk<I::IntoIter>, PipeError>
where
    I: IntoIterator<Item = Entry<V>>,
{
    if size == 0 {
        return Err(PipeError::invalid_config("chunk", "size must be at least 1"));
    }
    Ok(move |source: I| Chunk {
        source: source.into_iter(),
        size,
        preserve_keys,
        index: 0,
    })
}

/// Iterator behind [`chunk`].
#[derive(Debug)]
pub struct Chunk<I> {
    source: I,
    size: usize,
    preserve_keys: bool,
    index: i64,
}

impl<I, V> Iterator for Chunk<I>
where
    I: Iterator<Item = Entry<V>>,
{
    type Item = Entry<OrderedMap<V>>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut group = OrderedMap::with_capacity(self.size);
        // Chunk boundaries count pulled elements, not surviving keys, so a
        // key collision inside one chunk never steals from the next.
        let mut pulled = 0;
        while pulled < self.size {
            let Some((key, value)) = self.source.next() else {
                break;
            };
            pulled += 1;
            if self.preserve_keys {
                group.insert(key, value);
            } else {
                group.push(value);
            }
        }
        if pulled == 0 {
            return None;
        }
        let key = Key::Int(self.index);
        self.index += 1;
        Some((key, group))
    }
}

/// Returns a transformer that extracts the value at position `index`,
/// consuming exactly `index + 1` elements. `None` when the sequence is too
/// short.
pub fn nth<I, V>(index: usize) -> impl Fn(I) -> Option<V>
where
    I: IntoIterator<Item = Entry<V>>,
{
    move |source| source.into_iter().nth(index).map(|(_, value)| value)
}

/// Returns a transformer that folds a sequence left to right with
/// `step(accumulator, value, &key)`, starting from `initial`. Consumes the
/// whole sequence.
pub fn reduce<I, V, A, S>(step: S, initial: A) -> impl FnOnce(I) -> A
where
    I: IntoIterator<Item = Entry<V>>,
    S: FnMut(A, V, &Key) -> A,
{
    move |source| {
        let mut step = step;
        source
            .into_iter()
            .fold(initial, |accumulator, (key, value)| {
                step(accumulator, value, &key)
            })
    }
}

/// Returns a transformer that reports whether `predicate` holds for every
/// value, short-circuiting on the first failure. Vacuously true for an
/// empty sequence.
pub fn all<I, V, P>(predicate: P) -> impl FnOnce(I) -> bool
where
    I: IntoIterator<Item = Entry<V>>,
    P: FnMut(&V) -> bool,
{
    move |source| {
        let mut predicate = predicate;
        source.into_iter().all(|(_, value)| predicate(&value))
    }
}

/// Returns a transformer that reports whether `predicate` holds for at
/// least one value, short-circuiting on the first match. False for an
/// empty sequence.
pub fn any<I, V, P>(predicate: P) -> impl FnOnce(I) -> bool
where
    I: IntoIterator<Item = Entry<V>>,
    P: FnMut(&V) -> bool,
{
    move |source| {
        let mut predicate = predicate;
        source.into_iter().any(|(_, value)| predicate(&value))
    }
}
