//! An ordered associative sequence.
//!
//! [`OrderedMap`] is the materialized sequence type every eager combinator
//! consumes and produces: a key/value collection whose iteration order is
//! significant and whose keys are unique but not necessarily contiguous.
//! Sparse integer keys survive filtering, mapping, and slicing unchanged
//! unless an operation documents reindexing.

use std::slice;
use std::vec;

use super::key::{Entry, Key};

/// A key/value sequence with significant iteration order and unique keys.
///
/// Inserting under an existing key replaces the value in place, keeping the
/// key's original position ("last write wins, first position kept"), the
/// same collision rule a keyed collect applies.
///
/// # Examples
///
/// ```rust
/// use pipework::seq;
///
/// let mut scores = seq! { "a" => 1, "b" => 2 };
/// scores.insert("a".into(), 10);
///
/// assert_eq!(scores, seq! { "a" => 10, "b" => 2 });
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedMap<V> {
    entries: Vec<Entry<V>>,
}

impl<V> Default for OrderedMap<V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<V> OrderedMap<V> {
    /// Creates an empty sequence.
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates an empty sequence with room for `capacity` entries.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Creates a list-like sequence keyed `0..n` from plain values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pipework::core::{Key, OrderedMap};
    ///
    /// let list = OrderedMap::from_values([10, 20]);
    /// assert_eq!(list.get(&Key::Int(1)), Some(&20));
    /// ```
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        Self {
            entries: values
                .into_iter()
                .enumerate()
                .map(|(index, value)| (Key::from(index), value))
                .collect(),
        }
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the sequence holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts `value` under `key`, returning the previous value if the key
    /// was already present. An existing key keeps its original position.
    pub fn insert(&mut self, key: Key, value: V) -> Option<V> {
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Appends `value` under the next free integer key: one past the largest
    /// non-negative integer key in use, or `0` if there is none.
    pub fn push(&mut self, value: V) {
        let next = self
            .entries
            .iter()
            .filter_map(|(key, _)| match key {
                Key::Int(index) if *index >= 0 => Some(*index),
                _ => None,
            })
            .max()
            .map_or(0, |largest| largest + 1);
        self.entries.push((Key::Int(next), value));
    }

    /// Returns a reference to the value stored under `key`.
    pub fn get(&self, key: &Key) -> Option<&V> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Removes and returns the value stored under `key`.
    pub fn remove(&mut self, key: &Key) -> Option<V> {
        let position = self
            .entries
            .iter()
            .position(|(existing, _)| existing == key)?;
        Some(self.entries.remove(position).1)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &Key) -> bool {
        self.entries.iter().any(|(existing, _)| existing == key)
    }

    /// Iterates over `(&Key, &V)` pairs in sequence order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            entries: self.entries.iter(),
        }
    }

    /// Iterates over keys in sequence order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Iterates over values in sequence order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Consumes the sequence, yielding values in sequence order.
    pub fn into_values(self) -> impl Iterator<Item = V> {
        self.entries.into_iter().map(|(_, value)| value)
    }
}

impl<V> FromIterator<Entry<V>> for OrderedMap<V> {
    /// Collects keyed entries with the insert collision rule: a repeated key
    /// overwrites the earlier value but keeps the earlier position.
    fn from_iter<I: IntoIterator<Item = Entry<V>>>(source: I) -> Self {
        let mut map = Self::new();
        map.extend(source);
        map
    }
}

impl<V> Extend<Entry<V>> for OrderedMap<V> {
    fn extend<I: IntoIterator<Item = Entry<V>>>(&mut self, source: I) {
        for (key, value) in source {
            self.insert(key, value);
        }
    }
}

impl<V> IntoIterator for OrderedMap<V> {
    type Item = Entry<V>;
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            entries: self.entries.into_iter(),
        }
    }
}

impl<'a, V> IntoIterator for &'a OrderedMap<V> {
    type Item = (&'a Key, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over the entries of an [`OrderedMap`].
#[derive(Debug)]
pub struct IntoIter<V> {
    entries: vec::IntoIter<Entry<V>>,
}

impl<V> Iterator for IntoIter<V> {
    type Item = Entry<V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

/// Borrowing iterator over the entries of an [`OrderedMap`].
#[derive(Debug)]
pub struct Iter<'a, V> {
    entries: slice::Iter<'a, Entry<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a Key, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|(key, value)| (key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

/// Builds an [`OrderedMap`] literal.
///
/// The list form keys elements `0..n`; the `key => value` form accepts
/// anything convertible into a [`Key`](crate::core::Key).
///
/// # Examples
///
/// ```rust
/// use pipework::core::Key;
/// use pipework::seq;
///
/// let list = seq![10, 20, 30];
/// assert_eq!(list.get(&Key::Int(2)), Some(&30));
///
/// let named = seq! { "a" => 1, 7 => 2 };
/// assert_eq!(named.get(&Key::from("a")), Some(&1));
/// assert_eq!(named.get(&Key::Int(7)), Some(&2));
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::core::OrderedMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::core::OrderedMap::new();
        $(map.insert($crate::core::Key::from($key), $value);)+
        map
    }};
    ($($value:expr),+ $(,)?) => {
        $crate::core::OrderedMap::from_values([$($value),+])
    };
}
