//! One-level lazy flattening of a sequence of sequences.

use crate::core::{Entry, Key, OrderedMap};

/// Returns a transformer that flattens one level of nesting.
///
/// Inner keys are kept as-is when `preserve_keys` is set, otherwise the
/// output is reindexed `0..` across all inners. The next outer element is
/// not pulled until the current inner is exhausted, and no inner element
/// is consumed before the consumer asks for it. Empty inners are skipped.
pub fn flatten<I, V>(preserve_keys: bool) -> impl Fn(I) -> Flatten<I::IntoIter, V>
where
    I: IntoIterator<Item = Entry<OrderedMap<V>>>,
{
    move |source| Flatten {
        source: source.into_iter(),
        inner: None,
        preserve_keys,
        index: 0,
    }
}

/// Iterator behind [`flatten`].
#[derive(Debug)]
pub struct Flatten<I, V> {
    source: I,
    inner: Option<crate::core::IntoIter<V>>,
    preserve_keys: bool,
    index: i64,
}

impl<I, V> Iterator for Flatten<I, V>
where
    I: Iterator<Item = Entry<OrderedMap<V>>>,
{
    type Item = Entry<V>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(inner) = self.inner.as_mut() {
                if let Some((key, value)) = inner.next() {
                    let key = if self.preserve_keys {
                        key
                    } else {
                        let key = Key::Int(self.index);
                        self.index += 1;
                        key
                    };
                    return Some((key, value));
                }
                self.inner = None;
            }
            let (_, inner) = self.source.next()?;
            self.inner = Some(inner.into_iter());
        }
    }
}
