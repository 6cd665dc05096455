//! Lockstep traversal of one keyed sequence and any number of cursors.

use crate::core::Entry;
use crate::lazy::Cursor;

/// Returns a transformer that zips a keyed sequence with `cursors`,
/// yielding `[left, r1, r2, ...]` tuples under the left key.
///
/// Cursors are primed once, lazily, on the first pull. A tuple is produced
/// only when every cursor still holds an element; the first exhausted
/// cursor, checked in order, ends the stream. Cursor advancing is deferred
/// to the following pull, so each cursor is consumed exactly once per
/// tuple actually requested.
///
/// With no cursors every left value becomes a one-element tuple.
///
/// # Examples
///
/// ```rust
/// use pipework::lazy::{self, Cursor};
/// use pipework::{pipe, seq};
///
/// let pairs = pipe!(
///     seq![10, 20, 30],
///     lazy::zip(vec![Cursor::new(1..)]),
///     lazy::collect,
/// );
/// assert_eq!(pairs, seq![vec![10, 1], vec![20, 2], vec![30, 3]]);
/// ```
pub fn zip<I, V>(cursors: Vec<Cursor<V>>) -> impl FnOnce(I) -> Zip<I::IntoIter, V>
where
    I: IntoIterator<Item = Entry<V>>,
{
    move |source| Zip {
        left: source.into_iter(),
        cursors,
        primed: false,
        pending_advance: false,
    }
}

/// Iterator behind [`zip`].
#[derive(Debug)]
pub struct Zip<I, V> {
    left: I,
    cursors: Vec<Cursor<V>>,
    primed: bool,
    pending_advance: bool,
}

impl<I, V> Iterator for Zip<I, V>
where
    I: Iterator<Item = Entry<V>>,
{
    type Item = Entry<Vec<V>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pending_advance {
            for cursor in &mut self.cursors {
                cursor.advance();
            }
            self.pending_advance = false;
        }
        if !self.primed {
            for cursor in &mut self.cursors {
                cursor.prime();
            }
            self.primed = true;
        }

        let (key, value) = self.left.next()?;
        let mut tuple = Vec::with_capacity(self.cursors.len() + 1);
        tuple.push(value);
        for cursor in &mut self.cursors {
            tuple.push(cursor.take_current()?);
        }
        self.pending_advance = true;
        Some((key, tuple))
    }
}
