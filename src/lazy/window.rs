//! Sliding windows over a keyed sequence.

use std::collections::VecDeque;

use crate::core::{Entry, Key, PipeError};

/// Returns a transformer that slides a window of `size` values over the
/// sequence, yielding each window as a fresh `Vec<V>` keyed `0..`.
///
/// Plain mode produces `n - size + 1` windows for `n >= size` values and
/// nothing otherwise. Circular mode continues across the end of the
/// sequence back into its start, producing one window per value; a
/// sequence shorter than the window still produces nothing.
///
/// # Errors
///
/// Fails at factory time if `size` is zero.
///
/// # Examples
///
/// ```rust
/// use pipework::{lazy, pipe, seq};
///
/// let windows = pipe!(
///     seq![1, 2, 3, 4],
///     lazy::window(3, true).unwrap(),
///     lazy::collect,
/// );
/// assert_eq!(
///     windows,
///     seq![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 1], vec![4, 1, 2]],
/// );
/// ```
pub fn window<I, V>(
    size: usize,
    circular: bool,
) -> Result<impl Fn(I) -> Window<I::IntoIter, V>, PipeError>
where
    I: IntoIterator<Item = Entry<V>>,
    V: Clone,
{
    if size == 0 {
        return Err(PipeError::invalid_config(
            "window",
            "size must be at least 1",
        ));
    }
    Ok(move |source: I| Window {
        source: source.into_iter(),
        size,
        circular,
        buffer: VecDeque::with_capacity(size),
        prefix: Vec::new(),
        index: 0,
        produced_any: false,
        wrap: None,
        source_done: false,
    })
}

/// Iterator behind [`window`].
#[derive(Debug)]
pub struct Window<I, V> {
    source: I,
    size: usize,
    circular: bool,
    buffer: VecDeque<V>,
    prefix: Vec<V>,
    index: i64,
    produced_any: bool,
    wrap: Option<Box<Window<std::vec::IntoIter<Entry<V>>, V>>>,
    source_done: bool,
}

impl<I, V> Window<I, V>
where
    V: Clone,
{
    fn emit(&mut self, values: Vec<V>) -> Entry<Vec<V>> {
        let key = Key::Int(self.index);
        self.index += 1;
        self.produced_any = true;
        (key, values)
    }

    // The windows that continue past the end of the sequence are exactly
    // the plain windows of (last size - 1 values ++ first size - 1 values).
    fn build_wrap(&mut self) -> Window<std::vec::IntoIter<Entry<V>>, V> {
        let values: Vec<Entry<V>> = self
            .buffer
            .drain(..)
            .chain(self.prefix.drain(..))
            .map(|value| (Key::Int(0), value))
            .collect();
        Window {
            source: values.into_iter(),
            size: self.size,
            circular: false,
            buffer: VecDeque::with_capacity(self.size),
            prefix: Vec::new(),
            index: 0,
            produced_any: false,
            wrap: None,
            source_done: false,
        }
    }
}

impl<I, V> Iterator for Window<I, V>
where
    I: Iterator<Item = Entry<V>>,
    V: Clone,
{
    type Item = Entry<Vec<V>>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(wrap) = self.wrap.as_mut() {
            let (_, values) = wrap.next()?;
            return Some(self.emit(values));
        }

        while !self.source_done {
            let Some((_, value)) = self.source.next() else {
                self.source_done = true;
                break;
            };
            if self.circular && self.prefix.len() + 1 < self.size {
                self.prefix.push(value.clone());
            }
            self.buffer.push_back(value);
            if self.buffer.len() == self.size {
                let snapshot: Vec<V> = self.buffer.iter().cloned().collect();
                self.buffer.pop_front();
                return Some(self.emit(snapshot));
            }
        }

        if self.circular && self.produced_any {
            let wrap = Box::new(self.build_wrap());
            self.wrap = Some(wrap);
            let (_, values) = self.wrap.as_mut().and_then(|wrap| wrap.next())?;
            return Some(self.emit(values));
        }
        None
    }
}
