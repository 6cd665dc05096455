//! Lazy enumeration of all ways to distribute a total over named slots.

use crate::core::{Entry, Key, OrderedMap, PipeError};

/// Returns a transformer that enumerates every way of splitting `total`
/// into non-negative counts over the slots named by the sequence's keys.
///
/// Slot names are materialized up front; the allocations themselves are
/// produced lazily, keyed `0..`, in ascending lexicographic order of the
/// counts (the first slot grows slowest, the last slot always takes the
/// remainder). A slotless sequence yields a single empty allocation when
/// `total` is zero and nothing otherwise.
///
/// # Errors
///
/// Fails at factory time if `total` is negative.
///
/// # Examples
///
/// ```rust
/// use pipework::{lazy, pipe, seq};
///
/// let splits = pipe!(
///     seq! { "left" => (), "right" => () },
///     lazy::allocate(2).unwrap(),
///     lazy::collect,
/// );
/// assert_eq!(
///     splits,
///     seq![
///         seq! { "left" => 0, "right" => 2 },
///         seq! { "left" => 1, "right" => 1 },
///         seq! { "left" => 2, "right" => 0 },
///     ],
/// );
/// ```
pub fn allocate<I, V>(total: i64) -> Result<impl FnOnce(I) -> Allocate, PipeError>
where
    I: IntoIterator<Item = Entry<V>>,
{
    if total < 0 {
        return Err(PipeError::invalid_config(
            "allocate",
            "total must not be negative",
        ));
    }
    Ok(move |source: I| {
        let slots: Vec<Key> = source.into_iter().map(|(key, _)| key).collect();
        let prefix = vec![0; slots.len().saturating_sub(1)];
        Allocate {
            slots,
            total,
            prefix,
            index: 0,
            done: false,
        }
    })
}

/// Iterator behind [`allocate`].
///
/// `prefix` holds the counts of all slots but the last; the last slot is
/// always the remainder, so advancing the prefix like an odometer bounded
/// by the running sum visits every allocation exactly once.
#[derive(Debug)]
pub struct Allocate {
    slots: Vec<Key>,
    total: i64,
    prefix: Vec<i64>,
    index: i64,
    done: bool,
}

impl Allocate {
    fn current(&self) -> OrderedMap<i64> {
        let mut allocation = OrderedMap::with_capacity(self.slots.len());
        let mut used = 0;
        for (slot, count) in self.slots.iter().zip(&self.prefix) {
            allocation.insert(slot.clone(), *count);
            used += count;
        }
        if let Some(last) = self.slots.last() {
            allocation.insert(last.clone(), self.total - used);
        }
        allocation
    }

    fn advance(&mut self) {
        let mut used: i64 = self.prefix.iter().sum();
        for position in (0..self.prefix.len()).rev() {
            if used + 1 <= self.total {
                self.prefix[position] += 1;
                for later in &mut self.prefix[position + 1..] {
                    *later = 0;
                }
                return;
            }
            used -= self.prefix[position];
        }
        self.done = true;
    }
}

impl Iterator for Allocate {
    type Item = Entry<OrderedMap<i64>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.slots.is_empty() {
            self.done = true;
            if self.total == 0 {
                let key = Key::Int(self.index);
                return Some((key, OrderedMap::new()));
            }
            return None;
        }
        let allocation = self.current();
        let key = Key::Int(self.index);
        self.index += 1;
        self.advance();
        Some((key, allocation))
    }
}
