//! Lazy sequence combinators.
//!
//! Every combinator here is an explicit pull-based iterator: a state struct
//! implementing [`Iterator`] over [`Entry`](crate::core::Entry) items. No
//! element is produced and no user callback runs until the consumer asks,
//! and consuming a prefix of a derived sequence consumes only the
//! corresponding prefix of its source(s).
//!
//! Lazy sequences are one-shot values: ownership moves into the combinator
//! that consumes them, so a sequence cannot be observed from two call sites
//! at once. This is the single-pass cursor constraint of a generator, enforced by
//! the type system.

mod adapters;
mod allocate;
mod combinatorics;
mod cursor;
mod flatten;
mod source;
mod window;
mod zip;

pub use adapters::{Chunk, Filter, Map, Take, all, any, chunk, filter, map, nth, reduce, take};
pub use allocate::{Allocate, allocate};
pub use combinatorics::{Combinations, Permutations, combinations_all, permutations};
pub use cursor::Cursor;
pub use flatten::{Flatten, flatten};
pub use source::{Indexed, Iterate, Ticker, indexed, iterate, ticker};
pub use window::{Window, window};
pub use zip::{Zip, zip};

use crate::core::{Entry, OrderedMap};

/// Materializes a keyed sequence into an [`OrderedMap`], applying the
/// insert collision rule (last write wins, first position kept).
///
/// # Examples
///
/// ```rust
/// use pipework::{lazy, pipe, seq};
///
/// let collected = pipe!(
///     seq! { "a" => 1, "b" => 2 },
///     lazy::map(|v| v * 10),
///     lazy::collect,
/// );
/// assert_eq!(collected, seq! { "a" => 10, "b" => 20 });
/// ```
pub fn collect<V, I>(source: I) -> OrderedMap<V>
where
    I: IntoIterator<Item = Entry<V>>,
{
    source.into_iter().collect()
}

/// Returns the first value of a sequence, consuming exactly one element.
/// `None` for an empty sequence.
pub fn first<V, I>(source: I) -> Option<V>
where
    I: IntoIterator<Item = Entry<V>>,
{
    source.into_iter().next().map(|(_, value)| value)
}
