//! # pipework
//!
//! Pipeline combinators for ordered keyed sequences.
//!
//! ## Overview
//!
//! Every combinator in this crate is a *factory*: calling it with its
//! configuration returns a unary transformer, and a pipeline is a value
//! threaded through such transformers left to right with [`pipe!`].
//! Sequences are [`OrderedMap`](crate::core::OrderedMap)s, ordered
//! associations from integer-or-string [`Key`](crate::core::Key)s to
//! values. Transformers take them by value, so every step produces a
//! fresh result and never mutates its input in place.
//!
//! The crate is organized by evaluation strategy and subject type:
//!
//! - **[`core`]**: the sequence model: `Key`, `OrderedMap`, `Nested`,
//!   and the error type.
//! - **[`eager`]**: transformers that consume the whole sequence at once
//!   (map, filter, sort, fold, transpose, recursive map, ...).
//! - **[`lazy`]**: pull-based iterator combinators that do no work until
//!   consumed (windows, zip, flatten, allocations, combinatorics, ...).
//! - **[`scalar`]**: branching, constants, taps, and argument dispatch
//!   over single values.
//! - **[`text`]**: splitting, joining, replacement, chunking, and regex
//!   matching over strings.
//! - **[`compose`]**: the [`pipe!`] application macro.
//!
//! ## Example
//!
//! ```rust
//! use pipework::{eager, lazy, pipe, seq};
//!
//! let result = pipe!(
//!     seq! { "a" => 3, "b" => 1, "c" => 2 },
//!     eager::sort(),
//!     lazy::map(|n: i32| n * 10),
//!     lazy::take(2),
//!     lazy::collect,
//! );
//! assert_eq!(result, seq![10, 20]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod compose;
pub mod core;
pub mod eager;
pub mod lazy;
pub mod scalar;
pub mod text;

/// Prelude module for convenient imports.
///
/// Re-exports the sequence model and the error type; combinator factories
/// stay behind their module names (`eager::map`, `lazy::take`, ...) so
/// call sites read unambiguously.
///
/// # Usage
///
/// ```rust
/// use pipework::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::{Entry, Key, Nested, OrderedMap, PipeError};
    pub use crate::scalar::Arguments;
    pub use crate::text::MatchOrder;
}
