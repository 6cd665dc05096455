//! Core value types shared by every combinator.
//!
//! - [`Key`]: the tagged int-or-string key of an ordered sequence
//! - [`OrderedMap`]: an ordered associative sequence with unique keys
//! - [`Nested`]: a recursively nested ordered mapping
//! - [`PipeError`]: the library's error type

mod error;
mod key;
mod nested;
mod ordered_map;

pub use error::PipeError;
pub use key::{Entry, Key};
pub use nested::Nested;
pub use ordered_map::{IntoIter, Iter, OrderedMap};
