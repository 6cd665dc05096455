//! Eager sequence combinators.
//!
//! Every factory here returns a transformer over a fully materialized
//! [`OrderedMap`](crate::core::OrderedMap) and produces a new structure;
//! the subject is taken by value and never mutated in place. Keys are
//! preserved, sparse integer keys included, unless the operation
//! documents reindexing.

mod basic;
mod fold;
mod matrix;
mod recursive;
mod sort;

pub use basic::{chunk, filter, flatten, map, nth, slice, unique, without};
pub use fold::{all, any, reduce, reduce_until, sum};
pub use matrix::{transpose, zip_map, zip_rows};
pub use recursive::{map_recursive, map_recursive_with_path};
pub use sort::{rsort, sort, sort_by, sort_by_preserving};
