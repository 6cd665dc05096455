//! Pipeline application.
//!
//! A pipeline is a value followed by a series of unary transformers, applied
//! left to right. The combinators elsewhere in this crate are factories that
//! produce such transformers; [`pipe!`](crate::pipe) is the application
//! mechanism that strings them together:
//!
//! ```
//! use pipework::{eager, pipe, seq};
//!
//! let result = pipe!(
//!     seq![3, 1, 2],
//!     eager::sort(),
//!     eager::map(|n: i32| n * 10),
//! );
//! assert_eq!(result, seq![10, 20, 30]);
//! ```

mod pipe_macro;

pub use crate::pipe;
