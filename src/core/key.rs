//! The tagged key type of ordered sequences.
//!
//! A sequence key is either a (possibly sparse, possibly negative) integer
//! or a string. Making the union an explicit enum lets key-preservation
//! contracts be checked by the compiler instead of at runtime.

use std::fmt;

/// A sequence key: an integer or a string.
///
/// Iteration order of a sequence is significant and keys are unique within
/// one sequence, but integer keys are not required to be contiguous.
///
/// # Examples
///
/// ```rust
/// use pipework::core::Key;
///
/// let positional = Key::from(3);
/// let named = Key::from("total");
///
/// assert_ne!(positional, named);
/// assert_eq!(Key::from(3), Key::Int(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    /// An integer key.
    Int(i64),
    /// A string key.
    Str(String),
}

impl Key {
    /// Returns `true` if this is an integer key.
    #[inline]
    pub const fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    /// Returns `true` if this is a string key.
    #[inline]
    pub const fn is_str(&self) -> bool {
        matches!(self, Self::Str(_))
    }
}

impl From<i64> for Key {
    #[inline]
    fn from(index: i64) -> Self {
        Self::Int(index)
    }
}

impl From<i32> for Key {
    #[inline]
    fn from(index: i32) -> Self {
        Self::Int(i64::from(index))
    }
}

impl From<usize> for Key {
    /// Converts a positional index into an integer key.
    ///
    /// # Panics
    ///
    /// Panics if the index does not fit into `i64`. Positions that large are
    /// not reachable for in-memory sequences.
    #[inline]
    fn from(index: usize) -> Self {
        Self::Int(i64::try_from(index).expect("sequence position exceeds i64"))
    }
}

impl From<&str> for Key {
    #[inline]
    fn from(name: &str) -> Self {
        Self::Str(name.to_owned())
    }
}

impl From<String> for Key {
    #[inline]
    fn from(name: String) -> Self {
        Self::Str(name)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(index) => write!(formatter, "{index}"),
            Self::Str(name) => write!(formatter, "{name}"),
        }
    }
}

/// A single keyed element of a sequence.
///
/// This is the item type of every lazy sequence in the library.
pub type Entry<V> = (Key, V);
