//! Error types for combinator factories and argument dispatch.

use std::fmt;

/// Errors raised by the combinator library.
///
/// Configuration errors are raised synchronously at factory-call time, never
/// lazily during consumption: a factory that can fail returns
/// `Result<Transformer, PipeError>` and no transformer exists for an invalid
/// configuration.
///
/// # Examples
///
/// ```rust
/// use pipework::core::{OrderedMap, PipeError};
/// use pipework::lazy;
///
/// let factory = lazy::window::<OrderedMap<i32>, i32>(0, false);
/// assert!(matches!(factory, Err(PipeError::InvalidConfig { .. })));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipeError {
    /// A factory argument was outside its documented domain.
    InvalidConfig {
        /// The factory that rejected its configuration.
        factory: &'static str,
        /// Why the configuration was rejected.
        reason: String,
    },
    /// `apply` received a sequence mixing integer and string keys, so neither
    /// positional nor named dispatch is possible.
    MixedArgumentKeys,
}

impl PipeError {
    /// Builds a [`PipeError::InvalidConfig`] for `factory`.
    pub fn invalid_config(factory: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            factory,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for PipeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { factory, reason } => {
                write!(formatter, "{factory}: invalid configuration: {reason}")
            }
            Self::MixedArgumentKeys => {
                write!(
                    formatter,
                    "apply: argument sequence mixes integer and string keys"
                )
            }
        }
    }
}

impl std::error::Error for PipeError {}
