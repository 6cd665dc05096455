//! Text combinators: splitting, joining, literal replacement, and chunking.
//!
//! Pattern-based combinators live in [`regex`](self::regex) (re-exported
//! here).

mod regex;

pub use self::regex::{MatchOrder, match_all, matches, replace_all};

use crate::core::{Key, OrderedMap, PipeError};

/// Returns a transformer that splits a string on a literal separator.
///
/// Parts are keyed `0..`; empty segments are preserved.
///
/// # Errors
///
/// Fails at factory time if `separator` is empty.
///
/// # Examples
///
/// ```rust
/// use pipework::{pipe, seq, text};
///
/// let parts = pipe!("a,,b", text::split(",").unwrap());
/// assert_eq!(parts, seq!["a".to_owned(), String::new(), "b".to_owned()]);
/// ```
pub fn split<S>(
    separator: impl Into<String>,
) -> Result<impl Fn(S) -> OrderedMap<String>, PipeError>
where
    S: AsRef<str>,
{
    let separator = separator.into();
    if separator.is_empty() {
        return Err(PipeError::invalid_config(
            "split",
            "separator must not be empty",
        ));
    }
    Ok(move |subject: S| {
        OrderedMap::from_values(subject.as_ref().split(separator.as_str()).map(str::to_owned))
    })
}

/// Returns a transformer that splits a string on a literal separator with
/// a part limit.
///
/// A positive limit produces at most `limit` parts, the last keeping the
/// unsplit remainder. A negative limit splits fully and then drops the
/// last `|limit|` parts. A zero limit behaves as 1.
///
/// # Errors
///
/// Fails at factory time if `separator` is empty.
pub fn split_with_limit<S>(
    separator: impl Into<String>,
    limit: i64,
) -> Result<impl Fn(S) -> OrderedMap<String>, PipeError>
where
    S: AsRef<str>,
{
    let separator = separator.into();
    if separator.is_empty() {
        return Err(PipeError::invalid_config(
            "split",
            "separator must not be empty",
        ));
    }
    Ok(move |subject: S| {
        let subject = subject.as_ref();
        let parts: Vec<String> = if limit > 0 {
            let limit = usize::try_from(limit).unwrap_or(usize::MAX);
            subject
                .splitn(limit, separator.as_str())
                .map(str::to_owned)
                .collect()
        } else if limit == 0 {
            vec![subject.to_owned()]
        } else {
            let mut parts: Vec<String> = subject
                .split(separator.as_str())
                .map(str::to_owned)
                .collect();
            let dropped = usize::try_from(-limit).unwrap_or(usize::MAX);
            parts.truncate(parts.len().saturating_sub(dropped));
            parts
        };
        OrderedMap::from_values(parts)
    })
}

/// Returns a transformer that joins a sequence's values with `separator`,
/// in iteration order.
pub fn join<V>(separator: impl Into<String>) -> impl Fn(OrderedMap<V>) -> String
where
    V: std::fmt::Display,
{
    let separator = separator.into();
    move |subject| {
        let mut joined = String::new();
        for (position, value) in subject.values().enumerate() {
            if position > 0 {
                joined.push_str(&separator);
            }
            joined.push_str(&value.to_string());
        }
        joined
    }
}

/// Returns a transformer that replaces every literal occurrence of
/// `search` with `replacement`.
pub fn replace<S>(
    search: impl Into<String>,
    replacement: impl Into<String>,
) -> impl Fn(S) -> String
where
    S: AsRef<str>,
{
    let search = search.into();
    let replacement = replacement.into();
    move |subject: S| subject.as_ref().replace(&search, &replacement)
}

/// Returns a transformer that applies a list of literal
/// `(search, replacement)` pairs in order, each to the result of the
/// previous.
pub fn replace_pairs<S>(pairs: Vec<(String, String)>) -> impl Fn(S) -> String
where
    S: AsRef<str>,
{
    move |subject: S| {
        let mut result = subject.as_ref().to_owned();
        for (search, replacement) in &pairs {
            result = result.replace(search, replacement);
        }
        result
    }
}

/// Returns a predicate that reports whether the string begins with
/// `prefix`, case-sensitively. An empty prefix always holds.
pub fn starts_with<S>(prefix: impl Into<String>) -> impl Fn(&S) -> bool
where
    S: AsRef<str>,
{
    let prefix = prefix.into();
    move |subject| subject.as_ref().starts_with(&prefix)
}

/// Returns a transformer that lazily cuts a string into chunks of `size`
/// characters.
///
/// Each chunk is keyed by the byte offset at which it starts; the final
/// chunk may be short and an empty string yields nothing.
///
/// # Errors
///
/// Fails at factory time if `size` is zero.
pub fn chunks(size: usize) -> Result<impl Fn(String) -> Chunks, PipeError> {
    if size == 0 {
        return Err(PipeError::invalid_config(
            "chunks",
            "size must be at least 1",
        ));
    }
    Ok(move |subject: String| Chunks {
        remaining: subject,
        size,
        offset: 0,
    })
}

/// Iterator behind [`chunks`].
#[derive(Debug)]
pub struct Chunks {
    remaining: String,
    size: usize,
    offset: usize,
}

impl Iterator for Chunks {
    type Item = (Key, String);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining.is_empty() {
            return None;
        }
        let boundary = self
            .remaining
            .char_indices()
            .nth(self.size)
            .map_or(self.remaining.len(), |(index, _)| index);
        let rest = self.remaining.split_off(boundary);
        let chunk = std::mem::replace(&mut self.remaining, rest);
        let key = Key::from(self.offset);
        self.offset += boundary;
        Some((key, chunk))
    }
}
