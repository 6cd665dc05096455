//! Pattern combinators over the `regex` crate.
//!
//! Patterns are compiled when the factory runs, so a malformed pattern is
//! a configuration error and never surfaces during a pipeline.

use ::regex::{Captures, Regex};

use crate::core::{Key, OrderedMap, PipeError};

/// How [`match_all`] arranges its hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOrder {
    /// Outer keys are capture groups, inner sequences list every hit of
    /// that group.
    ByPattern,
    /// Outer keys are hit indices, inner maps are per-hit group maps.
    BySet,
}

fn compile(factory: &'static str, pattern: &str) -> Result<Regex, PipeError> {
    Regex::new(pattern).map_err(|error| PipeError::invalid_config(factory, error.to_string()))
}

fn group_map(expression: &Regex, captures: &Captures<'_>) -> OrderedMap<String> {
    let mut groups = OrderedMap::new();
    for (index, name) in expression.capture_names().enumerate() {
        let text = captures
            .get(index)
            .map_or_else(String::new, |found| found.as_str().to_owned());
        if index > 0 {
            if let Some(name) = name {
                groups.insert(Key::from(name), text.clone());
            }
        }
        groups.insert(Key::from(index), text);
    }
    groups
}

/// Returns a transformer that matches a string against `pattern` once.
///
/// The result maps group `0` to the full match, then each capture group
/// to its text: named groups appear under their name and their number,
/// unnamed groups under their number only. Groups that did not
/// participate map to the empty string. No match produces an empty map.
///
/// # Errors
///
/// Fails at factory time if `pattern` is malformed.
///
/// # Examples
///
/// ```rust
/// use pipework::{pipe, seq, text};
///
/// let groups = pipe!(
///     "id=42",
///     text::matches(r"(?<name>\w+)=(\d+)").unwrap(),
/// );
/// assert_eq!(
///     groups,
///     seq! {
///         0 => "id=42".to_owned(),
///         "name" => "id".to_owned(),
///         1 => "id".to_owned(),
///         2 => "42".to_owned(),
///     },
/// );
/// ```
pub fn matches<S>(pattern: &str) -> Result<impl Fn(S) -> OrderedMap<String>, PipeError>
where
    S: AsRef<str>,
{
    let expression = compile("matches", pattern)?;
    Ok(move |subject: S| {
        expression
            .captures(subject.as_ref())
            .map_or_else(OrderedMap::new, |captures| group_map(&expression, &captures))
    })
}

/// Returns a transformer that matches a string against `pattern`
/// repeatedly and arranges all hits per `order`.
///
/// With [`MatchOrder::ByPattern`] the outer map is keyed per capture
/// group (named groups under name and number) and each inner sequence
/// lists that group's text for every hit, keyed `0..`. With
/// [`MatchOrder::BySet`] the outer map is keyed per hit `0..` and each
/// inner map is the hit's group map as in [`matches`]. No hits produce
/// the per-group skeleton of empty sequences in pattern order, or an
/// empty map in set order.
///
/// # Errors
///
/// Fails at factory time if `pattern` is malformed.
pub fn match_all<S>(
    pattern: &str,
    order: MatchOrder,
) -> Result<impl Fn(S) -> OrderedMap<OrderedMap<String>>, PipeError>
where
    S: AsRef<str>,
{
    let expression = compile("match_all", pattern)?;
    Ok(move |subject: S| {
        let subject = subject.as_ref();
        match order {
            MatchOrder::BySet => {
                let mut hits = OrderedMap::new();
                for captures in expression.captures_iter(subject) {
                    hits.push(group_map(&expression, &captures));
                }
                hits
            }
            MatchOrder::ByPattern => {
                let mut columns: Vec<OrderedMap<String>> =
                    vec![OrderedMap::new(); expression.captures_len()];
                for captures in expression.captures_iter(subject) {
                    for (index, column) in columns.iter_mut().enumerate() {
                        let text = captures
                            .get(index)
                            .map_or_else(String::new, |found| found.as_str().to_owned());
                        column.push(text);
                    }
                }
                let mut grouped = OrderedMap::new();
                for ((index, name), column) in
                    expression.capture_names().enumerate().zip(columns)
                {
                    if index > 0 {
                        if let Some(name) = name {
                            grouped.insert(Key::from(name), column.clone());
                        }
                    }
                    grouped.insert(Key::from(index), column);
                }
                grouped
            }
        }
    })
}

/// Returns a transformer that replaces every hit of `pattern` with
/// `replacement`. The replacement may reference capture groups with `$1`
/// or `$name`.
///
/// # Errors
///
/// Fails at factory time if `pattern` is malformed.
pub fn replace_all<S>(
    pattern: &str,
    replacement: impl Into<String>,
) -> Result<impl Fn(S) -> String, PipeError>
where
    S: AsRef<str>,
{
    let expression = compile("replace_all", pattern)?;
    let replacement = replacement.into();
    Ok(move |subject: S| {
        expression
            .replace_all(subject.as_ref(), replacement.as_str())
            .into_owned()
    })
}
