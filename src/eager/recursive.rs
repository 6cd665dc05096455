//! Recursive structural mapping over nested ordered mappings.

use crate::core::{Key, Nested, OrderedMap};

/// Returns a transformer that applies `transform` to every leaf of a nested
/// mapping, rebuilding the structure with identical keys at every level.
///
/// The callback runs for leaves only, never for sub-mappings and never for
/// empty input.
///
/// # Examples
///
/// ```rust
/// use pipework::core::Nested;
/// use pipework::eager;
/// use pipework::{pipe, seq};
///
/// let tree = seq! {
///     "a" => Nested::Leaf(1),
///     "b" => Nested::Map(seq! { "c" => Nested::Leaf(2) }),
/// };
/// let scaled = pipe!(tree, eager::map_recursive(|v| v * 10));
/// assert_eq!(
///     scaled,
///     seq! {
///         "a" => Nested::Leaf(10),
///         "b" => Nested::Map(seq! { "c" => Nested::Leaf(20) }),
///     }
/// );
/// ```
pub fn map_recursive<V, U, F>(transform: F) -> impl Fn(OrderedMap<Nested<V>>) -> OrderedMap<Nested<U>>
where
    F: Fn(V) -> U,
{
    move |subject| walk(subject, &transform)
}

fn walk<V, U, F>(subject: OrderedMap<Nested<V>>, transform: &F) -> OrderedMap<Nested<U>>
where
    F: Fn(V) -> U,
{
    subject
        .into_iter()
        .map(|(key, node)| {
            let node = match node {
                Nested::Leaf(value) => Nested::Leaf(transform(value)),
                Nested::Map(inner) => Nested::Map(walk(inner, transform)),
            };
            (key, node)
        })
        .collect()
}

/// Path-aware variant of [`map_recursive`]: the callback additionally
/// receives the accumulated key path from the root down to and including
/// the leaf's own key.
///
/// # Examples
///
/// ```rust
/// use pipework::core::{Key, Nested};
/// use pipework::eager;
/// use pipework::{pipe, seq};
///
/// let tree = seq! { "b" => Nested::Map(seq! { "c" => Nested::Leaf(2) }) };
/// let tagged = pipe!(
///     tree,
///     eager::map_recursive_with_path(|v, path: &[Key]| format!("{v}@{}", path.len())),
/// );
/// assert_eq!(
///     tagged,
///     seq! { "b" => Nested::Map(seq! { "c" => Nested::Leaf(String::from("2@2")) }) }
/// );
/// ```
pub fn map_recursive_with_path<V, U, F>(
    transform: F,
) -> impl Fn(OrderedMap<Nested<V>>) -> OrderedMap<Nested<U>>
where
    F: Fn(V, &[Key]) -> U,
{
    move |subject| {
        let mut path = Vec::new();
        walk_with_path(subject, &transform, &mut path)
    }
}

fn walk_with_path<V, U, F>(
    subject: OrderedMap<Nested<V>>,
    transform: &F,
    path: &mut Vec<Key>,
) -> OrderedMap<Nested<U>>
where
    F: Fn(V, &[Key]) -> U,
{
    subject
        .into_iter()
        .map(|(key, node)| {
            path.push(key.clone());
            let node = match node {
                Nested::Leaf(value) => Nested::Leaf(transform(value, path)),
                Nested::Map(inner) => Nested::Map(walk_with_path(inner, transform, path)),
            };
            path.pop();
            (key, node)
        })
        .collect()
}
