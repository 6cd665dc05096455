//! Recursively nested ordered mappings.

use super::ordered_map::OrderedMap;

/// A value inside a nested ordered mapping: either a leaf or a sub-mapping.
///
/// [`map_recursive`](crate::eager::map_recursive) walks this structure,
/// applying its callback to leaves only.
///
/// # Examples
///
/// ```rust
/// use pipework::core::Nested;
/// use pipework::seq;
///
/// let tree = seq! {
///     "a" => Nested::Leaf(1),
///     "b" => Nested::Map(seq! { "c" => Nested::Leaf(2) }),
/// };
/// assert_eq!(tree.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nested<V> {
    /// A leaf value.
    Leaf(V),
    /// A nested sub-mapping.
    Map(OrderedMap<Nested<V>>),
}

impl<V> Nested<V> {
    /// Returns `true` if this node is a leaf.
    #[inline]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }
}

impl<V> From<V> for Nested<V> {
    #[inline]
    fn from(value: V) -> Self {
        Self::Leaf(value)
    }
}
