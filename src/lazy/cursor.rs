//! One-element lookahead over an erased value stream.
//!
//! [`Cursor`] is the building block [`zip`](crate::lazy::zip) uses to walk
//! several sources of differing concrete types in lockstep: each cursor
//! owns a boxed iterator plus the element currently under it, so callers
//! can inspect exhaustion without consuming.

/// A peekable, type-erased stream of values.
pub struct Cursor<V> {
    source: Box<dyn Iterator<Item = V>>,
    current: Option<V>,
    primed: bool,
}

impl<V> Cursor<V> {
    /// Wraps an arbitrary value source. No element is pulled until the
    /// cursor is primed.
    pub fn new<I>(source: I) -> Self
    where
        I: IntoIterator<Item = V>,
        I::IntoIter: 'static,
    {
        Self {
            source: Box::new(source.into_iter()),
            current: None,
            primed: false,
        }
    }

    /// Wraps a keyed source, discarding the keys.
    pub fn from_entries<K, I>(source: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        I::IntoIter: 'static,
        K: 'static,
        V: 'static,
    {
        Self::new(source.into_iter().map(|(_, value)| value))
    }

    /// Pulls the first element if none has been pulled yet.
    pub fn prime(&mut self) {
        if !self.primed {
            self.current = self.source.next();
            self.primed = true;
        }
    }

    /// Whether an element currently sits under the cursor. Call after
    /// [`prime`](Self::prime).
    pub fn has_more(&self) -> bool {
        self.current.is_some()
    }

    /// Moves the cursor to the next element.
    pub fn advance(&mut self) {
        self.current = self.source.next();
        self.primed = true;
    }

    /// Takes the element under the cursor, leaving it empty until the next
    /// [`advance`](Self::advance).
    pub fn take_current(&mut self) -> Option<V> {
        self.current.take()
    }

    /// The element under the cursor, by reference.
    pub fn current(&self) -> Option<&V> {
        self.current.as_ref()
    }
}

impl<V> std::fmt::Debug for Cursor<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("primed", &self.primed)
            .field("exhausted", &!self.has_more())
            .finish_non_exhaustive()
    }
}
