//! Lazy enumeration of subsets and orderings of a keyed sequence.

use crate::core::{Entry, Key, OrderedMap};

/// Lazily enumerates the power set of the sequence.
///
/// The source is materialized once, so a one-shot source is fine. Subsets
/// come out in mask-counting order, the empty subset first and the full
/// set last, with the first element toggling fastest. Each subset is an
/// `OrderedMap` keeping the elements' original keys and relative order.
///
/// # Examples
///
/// ```rust
/// use pipework::{lazy, pipe, seq};
///
/// let subsets = pipe!(seq! { "a" => 1, "b" => 2 }, lazy::combinations_all, lazy::collect);
/// assert_eq!(
///     subsets,
///     seq![
///         seq!(),
///         seq! { "a" => 1 },
///         seq! { "b" => 2 },
///         seq! { "a" => 1, "b" => 2 },
///     ],
/// );
/// ```
pub fn combinations_all<I, V>(source: I) -> Combinations<V>
where
    I: IntoIterator<Item = Entry<V>>,
    V: Clone,
{
    let entries: Vec<Entry<V>> = source.into_iter().collect();
    let mask = vec![false; entries.len()];
    Combinations {
        entries,
        mask,
        index: 0,
        done: false,
    }
}

/// Iterator behind [`combinations_all`].
#[derive(Debug)]
pub struct Combinations<V> {
    entries: Vec<Entry<V>>,
    mask: Vec<bool>,
    index: i64,
    done: bool,
}

impl<V> Iterator for Combinations<V>
where
    V: Clone,
{
    type Item = Entry<OrderedMap<V>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let subset: OrderedMap<V> = self
            .entries
            .iter()
            .zip(&self.mask)
            .filter(|(_, included)| **included)
            .map(|((key, value), _)| (key.clone(), value.clone()))
            .collect();
        let key = Key::Int(self.index);
        self.index += 1;

        // Binary increment over the mask, lowest position first.
        let mut carried = true;
        for included in &mut self.mask {
            if *included {
                *included = false;
            } else {
                *included = true;
                carried = false;
                break;
            }
        }
        if carried {
            self.done = true;
        }
        Some((key, subset))
    }
}

/// Lazily enumerates every ordering of the sequence's values.
///
/// The source is materialized once. Orderings are produced depth-first,
/// fixing each remaining value left to right, so the original order comes
/// first. Output values are `Vec<V>` keyed `0..`; an empty sequence yields
/// a single empty ordering.
pub fn permutations<I, V>(source: I) -> Permutations<V>
where
    I: IntoIterator<Item = Entry<V>>,
    V: Clone,
{
    let values: Vec<V> = source.into_iter().map(|(_, value)| value).collect();
    Permutations {
        stack: vec![Frame {
            remaining: values,
            next_choice: 0,
            emitted: false,
        }],
        path: Vec::new(),
        index: 0,
    }
}

#[derive(Debug)]
struct Frame<V> {
    remaining: Vec<V>,
    next_choice: usize,
    emitted: bool,
}

/// Iterator behind [`permutations`].
#[derive(Debug)]
pub struct Permutations<V> {
    stack: Vec<Frame<V>>,
    path: Vec<V>,
    index: i64,
}

impl<V> Iterator for Permutations<V>
where
    V: Clone,
{
    type Item = Entry<Vec<V>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.last_mut()?;
            if frame.remaining.is_empty() {
                if !frame.emitted {
                    frame.emitted = true;
                    let key = Key::Int(self.index);
                    self.index += 1;
                    return Some((key, self.path.clone()));
                }
                self.stack.pop();
                self.path.pop();
                continue;
            }
            if frame.next_choice < frame.remaining.len() {
                let choice = frame.next_choice;
                frame.next_choice += 1;
                let mut remaining = frame.remaining.clone();
                self.path.push(remaining.remove(choice));
                self.stack.push(Frame {
                    remaining,
                    next_choice: 0,
                    emitted: false,
                });
            } else {
                self.stack.pop();
                self.path.pop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lazy::{collect, take};
    use crate::seq;
    use rstest::rstest;

    #[rstest]
    fn power_set_of_three_elements() {
        let result = collect(combinations_all(seq![1, 2, 3]));
        assert_eq!(result.len(), 8);
        assert_eq!(result.get(&0.into()), Some(&seq!()));
        assert_eq!(result.get(&1.into()), Some(&seq! { 0 => 1 }));
        assert_eq!(result.get(&2.into()), Some(&seq! { 1 => 2 }));
        assert_eq!(result.get(&3.into()), Some(&seq! { 0 => 1, 1 => 2 }));
        assert_eq!(result.get(&7.into()), Some(&seq! { 0 => 1, 1 => 2, 2 => 3 }));
    }

    #[rstest]
    fn power_set_of_empty_sequence_is_the_empty_subset() {
        let result = collect(combinations_all(OrderedMap::<i32>::new()));
        assert_eq!(result, seq![seq!()]);
    }

    #[rstest]
    fn permutations_start_from_the_original_order() {
        let result = collect(permutations(seq!['a', 'b', 'c']));
        assert_eq!(
            result,
            seq![
                vec!['a', 'b', 'c'],
                vec!['a', 'c', 'b'],
                vec!['b', 'a', 'c'],
                vec!['b', 'c', 'a'],
                vec!['c', 'a', 'b'],
                vec!['c', 'b', 'a'],
            ],
        );
    }

    #[rstest]
    fn empty_sequence_has_one_empty_permutation() {
        let result = collect(permutations(OrderedMap::<i32>::new()));
        assert_eq!(result, seq![Vec::<i32>::new()]);
    }

    #[rstest]
    fn permutations_are_produced_on_demand() {
        let result = collect(take(2)(permutations(seq![1, 2, 3, 4])));
        assert_eq!(result, seq![vec![1, 2, 3, 4], vec![1, 2, 4, 3]]);
    }
}
