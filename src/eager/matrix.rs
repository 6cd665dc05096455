//! Matrix-shaped combinators: transposition and positional row zipping.

use std::collections::VecDeque;

use crate::core::{Key, OrderedMap};

/// Returns a transformer that transposes a mapping of rows into a mapping
/// of columns.
///
/// Column keys are enumerated in first-seen order while scanning rows top
/// to bottom; a cell missing from a row is filled with `None`. Each output
/// column maps every original row key to its cell.
///
/// # Examples
///
/// ```rust
/// use pipework::eager;
/// use pipework::{pipe, seq};
///
/// let columns = pipe!(
///     seq![seq![1, 2, 3], seq![4, 5, 6]],
///     eager::transpose(),
/// );
/// assert_eq!(
///     columns,
///     seq![
///         seq![Some(1), Some(4)],
///         seq![Some(2), Some(5)],
///         seq![Some(3), Some(6)],
///     ]
/// );
/// ```
pub fn transpose<V>() -> impl Fn(OrderedMap<OrderedMap<V>>) -> OrderedMap<OrderedMap<Option<V>>> {
    |subject| {
        let mut column_keys: Vec<Key> = Vec::new();
        for (_, row) in &subject {
            for column in row.keys() {
                if !column_keys.contains(column) {
                    column_keys.push(column.clone());
                }
            }
        }

        let mut rows: Vec<(Key, OrderedMap<V>)> = subject.into_iter().collect();
        let mut result = OrderedMap::with_capacity(column_keys.len());
        for column in column_keys {
            let mut transposed = OrderedMap::with_capacity(rows.len());
            for (row_key, row) in &mut rows {
                transposed.insert(row_key.clone(), row.remove(&column));
            }
            result.insert(column, transposed);
        }
        result
    }
}

/// Positionally zips the inner sequences: row `i` of the result holds the
/// `i`-th value of every inner sequence, padded with `None` to the longest
/// inner sequence. Keys are ignored on the way in and reindexed `0..` on
/// the way out.
fn zip_positional<V>(subject: OrderedMap<OrderedMap<V>>) -> Vec<Vec<Option<V>>> {
    let mut columns: Vec<VecDeque<V>> = subject
        .into_values()
        .map(|inner| inner.into_values().collect())
        .collect();
    let longest = columns.iter().map(VecDeque::len).max().unwrap_or(0);

    (0..longest)
        .map(|_| columns.iter_mut().map(VecDeque::pop_front).collect())
        .collect()
}

/// Returns a transformer that zips the inner sequences positionally into
/// rows of `Option<V>` cells.
///
/// # Examples
///
/// ```rust
/// use pipework::eager;
/// use pipework::{pipe, seq};
///
/// let rows = pipe!(seq![seq![1, 2, 3], seq![10]], eager::zip_rows());
/// assert_eq!(
///     rows,
///     seq![
///         vec![Some(1), Some(10)],
///         vec![Some(2), None],
///         vec![Some(3), None],
///     ]
/// );
/// ```
pub fn zip_rows<V>() -> impl Fn(OrderedMap<OrderedMap<V>>) -> OrderedMap<Vec<Option<V>>> {
    |subject| OrderedMap::from_values(zip_positional(subject))
}

/// Returns a transformer that zips the inner sequences positionally and
/// maps each padded row through `transform`.
///
/// # Examples
///
/// ```rust
/// use pipework::eager;
/// use pipework::{pipe, seq};
///
/// let sums = pipe!(
///     seq![seq![1, 2, 3], seq![10, 20, 30]],
///     eager::zip_map(|row: Vec<Option<i32>>| row.into_iter().flatten().sum::<i32>()),
/// );
/// assert_eq!(sums, seq![11, 22, 33]);
/// ```
pub fn zip_map<V, U, F>(transform: F) -> impl Fn(OrderedMap<OrderedMap<V>>) -> OrderedMap<U>
where
    F: Fn(Vec<Option<V>>) -> U,
{
    move |subject| OrderedMap::from_values(zip_positional(subject).into_iter().map(&transform))
}
