//! Slice predicates and lookups.

use std::collections::HashMap;
use std::hash::Hash;

use crate::maps;

/// Whether `f` maps every element of `slice` to the same value. An empty slice is uniform.
pub fn uniform_by<T, C, F>(slice: &[T], mut f: F) -> bool
where
    C: PartialEq,
    F: FnMut(&T) -> C,
{
    let Some((first, rest)) = slice.split_first() else {
        return true;
    };

    let first = f(first);
    rest.iter().all(|v| f(v) == first)
}

/// Maps every element to its index, last occurrence winning.
///
/// Same as [`maps::slice_to_index_map`].
pub fn index_map<T>(slice: &[T]) -> HashMap<T, usize>
where
    T: Eq + Hash + Clone,
{
    maps::slice_to_index_map(slice)
}
