//! Shared correctness suite for multi-key stable sorts.
//!
//! A sort under test orders [`Row`]s by their first [`KeySort::key_count`] keys. The suite checks
//! every result against the standard library's stable sort over the same key prefix.

/// Most keys a [`Row`] carries.
pub const MAX_KEYS: usize = 6;

/// Sort input: a fixed set of integer keys and the row's position in the unsorted input.
///
/// `idx` is never part of the sort key, equal-keyed rows must keep ascending `idx` after sorting.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub keys: [i32; MAX_KEYS],
    pub idx: usize,
}

pub trait KeySort {
    fn name() -> String;

    /// How many leading keys of a [`Row`] the sort compares, in `1..=MAX_KEYS`.
    fn key_count() -> usize;

    /// Returns `rows` stably ordered by their first `key_count()` keys, lexicographically.
    ///
    /// Implementations may map keys to other kinds, as long as the mapping preserves `i32` order.
    fn sort_rows(rows: &[Row]) -> Vec<Row>;
}

pub mod patterns;
