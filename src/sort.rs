//! Stable multi-key sorting.
//!
//! A composite key is a tuple of 1 to 6 [`Ordered`] values. Two keys compare lexicographically,
//! position by position, stopping at the first position that is not equal. Elements with equal
//! keys keep their input order.
//!
//! [`sorted`] accepts any composite key tuple. [`sorted1`] to [`sorted6`] fix the arity, which
//! keeps call sites explicit about how many keys take part in the ordering.

use std::cmp::Ordering;

use crate::ordered::{compare, Ordered};

/// A fixed size tuple of ordered keys, compared lexicographically.
pub trait CompositeKey {
    /// Number of significant key positions.
    const LEN: usize;

    /// Compares the key at `pos` (0 based) of `self` with the one of `other`.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= Self::LEN`.
    fn compare_at(&self, other: &Self, pos: usize) -> Ordering;

    /// Lexicographic comparison over all `LEN` positions, short circuiting at the first
    /// non-equal position.
    #[inline]
    fn compare_keys(&self, other: &Self) -> Ordering {
        for pos in 0..Self::LEN {
            match self.compare_at(other, pos) {
                Ordering::Equal => {}
                ord => return ord,
            }
        }

        Ordering::Equal
    }
}

macro_rules! composite_key_impl {
    ($len:literal; $($pos:tt => $key:ident),+) => {
        impl<$($key: Ordered),+> CompositeKey for ($($key,)+) {
            const LEN: usize = $len;

            #[inline]
            fn compare_at(&self, other: &Self, pos: usize) -> Ordering {
                match pos {
                    $($pos => compare(&self.$pos, &other.$pos),)+
                    _ => panic!("key position {pos} out of range for {} keys", Self::LEN),
                }
            }
        }
    };
}

composite_key_impl!(1; 0 => K1);
composite_key_impl!(2; 0 => K1, 1 => K2);
composite_key_impl!(3; 0 => K1, 1 => K2, 2 => K3);
composite_key_impl!(4; 0 => K1, 1 => K2, 2 => K3, 3 => K4);
composite_key_impl!(5; 0 => K1, 1 => K2, 2 => K3, 3 => K4, 4 => K5);
composite_key_impl!(6; 0 => K1, 1 => K2, 2 => K3, 3 => K4, 4 => K5, 5 => K6);

/// Returns the elements of `items` sorted by the composite key `keys` extracts from each one.
///
/// `keys` is called exactly once per element, in input order. The sort is stable and `items`
/// itself is left untouched: pass `&slice` to get a `Vec<&T>` back, or an owned collection to
/// get the elements themselves.
///
/// Runs in *O*(*n* \* log(*n*)) key comparisons and allocates one key per element.
///
/// # Panics
///
/// Panics if two keys at the same position have different representation kinds, see
/// [`compare`](crate::compare). With statically typed tuples this can only happen through
/// [`OrderedRepr`](crate::OrderedRepr) keys.
pub fn sorted<I, T, K, F>(items: I, mut keys: F) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    K: CompositeKey,
    F: FnMut(&T) -> K,
{
    let mut decorated = items
        .into_iter()
        .map(|item| (keys(&item), item))
        .collect::<Vec<_>>();

    tracing::trace!(len = decorated.len(), keys = K::LEN, "composite key sort");

    // slice::sort_by is a stable merge sort, ties keep their decorated order.
    decorated.sort_by(|(a, _), (b, _)| a.compare_keys(b));

    decorated.into_iter().map(|(_, item)| item).collect()
}

/// Sorts `items` by a single key. See [`sorted`].
pub fn sorted1<I, T, K1, F>(items: I, mut key: F) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    K1: Ordered,
    F: FnMut(&T) -> K1,
{
    sorted(items, |item| (key(item),))
}

macro_rules! sorted_n_impl {
    ($n:literal; $($key:ident),+) => {
        paste::paste! {
            #[doc = concat!(
                "Sorts `items` by ", stringify!($n), " keys, in priority order. See [`sorted`]."
            )]
            pub fn [<sorted $n>]<I, T, $($key,)+ F>(items: I, keys: F) -> Vec<T>
            where
                I: IntoIterator<Item = T>,
                $($key: Ordered,)+
                F: FnMut(&T) -> ($($key,)+),
            {
                sorted(items, keys)
            }
        }
    };
}

sorted_n_impl!(2; K1, K2);
sorted_n_impl!(3; K1, K2, K3);
sorted_n_impl!(4; K1, K2, K3, K4);
sorted_n_impl!(5; K1, K2, K3, K4, K5);
sorted_n_impl!(6; K1, K2, K3, K4, K5, K6);
