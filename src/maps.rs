//! Building and merging hash maps from slices and other maps.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Lazily pairs every value with the key `to_key` derives from it.
pub fn all_by<I, K, V, F>(items: I, mut to_key: F) -> impl Iterator<Item = (K, V)>
where
    I: IntoIterator<Item = V>,
    F: FnMut(&V) -> K,
{
    items.into_iter().map(move |v| (to_key(&v), v))
}

/// Clones `base` and applies every map of `overrides` on top, later maps winning on shared keys.
///
/// A `None` base behaves like an empty map.
pub fn merge<'a, K, V, S, O>(base: Option<&HashMap<K, V, S>>, overrides: O) -> HashMap<K, V, S>
where
    K: Eq + Hash + Clone + 'a,
    V: Clone + 'a,
    S: BuildHasher + Clone + Default + 'a,
    O: IntoIterator<Item = &'a HashMap<K, V, S>>,
{
    let mut merged = base.cloned().unwrap_or_default();

    for o in overrides {
        merged.extend(o.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    merged
}

/// Like [`merge`], but the overrides are slices of values keyed by `to_key`.
///
/// Within and across slices, later values win on shared keys.
pub fn merge_from_slice<'a, K, V, S, F, O>(
    base: Option<&HashMap<K, V, S>>,
    mut to_key: F,
    overrides: O,
) -> HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone + 'a,
    S: BuildHasher + Clone + Default,
    F: FnMut(&V) -> K,
    O: IntoIterator<Item = &'a [V]>,
{
    let mut merged = base.cloned().unwrap_or_default();

    for o in overrides {
        merged.extend(all_by(o.iter().cloned(), &mut to_key));
    }

    merged
}

/// Maps every element to its index in `slice`. Duplicates keep the index of the last occurrence.
pub fn slice_to_index_map<T>(slice: &[T]) -> HashMap<T, usize>
where
    T: Eq + Hash + Clone,
{
    slice_to_index_map_by(slice, T::clone)
}

/// Maps the key of every element to the element's index. Duplicate keys keep the last index.
pub fn slice_to_index_map_by<K, V, F>(slice: &[V], mut to_key: F) -> HashMap<K, usize>
where
    K: Eq + Hash,
    F: FnMut(&V) -> K,
{
    let mut result = HashMap::with_capacity(slice.len());

    for (i, v) in slice.iter().enumerate() {
        result.insert(to_key(v), i);
    }

    result
}

/// Collects the `Some` results of `iteratee` over all entries of `map`.
///
/// The output order follows the map's iteration order, which is unspecified for a `HashMap`.
pub fn filter_map_to_slice<M, K, V, R, F>(map: M, mut iteratee: F) -> Vec<R>
where
    M: IntoIterator<Item = (K, V)>,
    F: FnMut(K, V) -> Option<R>,
{
    map.into_iter().filter_map(|(k, v)| iteratee(k, v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm<K: Eq + Hash, V, const N: usize>(entries: [(K, V); N]) -> HashMap<K, V> {
        HashMap::from(entries)
    }

    #[test]
    fn merge_maps() {
        let base = hm([("a", 1), ("b", 2)]);
        let override1 = hm([("b", 3), ("c", 4)]);
        let override2 = hm([("c", 5), ("d", 6)]);

        assert_eq!(
            merge(Some(&base), [&override1]),
            hm([("a", 1), ("b", 3), ("c", 4)])
        );
        assert_eq!(
            merge(Some(&base), [&override1, &override2]),
            hm([("a", 1), ("b", 3), ("c", 5), ("d", 6)])
        );
        assert_eq!(merge(None, [&override1]), hm([("b", 3), ("c", 4)]));
        assert_eq!(merge(Some(&base), [] as [&HashMap<&str, i32>; 0]), base);
        assert_eq!(base, hm([("a", 1), ("b", 2)]));
    }

    #[derive(Clone, Debug, PartialEq)]
    struct Item {
        name: &'static str,
        value: i32,
    }

    const fn item(name: &'static str, value: i32) -> Item {
        Item { name, value }
    }

    #[test]
    fn merge_slices() {
        let base = hm([("a", item("a", 1)), ("b", item("b", 2))]);
        let override1 = [item("b", 3), item("c", 4)];
        let override2 = [item("c", 5), item("d", 6)];
        let key = |v: &Item| v.name;

        assert_eq!(
            merge_from_slice(Some(&base), key, [&override1[..]]),
            hm([("a", item("a", 1)), ("b", item("b", 3)), ("c", item("c", 4))])
        );
        assert_eq!(
            merge_from_slice(Some(&base), key, [&override1[..], &override2[..]]),
            hm([
                ("a", item("a", 1)),
                ("b", item("b", 3)),
                ("c", item("c", 5)),
                ("d", item("d", 6)),
            ])
        );
        assert_eq!(
            merge_from_slice(None::<&HashMap<_, _>>, key, [&override1[..]]),
            hm([("b", item("b", 3)), ("c", item("c", 4))])
        );
        assert_eq!(merge_from_slice(Some(&base), key, [&[] as &[Item]]), base);
    }

    #[test]
    fn index_maps() {
        assert_eq!(
            slice_to_index_map(&["a", "b", "c", "a"]),
            hm([("a", 3), ("b", 1), ("c", 2)])
        );
        assert!(slice_to_index_map::<String>(&[]).is_empty());

        let items = [(1, "a"), (2, "b"), (3, "c"), (1, "d")];
        assert_eq!(
            slice_to_index_map_by(&items, |i| i.0),
            hm([(1, 3), (2, 1), (3, 2)])
        );
    }

    #[test]
    fn filter_map_entries() {
        let m = hm([("a", 1), ("b", 2), ("c", 3), ("d", 4)]);
        let mut evens = filter_map_to_slice(&m, |k, v| (v % 2 == 0).then(|| format!("{k}_even")));
        evens.sort();

        assert_eq!(evens, ["b_even", "d_even"]);
        assert!(filter_map_to_slice(&HashMap::<&str, i32>::new(), |_, v| Some(*v)).is_empty());
    }

    #[test]
    fn all_by_is_lazy() {
        let mut calls = 0;
        let first = all_by(vec![10, 20, 30], |v| {
            calls += 1;
            v / 10
        })
        .next();

        assert_eq!(first, Some((1, 10)));
        assert_eq!(calls, 1);
    }
}
