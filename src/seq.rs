//! Lazy combinators over single value and key/value pair sequences.
//!
//! A pair sequence is any iterator of `(K, V)` tuples. Nothing is evaluated until the returned
//! iterator is driven, and evaluation stops as soon as the consumer stops pulling.

/// Applies `iteratee` to every item.
pub fn map<I, R, F>(seq: I, iteratee: F) -> impl Iterator<Item = R>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> R,
{
    seq.into_iter().map(iteratee)
}

/// Folds every pair into a single value.
pub fn map2_to1<I, K, V, R, F>(seq: I, mut iteratee: F) -> impl Iterator<Item = R>
where
    I: IntoIterator<Item = (K, V)>,
    F: FnMut(K, V) -> R,
{
    seq.into_iter().map(move |(k, v)| iteratee(k, v))
}

/// Expands every item into a pair.
pub fn map1_to2<I, K, V, F>(seq: I, iteratee: F) -> impl Iterator<Item = (K, V)>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> (K, V),
{
    seq.into_iter().map(iteratee)
}

/// Maps every pair to a new pair.
pub fn map2<I, K1, V1, K2, V2, F>(seq: I, mut iteratee: F) -> impl Iterator<Item = (K2, V2)>
where
    I: IntoIterator<Item = (K1, V1)>,
    F: FnMut(K1, V1) -> (K2, V2),
{
    seq.into_iter().map(move |(k, v)| iteratee(k, v))
}

/// Keeps the items `predicate` accepts.
pub fn filter<I, P>(seq: I, predicate: P) -> impl Iterator<Item = I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    seq.into_iter().filter(predicate)
}

/// Keeps the pairs `predicate` accepts.
pub fn filter2<I, K, V, P>(seq: I, mut predicate: P) -> impl Iterator<Item = (K, V)>
where
    I: IntoIterator<Item = (K, V)>,
    P: FnMut(&K, &V) -> bool,
{
    seq.into_iter().filter(move |(k, v)| predicate(k, v))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn single_sequences() {
        let doubled = map(1..=4, |v| v * 2).collect::<Vec<_>>();
        assert_eq!(doubled, [2, 4, 6, 8]);

        let odd = filter(1..=6, |v| v % 2 == 1).collect::<Vec<_>>();
        assert_eq!(odd, [1, 3, 5]);
    }

    #[test]
    fn pair_sequences() {
        let ages = BTreeMap::from([("alice", 30), ("bob", 25)]);

        let lines = map2_to1(&ages, |name, age| format!("{name}={age}")).collect::<Vec<_>>();
        assert_eq!(lines, ["alice=30", "bob=25"]);

        let swapped = map2(&ages, |name, age| (*age, *name)).collect::<BTreeMap<_, _>>();
        assert_eq!(swapped, BTreeMap::from([(25, "bob"), (30, "alice")]));

        let adults = filter2(&ages, |_, age| **age >= 30).collect::<Vec<_>>();
        assert_eq!(adults, [(&"alice", &30)]);

        let lens = map1_to2(["a", "bcd"], |s| (s, s.len())).collect::<BTreeMap<_, _>>();
        assert_eq!(lens, BTreeMap::from([("a", 1), ("bcd", 3)]));
    }

    #[test]
    fn stops_when_consumer_stops() {
        let mut seen = Vec::new();
        let first_two = map(1..100, |v| {
            seen.push(v);
            v
        })
        .filter(|v| v % 2 == 0)
        .take(2)
        .collect::<Vec<_>>();

        assert_eq!(first_two, [2, 4]);
        assert_eq!(seen, [1, 2, 3, 4]);
    }
}
