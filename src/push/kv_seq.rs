use std::{collections::HashMap, hash::Hash};

use crate::{
    KV,
    adapters::{Convert, ConvertKey, ConvertValue, FilterKey, FilterValue},
    collect::{Groups, OrderedGroups, OrderedResolve, Resolve, resolve},
    kv::{key_of, value_of},
};

use super::{Seq, assert_seq};

/// Key/value operators, available on every [`Seq`] of `(K, V)` pairs.
///
/// They mirror [`KvLoop`](crate::pull::KvLoop), with terminal operations borrowing the
/// sequence like every other terminal of [`Seq`].
///
/// # Examples
///
/// ```
/// use seqflow::{prelude::*, push};
///
/// let mut by_len = push::from_iter(["fig", "kiwi", "pear", "plum"]).key_by(|s| s.len());
///
/// let (lens, groups) = by_len.to_groups_ordered();
/// assert_eq!(lens, [3, 4]);
/// assert_eq!(groups[&4], ["kiwi", "pear", "plum"]);
///
/// // Driving again starts over.
/// assert_eq!(by_len.to_map()[&3], "fig");
/// ```
pub trait KvSeq<K, V>: Seq<Item = (K, V)> {
    /// Creates a sequence of the keys.
    #[inline]
    #[allow(clippy::type_complexity)]
    fn keys(self) -> Convert<Self, fn((K, V)) -> K>
    where
        Self: Sized,
    {
        assert_seq(Convert::new(self, key_of as fn((K, V)) -> K))
    }

    /// Creates a sequence of the values.
    #[inline]
    #[allow(clippy::type_complexity)]
    fn values(self) -> Convert<Self, fn((K, V)) -> V>
    where
        Self: Sized,
    {
        assert_seq(Convert::new(self, value_of as fn((K, V)) -> V))
    }

    /// Creates a sequence of [`KV`] pairs.
    #[inline]
    #[allow(clippy::type_complexity)]
    fn pairs(self) -> Convert<Self, fn((K, V)) -> KV<K, V>>
    where
        Self: Sized,
    {
        assert_seq(Convert::new(
            self,
            <KV<K, V> as From<(K, V)>>::from as fn((K, V)) -> KV<K, V>,
        ))
    }

    #[inline]
    fn filter_key<P>(self, pred: P) -> FilterKey<Self, P>
    where
        Self: Sized,
        P: FnMut(&K) -> bool,
    {
        assert_seq(FilterKey::new(self, pred))
    }

    #[inline]
    fn filter_value<P>(self, pred: P) -> FilterValue<Self, P>
    where
        Self: Sized,
        P: FnMut(&V) -> bool,
    {
        assert_seq(FilterValue::new(self, pred))
    }

    #[inline]
    fn convert_key<F, R>(self, f: F) -> ConvertKey<Self, F>
    where
        Self: Sized,
        F: FnMut(K) -> R,
    {
        assert_seq(ConvertKey::new(self, f))
    }

    #[inline]
    fn convert_value<F, R>(self, f: F) -> ConvertValue<Self, F>
    where
        Self: Sized,
        F: FnMut(V) -> R,
    {
        assert_seq(ConvertValue::new(self, f))
    }

    /// Collects the pairs into a [`HashMap`]. A later pair replaces an earlier one of the same key.
    #[inline]
    fn to_map(&mut self) -> HashMap<K, V>
    where
        Self: Sized,
        K: Eq + Hash,
    {
        self.feed(HashMap::new())
    }

    /// Like [`to_map()`](KvSeq::to_map), and also returns the keys in first-seen order.
    #[inline]
    fn to_map_ordered(&mut self) -> (Vec<K>, HashMap<K, V>)
    where
        Self: Sized,
        K: Eq + Hash + Clone,
    {
        self.feed(OrderedResolve::new(resolve::last_wins))
    }

    /// Groups the values by key. Values of the same key stay in sequence order;
    /// the enumeration order of the keys is unspecified.
    #[inline]
    fn to_groups(&mut self) -> HashMap<K, Vec<V>>
    where
        Self: Sized,
        K: Eq + Hash,
    {
        self.feed(Groups::new())
    }

    /// Groups the values by key, and also returns the keys in first-seen order.
    #[inline]
    fn to_groups_ordered(&mut self) -> (Vec<K>, HashMap<K, Vec<V>>)
    where
        Self: Sized,
        K: Eq + Hash + Clone,
    {
        self.feed(OrderedGroups::new())
    }

    /// Collects the pairs into a [`HashMap`], combining the values of duplicate keys
    /// with a resolver. See [`collect::resolve`](crate::collect::resolve).
    #[inline]
    fn to_map_resolv<F, R>(&mut self, resolve: F) -> HashMap<K, R>
    where
        Self: Sized,
        K: Eq + Hash,
        F: FnMut(&K, Option<R>, V) -> R,
    {
        self.feed(Resolve::new(resolve))
    }

    /// Like [`to_map_resolv()`](KvSeq::to_map_resolv), and also returns the keys in first-seen order.
    #[inline]
    fn to_map_resolv_ordered<F, R>(&mut self, resolve: F) -> (Vec<K>, HashMap<K, R>)
    where
        Self: Sized,
        K: Eq + Hash + Clone,
        F: FnMut(&K, Option<R>, V) -> R,
    {
        self.feed(OrderedResolve::new(resolve))
    }
}

impl<K, V, S> KvSeq<K, V> for S where S: Seq<Item = (K, V)> {}

#[cfg(test)]
mod tests {
    use crate::{collect::resolve, prelude::*, push};

    #[test]
    fn resolvers_on_a_push_sequence() {
        let mut votes = push::from_iter([("red", 1), ("blue", 1), ("red", 1)]);

        let first = votes.to_map_resolv(resolve::first_wins);
        let (keys, counts) = votes.to_map_resolv_ordered(resolve::sum);

        assert_eq!(first.len(), 2);
        assert_eq!(keys, ["red", "blue"]);
        assert_eq!(counts["red"], 2);
    }

    #[test]
    fn keys_values_pairs() {
        let mut seq = push::from_iter([(1, 'x'), (2, 'y')]);

        assert_eq!(seq.by_ref().keys().to_vec(), [1, 2]);
        assert_eq!(seq.by_ref().values().to_vec(), ['x', 'y']);
        assert_eq!(seq.by_ref().pairs().tail(), Some(KV::new(2, 'y')));
    }
}
