use std::{collections::HashMap, hash::Hash};

use crate::{
    KV,
    adapters::{Convert, ConvertKey, ConvertValue, FilterKey, FilterValue},
    collect::{Groups, OrderedGroups, OrderedResolve, Resolve, resolve},
    kv::{key_of, value_of},
};

use super::{Loop, assert_loop};

/// Key/value operators, available on every [`Loop`] of `(K, V)` pairs.
///
/// A key/value loop is an ordinary loop whose elements are pairs; it is usually created by
/// [`key_by()`](Loop::key_by) or [`zip()`](Loop::zip). Everything a [`Loop`] can do still applies.
///
/// # Examples
///
/// ```
/// use seqflow::{prelude::*, pull};
///
/// let stock = [("apple", 3), ("pear", 0), ("plum", 7)];
///
/// let available = pull::of(stock).filter_value(|&n| n > 0).keys().to_vec();
/// assert_eq!(available, ["apple", "plum"]);
/// ```
pub trait KvLoop<K, V>: Loop<Item = (K, V)> {
    /// Creates a loop of the keys.
    #[inline]
    #[allow(clippy::type_complexity)]
    fn keys(self) -> Convert<Self, fn((K, V)) -> K>
    where
        Self: Sized,
    {
        assert_loop(Convert::new(self, key_of as fn((K, V)) -> K))
    }

    /// Creates a loop of the values.
    #[inline]
    #[allow(clippy::type_complexity)]
    fn values(self) -> Convert<Self, fn((K, V)) -> V>
    where
        Self: Sized,
    {
        assert_loop(Convert::new(self, value_of as fn((K, V)) -> V))
    }

    /// Creates a loop of [`KV`] pairs, for when the pair itself should be stored.
    #[inline]
    #[allow(clippy::type_complexity)]
    fn pairs(self) -> Convert<Self, fn((K, V)) -> KV<K, V>>
    where
        Self: Sized,
    {
        assert_loop(Convert::new(
            self,
            <KV<K, V> as From<(K, V)>>::from as fn((K, V)) -> KV<K, V>,
        ))
    }

    /// Creates a loop that only yields the pairs whose key satisfies a predicate.
    #[inline]
    fn filter_key<P>(self, pred: P) -> FilterKey<Self, P>
    where
        Self: Sized,
        P: FnMut(&K) -> bool,
    {
        assert_loop(FilterKey::new(self, pred))
    }

    /// Creates a loop that only yields the pairs whose value satisfies a predicate.
    #[inline]
    fn filter_value<P>(self, pred: P) -> FilterValue<Self, P>
    where
        Self: Sized,
        P: FnMut(&V) -> bool,
    {
        assert_loop(FilterValue::new(self, pred))
    }

    /// Creates a loop that converts the keys and keeps the values.
    #[inline]
    fn convert_key<F, R>(self, f: F) -> ConvertKey<Self, F>
    where
        Self: Sized,
        F: FnMut(K) -> R,
    {
        assert_loop(ConvertKey::new(self, f))
    }

    /// Creates a loop that converts the values and keeps the keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqflow::{prelude::*, pull};
    ///
    /// let doubled = pull::of([("a", 1), ("b", 2)]).convert_value(|n| n * 2).to_map();
    /// assert_eq!(doubled["b"], 4);
    /// ```
    #[inline]
    fn convert_value<F, R>(self, f: F) -> ConvertValue<Self, F>
    where
        Self: Sized,
        F: FnMut(V) -> R,
    {
        assert_loop(ConvertValue::new(self, f))
    }

    /// Collects the pairs into a [`HashMap`]. A later pair replaces an earlier one of the same key.
    #[inline]
    fn to_map(self) -> HashMap<K, V>
    where
        Self: Sized,
        K: Eq + Hash,
    {
        self.feed(HashMap::new())
    }

    /// Collects the pairs into a [`HashMap`] like [`to_map()`](KvLoop::to_map),
    /// and also returns the keys in first-seen order.
    #[inline]
    fn to_map_ordered(self) -> (Vec<K>, HashMap<K, V>)
    where
        Self: Sized,
        K: Eq + Hash + Clone,
    {
        self.feed(OrderedResolve::new(resolve::last_wins))
    }

    /// Groups the values by key. Values of the same key stay in loop order;
    /// the enumeration order of the keys is unspecified.
    #[inline]
    fn to_groups(self) -> HashMap<K, Vec<V>>
    where
        Self: Sized,
        K: Eq + Hash,
    {
        self.feed(Groups::new())
    }

    /// Groups the values by key, and also returns the keys in first-seen order.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqflow::{prelude::*, pull};
    ///
    /// let (keys, groups) = pull::range(0, 6).key_by(|n| n % 3).to_groups_ordered();
    ///
    /// assert_eq!(keys, [0, 1, 2]);
    /// assert_eq!(groups[&1], [1, 4]);
    /// ```
    #[inline]
    fn to_groups_ordered(self) -> (Vec<K>, HashMap<K, Vec<V>>)
    where
        Self: Sized,
        K: Eq + Hash + Clone,
    {
        self.feed(OrderedGroups::new())
    }

    /// Collects the pairs into a [`HashMap`], combining the values of duplicate keys
    /// with a resolver. See [`collect::resolve`](crate::collect::resolve) for the contract
    /// and the common policies.
    #[inline]
    fn to_map_resolv<F, R>(self, resolve: F) -> HashMap<K, R>
    where
        Self: Sized,
        K: Eq + Hash,
        F: FnMut(&K, Option<R>, V) -> R,
    {
        self.feed(Resolve::new(resolve))
    }

    /// Like [`to_map_resolv()`](KvLoop::to_map_resolv), and also returns the keys in first-seen order.
    #[inline]
    fn to_map_resolv_ordered<F, R>(self, resolve: F) -> (Vec<K>, HashMap<K, R>)
    where
        Self: Sized,
        K: Eq + Hash + Clone,
        F: FnMut(&K, Option<R>, V) -> R,
    {
        self.feed(OrderedResolve::new(resolve))
    }
}

impl<K, V, L> KvLoop<K, V> for L where L: Loop<Item = (K, V)> {}

#[cfg(test)]
mod tests {
    use crate::{prelude::*, pull};

    #[test]
    fn to_map_keeps_the_last_value() {
        let map = pull::of([("a", 1), ("b", 2), ("a", 3)]).to_map();

        assert_eq!(map.len(), 2);
        assert_eq!(map["a"], 3);
    }

    #[test]
    fn to_map_ordered_keeps_first_seen_key_order() {
        let (keys, map) = pull::of([("z", 1), ("a", 2), ("z", 3), ("m", 4)]).to_map_ordered();

        assert_eq!(keys, ["z", "a", "m"]);
        assert_eq!(map["z"], 3);
    }

    #[test]
    fn grouping_by_parity() {
        let groups = pull::of([1, 1, 2, 4, 3, 1]).key_by(|n| n % 2 == 0).to_groups();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[&false], [1, 1, 3, 1]);
        assert_eq!(groups[&true], [2, 4]);
    }

    #[test]
    fn resolver_ordered() {
        let (keys, totals) = pull::of(["x", "y", "x", "x"])
            .key_by(|s| s.to_string())
            .convert_value(|_| 1)
            .to_map_resolv_ordered(crate::collect::resolve::sum);

        assert_eq!(keys, ["x", "y"]);
        assert_eq!(totals["x"], 3);
        assert_eq!(totals["y"], 1);
    }
}

#[cfg(test)]
mod proptests {
    use std::collections::HashMap;

    use itertools::Itertools;
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;

    use crate::{prelude::*, pull};

    proptest! {
        #[test]
        fn to_groups_matches_itertools(nums in propvec(any::<i16>(), ..60)) {
            let expected: HashMap<i16, Vec<i16>> =
                nums.iter().map(|&n| (n.rem_euclid(5), n)).into_group_map();

            prop_assert_eq!(pull::of(nums).key_by(|n| n.rem_euclid(5)).to_groups(), expected);
        }

        #[test]
        fn ordered_keys_match_itertools_unique(nums in propvec(0..20_u8, ..60)) {
            let expected: Vec<u8> = nums.iter().map(|n| n % 7).unique().collect();

            let (keys, groups) = pull::of(nums.clone()).group_by_ordered(|n| n % 7);

            prop_assert_eq!(&keys, &expected);
            prop_assert_eq!(groups.values().map(Vec::len).sum::<usize>(), nums.len());
        }
    }
}
