use std::{collections::HashMap, hash::Hash};

use crate::{
    KV,
    adapters::{Convert, ConvertKey, ConvertValue, FilterKey, FilterValue},
    collect::{Groups, OrderedGroups, OrderedResolve, Partial, Resolve, resolve},
    kv::{key_of, value_of},
};

use super::{BreakLoop, assert_break_loop};

type Ordered<K, M> = (Vec<K>, M);

/// Key/value operators, available on every [`BreakLoop`] of `(K, V)` pairs.
///
/// They mirror [`KvLoop`](crate::pull::KvLoop); the collecting ones stop on the first error
/// and return what they had built so far inside a [`Partial`].
///
/// # Examples
///
/// ```
/// use seqflow::{prelude::*, fallible};
///
/// let lines = ["a=1", "b=2", "a=3", "broken", "c=4"];
///
/// let partial = fallible::from_results(lines.map(|line| line.split_once('=').ok_or(line)))
///     .convert_value(|v| v.parse::<i32>().unwrap_or(0))
///     .try_to_groups()
///     .unwrap_err();
///
/// assert_eq!(partial.error, "broken");
/// assert_eq!(partial.gathered["a"], [1, 3]);
/// assert!(!partial.gathered.contains_key("c"));
/// ```
pub trait KvBreakLoop<K, V>: BreakLoop<Item = (K, V)> {
    /// Creates a loop of the keys.
    #[inline]
    #[allow(clippy::type_complexity)]
    fn keys(self) -> Convert<Self, fn((K, V)) -> K>
    where
        Self: Sized,
    {
        assert_break_loop(Convert::new(self, key_of as fn((K, V)) -> K))
    }

    /// Creates a loop of the values.
    #[inline]
    #[allow(clippy::type_complexity)]
    fn values(self) -> Convert<Self, fn((K, V)) -> V>
    where
        Self: Sized,
    {
        assert_break_loop(Convert::new(self, value_of as fn((K, V)) -> V))
    }

    /// Creates a loop of [`KV`] pairs.
    #[inline]
    #[allow(clippy::type_complexity)]
    fn pairs(self) -> Convert<Self, fn((K, V)) -> KV<K, V>>
    where
        Self: Sized,
    {
        assert_break_loop(Convert::new(
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
        assert_break_loop(FilterKey::new(self, pred))
    }

    #[inline]
    fn filter_value<P>(self, pred: P) -> FilterValue<Self, P>
    where
        Self: Sized,
        P: FnMut(&V) -> bool,
    {
        assert_break_loop(FilterValue::new(self, pred))
    }

    #[inline]
    fn convert_key<F, R>(self, f: F) -> ConvertKey<Self, F>
    where
        Self: Sized,
        F: FnMut(K) -> R,
    {
        assert_break_loop(ConvertKey::new(self, f))
    }

    #[inline]
    fn convert_value<F, R>(self, f: F) -> ConvertValue<Self, F>
    where
        Self: Sized,
        F: FnMut(V) -> R,
    {
        assert_break_loop(ConvertValue::new(self, f))
    }

    /// Collects the pairs into a [`HashMap`]. A later pair replaces an earlier one of the same key.
    #[inline]
    fn try_to_map(self) -> Result<HashMap<K, V>, Partial<HashMap<K, V>, Self::Error>>
    where
        Self: Sized,
        K: Eq + Hash,
    {
        self.try_feed(HashMap::new())
    }

    /// Like [`try_to_map()`](KvBreakLoop::try_to_map), and also returns the keys in first-seen order.
    #[inline]
    #[allow(clippy::type_complexity)]
    fn try_to_map_ordered(
        self,
    ) -> Result<Ordered<K, HashMap<K, V>>, Partial<Ordered<K, HashMap<K, V>>, Self::Error>>
    where
        Self: Sized,
        K: Eq + Hash + Clone,
    {
        self.try_feed(OrderedResolve::new(resolve::last_wins))
    }

    /// Groups the values by key. Values of the same key stay in loop order.
    #[inline]
    #[allow(clippy::type_complexity)]
    fn try_to_groups(self) -> Result<HashMap<K, Vec<V>>, Partial<HashMap<K, Vec<V>>, Self::Error>>
    where
        Self: Sized,
        K: Eq + Hash,
    {
        self.try_feed(Groups::new())
    }

    /// Like [`try_to_groups()`](KvBreakLoop::try_to_groups), and also returns the keys in
    /// first-seen order.
    #[inline]
    #[allow(clippy::type_complexity)]
    fn try_to_groups_ordered(
        self,
    ) -> Result<
        Ordered<K, HashMap<K, Vec<V>>>,
        Partial<Ordered<K, HashMap<K, Vec<V>>>, Self::Error>,
    >
    where
        Self: Sized,
        K: Eq + Hash + Clone,
    {
        self.try_feed(OrderedGroups::new())
    }

    /// Collects the pairs into a [`HashMap`], combining the values of duplicate keys
    /// with a resolver. See [`collect::resolve`](crate::collect::resolve).
    #[inline]
    fn try_to_map_resolv<F, R>(
        self,
        resolve: F,
    ) -> Result<HashMap<K, R>, Partial<HashMap<K, R>, Self::Error>>
    where
        Self: Sized,
        K: Eq + Hash,
        F: FnMut(&K, Option<R>, V) -> R,
    {
        self.try_feed(Resolve::new(resolve))
    }

    /// Like [`try_to_map_resolv()`](KvBreakLoop::try_to_map_resolv), and also returns the keys
    /// in first-seen order.
    #[inline]
    #[allow(clippy::type_complexity)]
    fn try_to_map_resolv_ordered<F, R>(
        self,
        resolve: F,
    ) -> Result<Ordered<K, HashMap<K, R>>, Partial<Ordered<K, HashMap<K, R>>, Self::Error>>
    where
        Self: Sized,
        K: Eq + Hash + Clone,
        F: FnMut(&K, Option<R>, V) -> R,
    {
        self.try_feed(OrderedResolve::new(resolve))
    }
}

impl<K, V, B> KvBreakLoop<K, V> for B where B: BreakLoop<Item = (K, V)> {}

#[cfg(test)]
mod tests {
    use crate::{collect::resolve, fallible, prelude::*};

    #[test]
    fn ordered_map_survives_an_error() {
        let partial = fallible::from_results([Ok(("b", 1)), Ok(("a", 2)), Ok(("b", 3)), Err(())])
            .try_to_map_ordered()
            .unwrap_err();

        let (keys, map) = partial.gathered;
        assert_eq!(keys, ["b", "a"]);
        assert_eq!(map["b"], 3);
    }

    #[test]
    fn resolver_without_errors() {
        let totals = fallible::from_results([Ok::<_, ()>(("x", 2)), Ok(("y", 1)), Ok(("x", 5))])
            .try_to_map_resolv(resolve::sum)
            .unwrap();

        assert_eq!(totals["x"], 7);
        assert_eq!(totals["y"], 1);
    }

    #[test]
    fn keys_and_values() {
        let pairs = || fallible::from_results([Ok::<_, ()>((1, 'a')), Ok((2, 'b'))]);

        assert_eq!(pairs().keys().try_to_vec(), Ok(vec![1, 2]));
        assert_eq!(pairs().values().try_to_vec(), Ok(vec!['a', 'b']));
    }
}
