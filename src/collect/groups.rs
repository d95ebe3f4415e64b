use std::{
    collections::{HashMap, hash_map::Entry},
    hash::Hash,
    ops::ControlFlow,
};

use super::Collector;

/// A collector that appends the value of every collected `(K, V)` pair to the bucket of its key.
///
/// Values of the same key stay in the order they were collected. The order in which the keys
/// of the output are enumerated is whatever [`HashMap`] gives; use [`OrderedGroups`] when the
/// first-seen order of the keys matters.
///
/// # Examples
///
/// ```
/// use seqflow::{prelude::*, collect::Groups};
///
/// let mut groups = Groups::new();
/// let _ = groups.collect_many([(false, 1), (false, 1), (true, 2), (true, 4), (false, 3)]);
///
/// let groups = groups.finish();
/// assert_eq!(groups[&false], [1, 1, 3]);
/// assert_eq!(groups[&true], [2, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct Groups<K, V> {
    groups: HashMap<K, Vec<V>>,
}

impl<K, V> Groups<K, V> {
    /// Creates a new instance of this collector, with no groups.
    #[inline]
    pub fn new() -> Self {
        Self {
            groups: HashMap::new(),
        }
    }
}

impl<K, V> Default for Groups<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V> Collector<(K, V)> for Groups<K, V> {
    type Output = HashMap<K, Vec<V>>;

    #[inline]
    fn collect(&mut self, (key, value): (K, V)) -> ControlFlow<()> {
        self.groups.entry(key).or_default().push(value);
        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(self) -> Self::Output {
        self.groups
    }
}

/// A collector like [`Groups`] that also records the order in which keys were first seen.
///
/// Its [`Output`](Collector::Output) is `(keys, groups)`, where `keys` lists every key of
/// `groups` exactly once, in first-seen order.
///
/// # Examples
///
/// ```
/// use seqflow::{prelude::*, collect::OrderedGroups};
///
/// let mut groups = OrderedGroups::new();
/// let _ = groups.collect_many([("b", 1), ("a", 2), ("b", 3)]);
///
/// let (keys, groups) = groups.finish();
/// assert_eq!(keys, ["b", "a"]);
/// assert_eq!(groups["b"], [1, 3]);
/// assert_eq!(groups["a"], [2]);
/// ```
#[derive(Debug, Clone)]
pub struct OrderedGroups<K, V> {
    order: Vec<K>,
    groups: HashMap<K, Vec<V>>,
}

impl<K, V> OrderedGroups<K, V> {
    /// Creates a new instance of this collector, with no groups.
    #[inline]
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            groups: HashMap::new(),
        }
    }
}

impl<K, V> Default for OrderedGroups<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone, V> Collector<(K, V)> for OrderedGroups<K, V> {
    type Output = (Vec<K>, HashMap<K, Vec<V>>);

    fn collect(&mut self, (key, value): (K, V)) -> ControlFlow<()> {
        match self.groups.entry(key) {
            Entry::Occupied(mut entry) => entry.get_mut().push(value),
            Entry::Vacant(entry) => {
                self.order.push(entry.key().clone());
                entry.insert(vec![value]);
            }
        }

        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(self) -> Self::Output {
        (self.order, self.groups)
    }
}

#[cfg(test)]
mod proptests {
    use itertools::Itertools;
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;

    use super::*;
    use crate::test_utils::proptest_collector;

    proptest! {
        #[test]
        fn groups_are_consistent_across_drivers(pairs in propvec((0..5_u8, any::<i32>()), ..60)) {
            let expected = pairs.iter().copied().into_group_map();
            proptest_collector(&pairs, Groups::new, &expected)?;
        }

        #[test]
        fn matches_into_group_map(pairs in propvec((0..5_u8, any::<i32>()), ..60)) {
            let mut groups = Groups::new();
            let _ = groups.collect_many(pairs.iter().copied());

            prop_assert_eq!(groups.finish(), pairs.iter().copied().into_group_map());
        }

        #[test]
        fn ordered_keys_are_first_seen(pairs in propvec((0..5_u8, any::<i32>()), ..60)) {
            let mut groups = OrderedGroups::new();
            let _ = groups.collect_many(pairs.iter().copied());
            let (keys, groups) = groups.finish();

            let expected_keys: Vec<u8> = pairs.iter().map(|&(key, _)| key).unique().collect();
            prop_assert_eq!(keys, expected_keys);
            prop_assert_eq!(groups, pairs.iter().copied().into_group_map());
        }
    }
}
