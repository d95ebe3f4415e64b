use std::{
    collections::{HashMap, HashSet},
    hash::Hash,
};

use crate::{
    adapters::TryConvert,
    collect::{
        Addable, Collector, Count, First, ForEach, Groups, Last, OrderedGroups, OrderedResolve,
        Partial, Reduce, Resolve, Sum, any_item, resolve,
    },
};

use super::{Seq, assert_seq};

/// Fail-fast operators, available on every [`Seq`] of [`Result`]s.
///
/// The terminal operations stop the sequence at its first `Err` and return it along with
/// what they gathered before it, exactly like those of [`BreakLoop`](crate::fallible::BreakLoop).
///
/// # Examples
///
/// ```
/// use seqflow::{prelude::*, push};
///
/// let mut parsed = push::from_slice(&["1", "3", "5", "_7", "9", "11"])
///     .convert(|s| s.parse::<i32>());
///
/// let partial = parsed.try_to_vec().unwrap_err();
/// assert_eq!(partial.gathered, [1, 3, 5]);
/// ```
pub trait TrySeq<T, E>: Seq<Item = Result<T, E>> {
    /// Creates a sequence that converts the `Ok` elements with a fallible function and
    /// pushes the `Err` elements on unchanged.
    #[inline]
    fn try_convert<F, R>(self, f: F) -> TryConvert<Self, F>
    where
        Self: Sized,
        F: FnMut(T) -> Result<R, E>,
    {
        assert_seq(TryConvert::new(self, f))
    }

    /// Drives the `Ok` elements into a collector until either of them stops or an `Err` shows up.
    ///
    /// On an `Err`, the output of the collector so far comes back along with the error.
    fn try_feed<C>(&mut self, collector: C) -> Result<C::Output, Partial<C::Output, E>>
    where
        Self: Sized,
        C: Collector<T>,
    {
        let mut collector = collector;
        let mut failure = None;

        let _ = self.drive(|item| match item {
            Ok(item) => collector.collect(item),
            Err(error) => {
                failure = Some(error);
                std::ops::ControlFlow::Break(())
            }
        });

        match failure {
            None => Ok(collector.finish()),
            Some(error) => {
                log::debug!("push sequence stopped on an error, returning the partial output");
                Err(Partial::new(collector.finish(), error))
            }
        }
    }

    /// Collects the `Ok` elements into a [`Vec`], stopping at the first `Err`.
    #[inline]
    fn try_to_vec(&mut self) -> Result<Vec<T>, Partial<Vec<T>, E>>
    where
        Self: Sized,
    {
        self.try_feed(Vec::new())
    }

    /// Collects the `Ok` elements into a [`HashSet`], stopping at the first `Err`.
    #[inline]
    fn try_to_set(&mut self) -> Result<HashSet<T>, Partial<HashSet<T>, E>>
    where
        Self: Sized,
        T: Eq + Hash,
    {
        self.try_feed(HashSet::new())
    }

    /// Left-folds the `Ok` elements, seeded with the first one.
    #[inline]
    #[allow(clippy::type_complexity)]
    fn try_reduce<F>(&mut self, f: F) -> Result<Option<T>, Partial<Option<T>, E>>
    where
        Self: Sized,
        F: FnMut(T, T) -> T,
    {
        self.try_feed(Reduce::new(f))
    }

    /// Adds the `Ok` elements up, stopping at the first `Err`.
    #[inline]
    fn try_sum(&mut self) -> Result<T, Partial<T, E>>
    where
        Self: Sized,
        T: Addable,
    {
        self.try_feed(Sum::new())
    }

    /// Returns the first `Ok` element satisfying a predicate, unless an `Err` comes first.
    #[inline]
    fn try_first<P>(&mut self, pred: P) -> Result<Option<T>, E>
    where
        Self: Sized,
        P: FnMut(&T) -> bool,
    {
        self.try_feed(First::new(pred)).map_err(Partial::into_error)
    }

    /// Returns the first element, unless it is an `Err`.
    #[inline]
    fn try_head(&mut self) -> Result<Option<T>, E>
    where
        Self: Sized,
    {
        self.try_first(any_item)
    }

    /// Returns the last `Ok` element satisfying a predicate. The sequence is driven to its
    /// end or to its first `Err`.
    #[inline]
    #[allow(clippy::type_complexity)]
    fn try_last<P>(&mut self, pred: P) -> Result<Option<T>, Partial<Option<T>, E>>
    where
        Self: Sized,
        P: FnMut(&T) -> bool,
    {
        self.try_feed(Last::new(pred))
    }

    /// Returns the last element, or the last `Ok` one before the first `Err`.
    #[inline]
    #[allow(clippy::type_complexity)]
    fn try_tail(&mut self) -> Result<Option<T>, Partial<Option<T>, E>>
    where
        Self: Sized,
    {
        self.try_last(any_item)
    }

    /// Counts the `Ok` elements pushed before the end or the first `Err`.
    #[inline]
    fn try_count(&mut self) -> Result<usize, Partial<usize, E>>
    where
        Self: Sized,
    {
        self.try_feed(Count::new())
    }

    /// Tests whether any `Ok` element satisfies a predicate, stopping at the first that does.
    #[inline]
    fn try_any<P>(&mut self, pred: P) -> Result<bool, E>
    where
        Self: Sized,
        P: FnMut(&T) -> bool,
    {
        self.try_first(pred).map(|found| found.is_some())
    }

    /// Calls a function on every `Ok` element, stopping at the first `Err`.
    #[inline]
    fn try_for_each<F>(&mut self, f: F) -> Result<(), E>
    where
        Self: Sized,
        F: FnMut(T),
    {
        self.try_feed(ForEach::new(f)).map_err(Partial::into_error)
    }

    /// Groups the `Ok` elements by a key, stopping at the first `Err`.
    /// Elements of the same key stay in push order.
    #[inline]
    #[allow(clippy::type_complexity)]
    fn try_group_by<F, K>(
        &mut self,
        key: F,
    ) -> Result<HashMap<K, Vec<T>>, Partial<HashMap<K, Vec<T>>, E>>
    where
        Self: Sized,
        F: FnMut(&T) -> K,
        K: Eq + Hash,
    {
        let mut key = key;
        self.try_convert(|item| Ok((key(&item), item)))
            .try_feed(Groups::new())
    }
}

impl<T, E, S> TrySeq<T, E> for S where S: Seq<Item = Result<T, E>> {}

type Ordered<K, M> = (Vec<K>, M);

/// Fail-fast key/value terminals, available on every [`Seq`] of `Result<(K, V), E>`.
///
/// They mirror the collecting operators of [`KvBreakLoop`](crate::fallible::KvBreakLoop):
/// each of them stops at the first `Err` and returns it along with the map built so far.
///
/// # Examples
///
/// ```
/// use seqflow::{prelude::*, push};
///
/// let mut settings = push::from_slice(&["a=1", "b=2", "a=3", "broken", "c=4"])
///     .convert(|line| line.split_once('=').ok_or(*line));
///
/// let partial = settings.try_to_map().unwrap_err();
/// assert_eq!(partial.error, "broken");
/// assert_eq!(partial.gathered["a"], "3");
/// assert!(!partial.gathered.contains_key("c"));
/// ```
pub trait TryKvSeq<K, V, E>: Seq<Item = Result<(K, V), E>> {
    /// Collects the pairs into a [`HashMap`]. A later pair replaces an earlier one of the same key.
    #[inline]
    fn try_to_map(&mut self) -> Result<HashMap<K, V>, Partial<HashMap<K, V>, E>>
    where
        Self: Sized,
        K: Eq + Hash,
    {
        self.try_feed(HashMap::new())
    }

    /// Like [`try_to_map()`](TryKvSeq::try_to_map), and also returns the keys in first-seen order.
    #[inline]
    #[allow(clippy::type_complexity)]
    fn try_to_map_ordered(
        &mut self,
    ) -> Result<Ordered<K, HashMap<K, V>>, Partial<Ordered<K, HashMap<K, V>>, E>>
    where
        Self: Sized,
        K: Eq + Hash + Clone,
    {
        self.try_feed(OrderedResolve::new(resolve::last_wins))
    }

    /// Groups the values by key. Values of the same key stay in push order.
    #[inline]
    #[allow(clippy::type_complexity)]
    fn try_to_groups(&mut self) -> Result<HashMap<K, Vec<V>>, Partial<HashMap<K, Vec<V>>, E>>
    where
        Self: Sized,
        K: Eq + Hash,
    {
        self.try_feed(Groups::new())
    }

    /// Like [`try_to_groups()`](TryKvSeq::try_to_groups), and also returns the keys in
    /// first-seen order.
    #[inline]
    #[allow(clippy::type_complexity)]
    fn try_to_groups_ordered(
        &mut self,
    ) -> Result<Ordered<K, HashMap<K, Vec<V>>>, Partial<Ordered<K, HashMap<K, Vec<V>>>, E>>
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
        &mut self,
        resolve: F,
    ) -> Result<HashMap<K, R>, Partial<HashMap<K, R>, E>>
    where
        Self: Sized,
        K: Eq + Hash,
        F: FnMut(&K, Option<R>, V) -> R,
    {
        self.try_feed(Resolve::new(resolve))
    }

    /// Like [`try_to_map_resolv()`](TryKvSeq::try_to_map_resolv), and also returns the keys
    /// in first-seen order.
    #[inline]
    #[allow(clippy::type_complexity)]
    fn try_to_map_resolv_ordered<F, R>(
        &mut self,
        resolve: F,
    ) -> Result<Ordered<K, HashMap<K, R>>, Partial<Ordered<K, HashMap<K, R>>, E>>
    where
        Self: Sized,
        K: Eq + Hash + Clone,
        F: FnMut(&K, Option<R>, V) -> R,
    {
        self.try_feed(OrderedResolve::new(resolve))
    }
}

impl<K, V, E, S> TryKvSeq<K, V, E> for S where S: Seq<Item = Result<(K, V), E>> {}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::{collect::resolve, prelude::*, push};

    #[test]
    fn nothing_is_pushed_after_the_error() {
        let parsed = Cell::new(0);
        let mut nums = push::from_slice(&["1", "3", "5", "_7", "9", "11"]).convert(|s| {
            parsed.set(parsed.get() + 1);
            s.parse::<i32>()
        });

        let partial = nums.try_to_vec().unwrap_err();

        assert_eq!(partial.gathered, [1, 3, 5]);
        assert_eq!(parsed.get(), 4);
    }

    #[test]
    fn empty_is_not_an_error() {
        let mut empty = push::from_iter(Vec::<Result<u8, ()>>::new());

        assert_eq!(empty.try_reduce(|a, b| a.max(b)), Ok(None));
        assert_eq!(empty.try_sum(), Ok(0));
        assert_eq!(empty.try_head(), Ok(None));
    }

    #[test]
    fn first_before_error_wins() {
        let mut seq = push::from_iter([Ok(2), Ok(9), Err("late")]);

        assert_eq!(seq.try_first(|&n| n > 5), Ok(Some(9)));
        assert_eq!(seq.try_first(|&n| n > 10), Err("late"));
        assert_eq!(seq.by_ref().try_convert(|n| Ok(n * 2)).try_head(), Ok(Some(4)));
    }

    #[test]
    fn draining_terminals_keep_what_came_before_the_error() {
        let mut nums = push::from_iter([Ok(4), Ok(7), Ok(10), Err("bad row"), Ok(13)]);

        let partial = nums.try_last(|&n| n % 2 == 1).unwrap_err();
        assert_eq!(partial.gathered, Some(7));
        assert_eq!(partial.error, "bad row");

        assert_eq!(nums.try_tail().unwrap_err().gathered, Some(10));
        assert_eq!(nums.try_count().unwrap_err().gathered, 3);
        assert_eq!(nums.try_any(|&n| n > 12), Err("bad row"));
        assert_eq!(nums.try_any(|&n| n > 5), Ok(true));

        let partial = nums.try_group_by(|n| n % 2 == 0).unwrap_err();
        assert_eq!(partial.gathered[&true], [4, 10]);
        assert_eq!(partial.gathered[&false], [7]);
    }

    #[test]
    fn draining_terminals_without_errors() {
        let mut nums = push::from_iter([Ok::<_, ()>(3), Ok(1), Ok(3)]);

        assert_eq!(nums.try_tail(), Ok(Some(3)));
        assert_eq!(nums.try_count(), Ok(3));
        assert_eq!(nums.try_to_set().map(|set| set.len()), Ok(2));
        assert_eq!(nums.try_group_by(|&n| n).map(|groups| groups[&3].len()), Ok(2));
    }

    #[test]
    fn key_value_terminals_keep_the_partial_map() {
        let mut pairs = push::from_iter([
            Ok(("b", 1)),
            Ok(("a", 2)),
            Ok(("b", 3)),
            Err(()),
            Ok(("c", 4)),
        ]);

        let map = pairs.try_to_map().unwrap_err().gathered;
        assert_eq!(map.len(), 2);
        assert_eq!(map["b"], 3);

        let (keys, map) = pairs.try_to_map_ordered().unwrap_err().gathered;
        assert_eq!(keys, ["b", "a"]);
        assert_eq!(map["b"], 3);

        let groups = pairs.try_to_groups().unwrap_err().gathered;
        assert_eq!(groups["b"], [1, 3]);
        assert!(!groups.contains_key("c"));

        let (keys, groups) = pairs.try_to_groups_ordered().unwrap_err().gathered;
        assert_eq!(keys, ["b", "a"]);
        assert_eq!(groups["a"], [2]);

        let totals = pairs.try_to_map_resolv(resolve::sum).unwrap_err().gathered;
        assert_eq!(totals["b"], 4);

        let (keys, firsts) = pairs
            .try_to_map_resolv_ordered(resolve::first_wins)
            .unwrap_err()
            .gathered;
        assert_eq!(keys, ["b", "a"]);
        assert_eq!(firsts["b"], 1);
    }

    #[test]
    fn key_value_terminals_without_errors() {
        let mut pairs = push::from_iter([Ok::<_, ()>((1, 'x')), Ok((2, 'y')), Ok((1, 'z'))]);

        assert_eq!(pairs.try_to_map().map(|map| map[&1]), Ok('z'));
        assert_eq!(
            pairs.try_to_groups().map(|groups| groups[&1].clone()),
            Ok(vec!['x', 'z'])
        );
    }
}
