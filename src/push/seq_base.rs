use std::{
    collections::{HashMap, HashSet},
    hash::Hash,
    ops::ControlFlow,
};

use crate::{
    adapters::{Chain, Convert, ConvertCheck, Filter, Flat, Inspect, KeyBy, Skip, Take},
    collect::{
        Addable, Collector, Count, First, ForEach, Groups, Last, OrderedGroups, Reduce, Sum,
        any_item,
    },
};

use super::{Buffered, assert_seq};

/// A push sequence.
///
/// This trait requires one method, [`drive()`](Seq::drive), which pushes the elements into
/// a consumer. All the other methods are adaptors, which wrap the sequence lazily, and
/// terminal operations, which drive it.
///
/// # Implementing
///
/// ```
/// use std::ops::ControlFlow;
/// use seqflow::prelude::*;
///
/// /// The lines of a text, pushed one at a time.
/// struct Lines<'a>(&'a str);
///
/// impl<'a> Seq for Lines<'a> {
///     type Item = &'a str;
///
///     fn drive<C>(&mut self, mut consumer: C) -> ControlFlow<()>
///     where
///         C: FnMut(Self::Item) -> ControlFlow<()>,
///     {
///         for line in self.0.lines() {
///             consumer(line)?;
///         }
///
///         ControlFlow::Continue(())
///     }
/// }
///
/// let mut text = Lines("alpha\n\nbeta\ngamma");
///
/// assert_eq!(text.by_ref().filter(|line| !line.is_empty()).count(), 3);
/// assert_eq!(text.head(), Some("alpha"));
/// ```
pub trait Seq {
    /// The type of the elements.
    type Item;

    /// Pushes the elements into `consumer` until the sequence is exhausted or the consumer
    /// returns [`Break(())`](ControlFlow::Break).
    ///
    /// Returns `Break(())` if the consumer stopped the sequence, and `Continue(())` if the
    /// sequence ran out of elements. The consumer is never called again after it breaks.
    fn drive<C>(&mut self, consumer: C) -> ControlFlow<()>
    where
        C: FnMut(Self::Item) -> ControlFlow<()>;

    /// Borrows the sequence, so that an adaptor can be applied without giving the sequence away.
    #[inline]
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    /// Creates a sequence that only pushes the elements satisfying a predicate.
    #[inline]
    fn filter<P>(self, pred: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        assert_seq(Filter::new(self, pred))
    }

    /// Creates a sequence that converts every element with a function.
    #[inline]
    fn convert<F, R>(self, f: F) -> Convert<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> R,
    {
        assert_seq(Convert::new(self, f))
    }

    /// Creates a sequence that filters the elements, then converts the ones that passed.
    #[inline]
    fn filter_convert<P, F, R>(self, pred: P, f: F) -> Convert<Filter<Self, P>, F>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
        F: FnMut(Self::Item) -> R,
    {
        assert_seq(Convert::new(Filter::new(self, pred), f))
    }

    /// Creates a sequence that converts every element, then filters the converted ones.
    #[inline]
    fn convert_filter<F, R, P>(self, f: F, pred: P) -> Filter<Convert<Self, F>, P>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> R,
        P: FnMut(&R) -> bool,
    {
        assert_seq(Filter::new(Convert::new(self, f), pred))
    }

    /// Creates a sequence that converts and filters in one step: elements for which
    /// the function returns `None` are skipped.
    #[inline]
    fn convert_check<F, R>(self, f: F) -> ConvertCheck<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Option<R>,
    {
        assert_seq(ConvertCheck::new(self, f))
    }

    /// Creates a sequence that expands every element into a finite sub-sequence and
    /// pushes the sub-elements one by one.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqflow::{prelude::*, push};
    ///
    /// let words = push::from_slice(&["ab", "", "c"]).flat(|s| s.chars()).to_vec();
    /// assert_eq!(words, ['a', 'b', 'c']);
    /// ```
    #[inline]
    fn flat<F, U>(self, f: F) -> Flat<Self, F, U>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> U,
        U: IntoIterator,
    {
        assert_seq(Flat::new(self, f))
    }

    /// Creates a sequence that pushes at most `n` elements per drive.
    ///
    /// The source is stopped right after the `n`-th element, which makes it safe on
    /// infinite sources.
    #[inline]
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        assert_seq(Take::new(self, n))
    }

    /// Creates a sequence that discards the first `n` elements of every drive.
    #[inline]
    fn skip(self, n: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        assert_seq(Skip::new(self, n))
    }

    /// Creates a sequence that pushes the elements of this sequence, then those of `other`.
    #[inline]
    fn chain<S>(self, other: S) -> Chain<Self, S>
    where
        Self: Sized,
        S: Seq<Item = Self::Item>,
    {
        assert_seq(Chain::new(self, other))
    }

    /// Creates a sequence that calls a function on a reference to every element it pushes on.
    #[inline]
    fn inspect<F>(self, f: F) -> Inspect<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item),
    {
        assert_seq(Inspect::new(self, f))
    }

    /// Creates a key/value sequence pushing `(key(&element), element)`.
    #[inline]
    fn key_by<F, K>(self, key: F) -> KeyBy<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> K,
    {
        assert_seq(KeyBy::new(self, key))
    }

    /// Turns this sequence into a pull loop.
    ///
    /// The whole sequence is driven into a buffer on the first pull, so the loop is not
    /// lazy and never returns its first element on an infinite sequence. See the
    /// [module documentation](crate::push#interop).
    ///
    /// # Examples
    ///
    /// ```
    /// use seqflow::{prelude::*, push};
    ///
    /// let mut lp = push::range(0, 3).into_loop();
    ///
    /// assert_eq!(lp.next(), Some(0));
    /// assert_eq!(lp.to_vec(), [1, 2]);
    /// ```
    #[inline]
    fn into_loop(self) -> Buffered<Self>
    where
        Self: Sized,
    {
        Buffered::new(self)
    }

    /// Drives the sequence into a collector until either of them stops, and returns
    /// the collector's output.
    ///
    /// Every other terminal operation is built on this method.
    fn feed<C>(&mut self, collector: C) -> C::Output
    where
        Self: Sized,
        C: Collector<Self::Item>,
    {
        let mut collector = collector;
        let _ = self.drive(|item| collector.collect(item));
        collector.finish()
    }

    /// Collects every element into a [`Vec`].
    #[inline]
    fn to_vec(&mut self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        self.feed(Vec::new())
    }

    /// Collects every element into a [`HashSet`].
    #[inline]
    fn to_set(&mut self) -> HashSet<Self::Item>
    where
        Self: Sized,
        Self::Item: Eq + Hash,
    {
        self.feed(HashSet::new())
    }

    /// Left-folds the elements, seeded with the first one.
    ///
    /// Returns `None` if and only if the sequence is empty.
    #[inline]
    fn reduce<F>(&mut self, f: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        self.feed(Reduce::new(f))
    }

    /// Adds all the elements up. An empty sequence sums to [`Addable::zero()`].
    #[inline]
    fn sum(&mut self) -> Self::Item
    where
        Self: Sized,
        Self::Item: Addable,
    {
        self.feed(Sum::new())
    }

    /// Returns the first element satisfying a predicate, and stops the sequence there.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqflow::{prelude::*, push};
    ///
    /// let mut tested = vec![];
    /// let found = push::from_slice(&[1, 3, 5, 7, 9, 11]).first(|&&n| {
    ///     tested.push(n);
    ///     n > 5
    /// });
    ///
    /// assert_eq!(found, Some(&7));
    /// assert_eq!(tested, [1, 3, 5, 7]);
    /// ```
    #[inline]
    fn first<P>(&mut self, pred: P) -> Option<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        self.feed(First::new(pred))
    }

    /// Returns the last element satisfying a predicate. The whole sequence is driven.
    #[inline]
    fn last<P>(&mut self, pred: P) -> Option<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        self.feed(Last::new(pred))
    }

    /// Returns the first element.
    #[inline]
    fn head(&mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.feed(First::new(any_item))
    }

    /// Returns the last element. The whole sequence is driven.
    #[inline]
    fn tail(&mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.feed(Last::new(any_item))
    }

    /// Counts the elements. The whole sequence is driven.
    #[inline]
    fn count(&mut self) -> usize
    where
        Self: Sized,
    {
        self.feed(Count::new())
    }

    /// Tests whether any element satisfies a predicate, stopping at the first that does.
    #[inline]
    fn any<P>(&mut self, pred: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        self.first(pred).is_some()
    }

    /// Tests whether every element satisfies a predicate, stopping at the first that does not.
    #[inline]
    fn all<P>(&mut self, pred: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        let mut pred = pred;
        self.first(|item| !pred(item)).is_none()
    }

    /// Calls a function on every element.
    #[inline]
    fn for_each<F>(&mut self, f: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        self.feed(ForEach::new(f))
    }

    /// Groups the elements by a key. Elements of the same key stay in sequence order;
    /// the enumeration order of the keys is unspecified.
    #[inline]
    fn group_by<F, K>(&mut self, key: F) -> HashMap<K, Vec<Self::Item>>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> K,
        K: Eq + Hash,
    {
        KeyBy::new(self, key).feed(Groups::new())
    }

    /// Groups the elements by a key, and also returns the keys in first-seen order.
    #[inline]
    fn group_by_ordered<F, K>(&mut self, key: F) -> (Vec<K>, HashMap<K, Vec<Self::Item>>)
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> K,
        K: Eq + Hash + Clone,
    {
        KeyBy::new(self, key).feed(OrderedGroups::new())
    }
}

impl<S: Seq + ?Sized> Seq for &mut S {
    type Item = S::Item;

    #[inline]
    fn drive<C>(&mut self, consumer: C) -> ControlFlow<()>
    where
        C: FnMut(Self::Item) -> ControlFlow<()>,
    {
        (**self).drive(consumer)
    }
}

impl<S: Seq + ?Sized> Seq for Box<S> {
    type Item = S::Item;

    #[inline]
    fn drive<C>(&mut self, consumer: C) -> ControlFlow<()>
    where
        C: FnMut(Self::Item) -> ControlFlow<()>,
    {
        (**self).drive(consumer)
    }
}

#[cfg(test)]
mod tests {
    use std::ops::ControlFlow;

    use crate::{prelude::*, push, test_utils::strict_push_naturals};

    #[test]
    fn consumer_is_never_called_after_a_break() {
        let mut calls = 0;
        let result = strict_push_naturals(3).drive(|n| {
            calls += 1;
            if n == 2 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });

        assert!(result.is_break());
        assert_eq!(calls, 3);
    }

    #[test]
    fn terminals_short_circuit_infinite_sequences() {
        assert_eq!(strict_push_naturals(6).first(|&n| n == 5), Some(5));
        assert_eq!(strict_push_naturals(1).head(), Some(0));
        assert!(strict_push_naturals(4).any(|&n| n > 2));
        assert!(!strict_push_naturals(1).all(|&n| n > 0));
    }

    #[test]
    fn empty_sequences() {
        let mut empty = push::from_slice::<i32>(&[]);

        assert_eq!(empty.reduce(|a, _| a), None);
        assert_eq!(empty.by_ref().convert(|&n| n).sum(), 0);
        assert_eq!(empty.head(), None);
        assert_eq!(empty.tail(), None);
        assert_eq!(empty.count(), 0);
    }

    #[test]
    fn grouping_by_parity() {
        let mut nums = push::from_iter([1, 1, 2, 4, 3, 1]);

        let groups = nums.group_by(|n| n % 2 == 0);
        assert_eq!(groups[&false], [1, 1, 3, 1]);
        assert_eq!(groups[&true], [2, 4]);

        let (keys, _) = nums.group_by_ordered(|n| n % 2 == 0);
        assert_eq!(keys, [false, true]);
    }
}
