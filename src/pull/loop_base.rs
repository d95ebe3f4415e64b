use std::{
    collections::{HashMap, HashSet},
    hash::Hash,
};

use crate::{
    adapters::{
        Chain, Convert, ConvertCheck, Filter, Flat, Fuse, Inspect, KeyBy, Skip, Take, Zip,
    },
    collect::{
        Addable, Collector, Count, First, ForEach, Groups, Last, OrderedGroups, Reduce, Sum,
        any_item,
    },
    fallible::WithErr,
    push::Pushed,
};

use super::{Iter, assert_loop};

/// A pull sequence.
///
/// This trait requires one method, [`next()`](Loop::next), which advances the loop by one
/// element. All the other methods are adaptors, which wrap the loop lazily, and terminal
/// operations, which drive it.
///
/// # Implementing
///
/// ```
/// use seqflow::prelude::*;
///
/// /// Powers of two, until they overflow.
/// struct Powers(Option<u8>);
///
/// impl Loop for Powers {
///     type Item = u8;
///
///     fn next(&mut self) -> Option<u8> {
///         let current = self.0?;
///         self.0 = current.checked_mul(2);
///         Some(current)
///     }
/// }
///
/// let big = Powers(Some(1)).filter(|&p| p > 10).to_vec();
/// assert_eq!(big, [16, 32, 64, 128]);
/// ```
pub trait Loop {
    /// The type of the elements.
    type Item;

    /// Advances the loop and returns the next element, or `None` if the loop is exhausted.
    fn next(&mut self) -> Option<Self::Item>;

    /// Borrows the loop, so that an adaptor or a terminal operation can be applied
    /// without giving the loop away.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqflow::{prelude::*, pull};
    ///
    /// let mut nums = pull::range(0, 10);
    ///
    /// assert_eq!(nums.by_ref().take(3).to_vec(), [0, 1, 2]);
    /// assert_eq!(nums.to_vec(), [3, 4, 5, 6, 7, 8, 9]);
    /// ```
    #[inline]
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    /// Creates a loop that only yields the elements satisfying a predicate.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqflow::{prelude::*, pull};
    ///
    /// let odds = pull::range(0, 10).filter(|n| n % 2 == 1).to_vec();
    /// assert_eq!(odds, [1, 3, 5, 7, 9]);
    /// ```
    #[inline]
    fn filter<P>(self, pred: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        assert_loop(Filter::new(self, pred))
    }

    /// Creates a loop that converts every element with a function.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqflow::{prelude::*, pull};
    ///
    /// let squares = pull::range(1, 5).convert(|n| n * n).to_vec();
    /// assert_eq!(squares, [1, 4, 9, 16]);
    /// ```
    #[inline]
    fn convert<F, R>(self, f: F) -> Convert<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> R,
    {
        assert_loop(Convert::new(self, f))
    }

    /// Creates a loop that filters the elements, then converts the ones that passed.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqflow::{prelude::*, pull};
    ///
    /// let names = pull::from_slice(&["ann", "", "bo"])
    ///     .filter_convert(|s| !s.is_empty(), |s| s.to_uppercase())
    ///     .to_vec();
    /// assert_eq!(names, ["ANN", "BO"]);
    /// ```
    #[inline]
    fn filter_convert<P, F, R>(self, pred: P, f: F) -> Convert<Filter<Self, P>, F>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
        F: FnMut(Self::Item) -> R,
    {
        assert_loop(Convert::new(Filter::new(self, pred), f))
    }

    /// Creates a loop that converts every element, then filters the converted ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqflow::{prelude::*, pull};
    ///
    /// let lens = pull::from_slice(&["ann", "", "bo"])
    ///     .convert_filter(|s| s.len(), |&len| len > 0)
    ///     .to_vec();
    /// assert_eq!(lens, [3, 2]);
    /// ```
    #[inline]
    fn convert_filter<F, R, P>(self, f: F, pred: P) -> Filter<Convert<Self, F>, P>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> R,
        P: FnMut(&R) -> bool,
    {
        assert_loop(Filter::new(Convert::new(self, f), pred))
    }

    /// Creates a loop that converts and filters in one step: elements for which
    /// the function returns `None` are skipped.
    ///
    /// Prefer it over [`convert_filter()`](Loop::convert_filter) when the check and the
    /// conversion share work, since the function runs once per element.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqflow::{prelude::*, pull};
    ///
    /// let nums = pull::from_slice(&["1", "two", "3"])
    ///     .convert_check(|s| s.parse::<i32>().ok())
    ///     .to_vec();
    /// assert_eq!(nums, [1, 3]);
    /// ```
    #[inline]
    fn convert_check<F, R>(self, f: F) -> ConvertCheck<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Option<R>,
    {
        assert_loop(ConvertCheck::new(self, f))
    }

    /// Creates a loop that expands every element into a finite sub-sequence and
    /// yields the sub-elements one by one.
    ///
    /// A sub-sequence is drained completely before the next element is pulled.
    /// Empty sub-sequences contribute nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqflow::{prelude::*, pull};
    ///
    /// let matrix = [vec![1, 2, 3], vec![], vec![4], vec![5, 6]];
    /// let flat = pull::from_slice(&matrix).flat(|row| row.iter().copied()).to_vec();
    ///
    /// assert_eq!(flat, [1, 2, 3, 4, 5, 6]);
    /// ```
    #[inline]
    fn flat<F, U>(self, f: F) -> Flat<Self, F, U>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> U,
        U: IntoIterator,
    {
        assert_loop(Flat::new(self, f))
    }

    /// Creates a loop that yields at most `n` elements.
    ///
    /// The underlying loop is not pulled again once `n` elements have been yielded,
    /// which makes it safe on infinite sources.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqflow::{prelude::*, pull};
    ///
    /// let mut n = 0;
    /// let naturals = pull::from_fn(move || {
    ///     n += 1;
    ///     Some(n)
    /// });
    ///
    /// assert_eq!(naturals.take(3).to_vec(), [1, 2, 3]);
    /// ```
    #[inline]
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        assert_loop(Take::new(self, n))
    }

    /// Creates a loop that discards the first `n` elements (or all of them, if there are fewer).
    ///
    /// The elements are discarded on the first pull, not on creation.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqflow::{prelude::*, pull};
    ///
    /// assert_eq!(pull::range(0, 5).skip(3).to_vec(), [3, 4]);
    /// assert!(pull::range(0, 5).skip(9).to_vec().is_empty());
    /// ```
    #[inline]
    fn skip(self, n: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        assert_loop(Skip::new(self, n))
    }

    /// Creates a loop that yields the elements of this loop, then those of `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqflow::{prelude::*, pull};
    ///
    /// let all = pull::range(0, 2).chain(pull::range(5, 7)).to_vec();
    /// assert_eq!(all, [0, 1, 5, 6]);
    /// ```
    #[inline]
    fn chain<L>(self, other: L) -> Chain<Self, L>
    where
        Self: Sized,
        L: Loop<Item = Self::Item>,
    {
        assert_loop(Chain::new(self, other))
    }

    /// Creates a key/value loop pairing the elements of this loop with those of `other`.
    ///
    /// It stops as soon as either loop is exhausted.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqflow::{prelude::*, pull};
    ///
    /// let map = pull::from_slice(&["a", "b", "c"]).zip(pull::range(1, 3)).to_map();
    ///
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map[&"b"], 2);
    /// ```
    #[inline]
    fn zip<L>(self, other: L) -> Zip<Self, L>
    where
        Self: Sized,
        L: Loop,
    {
        assert_loop(Zip::new(self, other))
    }

    /// Creates a loop that keeps returning `None` once this loop has returned `None`.
    #[inline]
    fn fuse(self) -> Fuse<Self>
    where
        Self: Sized,
    {
        assert_loop(Fuse::new(self))
    }

    /// Creates a loop that calls a function on a reference to every element it passes on.
    #[inline]
    fn inspect<F>(self, f: F) -> Inspect<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item),
    {
        assert_loop(Inspect::new(self, f))
    }

    /// Creates a key/value loop yielding `(key(&element), element)`.
    ///
    /// This is the entry point to grouping and map building.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqflow::{prelude::*, pull};
    ///
    /// let by_parity = pull::from_slice(&[1, 1, 2, 4, 3, 1])
    ///     .key_by(|&&n| n % 2 == 0)
    ///     .to_groups();
    ///
    /// assert_eq!(by_parity[&false], [&1, &1, &3, &1]);
    /// assert_eq!(by_parity[&true], [&2, &4]);
    /// ```
    #[inline]
    fn key_by<F, K>(self, key: F) -> KeyBy<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> K,
    {
        assert_loop(KeyBy::new(self, key))
    }

    /// Creates a loop of clones of the referenced elements.
    #[inline]
    #[allow(clippy::type_complexity)]
    fn cloned<'a, T>(self) -> Convert<Self, fn(&'a T) -> T>
    where
        Self: Sized + Loop<Item = &'a T>,
        T: Clone + 'a,
    {
        assert_loop(Convert::new(self, T::clone as fn(&'a T) -> T))
    }

    /// Bridges this loop to a [`std::iter::Iterator`].
    ///
    /// # Examples
    ///
    /// ```
    /// use seqflow::{prelude::*, pull};
    ///
    /// let mut total = 0;
    /// for n in pull::range(1, 4).iter() {
    ///     total += n;
    /// }
    ///
    /// assert_eq!(total, 6);
    /// ```
    #[inline]
    fn iter(self) -> Iter<Self>
    where
        Self: Sized,
    {
        Iter::new(self)
    }

    /// Turns this loop into a push sequence, which drives the loop when driven itself.
    #[inline]
    fn seq(self) -> Pushed<Self>
    where
        Self: Sized,
    {
        Pushed::new(self)
    }

    /// Lifts this loop into the fallible flavor. The resulting loop never fails by itself,
    /// but fallible adaptors such as [`try_convert()`](crate::fallible::BreakLoop::try_convert)
    /// can be applied after it.
    #[inline]
    fn with_err<E>(self) -> WithErr<Self, E>
    where
        Self: Sized,
    {
        WithErr::new(self)
    }

    /// Drives the loop into a collector until either of them stops, and returns
    /// the collector's output.
    ///
    /// Every other terminal operation is built on this method.
    fn feed<C>(self, collector: C) -> C::Output
    where
        Self: Sized,
        C: Collector<Self::Item>,
    {
        let mut this = self;
        let mut collector = collector;

        while let Some(item) = this.next() {
            if collector.collect(item).is_break() {
                break;
            }
        }

        collector.finish()
    }

    /// Collects every element into a [`Vec`].
    ///
    /// It never returns on an infinite loop.
    #[inline]
    fn to_vec(self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        self.feed(Vec::new())
    }

    /// Collects every element into a [`HashSet`].
    #[inline]
    fn to_set(self) -> HashSet<Self::Item>
    where
        Self: Sized,
        Self::Item: Eq + Hash,
    {
        self.feed(HashSet::new())
    }

    /// Left-folds the elements, seeded with the first one.
    ///
    /// Returns `None` if and only if the loop is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqflow::{prelude::*, pull};
    ///
    /// assert_eq!(pull::range(1, 5).reduce(|a, b| a * b), Some(24));
    /// assert_eq!(pull::empty::<i32>().reduce(|a, b| a * b), None);
    /// ```
    #[inline]
    fn reduce<F>(self, f: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        self.feed(Reduce::new(f))
    }

    /// Adds all the elements up. An empty loop sums to [`Addable::zero()`].
    ///
    /// # Examples
    ///
    /// ```
    /// use seqflow::{prelude::*, pull};
    ///
    /// assert_eq!(pull::range(1, 5).sum(), 10);
    /// assert_eq!(pull::empty::<i32>().sum(), 0);
    /// assert_eq!(pull::of(["a", "b"]).convert(String::from).sum(), "ab");
    /// ```
    #[inline]
    fn sum(self) -> Self::Item
    where
        Self: Sized,
        Self::Item: Addable,
    {
        self.feed(Sum::new())
    }

    /// Returns the first element satisfying a predicate.
    ///
    /// Nothing is pulled after the match.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqflow::{prelude::*, pull};
    ///
    /// let mut nums = pull::of([1, 3, 5, 7, 9, 11]);
    ///
    /// assert_eq!(nums.by_ref().first(|&n| n > 5), Some(7));
    /// assert_eq!(nums.next(), Some(9));
    /// ```
    #[inline]
    fn first<P>(self, pred: P) -> Option<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        self.feed(First::new(pred))
    }

    /// Returns the last element satisfying a predicate. The whole loop is drained.
    #[inline]
    fn last<P>(self, pred: P) -> Option<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        self.feed(Last::new(pred))
    }

    /// Returns the first element.
    #[inline]
    fn head(self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.feed(First::new(any_item))
    }

    /// Returns the last element. The whole loop is drained.
    #[inline]
    fn tail(self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.feed(Last::new(any_item))
    }

    /// Counts the elements. The whole loop is drained.
    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.feed(Count::new())
    }

    /// Tests whether any element satisfies a predicate, stopping at the first that does.
    #[inline]
    fn any<P>(self, pred: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        self.first(pred).is_some()
    }

    /// Tests whether every element satisfies a predicate, stopping at the first that does not.
    #[inline]
    fn all<P>(self, pred: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        let mut pred = pred;
        self.first(|item| !pred(item)).is_none()
    }

    /// Calls a function on every element.
    #[inline]
    fn for_each<F>(self, f: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        self.feed(ForEach::new(f))
    }

    /// Groups the elements by a key. Elements of the same key stay in loop order;
    /// the enumeration order of the keys is unspecified.
    #[inline]
    fn group_by<F, K>(self, key: F) -> HashMap<K, Vec<Self::Item>>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> K,
        K: Eq + Hash,
    {
        self.key_by(key).feed(Groups::new())
    }

    /// Groups the elements by a key, and also returns the keys in first-seen order.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqflow::{prelude::*, pull};
    ///
    /// let (keys, groups) = pull::of(["bb", "a", "cc", "d"]).group_by_ordered(|s| s.len());
    ///
    /// assert_eq!(keys, [2, 1]);
    /// assert_eq!(groups[&2], ["bb", "cc"]);
    /// assert_eq!(groups[&1], ["a", "d"]);
    /// ```
    #[inline]
    fn group_by_ordered<F, K>(self, key: F) -> (Vec<K>, HashMap<K, Vec<Self::Item>>)
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> K,
        K: Eq + Hash + Clone,
    {
        self.key_by(key).feed(OrderedGroups::new())
    }
}

impl<L: Loop + ?Sized> Loop for &mut L {
    type Item = L::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }
}

impl<L: Loop + ?Sized> Loop for Box<L> {
    type Item = L::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }
}

/// A [`Loop`] over a restartable source, which can be rewound to its first element.
///
/// Only loops that can replay their source without side effects implement this trait:
/// [`Indexed`](super::Indexed) (slices, vectors, arrays) and [`Range`](super::Range).
/// Loops over generators or foreign iterators are single-pass, and the type says so.
///
/// # Examples
///
/// ```
/// use seqflow::{prelude::*, pull};
///
/// let mut nums = pull::from_slice(&[1, 2, 3]);
/// assert_eq!(nums.by_ref().cloned().sum(), 6);
/// assert_eq!(nums.next(), None);
///
/// nums.restart();
/// assert_eq!(nums.next(), Some(&1));
/// ```
pub trait Restart: Loop {
    /// Rewinds the loop to its first element.
    fn restart(&mut self);
}

impl<L: Restart + ?Sized> Restart for &mut L {
    #[inline]
    fn restart(&mut self) {
        (**self).restart();
    }
}
