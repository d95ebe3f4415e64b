use std::{
    collections::{HashMap, HashSet},
    hash::Hash,
};

use crate::{
    adapters::{
        Convert, ConvertCheck, Filter, Flat, Fuse, Inspect, KeyBy, Skip, Take, TryConvert,
        TryFilter, Zip,
    },
    collect::{
        Addable, Collector, Count, First, ForEach, Groups, Last, Partial, Reduce, Sum, any_item,
    },
    push::TryPushed,
};

use super::assert_break_loop;

/// A pull sequence whose every pull may fail.
///
/// This trait requires one method, [`try_next()`](BreakLoop::try_next). The adaptors mirror
/// those of [`Loop`](crate::pull::Loop) and forward errors untouched; the fallible ones
/// (`try_filter`, `try_convert`) can also raise errors of their own. Terminal operations
/// stop on the first error.
///
/// # Examples
///
/// ```
/// use seqflow::{prelude::*, fallible};
///
/// let rows = vec![Ok("ada"), Ok("grace"), Err("connection reset"), Ok("linus")];
///
/// let names = fallible::from_results(rows)
///     .convert(str::to_uppercase)
///     .try_to_vec();
///
/// let partial = names.unwrap_err();
/// assert_eq!(partial.gathered, ["ADA", "GRACE"]);
/// assert_eq!(partial.error, "connection reset");
/// ```
pub trait BreakLoop {
    /// The type of the elements.
    type Item;

    /// The type of the errors.
    type Error;

    /// Advances the loop and returns the next element, `Ok(None)` if the loop is exhausted,
    /// or the error that stopped it.
    fn try_next(&mut self) -> Result<Option<Self::Item>, Self::Error>;

    /// Borrows the loop, so that an adaptor or a terminal operation can be applied
    /// without giving the loop away.
    #[inline]
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    /// Creates a loop that only yields the elements satisfying a predicate.
    #[inline]
    fn filter<P>(self, pred: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        assert_break_loop(Filter::new(self, pred))
    }

    /// Creates a loop that only yields the elements satisfying a fallible predicate.
    /// An error of the predicate stops the loop like an error of the source.
    #[inline]
    fn try_filter<P>(self, pred: P) -> TryFilter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> Result<bool, Self::Error>,
    {
        assert_break_loop(TryFilter::new(self, pred))
    }

    /// Creates a loop that converts every element with a function.
    #[inline]
    fn convert<F, R>(self, f: F) -> Convert<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> R,
    {
        assert_break_loop(Convert::new(self, f))
    }

    /// Creates a loop that converts every element with a fallible function.
    ///
    /// A failed conversion is returned right away; no adaptor downstream sees the element.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqflow::{prelude::*, pull};
    ///
    /// let mut nums = pull::from_slice(&["4", "x", "6"])
    ///     .with_err()
    ///     .try_convert(|s| s.parse::<u8>());
    ///
    /// assert_eq!(nums.try_next(), Ok(Some(4)));
    /// assert!(nums.try_next().is_err());
    /// ```
    #[inline]
    fn try_convert<F, R>(self, f: F) -> TryConvert<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Result<R, Self::Error>,
    {
        assert_break_loop(TryConvert::new(self, f))
    }

    /// Creates a loop that converts and filters in one step: elements for which
    /// the function returns `None` are skipped.
    #[inline]
    fn convert_check<F, R>(self, f: F) -> ConvertCheck<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Option<R>,
    {
        assert_break_loop(ConvertCheck::new(self, f))
    }

    /// Creates a loop that expands every element into a finite sub-sequence and
    /// yields the sub-elements one by one.
    #[inline]
    fn flat<F, U>(self, f: F) -> Flat<Self, F, U>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> U,
        U: IntoIterator,
    {
        assert_break_loop(Flat::new(self, f))
    }

    /// Creates a loop that yields at most `n` elements, without pulling more than that.
    #[inline]
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        assert_break_loop(Take::new(self, n))
    }

    /// Creates a loop that discards the first `n` elements on the first pull.
    ///
    /// An error met while discarding is returned, and counts as one discarded element.
    #[inline]
    fn skip(self, n: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        assert_break_loop(Skip::new(self, n))
    }

    /// Creates a loop that keeps returning `Ok(None)` once this loop has returned
    /// `Ok(None)` or an error.
    #[inline]
    fn fuse(self) -> Fuse<Self>
    where
        Self: Sized,
    {
        assert_break_loop(Fuse::new(self))
    }

    /// Creates a key/value loop pairing the elements of this loop with those of `other`.
    /// It stops at the end of either loop and fails with either loop.
    #[inline]
    fn zip<B>(self, other: B) -> Zip<Self, B>
    where
        Self: Sized,
        B: BreakLoop<Error = Self::Error>,
    {
        assert_break_loop(Zip::new(self, other))
    }

    /// Creates a loop that calls a function on a reference to every element it passes on.
    #[inline]
    fn inspect<F>(self, f: F) -> Inspect<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item),
    {
        assert_break_loop(Inspect::new(self, f))
    }

    /// Creates a key/value loop yielding `(key(&element), element)`.
    #[inline]
    fn key_by<F, K>(self, key: F) -> KeyBy<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> K,
    {
        assert_break_loop(KeyBy::new(self, key))
    }

    /// Turns this loop into a push sequence of `Result`s, which pushes the first error
    /// and then stops.
    #[inline]
    fn seq(self) -> TryPushed<Self>
    where
        Self: Sized,
    {
        TryPushed::new(self)
    }

    /// Drives the loop into a collector until either of them stops or the loop fails.
    ///
    /// On failure, the output of the collector so far comes back along with the error.
    /// Every other terminal operation is built on this method.
    fn try_feed<C>(self, collector: C) -> Result<C::Output, Partial<C::Output, Self::Error>>
    where
        Self: Sized,
        C: Collector<Self::Item>,
    {
        let mut this = self;
        let mut collector = collector;

        loop {
            match this.try_next() {
                Ok(Some(item)) => {
                    if collector.collect(item).is_break() {
                        break;
                    }
                }
                Ok(None) => break,
                Err(error) => {
                    log::debug!("fallible loop stopped on an error, returning the partial output");
                    return Err(Partial::new(collector.finish(), error));
                }
            }
        }

        Ok(collector.finish())
    }

    /// Collects every element into a [`Vec`].
    #[inline]
    fn try_to_vec(self) -> Result<Vec<Self::Item>, Partial<Vec<Self::Item>, Self::Error>>
    where
        Self: Sized,
    {
        self.try_feed(Vec::new())
    }

    /// Collects every element into a [`HashSet`].
    #[inline]
    #[allow(clippy::type_complexity)]
    fn try_to_set(self) -> Result<HashSet<Self::Item>, Partial<HashSet<Self::Item>, Self::Error>>
    where
        Self: Sized,
        Self::Item: Eq + Hash,
    {
        self.try_feed(HashSet::new())
    }

    /// Left-folds the elements, seeded with the first one.
    ///
    /// `Ok(None)` means the loop was empty, which is not an error.
    #[inline]
    #[allow(clippy::type_complexity)]
    fn try_reduce<F>(
        self,
        f: F,
    ) -> Result<Option<Self::Item>, Partial<Option<Self::Item>, Self::Error>>
    where
        Self: Sized,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        self.try_feed(Reduce::new(f))
    }

    /// Adds all the elements up. An empty loop sums to [`Addable::zero()`].
    #[inline]
    fn try_sum(self) -> Result<Self::Item, Partial<Self::Item, Self::Error>>
    where
        Self: Sized,
        Self::Item: Addable,
    {
        self.try_feed(Sum::new())
    }

    /// Returns the first element satisfying a predicate, stopping there.
    ///
    /// Nothing is gathered before a match, so an error comes back alone.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqflow::{prelude::*, fallible};
    ///
    /// let found = fallible::from_results([Ok(1), Ok(8), Err("late")]).try_first(|&n| n > 5);
    /// assert_eq!(found, Ok(Some(8)));
    ///
    /// let missed = fallible::from_results([Ok(1), Err("early"), Ok(8)]).try_first(|&n| n > 5);
    /// assert_eq!(missed, Err("early"));
    /// ```
    #[inline]
    fn try_first<P>(self, pred: P) -> Result<Option<Self::Item>, Self::Error>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        self.try_feed(First::new(pred)).map_err(Partial::into_error)
    }

    /// Returns the last element satisfying a predicate. The whole loop is drained.
    #[inline]
    #[allow(clippy::type_complexity)]
    fn try_last<P>(
        self,
        pred: P,
    ) -> Result<Option<Self::Item>, Partial<Option<Self::Item>, Self::Error>>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        self.try_feed(Last::new(pred))
    }

    /// Returns the first element.
    #[inline]
    fn try_head(self) -> Result<Option<Self::Item>, Self::Error>
    where
        Self: Sized,
    {
        self.try_first(any_item)
    }

    /// Returns the last element. The whole loop is drained.
    #[inline]
    #[allow(clippy::type_complexity)]
    fn try_tail(self) -> Result<Option<Self::Item>, Partial<Option<Self::Item>, Self::Error>>
    where
        Self: Sized,
    {
        self.try_last(any_item)
    }

    /// Counts the elements. The whole loop is drained.
    #[inline]
    fn try_count(self) -> Result<usize, Partial<usize, Self::Error>>
    where
        Self: Sized,
    {
        self.try_feed(Count::new())
    }

    /// Tests whether any element satisfies a predicate, stopping at the first that does.
    #[inline]
    fn try_any<P>(self, pred: P) -> Result<bool, Self::Error>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        self.try_first(pred).map(|found| found.is_some())
    }

    /// Calls a function on every element, until the loop is exhausted or fails.
    #[inline]
    fn try_for_each<F>(self, f: F) -> Result<(), Self::Error>
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        self.try_feed(ForEach::new(f)).map_err(Partial::into_error)
    }

    /// Groups the elements by a key. Elements of the same key stay in loop order.
    #[inline]
    #[allow(clippy::type_complexity)]
    fn try_group_by<F, K>(
        self,
        key: F,
    ) -> Result<HashMap<K, Vec<Self::Item>>, Partial<HashMap<K, Vec<Self::Item>>, Self::Error>>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> K,
        K: Eq + Hash,
    {
        self.key_by(key).try_feed(Groups::new())
    }
}

impl<B: BreakLoop + ?Sized> BreakLoop for &mut B {
    type Item = B::Item;
    type Error = B::Error;

    #[inline]
    fn try_next(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        (**self).try_next()
    }
}

impl<B: BreakLoop + ?Sized> BreakLoop for Box<B> {
    type Item = B::Item;
    type Error = B::Error;

    #[inline]
    fn try_next(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        (**self).try_next()
    }
}
