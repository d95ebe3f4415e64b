use std::{fmt::Debug, ops::ControlFlow};

use crate::{fallible::BreakLoop, pull::Loop, push::Seq};

/// A sequence that only yields the elements satisfying a predicate.
///
/// This `struct` is created by [`Loop::filter()`], [`BreakLoop::filter()`] and [`Seq::filter()`].
/// See their documentation for more.
#[derive(Clone)]
pub struct Filter<S, P> {
    source: S,
    pred: P,
}

impl<S, P> Filter<S, P> {
    pub(crate) fn new(source: S, pred: P) -> Self {
        Self { source, pred }
    }
}

impl<L, P> Loop for Filter<L, P>
where
    L: Loop,
    P: FnMut(&L::Item) -> bool,
{
    type Item = L::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while let Some(item) = self.source.next() {
            if (self.pred)(&item) {
                return Some(item);
            }
        }

        None
    }
}

impl<B, P> BreakLoop for Filter<B, P>
where
    B: BreakLoop,
    P: FnMut(&B::Item) -> bool,
{
    type Item = B::Item;
    type Error = B::Error;

    #[inline]
    fn try_next(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        while let Some(item) = self.source.try_next()? {
            if (self.pred)(&item) {
                return Ok(Some(item));
            }
        }

        Ok(None)
    }
}

impl<S, P> Seq for Filter<S, P>
where
    S: Seq,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    #[inline]
    fn drive<C>(&mut self, mut consumer: C) -> ControlFlow<()>
    where
        C: FnMut(Self::Item) -> ControlFlow<()>,
    {
        let pred = &mut self.pred;
        self.source.drive(|item| {
            if pred(&item) {
                consumer(item)
            } else {
                ControlFlow::Continue(())
            }
        })
    }
}

impl<S: Debug, P> Debug for Filter<S, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filter")
            .field("source", &self.source)
            .finish()
    }
}

/// A fallible loop that only yields the elements satisfying a fallible predicate.
///
/// This `struct` is created by [`BreakLoop::try_filter()`]. See its documentation for more.
#[derive(Clone)]
pub struct TryFilter<B, P> {
    source: B,
    pred: P,
}

impl<B, P> TryFilter<B, P> {
    pub(crate) fn new(source: B, pred: P) -> Self {
        Self { source, pred }
    }
}

impl<B, P> BreakLoop for TryFilter<B, P>
where
    B: BreakLoop,
    P: FnMut(&B::Item) -> Result<bool, B::Error>,
{
    type Item = B::Item;
    type Error = B::Error;

    fn try_next(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        while let Some(item) = self.source.try_next()? {
            if (self.pred)(&item)? {
                return Ok(Some(item));
            }
        }

        Ok(None)
    }
}

impl<B: Debug, P> Debug for TryFilter<B, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TryFilter")
            .field("source", &self.source)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::{fallible, prelude::*, pull, push};

    #[test]
    fn nothing_runs_before_the_first_pull() {
        let calls = Cell::new(0);
        let mut evens = pull::range(0, 10).filter(|n| {
            calls.set(calls.get() + 1);
            n % 2 == 0
        });
        assert_eq!(calls.get(), 0);

        assert_eq!(evens.next(), Some(0));
        assert_eq!(calls.get(), 1);

        // `1` is examined and skipped within the same pull.
        assert_eq!(evens.next(), Some(2));
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn nothing_runs_before_the_first_drive() {
        let calls = Cell::new(0);
        let mut evens = push::range(0, 10).filter(|n| {
            calls.set(calls.get() + 1);
            n % 2 == 0
        });
        assert_eq!(calls.get(), 0);

        assert_eq!(evens.head(), Some(0));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn fallible_filter_passes_errors_through() {
        let mut odds =
            fallible::from_results([Ok(1), Ok(2), Err("bad row"), Ok(3)]).filter(|n| n % 2 == 1);

        assert_eq!(odds.try_next(), Ok(Some(1)));
        assert_eq!(odds.try_next(), Err("bad row"));
        assert_eq!(odds.try_next(), Ok(Some(3)));
    }
}

#[cfg(test)]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;

    use crate::{prelude::*, pull, push};

    proptest! {
        #[test]
        fn matches_iterator_filter(nums in propvec(any::<i32>(), ..100)) {
            let expected: Vec<i32> = nums.iter().copied().filter(|num| num % 3 == 0).collect();

            prop_assert_eq!(&pull::of(nums.clone()).filter(|num| num % 3 == 0).to_vec(), &expected);
            prop_assert_eq!(push::from_iter(nums).filter(|num| num % 3 == 0).to_vec(), expected);
        }
    }
}
