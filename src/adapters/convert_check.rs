use std::{fmt::Debug, ops::ControlFlow};

use crate::{fallible::BreakLoop, pull::Loop, push::Seq};

/// A sequence that converts every element and skips those the conversion rejects.
///
/// This `struct` is created by [`Loop::convert_check()`], [`BreakLoop::convert_check()`]
/// and [`Seq::convert_check()`]. See their documentation for more.
#[derive(Clone)]
pub struct ConvertCheck<S, F> {
    source: S,
    f: F,
}

impl<S, F> ConvertCheck<S, F> {
    pub(crate) fn new(source: S, f: F) -> Self {
        Self { source, f }
    }
}

impl<L, F, R> Loop for ConvertCheck<L, F>
where
    L: Loop,
    F: FnMut(L::Item) -> Option<R>,
{
    type Item = R;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while let Some(item) = self.source.next() {
            if let Some(converted) = (self.f)(item) {
                return Some(converted);
            }
        }

        None
    }
}

impl<B, F, R> BreakLoop for ConvertCheck<B, F>
where
    B: BreakLoop,
    F: FnMut(B::Item) -> Option<R>,
{
    type Item = R;
    type Error = B::Error;

    #[inline]
    fn try_next(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        while let Some(item) = self.source.try_next()? {
            if let Some(converted) = (self.f)(item) {
                return Ok(Some(converted));
            }
        }

        Ok(None)
    }
}

impl<S, F, R> Seq for ConvertCheck<S, F>
where
    S: Seq,
    F: FnMut(S::Item) -> Option<R>,
{
    type Item = R;

    #[inline]
    fn drive<C>(&mut self, mut consumer: C) -> ControlFlow<()>
    where
        C: FnMut(Self::Item) -> ControlFlow<()>,
    {
        let f = &mut self.f;
        self.source.drive(|item| match f(item) {
            Some(converted) => consumer(converted),
            None => ControlFlow::Continue(()),
        })
    }
}

impl<S: Debug, F> Debug for ConvertCheck<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConvertCheck")
            .field("source", &self.source)
            .finish()
    }
}

#[cfg(test)]
mod proptests {
    use std::cell::Cell;

    use proptest::collection::vec as propvec;
    use proptest::prelude::*;

    use crate::{prelude::*, pull, push};

    proptest! {
        #[test]
        fn matches_iterator_filter_map(words in propvec("-?[0-9]{1,3}|[a-z]{1,3}", ..40)) {
            let expected: Vec<i32> = words.iter().filter_map(|word| word.parse().ok()).collect();
            let calls = Cell::new(0);

            let pulled = pull::from_slice(&words)
                .convert_check(|word| {
                    calls.set(calls.get() + 1);
                    word.parse::<i32>().ok()
                })
                .to_vec();
            let pushed = push::from_slice(&words)
                .convert_check(|word| word.parse::<i32>().ok())
                .to_vec();

            prop_assert_eq!(&pulled, &expected);
            prop_assert_eq!(&pushed, &expected);
            // One call per element, never a second one for the check.
            prop_assert_eq!(calls.get(), words.len());
        }
    }
}
