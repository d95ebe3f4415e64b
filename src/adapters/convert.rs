use std::{fmt::Debug, ops::ControlFlow};

use crate::{fallible::BreakLoop, pull::Loop, push::Seq};

/// A sequence that converts every element with a function.
///
/// This `struct` is created by [`Loop::convert()`], [`BreakLoop::convert()`] and [`Seq::convert()`].
/// See their documentation for more.
#[derive(Clone)]
pub struct Convert<S, F> {
    source: S,
    f: F,
}

impl<S, F> Convert<S, F> {
    pub(crate) fn new(source: S, f: F) -> Self {
        Self { source, f }
    }
}

impl<L, F, R> Loop for Convert<L, F>
where
    L: Loop,
    F: FnMut(L::Item) -> R,
{
    type Item = R;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.source.next().map(&mut self.f)
    }
}

impl<B, F, R> BreakLoop for Convert<B, F>
where
    B: BreakLoop,
    F: FnMut(B::Item) -> R,
{
    type Item = R;
    type Error = B::Error;

    #[inline]
    fn try_next(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        Ok(self.source.try_next()?.map(&mut self.f))
    }
}

impl<S, F, R> Seq for Convert<S, F>
where
    S: Seq,
    F: FnMut(S::Item) -> R,
{
    type Item = R;

    #[inline]
    fn drive<C>(&mut self, mut consumer: C) -> ControlFlow<()>
    where
        C: FnMut(Self::Item) -> ControlFlow<()>,
    {
        let f = &mut self.f;
        self.source.drive(|item| consumer(f(item)))
    }
}

impl<S: Debug, F> Debug for Convert<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Convert")
            .field("source", &self.source)
            .finish()
    }
}

/// A sequence that converts every element with a fallible function.
///
/// As a [`BreakLoop`], a failed conversion is returned as the error of the pull.
/// As a [`Seq`] of `Result`s, the conversion is applied to the `Ok` elements and
/// errors are pushed on unchanged.
///
/// This `struct` is created by [`BreakLoop::try_convert()`] and
/// [`TrySeq::try_convert()`](crate::push::TrySeq::try_convert).
#[derive(Clone)]
pub struct TryConvert<S, F> {
    source: S,
    f: F,
}

impl<S, F> TryConvert<S, F> {
    pub(crate) fn new(source: S, f: F) -> Self {
        Self { source, f }
    }
}

impl<B, F, R> BreakLoop for TryConvert<B, F>
where
    B: BreakLoop,
    F: FnMut(B::Item) -> Result<R, B::Error>,
{
    type Item = R;
    type Error = B::Error;

    #[inline]
    fn try_next(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        match self.source.try_next()? {
            Some(item) => (self.f)(item).map(Some),
            None => Ok(None),
        }
    }
}

impl<S, F, T, E, R> Seq for TryConvert<S, F>
where
    S: Seq<Item = Result<T, E>>,
    F: FnMut(T) -> Result<R, E>,
{
    type Item = Result<R, E>;

    #[inline]
    fn drive<C>(&mut self, mut consumer: C) -> ControlFlow<()>
    where
        C: FnMut(Self::Item) -> ControlFlow<()>,
    {
        let f = &mut self.f;
        self.source.drive(|item| consumer(item.and_then(&mut *f)))
    }
}

impl<S: Debug, F> Debug for TryConvert<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TryConvert")
            .field("source", &self.source)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{prelude::*, pull, push};

    #[test]
    fn failed_conversion_skips_downstream_adaptors() {
        let mut downstream = 0;
        let mut nums = pull::from_slice(&["1", "x", "3"])
            .with_err()
            .try_convert(|s| s.parse::<i32>())
            .inspect(|_| downstream += 1);

        assert_eq!(nums.try_next(), Ok(Some(1)));
        assert!(nums.try_next().is_err());
        assert_eq!(nums.try_next(), Ok(Some(3)));
        drop(nums);

        assert_eq!(downstream, 2);
    }

    #[test]
    fn push_conversion_leaves_errors_alone() {
        let parsed = push::from_iter(vec![Ok("4"), Err(0_u8), Ok("5")])
            .try_convert(|s: &str| s.parse::<i32>().map_err(|_| 1))
            .to_vec();

        assert_eq!(parsed, [Ok(4), Err(0), Ok(5)]);
    }
}

#[cfg(test)]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;

    use crate::{prelude::*, pull, push};

    proptest! {
        #[test]
        fn filter_then_convert_matches_iterator(nums in propvec(any::<i16>(), ..100)) {
            let expected: Vec<i32> = nums
                .iter()
                .filter(|&&num| num > 0)
                .map(|&num| i32::from(num) * 3)
                .collect();

            let chained = pull::from_slice(&nums)
                .filter(|&&num| num > 0)
                .convert(|&num| i32::from(num) * 3)
                .to_vec();
            let fused = pull::from_slice(&nums)
                .filter_convert(|&&num| num > 0, |&num| i32::from(num) * 3)
                .to_vec();
            let pushed = push::from_slice(&nums)
                .filter_convert(|&&num| num > 0, |&num| i32::from(num) * 3)
                .to_vec();

            prop_assert_eq!(&chained, &expected);
            prop_assert_eq!(&fused, &expected);
            prop_assert_eq!(&pushed, &expected);
        }

        #[test]
        fn convert_then_filter_matches_iterator(nums in propvec(any::<i16>(), ..100)) {
            let expected: Vec<i32> = nums
                .iter()
                .map(|&num| i32::from(num) - 7)
                .filter(|num| num % 2 == 0)
                .collect();

            let actual = pull::from_slice(&nums)
                .convert_filter(|&num| i32::from(num) - 7, |num| num % 2 == 0)
                .to_vec();

            prop_assert_eq!(actual, expected);
        }
    }
}
