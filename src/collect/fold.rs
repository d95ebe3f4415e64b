use std::{fmt::Debug, ops::ControlFlow};

use super::{Collector, assert_collector};

/// A collector that reduces all collected elements into a single value
/// by repeatedly applying a reduction function, seeded with the first element.
///
/// If no elements have been collected, its [`Output`](Collector::Output) is `None`;
/// otherwise, it is `Some` containing the result of the reduction.
///
/// # Examples
///
/// ```
/// use seqflow::{prelude::*, collect::Reduce};
///
/// let mut collector = Reduce::new(|accum, num| accum + num);
///
/// assert!(collector.collect(1).is_continue());
/// assert!(collector.collect(3).is_continue());
/// assert!(collector.collect(5).is_continue());
///
/// assert_eq!(collector.finish(), Some(9));
/// ```
///
/// The output is `None` if no elements were collected.
///
/// ```
/// use seqflow::{prelude::*, collect::Reduce};
///
/// assert_eq!(Reduce::new(|accum: i32, num| accum + num).finish(), None);
/// ```
#[derive(Clone)]
pub struct Reduce<T, F> {
    accum: Option<T>,
    f: F,
}

impl<T, F> Reduce<T, F>
where
    F: FnMut(T, T) -> T,
{
    /// Creates a new instance of this collector with a given reduction function.
    #[inline]
    pub const fn new(f: F) -> Self {
        assert_collector::<_, T>(Self { accum: None, f })
    }
}

impl<T, F> Collector<T> for Reduce<T, F>
where
    F: FnMut(T, T) -> T,
{
    type Output = Option<T>;

    fn collect(&mut self, item: T) -> ControlFlow<()> {
        self.accum = Some(match self.accum.take() {
            Some(accum) => (self.f)(accum, item),
            None => item,
        });

        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(self) -> Self::Output {
        self.accum
    }
}

impl<T: Debug, F> Debug for Reduce<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reduce")
            .field("accum", &self.accum)
            .finish()
    }
}

/// A collector that counts the elements it collects.
#[derive(Debug, Clone, Copy, Default)]
pub struct Count {
    count: usize,
}

impl Count {
    /// Creates a new instance of this collector, with the count at zero.
    #[inline]
    pub const fn new() -> Self {
        Self { count: 0 }
    }
}

impl<T> Collector<T> for Count {
    type Output = usize;

    #[inline]
    fn collect(&mut self, _item: T) -> ControlFlow<()> {
        self.count += 1;
        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(self) -> Self::Output {
        self.count
    }
}

/// A collector that hands every element to a closure.
#[derive(Clone)]
pub struct ForEach<F> {
    f: F,
}

impl<F> ForEach<F> {
    /// Creates a new instance of this collector with a given closure.
    #[inline]
    pub const fn new<T>(f: F) -> Self
    where
        F: FnMut(T),
    {
        assert_collector::<_, T>(Self { f })
    }
}

impl<T, F> Collector<T> for ForEach<F>
where
    F: FnMut(T),
{
    type Output = ();

    #[inline]
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        (self.f)(item);
        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(self) -> Self::Output {}
}

impl<F> Debug for ForEach<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForEach").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;

    use super::*;
    use crate::test_utils::proptest_collector;

    proptest! {
        #[test]
        fn reduce_is_consistent_across_drivers(nums in propvec(any::<i32>(), ..=9)) {
            let expected = nums.iter().copied().reduce(|a, b| a.wrapping_sub(b));
            proptest_collector(&nums, || Reduce::new(|a: i32, b| a.wrapping_sub(b)), &expected)?;
        }

        #[test]
        fn count_is_consistent_across_drivers(nums in propvec(any::<i32>(), ..50)) {
            proptest_collector(&nums, Count::new, &nums.len())?;
        }

        #[test]
        fn reduce_matches_iterator(nums in propvec(any::<i32>(), ..=9)) {
            let mut collector = Reduce::new(|a, b| a ^ b);
            let _ = collector.collect_many(nums.iter().copied());

            prop_assert_eq!(collector.finish(), nums.iter().copied().reduce(|a, b| a ^ b));
        }

        #[test]
        fn count_matches_len(nums in propvec(any::<i32>(), ..50)) {
            let mut collector = Count::new();
            let _ = collector.collect_many(nums.iter());

            prop_assert_eq!(Collector::<&i32>::finish(collector), nums.len());
        }
    }
}
