use std::ops::ControlFlow;

use crate::{fallible::BreakLoop, pull::Loop, push::Seq};

/// A sequence that discards a given number of elements first.
///
/// This `struct` is created by [`Loop::skip()`], [`BreakLoop::skip()`] and [`Seq::skip()`].
/// See their documentation for more.
#[derive(Debug, Clone)]
pub struct Skip<S> {
    source: S,
    n: usize,
}

impl<S> Skip<S> {
    pub(crate) fn new(source: S, n: usize) -> Self {
        Self { source, n }
    }
}

impl<L: Loop> Loop for Skip<L> {
    type Item = L::Item;

    fn next(&mut self) -> Option<Self::Item> {
        while self.n > 0 {
            self.n -= 1;
            self.source.next()?;
        }

        self.source.next()
    }
}

impl<B: BreakLoop> BreakLoop for Skip<B> {
    type Item = B::Item;
    type Error = B::Error;

    fn try_next(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        while self.n > 0 {
            self.n -= 1;
            if self.source.try_next()?.is_none() {
                return Ok(None);
            }
        }

        self.source.try_next()
    }
}

impl<S: Seq> Seq for Skip<S> {
    type Item = S::Item;

    fn drive<C>(&mut self, mut consumer: C) -> ControlFlow<()>
    where
        C: FnMut(Self::Item) -> ControlFlow<()>,
    {
        let mut to_skip = self.n;
        self.source.drive(|item| {
            if to_skip > 0 {
                to_skip -= 1;
                ControlFlow::Continue(())
            } else {
                consumer(item)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::{fallible, prelude::*, pull};

    #[test]
    fn discards_lazily() {
        let pulls = Cell::new(0);
        let mut nums = pull::range(0, 10)
            .inspect(|_| pulls.set(pulls.get() + 1))
            .skip(4);
        assert_eq!(pulls.get(), 0);

        assert_eq!(nums.next(), Some(4));
        assert_eq!(pulls.get(), 5);
        assert_eq!(nums.next(), Some(5));
    }

    #[test]
    fn error_while_discarding_counts_as_discarded() {
        let mut nums = fallible::from_results([Ok(0), Err("gap"), Ok(2), Ok(3)]).skip(2);

        assert_eq!(nums.try_next(), Err("gap"));
        assert_eq!(nums.try_next(), Ok(Some(2)));
    }
}

#[cfg(test)]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;

    use crate::{prelude::*, pull, push};

    proptest! {
        #[test]
        fn skip_then_take_matches_iterator(
            nums in propvec(any::<i32>(), ..30),
            skip in 0..40_usize,
            take in 0..40_usize,
        ) {
            let expected: Vec<i32> = nums.iter().copied().skip(skip).take(take).collect();

            prop_assert_eq!(&pull::of(nums.clone()).skip(skip).take(take).to_vec(), &expected);
            prop_assert_eq!(&push::from_iter(nums).skip(skip).take(take).to_vec(), &expected);
        }
    }
}
