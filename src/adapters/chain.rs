use std::ops::ControlFlow;

use crate::{pull::Loop, push::Seq};

/// A sequence that yields the elements of one sequence, then those of another.
///
/// This `struct` is created by [`Loop::chain()`] and [`Seq::chain()`]. See their documentation for more.
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    // A pull loop drops it once exhausted, so it is never pulled again.
    first: Option<A>,
    second: B,
}

impl<A, B> Chain<A, B> {
    pub(crate) fn new(first: A, second: B) -> Self {
        Self {
            first: Some(first),
            second,
        }
    }
}

impl<A, B> Loop for Chain<A, B>
where
    A: Loop,
    B: Loop<Item = A::Item>,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(first) = &mut self.first {
            if let Some(item) = first.next() {
                return Some(item);
            }

            self.first = None;
        }

        self.second.next()
    }
}

impl<A, B> Seq for Chain<A, B>
where
    A: Seq,
    B: Seq<Item = A::Item>,
{
    type Item = A::Item;

    fn drive<C>(&mut self, mut consumer: C) -> ControlFlow<()>
    where
        C: FnMut(Self::Item) -> ControlFlow<()>,
    {
        if let Some(first) = &mut self.first {
            first.drive(&mut consumer)?;
        }

        self.second.drive(consumer)
    }
}

#[cfg(test)]
mod tests {
    use crate::{prelude::*, pull, push};

    #[test]
    fn first_loop_is_not_pulled_after_exhaustion() {
        let mut calls = 0;
        let flaky = pull::from_fn(|| {
            calls += 1;
            // Would start over after returning `None` if asked again.
            (calls % 3 != 0).then_some(calls)
        });

        let nums = flaky.chain(pull::range(10, 13)).to_vec();

        assert_eq!(nums, [1, 2, 10, 11, 12]);
        assert_eq!(calls, 3);
    }

    #[test]
    fn push_chain_stops_in_the_first_half() {
        let mut both = push::range(0, 3).chain(push::range(3, 6));

        assert_eq!(both.to_vec(), [0, 1, 2, 3, 4, 5]);
        assert_eq!(both.first(|&n| n >= 1), Some(1));
        assert_eq!(both.tail(), Some(5));
    }
}
