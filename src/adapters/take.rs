use std::ops::ControlFlow;

use crate::{fallible::BreakLoop, pull::Loop, push::Seq};

/// A sequence that yields at most a given number of elements.
///
/// This `struct` is created by [`Loop::take()`], [`BreakLoop::take()`] and [`Seq::take()`].
/// See their documentation for more.
#[derive(Debug, Clone)]
pub struct Take<S> {
    source: S,
    remaining: usize,
}

impl<S> Take<S> {
    pub(crate) fn new(source: S, n: usize) -> Self {
        Self {
            source,
            remaining: n,
        }
    }
}

impl<L: Loop> Loop for Take<L> {
    type Item = L::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        self.source.next()
    }
}

impl<B: BreakLoop> BreakLoop for Take<B> {
    type Item = B::Item;
    type Error = B::Error;

    #[inline]
    fn try_next(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        if self.remaining == 0 {
            return Ok(None);
        }

        self.remaining -= 1;
        self.source.try_next()
    }
}

// Every drive starts over from `remaining`, like the source it wraps.
impl<S: Seq> Seq for Take<S> {
    type Item = S::Item;

    fn drive<C>(&mut self, mut consumer: C) -> ControlFlow<()>
    where
        C: FnMut(Self::Item) -> ControlFlow<()>,
    {
        let mut remaining = self.remaining;
        if remaining == 0 {
            return ControlFlow::Continue(());
        }

        let mut consumer_stopped = false;
        let _ = self.source.drive(|item| {
            remaining -= 1;
            if consumer(item).is_break() {
                consumer_stopped = true;
                return ControlFlow::Break(());
            }

            if remaining == 0 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });

        if consumer_stopped {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        prelude::*,
        pull,
        test_utils::{strict_naturals, strict_push_naturals},
    };

    #[test]
    fn never_overpulls() {
        assert_eq!(strict_naturals(3).take(3).to_vec(), [0, 1, 2]);
        assert!(strict_naturals(0).take(0).to_vec().is_empty());
    }

    #[test]
    fn never_overpushes() {
        let mut firsts = strict_push_naturals(3).take(3);

        assert_eq!(firsts.to_vec(), [0, 1, 2]);
        // Driving again replays the same prefix.
        assert_eq!(firsts.to_vec(), [0, 1, 2]);
        assert!(strict_push_naturals(0).take(0).to_vec().is_empty());
    }

    #[test]
    fn reaching_the_limit_is_not_a_stop() {
        let mut firsts = strict_push_naturals(2).take(2);

        assert!(firsts.drive(|_| std::ops::ControlFlow::Continue(())).is_continue());
        assert!(firsts.drive(|_| std::ops::ControlFlow::Break(())).is_break());
    }

    #[test]
    fn shorter_source() {
        let mut nums = pull::range(0, 2).take(5);

        assert_eq!(nums.by_ref().to_vec(), [0, 1]);
        assert_eq!(nums.next(), None);
    }
}
