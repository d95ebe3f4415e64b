use std::{fmt::Debug, ops::ControlFlow};

use super::{Collector, assert_collector};

/// A collector that searches for the first element satisfying a predicate.
///
/// When the collector encounters an element that makes the predicate return `true`,
/// it returns [`Break`] and stops looking, so the predicate is never called on
/// anything after the match. Its [`Output`](Collector::Output) is `None` if nothing matched.
///
/// # Examples
///
/// ```
/// use seqflow::{prelude::*, collect::First};
///
/// let mut collector = First::new(|&x: &i32| x % 3 == 0);
///
/// assert!(collector.collect(1).is_continue());
/// assert!(collector.collect(5).is_continue());
///
/// // Found!
/// assert!(collector.collect(6).is_break());
///
/// assert_eq!(collector.finish(), Some(6));
/// ```
///
/// [`Break`]: std::ops::ControlFlow::Break
#[derive(Clone)]
pub struct First<T, P> {
    state: State<T, P>,
}

#[derive(Clone)]
enum State<T, P> {
    Searching(P),
    Found(T),
}

impl<T, P> First<T, P>
where
    P: FnMut(&T) -> bool,
{
    /// Creates an instance of this collector with a given predicate.
    #[inline]
    pub const fn new(pred: P) -> Self {
        assert_collector::<_, T>(Self {
            state: State::Searching(pred),
        })
    }
}

impl<T, P> Collector<T> for First<T, P>
where
    P: FnMut(&T) -> bool,
{
    type Output = Option<T>;

    fn collect(&mut self, item: T) -> ControlFlow<()> {
        if let State::Searching(ref mut pred) = self.state {
            if pred(&item) {
                self.state = State::Found(item);
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        } else {
            ControlFlow::Break(())
        }
    }

    #[inline]
    fn finish(self) -> Self::Output {
        match self.state {
            State::Found(item) => Some(item),
            State::Searching(_) => None,
        }
    }
}

impl<T: Debug, P> Debug for First<T, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let found = match &self.state {
            State::Found(item) => Some(item),
            State::Searching(_) => None,
        };

        f.debug_struct("First").field("found", &found).finish()
    }
}

/// A collector that keeps the last element satisfying a predicate.
///
/// Unlike [`First`], it has to see every element, so it never stops early.
///
/// # Examples
///
/// ```
/// use seqflow::{prelude::*, collect::Last};
///
/// let mut collector = Last::new(|&x: &i32| x % 2 == 0);
/// let _ = collector.collect_many([2, 4, 5, 7]);
///
/// assert_eq!(collector.finish(), Some(4));
/// ```
#[derive(Clone)]
pub struct Last<T, P> {
    value: Option<T>,
    pred: P,
}

impl<T, P> Last<T, P>
where
    P: FnMut(&T) -> bool,
{
    /// Creates an instance of this collector with a given predicate.
    #[inline]
    pub const fn new(pred: P) -> Self {
        assert_collector::<_, T>(Self { value: None, pred })
    }
}

impl<T, P> Collector<T> for Last<T, P>
where
    P: FnMut(&T) -> bool,
{
    type Output = Option<T>;

    #[inline]
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        if (self.pred)(&item) {
            self.value = Some(item);
        }

        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(self) -> Self::Output {
        self.value
    }
}

impl<T: Debug, P> Debug for Last<T, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Last").field("value", &self.value).finish()
    }
}
