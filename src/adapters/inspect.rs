use std::{fmt::Debug, ops::ControlFlow};

use crate::{fallible::BreakLoop, pull::Loop, push::Seq};

/// A sequence that calls a function on every element it passes on.
///
/// This `struct` is created by [`Loop::inspect()`], [`BreakLoop::inspect()`] and [`Seq::inspect()`].
#[derive(Clone)]
pub struct Inspect<S, F> {
    source: S,
    f: F,
}

impl<S, F> Inspect<S, F> {
    pub(crate) fn new(source: S, f: F) -> Self {
        Self { source, f }
    }
}

impl<L, F> Loop for Inspect<L, F>
where
    L: Loop,
    F: FnMut(&L::Item),
{
    type Item = L::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.source.next()?;
        (self.f)(&item);
        Some(item)
    }
}

impl<B, F> BreakLoop for Inspect<B, F>
where
    B: BreakLoop,
    F: FnMut(&B::Item),
{
    type Item = B::Item;
    type Error = B::Error;

    #[inline]
    fn try_next(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        let item = self.source.try_next()?;
        if let Some(item) = &item {
            (self.f)(item);
        }

        Ok(item)
    }
}

impl<S, F> Seq for Inspect<S, F>
where
    S: Seq,
    F: FnMut(&S::Item),
{
    type Item = S::Item;

    #[inline]
    fn drive<C>(&mut self, mut consumer: C) -> ControlFlow<()>
    where
        C: FnMut(Self::Item) -> ControlFlow<()>,
    {
        let f = &mut self.f;
        self.source.drive(|item| {
            f(&item);
            consumer(item)
        })
    }
}

impl<S: Debug, F> Debug for Inspect<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Inspect")
            .field("source", &self.source)
            .finish()
    }
}
