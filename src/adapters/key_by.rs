use std::{fmt::Debug, ops::ControlFlow};

use crate::{fallible::BreakLoop, pull::Loop, push::Seq};

/// A key/value sequence yielding every element along with its key.
///
/// This `struct` is created by [`Loop::key_by()`], [`BreakLoop::key_by()`] and [`Seq::key_by()`].
/// See their documentation for more.
#[derive(Clone)]
pub struct KeyBy<S, F> {
    source: S,
    key: F,
}

impl<S, F> KeyBy<S, F> {
    pub(crate) fn new(source: S, key: F) -> Self {
        Self { source, key }
    }
}

impl<L, F, K> Loop for KeyBy<L, F>
where
    L: Loop,
    F: FnMut(&L::Item) -> K,
{
    type Item = (K, L::Item);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.source.next()?;
        Some(((self.key)(&item), item))
    }
}

impl<B, F, K> BreakLoop for KeyBy<B, F>
where
    B: BreakLoop,
    F: FnMut(&B::Item) -> K,
{
    type Item = (K, B::Item);
    type Error = B::Error;

    #[inline]
    fn try_next(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        Ok(self
            .source
            .try_next()?
            .map(|item| ((self.key)(&item), item)))
    }
}

impl<S, F, K> Seq for KeyBy<S, F>
where
    S: Seq,
    F: FnMut(&S::Item) -> K,
{
    type Item = (K, S::Item);

    #[inline]
    fn drive<C>(&mut self, mut consumer: C) -> ControlFlow<()>
    where
        C: FnMut(Self::Item) -> ControlFlow<()>,
    {
        let key = &mut self.key;
        self.source.drive(|item| consumer((key(&item), item)))
    }
}

impl<S: Debug, F> Debug for KeyBy<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyBy")
            .field("source", &self.source)
            .finish()
    }
}
