use std::iter::FusedIterator;

use crate::{adapters::Fuse, pull::Loop};

/// An [`Iterator`] pulling from a [`Loop`].
///
/// This `struct` is created by [`Loop::iter()`]. See its documentation for more.
#[derive(Debug, Clone)]
pub struct Iter<L> {
    source: L,
}

impl<L> Iter<L> {
    pub(in crate::pull) fn new(source: L) -> Self {
        Self { source }
    }

    /// Gives the loop back.
    #[inline]
    pub fn into_inner(self) -> L {
        self.source
    }
}

impl<L: Loop> Iterator for Iter<L> {
    type Item = L::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.source.next()
    }
}

impl<L: Loop> FusedIterator for Iter<Fuse<L>> {}
