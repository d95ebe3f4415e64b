use std::collections::VecDeque;

use super::{Loop, Restart};

/// A fixed-length container whose elements can be fetched by index.
///
/// [`Indexed`] walks any such container with a plain index, which is all a zero-copy
/// loop over an array needs.
pub trait RandomAccess {
    /// The type of the fetched elements.
    type Item;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns the element at `index`, or `None` if `index` is out of bounds.
    fn get(&self, index: usize) -> Option<Self::Item>;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a, T> RandomAccess for &'a [T] {
    type Item = &'a T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<Self::Item> {
        <[T]>::get(*self, index)
    }
}

impl<T: Clone> RandomAccess for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<Self::Item> {
        <[T]>::get(self, index).cloned()
    }
}

impl<T: Clone, const N: usize> RandomAccess for [T; N] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, index: usize) -> Option<Self::Item> {
        <[T]>::get(self, index).cloned()
    }
}

impl<T: Clone> RandomAccess for VecDeque<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<Self::Item> {
        VecDeque::get(self, index).cloned()
    }
}

/// A [`Loop`] walking a [`RandomAccess`] container from its first element to its last.
///
/// This `struct` is created by [`from_slice()`](super::from_slice) and [`of()`](super::of).
/// It can be [restarted](Restart), and it keeps returning `None` once exhausted.
#[derive(Debug, Clone)]
pub struct Indexed<S> {
    source: S,
    index: usize,
}

impl<S: RandomAccess> Indexed<S> {
    /// Creates a loop starting at the first element of `source`.
    #[inline]
    pub fn new(source: S) -> Self {
        Self { source, index: 0 }
    }

    /// Returns how many elements are left.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.source.len().saturating_sub(self.index)
    }

    /// Gives the container back.
    #[inline]
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: RandomAccess> Loop for Indexed<S> {
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.source.get(self.index)?;
        self.index += 1;
        Some(item)
    }
}

impl<S: RandomAccess> Restart for Indexed<S> {
    #[inline]
    fn restart(&mut self) {
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhaustion_is_idempotent() {
        let nums = [1, 2];
        let mut lp = Indexed::new(&nums[..]);

        assert_eq!(lp.remaining(), 2);
        assert_eq!(lp.next(), Some(&1));
        assert_eq!(lp.next(), Some(&2));
        assert_eq!(lp.remaining(), 0);
        for _ in 0..3 {
            assert_eq!(lp.next(), None);
        }
    }

    #[test]
    fn deque_is_walked_front_to_back() {
        let mut deque = VecDeque::from([2, 3]);
        deque.push_front(1);

        assert_eq!(Indexed::new(deque).to_vec(), [1, 2, 3]);
    }
}
