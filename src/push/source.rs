use std::{fmt::Debug, marker::PhantomData, ops::ControlFlow};

use crate::pull::{self, Indexed, Integer, Range};

use super::{Replay, Seq, replay};

/// A push sequence driven by a function.
///
/// This `struct` is created by [`from_fn()`]. See its documentation for more.
pub struct FromFn<F, T> {
    f: F,
    _marker: PhantomData<fn(T)>,
}

/// Creates a push sequence from a function that pushes elements into the consumer it is given.
///
/// The function must stop as soon as the consumer returns [`Break(())`](ControlFlow::Break),
/// which the `?` operator does, and return `Break(())` in that case. It is called once per drive.
///
/// # Examples
///
/// ```
/// use std::ops::ControlFlow;
/// use seqflow::{prelude::*, push};
///
/// let mut powers = push::from_fn(|consumer| {
///     let mut power = 1_u32;
///     loop {
///         consumer(power)?;
///         power *= 3;
///     }
/// });
///
/// assert_eq!(powers.by_ref().take(4).to_vec(), [1, 3, 9, 27]);
/// assert_eq!(powers.first(|&p| p > 100), Some(243));
/// ```
#[inline]
pub fn from_fn<T, F>(f: F) -> FromFn<F, T>
where
    F: FnMut(&mut dyn FnMut(T) -> ControlFlow<()>) -> ControlFlow<()>,
{
    FromFn {
        f,
        _marker: PhantomData,
    }
}

impl<T, F> Seq for FromFn<F, T>
where
    F: FnMut(&mut dyn FnMut(T) -> ControlFlow<()>) -> ControlFlow<()>,
{
    type Item = T;

    #[inline]
    fn drive<C>(&mut self, mut consumer: C) -> ControlFlow<()>
    where
        C: FnMut(Self::Item) -> ControlFlow<()>,
    {
        (self.f)(&mut consumer)
    }
}

impl<F: Clone, T> Clone for FromFn<F, T> {
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            _marker: PhantomData,
        }
    }
}

impl<F, T> Debug for FromFn<F, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

/// Creates a push sequence over the elements of a slice, by reference.
/// Every drive starts over from the first element.
#[inline]
pub fn from_slice<T>(slice: &[T]) -> Replay<Indexed<&[T]>> {
    replay(pull::from_slice(slice))
}

/// Creates a push sequence over the half-open range between `from` and `to`, counting
/// upwards or downwards like [`pull::range()`]. Every drive starts over.
#[inline]
pub fn range<T: Integer>(from: T, to: T) -> Replay<Range<T>> {
    replay(pull::range(from, to))
}

/// A push sequence over a clonable iterable.
///
/// This `struct` is created by [`from_iter()`]. See its documentation for more.
#[derive(Debug, Clone)]
pub struct FromIter<I> {
    iterable: I,
}

/// Creates a push sequence over anything iterable that can be cloned.
///
/// Every drive iterates over a fresh clone, so the sequence can be driven any number of times.
/// Iterate over references (e.g. pass `&vec`) to avoid cloning the elements.
///
/// # Examples
///
/// ```
/// use seqflow::{prelude::*, push};
///
/// let names = vec![String::from("Ada"), String::from("Grace")];
/// let mut lens = push::from_iter(&names).convert(String::len);
///
/// assert_eq!(lens.to_vec(), [3, 5]);
/// assert_eq!(lens.sum(), 8);
/// ```
#[inline]
pub fn from_iter<I>(iterable: I) -> FromIter<I>
where
    I: IntoIterator + Clone,
{
    FromIter { iterable }
}

impl<I> Seq for FromIter<I>
where
    I: IntoIterator + Clone,
{
    type Item = I::Item;

    #[inline]
    fn drive<C>(&mut self, consumer: C) -> ControlFlow<()>
    where
        C: FnMut(Self::Item) -> ControlFlow<()>,
    {
        self.iterable.clone().into_iter().try_for_each(consumer)
    }
}
