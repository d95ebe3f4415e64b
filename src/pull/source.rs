use std::{fmt::Debug, marker::PhantomData};

use super::{Indexed, Loop, RandomAccess};

/// Creates a loop over the elements of a slice, by reference.
///
/// # Examples
///
/// ```
/// use seqflow::{prelude::*, pull};
///
/// let words = vec![String::from("a"), String::from("b")];
/// let lens = pull::from_slice(&words).convert(String::len).sum();
///
/// assert_eq!(lens, 2);
/// ```
#[inline]
pub fn from_slice<T>(slice: &[T]) -> Indexed<&[T]> {
    Indexed::new(slice)
}

/// Creates a loop over clones of the elements of an owned container, such as an array or a [`Vec`].
///
/// Use [`from_iter()`] to move the elements out instead.
///
/// # Examples
///
/// ```
/// use seqflow::{prelude::*, pull};
///
/// assert_eq!(pull::of([3, 1, 2]).reduce(i32::max), Some(3));
/// ```
#[inline]
pub fn of<S: RandomAccess>(source: S) -> Indexed<S> {
    Indexed::new(source)
}

/// A [`Loop`] yielding whatever a generator function returns.
///
/// This `struct` is created by [`from_fn()`]. See its documentation for more.
#[derive(Clone)]
pub struct FromFn<F> {
    f: F,
}

/// Creates a loop from a generator function: every pull calls it once,
/// and the loop is exhausted when it returns `None`.
///
/// The generator decides what happens when it is called again after returning `None`;
/// wrap the loop with [`fuse()`](Loop::fuse) if that matters.
///
/// # Examples
///
/// ```
/// use seqflow::{prelude::*, pull};
///
/// let (mut a, mut b) = (0, 1);
/// let fib = pull::from_fn(move || {
///     let current = a;
///     (a, b) = (b, a + b);
///     Some(current)
/// });
///
/// assert_eq!(fib.take(7).to_vec(), [0, 1, 1, 2, 3, 5, 8]);
/// ```
#[inline]
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    FromFn { f }
}

impl<T, F> Loop for FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        (self.f)()
    }
}

impl<F> Debug for FromFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

/// A [`Loop`] pulling from an [`Iterator`].
///
/// This `struct` is created by [`from_iter()`]. See its documentation for more.
#[derive(Debug, Clone)]
pub struct FromIter<I> {
    iter: I,
}

/// Creates a loop pulling from anything iterable.
///
/// # Examples
///
/// ```
/// use seqflow::{prelude::*, pull};
///
/// let owned = vec![String::from("x"), String::from("y")];
/// assert_eq!(pull::from_iter(owned).tail().as_deref(), Some("y"));
/// ```
#[inline]
pub fn from_iter<I: IntoIterator>(iterable: I) -> FromIter<I::IntoIter> {
    FromIter {
        iter: iterable.into_iter(),
    }
}

impl<I: Iterator> Loop for FromIter<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }
}

/// A [`Loop`] that yields nothing.
///
/// This `struct` is created by [`empty()`].
pub struct Empty<T>(PhantomData<fn() -> T>);

/// Creates a loop that yields nothing.
#[inline]
pub const fn empty<T>() -> Empty<T> {
    Empty(PhantomData)
}

impl<T> Loop for Empty<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        None
    }
}

impl<T> Clone for Empty<T> {
    #[inline]
    fn clone(&self) -> Self {
        empty()
    }
}

impl<T> Debug for Empty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Empty")
    }
}

/// A [`Loop`] that yields one element.
///
/// This `struct` is created by [`once()`].
#[derive(Debug, Clone)]
pub struct Once<T> {
    item: Option<T>,
}

/// Creates a loop that yields `item` and is then exhausted.
#[inline]
pub const fn once<T>(item: T) -> Once<T> {
    Once { item: Some(item) }
}

impl<T> Loop for Once<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.item.take()
    }
}
