use std::{fmt::Debug, marker::PhantomData};

use crate::pull::Loop;

use super::BreakLoop;

/// A fallible loop over a [`Loop`] that never fails.
///
/// This `struct` is created by [`Loop::with_err()`]. See its documentation for more.
pub struct WithErr<L, E> {
    source: L,
    _marker: PhantomData<fn() -> E>,
}

impl<L, E> WithErr<L, E> {
    pub(crate) fn new(source: L) -> Self {
        Self {
            source,
            _marker: PhantomData,
        }
    }

    /// Gives the infallible loop back.
    #[inline]
    pub fn into_inner(self) -> L {
        self.source
    }
}

impl<L: Loop, E> BreakLoop for WithErr<L, E> {
    type Item = L::Item;
    type Error = E;

    #[inline]
    fn try_next(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        Ok(self.source.next())
    }
}

impl<L: Clone, E> Clone for WithErr<L, E> {
    fn clone(&self) -> Self {
        Self::new(self.source.clone())
    }
}

impl<L: Debug, E> Debug for WithErr<L, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WithErr")
            .field("source", &self.source)
            .finish()
    }
}

/// A fallible loop over an externally driven cursor.
///
/// This `struct` is created by [`from_cursor()`]. See its documentation for more.
#[derive(Clone)]
pub struct Cursor<H, N> {
    has_next: H,
    next: N,
    done: bool,
}

/// Creates a fallible loop over a cursor that is asked `has_next()` before every `next()`,
/// such as the rows of a database query.
///
/// The loop is exhausted as soon as `has_next()` returns `false` or `next()` fails, and
/// neither function is called again after that.
///
/// # Examples
///
/// ```
/// use seqflow::{prelude::*, fallible};
///
/// let mut rows = vec!["3", "1", "oops", "2"].into_iter();
/// let mut has_next_rows = rows.clone();
///
/// let total = fallible::from_cursor(
///     || has_next_rows.next().is_some(),
///     || {
///         let row = rows.next().unwrap_or_default();
///         row.parse::<u32>().map_err(|_| format!("bad row: {row}"))
///     },
/// )
/// .try_sum();
///
/// let partial = total.unwrap_err();
/// assert_eq!(partial.gathered, 4);
/// assert_eq!(partial.error, "bad row: oops");
/// ```
pub fn from_cursor<T, E, H, N>(has_next: H, next: N) -> Cursor<H, N>
where
    H: FnMut() -> bool,
    N: FnMut() -> Result<T, E>,
{
    Cursor {
        has_next,
        next,
        done: false,
    }
}

impl<T, E, H, N> BreakLoop for Cursor<H, N>
where
    H: FnMut() -> bool,
    N: FnMut() -> Result<T, E>,
{
    type Item = T;
    type Error = E;

    fn try_next(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        if self.done {
            return Ok(None);
        }

        if !(self.has_next)() {
            self.done = true;
            return Ok(None);
        }

        match (self.next)() {
            Ok(item) => Ok(Some(item)),
            Err(error) => {
                self.done = true;
                Err(error)
            }
        }
    }
}

impl<H, N> Debug for Cursor<H, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

/// A fallible loop over anything iterable that yields [`Result`]s.
///
/// This `struct` is created by [`from_results()`]. See its documentation for more.
#[derive(Debug, Clone)]
pub struct FromResults<I> {
    iter: I,
}

/// Creates a fallible loop over an iterable of [`Result`]s: `Ok` elements are yielded,
/// `Err` elements are returned as the error of their pull.
///
/// The loop does not stop by itself on an error; the next pull moves on to the next
/// result. Wrap it with [`fuse()`](BreakLoop::fuse) to make the first error final.
#[inline]
pub fn from_results<I, T, E>(iterable: I) -> FromResults<I::IntoIter>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    FromResults {
        iter: iterable.into_iter(),
    }
}

impl<I, T, E> BreakLoop for FromResults<I>
where
    I: Iterator<Item = Result<T, E>>,
{
    type Item = T;
    type Error = E;

    #[inline]
    fn try_next(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        self.iter.next().transpose()
    }
}

/// A fallible loop yielding whatever a generator function returns.
///
/// This `struct` is created by [`from_fn()`]. See its documentation for more.
#[derive(Clone)]
pub struct FromFn<F> {
    f: F,
}

/// Creates a fallible loop from a generator function, called once per pull.
///
/// # Examples
///
/// ```
/// use seqflow::{prelude::*, fallible};
///
/// let mut budget = 10_i32;
/// let withdrawals = fallible::from_fn(move || {
///     budget -= 4;
///     if budget < 0 { Err(budget) } else { Ok(Some(4)) }
/// });
///
/// assert_eq!(withdrawals.try_count().unwrap_err().gathered, 2);
/// ```
#[inline]
pub fn from_fn<T, E, F>(f: F) -> FromFn<F>
where
    F: FnMut() -> Result<Option<T>, E>,
{
    FromFn { f }
}

impl<T, E, F> BreakLoop for FromFn<F>
where
    F: FnMut() -> Result<Option<T>, E>,
{
    type Item = T;
    type Error = E;

    #[inline]
    fn try_next(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        (self.f)()
    }
}

impl<F> Debug for FromFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}
