use std::{fmt::Debug, ops::ControlFlow, vec};

use crate::{
    fallible::BreakLoop,
    pull::{Loop, Restart},
};

use super::Seq;

/// A push sequence driving a pull loop.
///
/// Every drive pulls from where the loop stands, so a single-pass loop is pushed once:
/// driving again pushes whatever the previous drive left behind.
/// Use [`Replay`] to push a restartable loop from its start every time.
///
/// This `struct` is created by [`Loop::seq()`](crate::pull::Loop::seq).
#[derive(Debug, Clone)]
pub struct Pushed<L> {
    source: L,
}

impl<L> Pushed<L> {
    pub(crate) fn new(source: L) -> Self {
        Self { source }
    }

    /// Gives the loop back.
    #[inline]
    pub fn into_inner(self) -> L {
        self.source
    }
}

impl<L: Loop> Seq for Pushed<L> {
    type Item = L::Item;

    #[inline]
    fn drive<C>(&mut self, mut consumer: C) -> ControlFlow<()>
    where
        C: FnMut(Self::Item) -> ControlFlow<()>,
    {
        while let Some(item) = self.source.next() {
            consumer(item)?;
        }

        ControlFlow::Continue(())
    }
}

/// A push sequence that restarts a pull loop before every drive.
///
/// This `struct` is created by [`replay()`], [`from_slice()`](super::from_slice) and
/// [`range()`](super::range).
#[derive(Debug, Clone)]
pub struct Replay<L> {
    source: L,
}

/// Creates a push sequence replaying a [restartable](Restart) loop from its first element
/// on every drive.
///
/// # Examples
///
/// ```
/// use seqflow::{prelude::*, pull, push};
///
/// let mut evens = push::replay(pull::range(0, 10)).filter(|n| n % 2 == 0);
///
/// assert_eq!(evens.head(), Some(0));
/// assert_eq!(evens.head(), Some(0));
/// assert_eq!(evens.count(), 5);
/// ```
#[inline]
pub fn replay<L: Restart>(source: L) -> Replay<L> {
    Replay { source }
}

impl<L: Restart> Seq for Replay<L> {
    type Item = L::Item;

    #[inline]
    fn drive<C>(&mut self, mut consumer: C) -> ControlFlow<()>
    where
        C: FnMut(Self::Item) -> ControlFlow<()>,
    {
        self.source.restart();
        while let Some(item) = self.source.next() {
            consumer(item)?;
        }

        ControlFlow::Continue(())
    }
}

/// A push sequence of [`Result`]s driving a fallible loop.
///
/// Every element is pushed as `Ok`; the first error is pushed as `Err`, and the drive
/// ends there.
///
/// This `struct` is created by [`BreakLoop::seq()`](crate::fallible::BreakLoop::seq).
#[derive(Debug, Clone)]
pub struct TryPushed<B> {
    source: B,
}

impl<B> TryPushed<B> {
    pub(crate) fn new(source: B) -> Self {
        Self { source }
    }
}

impl<B: BreakLoop> Seq for TryPushed<B> {
    type Item = Result<B::Item, B::Error>;

    fn drive<C>(&mut self, mut consumer: C) -> ControlFlow<()>
    where
        C: FnMut(Self::Item) -> ControlFlow<()>,
    {
        loop {
            match self.source.try_next() {
                Ok(Some(item)) => consumer(Ok(item))?,
                Ok(None) => return ControlFlow::Continue(()),
                Err(error) => {
                    consumer(Err(error))?;
                    return ControlFlow::Continue(());
                }
            }
        }
    }
}

/// A pull loop over a push sequence, collected on the first pull.
///
/// This `struct` is created by [`Seq::into_loop()`]. See its documentation for more.
pub struct Buffered<S: Seq> {
    source: Option<S>,
    items: vec::IntoIter<S::Item>,
}

impl<S: Seq> Buffered<S> {
    pub(crate) fn new(source: S) -> Self {
        Self {
            source: Some(source),
            items: Vec::new().into_iter(),
        }
    }
}

impl<S: Seq> Loop for Buffered<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(mut source) = self.source.take() {
            log::trace!("collecting a push sequence to pull from it");
            self.items = source.to_vec().into_iter();
        }

        self.items.next()
    }
}

impl<S: Seq + Debug> Debug for Buffered<S>
where
    S::Item: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffered")
            .field("source", &self.source)
            .field("items", &self.items)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::{fallible, prelude::*, pull, push};

    #[test]
    fn pushed_loop_is_single_pass() {
        let mut seq = pull::from_iter(vec![1, 2, 3]).seq();

        assert_eq!(seq.head(), Some(1));
        assert_eq!(seq.to_vec(), [2, 3]);
        assert!(seq.to_vec().is_empty());
    }

    #[test]
    fn buffered_drives_once_on_the_first_pull() {
        let drives = Cell::new(0);
        let mut lp = push::from_fn(|consumer| {
            drives.set(drives.get() + 1);
            consumer('a')?;
            consumer('b')
        })
        .into_loop();
        assert_eq!(drives.get(), 0);

        assert_eq!(lp.next(), Some('a'));
        assert_eq!(lp.next(), Some('b'));
        assert_eq!(lp.next(), None);
        assert_eq!(lp.next(), None);
        assert_eq!(drives.get(), 1);
    }

    #[test]
    fn fallible_loop_pushes_its_first_error_last() {
        let mut seq = fallible::from_results([Ok(1), Err("x"), Ok(3)]).seq();

        assert_eq!(seq.to_vec(), [Ok(1), Err("x")]);
    }
}
