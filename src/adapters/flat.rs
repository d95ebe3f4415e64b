use std::{fmt::Debug, ops::ControlFlow};

use crate::{fallible::BreakLoop, pull::Loop, push::Seq};

/// A sequence that expands every element into a sub-sequence and yields the sub-elements.
///
/// This `struct` is created by [`Loop::flat()`], [`BreakLoop::flat()`] and [`Seq::flat()`].
/// See their documentation for more.
pub struct Flat<S, F, U>
where
    U: IntoIterator,
{
    source: S,
    f: F,
    // Only the pull flavors park a half-drained sub-sequence here.
    current: Option<U::IntoIter>,
}

impl<S, F, U> Flat<S, F, U>
where
    U: IntoIterator,
{
    pub(crate) fn new(source: S, f: F) -> Self {
        Self {
            source,
            f,
            current: None,
        }
    }

    fn drain_current(&mut self) -> Option<U::Item> {
        let current = self.current.as_mut()?;
        let item = current.next();
        if item.is_none() {
            self.current = None;
        }

        item
    }
}

impl<L, F, U> Loop for Flat<L, F, U>
where
    L: Loop,
    F: FnMut(L::Item) -> U,
    U: IntoIterator,
{
    type Item = U::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.drain_current() {
                return Some(item);
            }

            let item = self.source.next()?;
            self.current = Some((self.f)(item).into_iter());
        }
    }
}

impl<B, F, U> BreakLoop for Flat<B, F, U>
where
    B: BreakLoop,
    F: FnMut(B::Item) -> U,
    U: IntoIterator,
{
    type Item = U::Item;
    type Error = B::Error;

    fn try_next(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        loop {
            if let Some(item) = self.drain_current() {
                return Ok(Some(item));
            }

            let Some(item) = self.source.try_next()? else {
                return Ok(None);
            };
            self.current = Some((self.f)(item).into_iter());
        }
    }
}

impl<S, F, U> Seq for Flat<S, F, U>
where
    S: Seq,
    F: FnMut(S::Item) -> U,
    U: IntoIterator,
{
    type Item = U::Item;

    fn drive<C>(&mut self, mut consumer: C) -> ControlFlow<()>
    where
        C: FnMut(Self::Item) -> ControlFlow<()>,
    {
        let f = &mut self.f;
        self.source
            .drive(|item| f(item).into_iter().try_for_each(&mut consumer))
    }
}

impl<S, F, U> Clone for Flat<S, F, U>
where
    S: Clone,
    F: Clone,
    U: IntoIterator<IntoIter: Clone>,
{
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            f: self.f.clone(),
            current: self.current.clone(),
        }
    }
}

impl<S: Debug, F, U> Debug for Flat<S, F, U>
where
    U: IntoIterator<IntoIter: Debug>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Flat")
            .field("source", &self.source)
            .field("current", &self.current)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::{fallible, prelude::*, pull, push};

    #[test]
    fn sub_sequences_are_drained_before_the_next_pull() {
        let pulls = Cell::new(0);
        let mut flat = pull::of([vec![1, 2], vec![3]])
            .inspect(|_| pulls.set(pulls.get() + 1))
            .flat(|row| row);

        assert_eq!(flat.next(), Some(1));
        assert_eq!(flat.next(), Some(2));
        assert_eq!(pulls.get(), 1);

        assert_eq!(flat.next(), Some(3));
        assert_eq!(pulls.get(), 2);

        assert_eq!(flat.next(), None);
        assert_eq!(flat.next(), None);
    }

    #[test]
    fn empty_rows_contribute_nothing() {
        let matrix = [vec![1, 2, 3], vec![], vec![4], vec![5, 6]];

        assert_eq!(pull::of(matrix.clone()).flat(|row| row).to_vec(), [1, 2, 3, 4, 5, 6]);
        assert_eq!(push::from_iter(matrix).flat(|row| row).to_vec(), [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn push_flat_stops_inside_a_row() {
        let mut seen = vec![];
        let stopped = push::from_iter([vec![1, 2, 3], vec![4]])
            .flat(|row| row)
            .drive(|n| {
                seen.push(n);
                if n == 2 {
                    std::ops::ControlFlow::Break(())
                } else {
                    std::ops::ControlFlow::Continue(())
                }
            });

        assert!(stopped.is_break());
        assert_eq!(seen, [1, 2]);
    }

    #[test]
    fn fallible_flat_surfaces_errors_between_rows() {
        let mut flat =
            fallible::from_results([Ok(vec!['a', 'b']), Err(7), Ok(vec!['c'])]).flat(|row| row);

        assert_eq!(flat.try_next(), Ok(Some('a')));
        assert_eq!(flat.try_next(), Ok(Some('b')));
        assert_eq!(flat.try_next(), Err(7));
        assert_eq!(flat.try_next(), Ok(Some('c')));
        assert_eq!(flat.try_next(), Ok(None));
    }
}

#[cfg(test)]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;

    use crate::{prelude::*, pull};

    proptest! {
        #[test]
        fn matches_iterator_flat_map(rows in propvec(propvec(any::<u8>(), ..4), ..20)) {
            let expected: Vec<u8> = rows.iter().flatten().copied().collect();

            prop_assert_eq!(
                pull::from_slice(&rows).flat(|row| row.iter().copied()).to_vec(),
                expected,
            );
        }
    }
}
