use crate::{fallible::BreakLoop, pull::Loop};

/// A loop that stays exhausted once its source has reported the end.
///
/// As a [`BreakLoop`], an error also counts as the end: it is returned once, and
/// every later pull returns `Ok(None)`.
///
/// This `struct` is created by [`Loop::fuse()`] and [`BreakLoop::fuse()`].
#[derive(Debug, Clone)]
pub struct Fuse<S> {
    source: Option<S>,
}

impl<S> Fuse<S> {
    pub(crate) fn new(source: S) -> Self {
        Self {
            source: Some(source),
        }
    }
}

impl<L: Loop> Loop for Fuse<L> {
    type Item = L::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.source.as_mut()?.next();
        if item.is_none() {
            self.source = None;
        }

        item
    }
}

impl<B: BreakLoop> BreakLoop for Fuse<B> {
    type Item = B::Item;
    type Error = B::Error;

    #[inline]
    fn try_next(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        let Some(source) = &mut self.source else {
            return Ok(None);
        };

        let result = source.try_next();
        if !matches!(result, Ok(Some(_))) {
            self.source = None;
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use crate::{fallible, prelude::*, pull};

    #[test]
    fn stays_exhausted() {
        let mut flip = false;
        let mut fused = pull::from_fn(move || {
            flip = !flip;
            flip.then_some(())
        })
        .fuse();

        assert_eq!(fused.next(), Some(()));
        assert_eq!(fused.next(), None);
        assert_eq!(fused.next(), None);
    }

    #[test]
    fn an_error_is_the_end() {
        let mut fused = fallible::from_results([Ok(1), Err('x'), Ok(2)]).fuse();

        assert_eq!(fused.try_next(), Ok(Some(1)));
        assert_eq!(fused.try_next(), Err('x'));
        assert_eq!(fused.try_next(), Ok(None));
        assert_eq!(fused.try_next(), Ok(None));
    }
}
