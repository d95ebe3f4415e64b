use crate::{fallible::BreakLoop, pull::Loop};

/// A key/value loop pairing the elements of two loops.
///
/// It stops as soon as either loop is exhausted, and as a [`BreakLoop`], as soon as
/// either loop fails.
///
/// This `struct` is created by [`Loop::zip()`] and [`BreakLoop::zip()`].
#[derive(Debug, Clone)]
pub struct Zip<A, B> {
    keys: A,
    values: B,
}

impl<A, B> Zip<A, B> {
    pub(crate) fn new(keys: A, values: B) -> Self {
        Self { keys, values }
    }
}

impl<A: Loop, B: Loop> Loop for Zip<A, B> {
    type Item = (A::Item, B::Item);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let key = self.keys.next()?;
        let value = self.values.next()?;
        Some((key, value))
    }
}

impl<A, B> BreakLoop for Zip<A, B>
where
    A: BreakLoop,
    B: BreakLoop<Error = A::Error>,
{
    type Item = (A::Item, B::Item);
    type Error = A::Error;

    #[inline]
    fn try_next(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        let Some(key) = self.keys.try_next()? else {
            return Ok(None);
        };
        let Some(value) = self.values.try_next()? else {
            return Ok(None);
        };

        Ok(Some((key, value)))
    }
}

#[cfg(test)]
mod tests {
    use crate::{fallible, prelude::*};

    #[test]
    fn fallible_zip_fails_with_either_side() {
        let names = fallible::from_results([Ok("a"), Ok("b"), Ok("c")]);
        let scores = fallible::from_results([Ok(1), Err("lost"), Ok(3)]);

        let partial = names.zip(scores).try_to_map().unwrap_err();

        assert_eq!(partial.error, "lost");
        assert_eq!(partial.gathered.len(), 1);
        assert_eq!(partial.gathered["a"], 1);
    }
}
