use std::ops::ControlFlow;

/// Accumulates the elements of a sequence and produces a final output.
///
/// This trait requires two core methods:
///
/// - [`collect`](Collector::collect): consumes an element and returns whether the collector
///   wants more elements *after* this operation.
/// - [`finish`](Collector::finish): consumes the collector and returns the accumulated result.
///
/// The sequence drivers stop pulling (or pushing) as soon as [`collect`](Collector::collect)
/// returns [`Break(())`], so a collector that knows it is done, like [`First`](crate::collect::First),
/// short-circuits the whole chain above it.
///
/// # Example
///
/// A collector counting distinct words, fed by a pull loop:
///
/// ```
/// use std::{collections::HashSet, ops::ControlFlow};
/// use seqflow::{prelude::*, pull};
///
/// #[derive(Default)]
/// struct Distinct<'a> {
///     seen: HashSet<&'a str>,
/// }
///
/// impl<'a> Collector<&'a str> for Distinct<'a> {
///     type Output = usize;
///
///     fn collect(&mut self, word: &'a str) -> ControlFlow<()> {
///         self.seen.insert(word);
///         ControlFlow::Continue(())
///     }
///
///     fn finish(self) -> usize {
///         self.seen.len()
///     }
/// }
///
/// let text = "the noble and the singer";
/// let distinct = pull::from_iter(text.split_whitespace()).feed(Distinct::default());
///
/// assert_eq!(distinct, 4);
/// ```
///
/// [`Break(())`]: ControlFlow::Break
pub trait Collector<T>: Sized {
    /// The result this collector yields, via the [`finish`](Collector::finish) method.
    type Output;

    /// Collects an element and returns a [`ControlFlow`] telling whether the collector
    /// still accepts elements **right after** this operation.
    ///
    /// Return [`Continue(())`] to ask for more, or [`Break(())`] if further feeding is meaningless.
    ///
    /// [`Continue(())`]: ControlFlow::Continue
    /// [`Break(())`]: ControlFlow::Break
    fn collect(&mut self, item: T) -> ControlFlow<()>;

    /// Consumes the collector and returns the accumulated result.
    fn finish(self) -> Self::Output;

    /// Collects every element of an iterator until the collector stops accepting them.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqflow::prelude::*;
    ///
    /// let mut v = vec![1, 2];
    /// assert!(v.collect_many([3, 4, 5]).is_continue());
    ///
    /// assert_eq!(v, [1, 2, 3, 4, 5]);
    /// ```
    fn collect_many(&mut self, items: impl IntoIterator<Item = T>) -> ControlFlow<()> {
        items.into_iter().try_for_each(|item| self.collect(item))
    }
}
