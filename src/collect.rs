//! Terminal operations shared by every sequence flavor.
//!
//! Each flavor has exactly one driver that feeds elements into a [`Collector`]:
//! [`Loop::feed()`](crate::pull::Loop::feed), [`BreakLoop::try_feed()`](crate::fallible::BreakLoop::try_feed),
//! [`Seq::feed()`](crate::push::Seq::feed) and [`TrySeq::try_feed()`](crate::push::TrySeq::try_feed).
//! Every terminal operation (`to_vec`, `to_groups`, `reduce`, `first`, ...) is one of the
//! collectors of this module fed through that driver, so the traversal code is written once
//! per flavor and the accumulation code once for all of them.

mod addable;
mod collector;
mod collections;
mod fold;
mod groups;
mod partial;
pub mod resolve;
mod search;

pub use addable::*;
pub use collector::*;
pub use fold::*;
pub use groups::*;
pub use partial::*;
pub use resolve::{OrderedResolve, Resolve};
pub use search::*;

/// Accepts everything; used by `head()` and `tail()`.
#[inline]
pub(crate) fn any_item<T>(_: &T) -> bool {
    true
}

#[inline(always)]
pub(crate) const fn assert_collector<C, T>(collector: C) -> C
where
    C: Collector<T>,
{
    collector
}
