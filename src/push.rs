//! Push sequences.
//!
//! A [`Seq`] owns its loop: [`drive()`](Seq::drive) feeds every element to a consumer
//! closure until the source is exhausted or the consumer answers
//! [`ControlFlow::Break`](std::ops::ControlFlow::Break). Adaptors wrap the consumer instead
//! of the source, so a `filter` on a push sequence tests its predicate inside the closure
//! it hands to the sequence it wraps.
//!
//! Terminal operations borrow the sequence mutably. Driving a sequence again starts a new
//! traversal: sequences over slices, ranges, clonable iterables and
//! [restartable](crate::pull::Restart) loops replay all their elements, while a sequence
//! over a plain [`Loop`](crate::pull::Loop) continues where the loop stands.
//!
//! ```
//! use seqflow::{prelude::*, push};
//!
//! let mut squares = push::range(1, 6).convert(|n| n * n);
//!
//! assert_eq!(squares.to_vec(), [1, 4, 9, 16, 25]);
//! assert_eq!(squares.first(|&n| n > 5), Some(9));
//! assert_eq!(squares.sum(), 55);
//! ```
//!
//! # Interop
//!
//! [`Loop::seq()`](crate::pull::Loop::seq) drives a pull loop from a push sequence for free.
//! The other way around, [`Seq::into_loop()`] has no coroutine to suspend the source with,
//! so it collects the whole sequence on the first pull and hands the elements out from
//! that buffer. It does not terminate on infinite sequences.

mod bridge;
mod kv_seq;
mod seq_base;
mod source;
mod try_seq;

pub use bridge::*;
pub use kv_seq::*;
pub use seq_base::*;
pub use source::*;
pub use try_seq::*;

#[inline(always)]
pub(crate) const fn assert_seq<S>(seq: S) -> S
where
    S: Seq,
{
    seq
}
