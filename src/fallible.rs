//! Pull sequences whose every pull may fail.
//!
//! A [`BreakLoop`] is the fallible counterpart of [`Loop`](crate::pull::Loop):
//! [`try_next()`](BreakLoop::try_next) returns `Ok(Some(item))` for an element, `Ok(None)`
//! once the loop is exhausted, and `Err(error)` when the pull failed.
//!
//! An error is terminal. Adaptors forward it without touching it, so the first error of a
//! chain reaches the consumer as is, and collectors stop on it and return what they had
//! gathered before it inside a [`Partial`](crate::collect::Partial):
//!
//! ```
//! use seqflow::{prelude::*, pull};
//!
//! let inputs = ["1", "3", "5", "_7", "9", "11"];
//! let mut parsed = Vec::new();
//!
//! let partial = pull::from_slice(&inputs)
//!     .inspect(|s| parsed.push(**s))
//!     .with_err()
//!     .try_convert(|s| s.parse::<i32>())
//!     .try_to_vec()
//!     .unwrap_err();
//!
//! assert_eq!(partial.gathered, [1, 3, 5]);
//! assert_eq!(partial.error.to_string(), "invalid digit found in string");
//! // Nothing was pulled after the error.
//! assert_eq!(parsed, ["1", "3", "5", "_7"]);
//! ```
//!
//! Pulling again after an error is allowed and never panics, but what comes out depends on
//! the source. [`fuse()`](BreakLoop::fuse) makes a loop stay exhausted after its first error.

mod break_loop;
mod kv_break_loop;
mod source;

pub use break_loop::*;
pub use kv_break_loop::*;
pub use source::*;

#[inline(always)]
pub(crate) const fn assert_break_loop<B>(lp: B) -> B
where
    B: BreakLoop,
{
    lp
}
