//! Pull sequences.
//!
//! A [`Loop`] is a cursor: every call to [`next()`](Loop::next) advances it by one
//! logical element and returns it, or returns `None` once the loop is exhausted.
//! Adaptors wrap a loop into another loop and do nothing until pulled; each outward
//! pull may pull the wrapped loop zero or more times (a [`Filter`] keeps pulling until
//! something matches) but never more than needed for the element it returns.
//!
//! # Exhaustion
//!
//! After a loop has returned `None`, further calls must not panic. Loops over in-memory
//! sources ([`from_slice()`], [`of()`], [`range()`]) keep returning `None`. Loops over
//! generators and foreign iterators do whatever their source does; wrap them with
//! [`fuse()`](Loop::fuse) if a stable `None` is required.

mod indexed;
mod iter;
mod kv_loop;
mod loop_base;
mod range;
mod source;

pub use indexed::*;
pub use iter::*;
pub use kv_loop::*;
pub use loop_base::*;
pub use range::*;
pub use source::*;

#[inline(always)]
pub(crate) const fn assert_loop<L>(lp: L) -> L
where
    L: Loop,
{
    lp
}
