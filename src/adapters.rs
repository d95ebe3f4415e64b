//! Adaptors shared by every sequence flavor.
//!
//! Each adaptor is one `struct` implementing [`Loop`](crate::pull::Loop),
//! [`BreakLoop`](crate::fallible::BreakLoop) and [`Seq`](crate::push::Seq) whenever the
//! sequence it wraps does, so `filter()` on a pull loop, a fallible loop and a push sequence
//! all produce a [`Filter`]. The operator is written once per flavor's primitive
//! (`next`, `try_next`, `drive`) and nowhere else.
//!
//! These `struct`s are created by the adaptor methods of the flavor traits.

mod chain;
mod convert;
mod convert_check;
mod filter;
mod flat;
mod fuse;
mod inspect;
mod key_by;
mod kv;
mod skip;
mod take;
mod zip;

pub use chain::*;
pub use convert::*;
pub use convert_check::*;
pub use filter::*;
pub use flat::*;
pub use fuse::*;
pub use inspect::*;
pub use key_by::*;
pub use kv::*;
pub use skip::*;
pub use take::*;
pub use zip::*;
