//! Lazy pull and push sequences with composable operators.
//!
//! A sequence is produced by a source (a slice, a range, a generator, an external cursor)
//! and reshaped by adaptors (`filter`, `convert`, `flat`, `take`, ...) without pulling a
//! single element. Only a terminal operation, such as `to_vec`, `reduce`, or `to_groups`,
//! drives the chain.
//!
//! The crate comes in three flavors sharing the same operators:
//!
//! - [`Loop`](pull::Loop): a pull sequence. The consumer calls [`next()`](pull::Loop::next)
//!   and gets one element back at a time.
//! - [`BreakLoop`](fallible::BreakLoop): a pull sequence whose every pull may fail.
//!   The first error stops the chain and reaches the consumer together with everything
//!   gathered before it.
//! - [`Seq`](push::Seq): a push sequence. The source owns the loop and feeds a consumer
//!   until the consumer answers [`Break(())`](std::ops::ControlFlow::Break).
//!
//! A sequence of `(K, V)` pairs gets key/value operators for free
//! ([`KvLoop`](pull::KvLoop), [`KvBreakLoop`](fallible::KvBreakLoop), [`KvSeq`](push::KvSeq)),
//! which is how maps and groups are built.
//!
//! # Example
//!
//! ```
//! use seqflow::{prelude::*, pull};
//!
//! let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
//!
//! let by_letter = pull::from_slice(&words)
//!     .filter(|word| word.len() > 5)
//!     .key_by(|word| word.as_bytes()[0] as char)
//!     .to_groups();
//!
//! assert_eq!(by_letter[&'a'], [&"avocado"]);
//! assert_eq!(by_letter[&'b'], [&"banana", &"blueberry"]);
//! assert_eq!(by_letter[&'c'], [&"cherry"]);
//! ```
//!
//! Errors travel through the fallible flavor:
//!
//! ```
//! use seqflow::{prelude::*, pull};
//!
//! let parsed = pull::from_slice(&["1", "3", "x", "9"])
//!     .with_err()
//!     .try_convert(|s| s.parse::<i32>())
//!     .try_to_vec();
//!
//! let partial = parsed.unwrap_err();
//! assert_eq!(partial.gathered, [1, 3]);
//! ```
//!
//! # Single pass
//!
//! Sequences are single-pass by default: once a [`Loop`](pull::Loop) reports exhaustion
//! it stays exhausted, and there is no way back to its first element.
//! Loops over restartable sources (slices, ranges) implement [`Restart`](pull::Restart),
//! so replaying one is a visible, typed capability instead of an accident.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod adapters;
pub mod collect;
mod error;
pub mod fallible;
mod kv;
pub mod prelude;
pub mod pull;
pub mod push;
pub mod sync;
#[cfg(test)]
mod test_utils;

pub use error::*;
pub use kv::*;
