//! Re-exports commonly used items from this crate.
//!
//! This module is intended to be imported with a wildcard, providing
//! convenient access to the sequence traits and their extensions.
//!
//! # Example
//!
//! ```
//! use seqflow::{prelude::*, pull};
//!
//! assert_eq!(pull::range(0, 4).convert(|n| n * n).sum(), 14);
//! ```

pub use crate::KV;
pub use crate::collect::Collector;
pub use crate::fallible::{BreakLoop, KvBreakLoop};
pub use crate::pull::{KvLoop, Loop, Restart};
pub use crate::push::{KvSeq, Seq, TryKvSeq, TrySeq};
