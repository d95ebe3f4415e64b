//! Shared state for sequences run on several threads.
//!
//! Sequences themselves are single-threaded: a sequence must not be driven from two places
//! at once. When results from several threads need to land in one place, give each thread
//! its own sequence and let them all feed a [`SyncMap`].

mod sync_map;

pub use sync_map::*;
