use thiserror::Error;

/// Errors raised by the containers of this crate.
///
/// Errors produced by user code flowing through a [`BreakLoop`](crate::fallible::BreakLoop)
/// keep their own type and are not wrapped in this enum.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A thread panicked while holding the lock of a [`SyncMap`](crate::sync::SyncMap),
    /// so the map may be in an inconsistent state.
    #[error("lock poisoned during `{operation}`")]
    Poisoned {
        /// Name of the operation that found the lock poisoned.
        operation: &'static str,
    },
}
