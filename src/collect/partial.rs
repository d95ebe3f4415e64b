use std::{
    error::Error,
    fmt::{self, Debug, Display},
};

/// The result of a fallible collection that stopped on an error.
///
/// Collectors of the fallible flavors drain a sequence until its first error, and hand back
/// what they `gathered` before it alongside the `error`. Nothing is discarded, so a caller
/// can tell how far the sequence got.
///
/// # Examples
///
/// ```
/// use seqflow::{prelude::*, fallible};
///
/// let results = [Ok(1), Ok(2), Err("boom"), Ok(4)];
/// let partial = fallible::from_results(results).try_to_vec().unwrap_err();
///
/// assert_eq!(partial.gathered, [1, 2]);
/// assert_eq!(partial.error, "boom");
/// assert_eq!(partial.to_string(), "sequence stopped early: boom");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Partial<C, E> {
    /// Everything collected before the error.
    pub gathered: C,
    /// The error that stopped the sequence.
    pub error: E,
}

impl<C, E> Partial<C, E> {
    /// Pairs a partial result with the error that cut it short.
    #[inline]
    pub const fn new(gathered: C, error: E) -> Self {
        Self { gathered, error }
    }

    /// Discards the partial result and keeps the error.
    #[inline]
    pub fn into_error(self) -> E {
        self.error
    }

    /// Splits this into the partial result and the error.
    #[inline]
    pub fn into_parts(self) -> (C, E) {
        (self.gathered, self.error)
    }

    /// Maps the partial result, leaving the error untouched.
    #[inline]
    pub fn map_gathered<D>(self, f: impl FnOnce(C) -> D) -> Partial<D, E> {
        Partial::new(f(self.gathered), self.error)
    }
}

impl<C, E: Display> Display for Partial<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sequence stopped early: {}", self.error)
    }
}

impl<C: Debug, E: Error + 'static> Error for Partial<C, E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.error)
    }
}
