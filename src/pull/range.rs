use super::{Loop, Restart};

/// An integer type a [`Range`] can walk over.
pub trait Integer: Copy + Ord {
    /// `self + 1`. Only called when the result is known to fit.
    fn succ(self) -> Self;

    /// `self - 1`. Only called when the result is known to fit.
    fn pred(self) -> Self;
}

macro_rules! integer_impl {
    ($($int_ty:ty),* $(,)?) => {
        $(
            impl Integer for $int_ty {
                #[inline]
                fn succ(self) -> Self {
                    self + 1
                }

                #[inline]
                fn pred(self) -> Self {
                    self - 1
                }
            }
        )*
    };
}

integer_impl!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// A [`Loop`] walking a range of integers, upwards or downwards.
///
/// This `struct` is created by [`range()`] and [`range_closed()`]. See their documentation for more.
#[derive(Debug, Clone)]
pub struct Range<T> {
    first: T,
    last: T,
    ascending: bool,
    cursor: Option<T>,
}

impl<T: Integer> Range<T> {
    fn new(first: T, last: T) -> Self {
        Self {
            first,
            last,
            ascending: first <= last,
            cursor: Some(first),
        }
    }
}

/// Creates a loop over the half-open range between `from` and `to`.
///
/// The loop counts up from `from` to `to - 1` if `from < to`, and down from `from` to `to + 1`
/// if `from > to`. If both bounds are equal, it yields `from` once.
///
/// The loop can be [restarted](Restart).
///
/// # Examples
///
/// ```
/// use seqflow::{prelude::*, pull};
///
/// assert_eq!(pull::range(1, 4).to_vec(), [1, 2, 3]);
/// assert_eq!(pull::range(4, 1).to_vec(), [4, 3, 2]);
/// assert_eq!(pull::range(7, 7).to_vec(), [7]);
/// ```
pub fn range<T: Integer>(from: T, to: T) -> Range<T> {
    let last = match from.cmp(&to) {
        std::cmp::Ordering::Less => to.pred(),
        std::cmp::Ordering::Greater => to.succ(),
        std::cmp::Ordering::Equal => from,
    };

    Range::new(from, last)
}

/// Creates a loop over the closed range between `from` and `to`, both included,
/// counting upwards or downwards.
///
/// # Examples
///
/// ```
/// use seqflow::{prelude::*, pull};
///
/// assert_eq!(pull::range_closed(1, 4).to_vec(), [1, 2, 3, 4]);
/// assert_eq!(pull::range_closed(2, -1).to_vec(), [2, 1, 0, -1]);
/// assert_eq!(pull::range_closed(u8::MAX - 1, u8::MAX).to_vec(), [254, 255]);
/// ```
pub fn range_closed<T: Integer>(from: T, to: T) -> Range<T> {
    Range::new(from, to)
}

impl<T: Integer> Loop for Range<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.cursor?;

        self.cursor = if current == self.last {
            None
        } else if self.ascending {
            Some(current.succ())
        } else {
            Some(current.pred())
        };

        Some(current)
    }
}

impl<T: Integer> Restart for Range<T> {
    #[inline]
    fn restart(&mut self) {
        self.cursor = Some(self.first);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhaustion_is_idempotent() {
        let mut nums = range(0_u8, 2);

        assert_eq!(nums.next(), Some(0));
        assert_eq!(nums.next(), Some(1));
        assert_eq!(nums.next(), None);
        assert_eq!(nums.next(), None);
    }

    #[test]
    fn full_width_ranges_do_not_overflow() {
        assert_eq!(range_closed(i8::MIN, i8::MAX).count(), 256);
        assert_eq!(range(i8::MAX, i8::MIN).count(), 255);
        assert_eq!(range_closed(u8::MAX, u8::MIN).tail(), Some(0));
    }

    #[test]
    fn restart_replays_from_the_start() {
        let mut nums = range(3, 0);
        assert_eq!(nums.by_ref().to_vec(), [3, 2, 1]);

        nums.restart();
        assert_eq!(nums.to_vec(), [3, 2, 1]);
    }
}

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn matches_std_ranges(from in -50..50_i32, to in -50..50_i32) {
            let expected: Vec<i32> = match from.cmp(&to) {
                std::cmp::Ordering::Less => (from..to).collect(),
                std::cmp::Ordering::Greater => ((to + 1)..=from).rev().collect(),
                std::cmp::Ordering::Equal => vec![from],
            };

            prop_assert_eq!(range(from, to).to_vec(), expected);
        }
    }
}
