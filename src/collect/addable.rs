use std::{num::Wrapping, ops::ControlFlow};

use super::{Collector, assert_collector};

/// A type with a zero value and an addition, which is all [`Sum`] needs.
///
/// Implemented for every primitive number (with the overflow behavior of `+`),
/// [`Wrapping`] numbers, and [`String`] (where addition is concatenation).
pub trait Addable: Sized {
    /// The value an empty sum yields.
    fn zero() -> Self;

    /// Combines two values.
    fn add(self, other: Self) -> Self;
}

macro_rules! prim_addable_impl {
    ($($pri_ty:ty),* $(,)?) => {
        $(
            impl Addable for $pri_ty {
                #[inline]
                fn zero() -> Self {
                    0 as $pri_ty
                }

                #[inline]
                fn add(self, other: Self) -> Self {
                    self + other
                }
            }

            impl Addable for Wrapping<$pri_ty> {
                #[inline]
                fn zero() -> Self {
                    Wrapping(0 as $pri_ty)
                }

                #[inline]
                fn add(self, other: Self) -> Self {
                    self + other
                }
            }
        )*
    };
}

prim_addable_impl!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_addable_impl {
    ($($float_ty:ty),* $(,)?) => {
        $(
            impl Addable for $float_ty {
                #[inline]
                fn zero() -> Self {
                    0.0
                }

                #[inline]
                fn add(self, other: Self) -> Self {
                    self + other
                }
            }
        )*
    };
}

float_addable_impl!(f32, f64);

impl Addable for String {
    #[inline]
    fn zero() -> Self {
        String::new()
    }

    #[inline]
    fn add(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

/// A collector that adds every collected element up.
///
/// Its [`Output`](Collector::Output) is [`Addable::zero()`] if nothing was collected,
/// which is what separates it from [`Reduce`](super::Reduce) with `+`.
///
/// # Examples
///
/// ```
/// use seqflow::{prelude::*, collect::Sum};
///
/// let mut sum = Sum::new();
/// assert!(sum.collect(String::from("ab")).is_continue());
/// assert!(sum.collect(String::from("cd")).is_continue());
/// assert_eq!(sum.finish(), "abcd");
///
/// assert_eq!(Sum::<u64>::new().finish(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Sum<T> {
    total: T,
}

impl<T: Addable> Sum<T> {
    /// Creates a new instance of this collector starting from zero.
    #[inline]
    pub fn new() -> Self {
        assert_collector::<_, T>(Self { total: T::zero() })
    }
}

impl<T: Addable> Default for Sum<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Addable> Collector<T> for Sum<T> {
    type Output = T;

    #[inline]
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        let total = std::mem::replace(&mut self.total, T::zero());
        self.total = total.add(item);
        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(self) -> Self::Output {
        self.total
    }
}

#[cfg(test)]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;

    use super::*;
    use crate::test_utils::proptest_collector;

    proptest! {
        #[test]
        fn sum_is_consistent_across_drivers(nums in propvec(any::<i16>(), ..50)) {
            let nums: Vec<i64> = nums.into_iter().map(i64::from).collect();
            proptest_collector(&nums, Sum::new, &nums.iter().sum::<i64>())?;
        }

        #[test]
        fn matches_iterator_sum(nums in propvec(any::<u8>(), ..50)) {
            let nums: Vec<u64> = nums.into_iter().map(u64::from).collect();
            let mut sum = Sum::new();
            let _ = sum.collect_many(nums.iter().copied());

            prop_assert_eq!(sum.finish(), nums.iter().sum::<u64>());
        }

        #[test]
        fn concatenates_strings(words in propvec("[a-z]{0,4}", ..10)) {
            let mut sum = Sum::new();
            let _ = sum.collect_many(words.iter().cloned());

            prop_assert_eq!(sum.finish(), words.concat());
        }
    }
}
