use std::{fmt::Debug, ops::ControlFlow};

use proptest::{prelude::*, test_runner::TestCaseResult};

use crate::{
    collect::Collector,
    fallible::BreakLoop,
    pull::{self, Loop},
    push::{self, Seq, TrySeq},
};

/// Yields `0, 1, 2, ...` and panics on the pull after `max_pulls`.
///
/// Any operation that pulls more than it needs trips it.
pub fn strict_naturals(max_pulls: usize) -> impl Loop<Item = usize> {
    let mut pulled = 0;
    pull::from_fn(move || {
        assert!(
            pulled < max_pulls,
            "pulled {} times, at most {max_pulls} allowed",
            pulled + 1,
        );
        pulled += 1;
        Some(pulled - 1)
    })
}

/// Pushes `0, 1, 2, ...` until the consumer breaks, and panics on the push after `max_pushes`.
pub fn strict_push_naturals(max_pushes: usize) -> impl Seq<Item = usize> {
    push::from_fn(move |consumer| {
        for n in 0.. {
            assert!(
                n < max_pushes,
                "pushed {} times, at most {max_pushes} allowed",
                n + 1,
            );
            consumer(n)?;
        }

        ControlFlow::Continue(())
    })
}

/// Checks that a collector gives `expected` however it is driven: one element at a time,
/// with `collect_many()`, and fed by a pull loop, a fallible loop, a push sequence and a
/// push sequence of `Result`s. Every driver must stop consuming at the same point.
pub fn proptest_collector<T, C>(
    items: &[T],
    mut collector_factory: impl FnMut() -> C,
    expected: &C::Output,
) -> TestCaseResult
where
    T: Clone,
    C: Collector<T, Output: PartialEq + Debug>,
{
    let mut collector = collector_factory();
    let mut iter = items.iter().cloned();
    let _ = iter.try_for_each(|item| collector.collect(item));
    prop_assert_eq!(
        &collector.finish(),
        expected,
        "`collect()`'s result mismatched"
    );
    let collect_rem = iter.count();
    let consumed = items.len() - collect_rem;

    let mut collector = collector_factory();
    let mut iter = items.iter().cloned();
    let _ = collector.collect_many(&mut iter);
    prop_assert_eq!(
        &collector.finish(),
        expected,
        "`collect_many()`'s result mismatched"
    );
    prop_assert_eq!(
        iter.count(),
        collect_rem,
        "`collect_many()` consumed the sequence inconsistently"
    );

    let mut source = pull::from_slice(items).cloned();
    let fed = source.by_ref().feed(collector_factory());
    prop_assert_eq!(&fed, expected, "`Loop::feed()`'s result mismatched");
    prop_assert_eq!(
        source.count(),
        collect_rem,
        "`Loop::feed()` consumed the loop inconsistently"
    );

    let mut source = pull::from_slice(items).cloned().with_err::<()>();
    let fed = source.by_ref().try_feed(collector_factory());
    prop_assert_eq!(
        fed.as_ref().ok(),
        Some(expected),
        "`BreakLoop::try_feed()`'s result mismatched"
    );
    prop_assert_eq!(
        source.try_count(),
        Ok(collect_rem),
        "`BreakLoop::try_feed()` consumed the loop inconsistently"
    );

    let mut pushed = 0;
    let fed = push::from_iter(items.to_vec())
        .inspect(|_| pushed += 1)
        .feed(collector_factory());
    prop_assert_eq!(&fed, expected, "`Seq::feed()`'s result mismatched");
    prop_assert_eq!(
        pushed,
        consumed,
        "`Seq::feed()` pushed an inconsistent number of elements"
    );

    let mut pushed = 0;
    let fed = push::from_iter(items.to_vec())
        .inspect(|_| pushed += 1)
        .convert(Ok::<T, ()>)
        .try_feed(collector_factory());
    prop_assert_eq!(
        fed.as_ref().ok(),
        Some(expected),
        "`TrySeq::try_feed()`'s result mismatched"
    );
    prop_assert_eq!(
        pushed,
        consumed,
        "`TrySeq::try_feed()` pushed an inconsistent number of elements"
    );

    Ok(())
}
