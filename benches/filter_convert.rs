use std::{hint::black_box, time::Duration};

use criterion::{Criterion, criterion_group, criterion_main};
use rand::{RngExt, SeedableRng, rngs::StdRng};
use seqflow::{prelude::*, pull, push};

fn filter_convert(criterion: &mut Criterion) {
    let seed = 0;
    let mut rng = StdRng::seed_from_u64(seed);

    let nums: Box<_> = std::iter::repeat_with(|| rng.random_range(-10_000..=10_000))
        .take(500_000)
        .collect();

    println!("Seed: {seed}");
    println!("First 10 elements: {:?}", &nums[..10]);

    let mut group = criterion.benchmark_group("filter_convert");

    macro_rules! bench_fn {
        ($fn_name:ident) => {
            group.bench_function(stringify!($fn_name), |bencher| {
                bencher.iter(|| $fn_name(black_box(&nums)));
            });
        };
    }

    bench_fn!(for_loop_sum);
    bench_fn!(iterator_sum);
    bench_fn!(pull_sum);
    bench_fn!(push_sum);

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .warm_up_time(Duration::from_secs(3))
        .measurement_time(Duration::from_secs(10));
    targets = filter_convert
}
criterion_main!(benches);

fn for_loop_sum(nums: &[i32]) -> i64 {
    let mut sum = 0;

    for &num in nums {
        if num % 3 == 0 {
            sum += i64::from(num) * 2;
        }
    }

    sum
}

fn iterator_sum(nums: &[i32]) -> i64 {
    nums.iter()
        .filter(|&&num| num % 3 == 0)
        .map(|&num| i64::from(num) * 2)
        .sum()
}

fn pull_sum(nums: &[i32]) -> i64 {
    pull::from_slice(nums)
        .filter_convert(|&&num| num % 3 == 0, |&num| i64::from(num) * 2)
        .sum()
}

fn push_sum(nums: &[i32]) -> i64 {
    push::from_slice(nums)
        .filter_convert(|&&num| num % 3 == 0, |&num| i64::from(num) * 2)
        .sum()
}
