// benches/heapsort.rs

use std::cmp::Ordering;

use bytemuck_derive::{Pod, Zeroable};
use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use point_list::PointList;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[repr(C)]
#[derive(Clone, Copy, PartialEq, Pod, Zeroable)]
struct Point2D {
    x: f64,
    y: f64,
}

fn by_sum(a: &Point2D, b: &Point2D) -> Ordering {
    (a.x + a.y).total_cmp(&(b.x + b.y))
}

fn random_list(size: usize) -> PointList<Point2D> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut list = PointList::with_capacity(size).unwrap();
    for _ in 0..size {
        list.push(Point2D {
            x: rng.random_range(-1_000.0..1_000.0),
            y: rng.random_range(-1_000.0..1_000.0),
        })
        .unwrap();
    }
    list
}

fn bench_push(c: &mut Criterion) {
    let sizes = vec![100, 1_000, 10_000];

    let mut group = c.benchmark_group("push_until_full");
    for size in sizes {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut list = PointList::with_capacity(size).unwrap();
                let mut i = 0.0;
                while list.push(Point2D { x: i, y: i }).is_ok() {
                    i += 1.0;
                }
                black_box(list.len())
            });
        });
    }
    group.finish();
}

fn bench_heapsort(c: &mut Criterion) {
    let sizes = vec![100, 1_000, 10_000];

    let mut group = c.benchmark_group("heapsort_random");
    for size in sizes {
        let list = random_list(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter_batched(
                || list.clone(),
                |mut l| {
                    l.sort_by(by_sum);
                    l
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_heapsort_presorted(c: &mut Criterion) {
    let sizes = vec![100, 1_000, 10_000];

    let mut group = c.benchmark_group("heapsort_presorted");
    for size in sizes {
        let mut list = random_list(size);
        list.sort_by(by_sum);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter_batched(
                || list.clone(),
                |mut l| {
                    l.sort_by(by_sum);
                    l
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_std_sort_baseline(c: &mut Criterion) {
    let sizes = vec![100, 1_000, 10_000];

    let mut group = c.benchmark_group("std_sort_unstable");
    for size in sizes {
        let points = random_list(size).as_slice().to_vec();

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter_batched(
                || points.clone(),
                |mut v| {
                    v.sort_unstable_by(by_sum);
                    v
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let sizes = vec![100, 1_000, 10_000];

    let mut group = c.benchmark_group("contains_miss");
    for size in sizes {
        let list = random_list(size);
        let missing = Point2D { x: 5_000.0, y: 5_000.0 };

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                black_box(list.contains(&missing))
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_push,
    bench_heapsort,
    bench_heapsort_presorted,
    bench_std_sort_baseline,
    bench_contains
);
criterion_main!(benches);
