mod common;

use std::hint::black_box;

use card_scatter::prelude::{pick_weighted_capped, reset_kinds, SpawnableKind};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn make_kinds(count: usize, capped_ratio: f32, seed: u64) -> Vec<SpawnableKind> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut kinds = Vec::with_capacity(count);

    for i in 0..count {
        let capped = rng.random::<f32>() < capped_ratio;
        let priority = 1 + (rng.random::<f32>() * 9.0) as u32;
        let kind = SpawnableKind::new(format!("K{}", i), priority);
        kinds.push(if capped { kind.with_max_count(4) } else { kind });
    }

    kinds
}

fn selection_weighted_capped_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/weighted_capped");

    for &n in &[4usize, 16, 64, 256, 1024] {
        let mut kinds = make_kinds(n, 0.0, 0xC0FFEE);
        group.throughput(common::elements_throughput(n));

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
            b.iter(|| {
                let sel = pick_weighted_capped(&mut kinds, &mut rng);
                black_box(sel);
            });
        });
    }

    for &n in &[64usize, 1024] {
        group.throughput(common::elements_throughput(n));

        group.bench_with_input(BenchmarkId::new("all_capped_fill", n), &n, |b, &n| {
            b.iter_batched(
                || make_kinds(n, 1.0, 0xFACEFEED),
                |mut kinds| {
                    let mut rng = StdRng::seed_from_u64(0xBADC0DE);
                    while pick_weighted_capped(&mut kinds, &mut rng).is_some() {}
                    black_box(kinds);
                },
                BatchSize::SmallInput,
            );
        });
    }

    for &n in &[256usize, 2048] {
        let mut kinds = make_kinds(n, 1.0, 0x0BADF00D);
        for k in kinds.iter_mut() {
            k.current_count = k.max_count;
        }
        group.throughput(common::elements_throughput(n));

        group.bench_with_input(BenchmarkId::new("none_eligible", n), &n, |b, _| {
            let mut rng = StdRng::seed_from_u64(0xFEED);
            b.iter(|| {
                let sel = pick_weighted_capped(&mut kinds, &mut rng);
                black_box(sel);
            });
        });
    }

    group.finish();
}

fn selection_reset_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/reset");
    let n = 4096usize;
    let mut kinds = make_kinds(n, 0.5, 0xCAFEBABE);
    group.throughput(common::elements_throughput(n));
    group.bench_function("reset_kinds", |b| {
        b.iter(|| {
            reset_kinds(&mut kinds);
            black_box(&kinds);
        });
    });
    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = selection_weighted_capped_benches,
              selection_reset_benches
}
criterion_main!(benches);
