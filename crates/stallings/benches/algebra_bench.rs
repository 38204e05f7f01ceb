//! Criterion microbenches for subgroup algebra: intersection and fringe.
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use stallings::prelude::*;

fn bench_intersection(c: &mut Criterion) {
    let mut group = c.benchmark_group("intersection");
    let cfg = WordCfg {
        rank: 2,
        min_len: 3,
        max_len: 8,
    };
    group.bench_function(BenchmarkId::new("pullback_core", "n3xn3"), |b| {
        b.iter_batched(
            || {
                let h = Subgroup::from_base(draw_base(cfg, 3, ReplayToken { seed: 11, index: 0 }));
                let k = Subgroup::from_base(draw_base(cfg, 3, ReplayToken { seed: 11, index: 1 }));
                (h, k)
            },
            |(h, k)| {
                let _ = Subgroup::intersection(&h, &k);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_fringe(c: &mut Criterion) {
    let mut group = c.benchmark_group("fringe");
    // <a⁵, b>: five vertices, 52 partitions.
    let sg = Subgroup::from_base(vec![vec![1; 5].into(), vec![2].into()]);
    group.bench_function(BenchmarkId::new("partitions", "v5"), |b| {
        b.iter(|| {
            let _ = sg.fringe(FringeCfg::default());
        })
    });
    group.finish();
}

criterion_group!(benches, bench_intersection, bench_fringe);
criterion_main!(benches);
