//! Cost of sizing the wrapped-transaction overhead, with and without the memo,
//! and of estimating a full block.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sharesquare::{max_wrapped_tx_overhead, OverheadCache, SquareEstimator};
use sharesquare_testkit::TxFixture;

fn bench_overhead(c: &mut Criterion) {
    let mut group = c.benchmark_group("max_wrapped_tx_overhead");
    for square_size in [8u64, 32, 128] {
        group.bench_with_input(
            BenchmarkId::new("uncached", square_size),
            &square_size,
            |b, &size| b.iter(|| max_wrapped_tx_overhead(black_box(size))),
        );

        let mut cache = OverheadCache::new();
        group.bench_with_input(
            BenchmarkId::new("cached", square_size),
            &square_size,
            |b, &size| b.iter(|| cache.get(black_box(size))),
        );
    }
    group.finish();
}

fn bench_estimate(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate_square_size");
    let mut fixture = TxFixture::with_seed(0);
    for count in [10usize, 100, 1_000] {
        let txs = fixture.random_parsed_txs(count, 400, 4_000);
        let mut estimator = SquareEstimator::default();
        group.bench_with_input(BenchmarkId::from_parameter(count), &txs, |b, txs| {
            b.iter(|| estimator.estimate(black_box(txs)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_overhead, bench_estimate);
criterion_main!(benches);
