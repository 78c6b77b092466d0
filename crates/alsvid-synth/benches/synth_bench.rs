//! Benchmarks for the synthesis strategies
//!
//! Run with: cargo bench -p alsvid-synth

use alsvid_ir::{BExp, BitId};
use alsvid_synth::{synthesize, AncHeap, Strategy};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

/// b0 ^ b1 ^ ... ^ b(n-1)
fn parity_chain(n: i64) -> BExp {
    (1..n).fold(BExp::var(0), |acc, i| BExp::xor(acc, BExp::var(i)))
}

/// b0 & b1 & ... & b(n-1), right-nested
fn and_tower(n: i64) -> BExp {
    (0..n - 1)
        .rev()
        .fold(BExp::var(n - 1), |acc, i| BExp::and(BExp::var(i), acc))
}

fn bench_parity(c: &mut Criterion) {
    let mut group = c.benchmark_group("parity");

    for n in &[8_i64, 32, 128] {
        let e = parity_chain(*n);
        group.bench_with_input(BenchmarkId::new("boundaries", n), &e, |b, e| {
            b.iter(|| {
                black_box(synthesize(
                    AncHeap::above(*n),
                    BitId(-1),
                    e,
                    Strategy::Boundaries,
                ))
            });
        });
    }

    group.finish();
}

fn bench_and_tower(c: &mut Criterion) {
    let mut group = c.benchmark_group("and_tower");

    for n in &[4_i64, 8, 16] {
        let e = and_tower(*n);
        for strategy in [Strategy::Pebbled, Strategy::Boundaries, Strategy::Bennett] {
            group.bench_with_input(
                BenchmarkId::new(format!("{strategy}"), n),
                &e,
                |b, e| {
                    b.iter(|| {
                        black_box(synthesize(AncHeap::above(*n), BitId(-1), e, strategy))
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_parity, bench_and_tower);
criterion_main!(benches);
