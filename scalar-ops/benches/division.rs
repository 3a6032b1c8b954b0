//! Division family throughput

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scalar_ops::division::{sdiv, smod, squot, srem, udiv, umod};

fn operands() -> Vec<(i64, i64)> {
    (1..=1024i64)
        .map(|i| (i.wrapping_mul(0x9E37_79B9_7F4A_7C15u64 as i64), (i % 97) - 48))
        .filter(|&(_, y)| y != 0)
        .collect()
}

fn bench_division(c: &mut Criterion) {
    let ops = operands();

    c.bench_function("squot_srem_i64", |b| {
        b.iter(|| {
            for &(x, y) in &ops {
                black_box(squot(black_box(x), y));
                black_box(srem(black_box(x), y));
            }
        })
    });

    c.bench_function("sdiv_smod_i64", |b| {
        b.iter(|| {
            for &(x, y) in &ops {
                black_box(sdiv(black_box(x), y));
                black_box(smod(black_box(x), y));
            }
        })
    });

    c.bench_function("udiv_umod_i64", |b| {
        b.iter(|| {
            for &(x, y) in &ops {
                black_box(udiv(black_box(x), y));
                black_box(umod(black_box(x), y));
            }
        })
    });

    let narrow: Vec<(i8, i8)> = ops.iter().map(|&(x, y)| (x as i8, y as i8)).collect();
    c.bench_function("sdiv_smod_i8", |b| {
        b.iter(|| {
            for &(x, y) in &narrow {
                black_box(sdiv(black_box(x), y));
                black_box(smod(black_box(x), y));
            }
        })
    });
}

criterion_group!(benches, bench_division);
criterion_main!(benches);
