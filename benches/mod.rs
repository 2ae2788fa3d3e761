use bonding_curve_rs::prelude::*;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const POWER: f64 = 100.0;
const ASYM: f64 = 0.3;
const NEUTRAL: f64 = 1000.0;

fn forward_benchmarks(c: &mut Criterion) {
    let calc = EllipticalCalculus::new(0.1).unwrap();
    let mut group = c.benchmark_group("forward");

    group.bench_function("calc_position", |b| {
        b.iter(|| {
            calc.calc_position(black_box(POWER), black_box(ASYM), NEUTRAL, black_box(1042.0))
        })
    });
    group.bench_function("calc_pos_value", |b| {
        b.iter(|| {
            calc.calc_pos_value(black_box(POWER), black_box(ASYM), NEUTRAL, black_box(1042.0))
        })
    });
    group.bench_function("calc_price0", |b| {
        b.iter(|| calc.calc_price0(black_box(NEUTRAL), black_box(ASYM)))
    });

    group.finish();
}

fn inverse_benchmarks(c: &mut Criterion) {
    let calc = EllipticalCalculus::new(0.1).unwrap();
    let position = calc.calc_position(POWER, ASYM, NEUTRAL, 1042.0);
    let value = calc.calc_pos_value(POWER, ASYM, NEUTRAL, 1042.0);
    let mut group = c.benchmark_group("inverse");

    group.bench_function("calc_price_from_position", |b| {
        b.iter(|| calc.calc_price_from_position(POWER, ASYM, NEUTRAL, black_box(position)))
    });
    group.bench_function("calc_neutral_from_value", |b| {
        b.iter(|| {
            calc.calc_neutral_from_value(POWER, ASYM, NEUTRAL, black_box(value), 1042.0)
        })
    });
    group.bench_function("calc_neutral", |b| {
        b.iter(|| calc.calc_neutral(POWER, ASYM, black_box(position), 1042.0))
    });
    group.bench_function("calc_roots", |b| {
        b.iter(|| calc.calc_roots(POWER, ASYM, NEUTRAL, black_box(40.0)))
    });

    group.finish();
}

criterion_group!(benches, forward_benchmarks, inverse_benchmarks);
criterion_main!(benches);
