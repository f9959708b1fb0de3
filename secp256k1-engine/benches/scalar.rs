//! secp256k1 scalar arithmetic benchmarks

use criterion::{criterion_group, criterion_main, measurement::Measurement, BenchmarkGroup, Criterion};
use hex_literal::hex;
use secp256k1_engine::{ProjectivePoint, Scalar};
use std::hint::black_box;

fn test_scalar_x() -> Scalar {
    Scalar::from_bytes(&hex!(
        "bb488aef416a41d7680d1cf01d70f59b60d7f5f77e30e78b8bf9d2d882f156a6"
    ))
    .unwrap()
}

fn test_scalar_y() -> Scalar {
    Scalar::from_bytes(&hex!(
        "67e2f68071ed8281e8aed6bcf1c5207c5e633722d920afd6ae22d06eeb8035e3"
    ))
    .unwrap()
}

fn bench_point_mul<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let p = ProjectivePoint::GENERATOR;
    let s = test_scalar_x();
    group.bench_function("point-scalar mul", |b| {
        b.iter(|| &black_box(p) * &black_box(s))
    });
}

fn bench_point_lincomb<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let p = ProjectivePoint::GENERATOR;
    let q = ProjectivePoint::mul_by_generator(&test_scalar_y());
    let s = test_scalar_x();
    let t = test_scalar_y();
    group.bench_function("lincomb via mul+add", |b| {
        b.iter(|| &black_box(p) * &black_box(s) + &(&black_box(q) * &black_box(t)))
    });
    group.bench_function("lincomb()", |b| {
        b.iter(|| ProjectivePoint::lincomb(&black_box(p), &black_box(s), &black_box(q), &black_box(t)))
    });
}

fn bench_point_mul_by_generator<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let p = ProjectivePoint::GENERATOR;
    let x = test_scalar_x();

    group.bench_function("mul_by_generator naive", |b| {
        b.iter(|| &black_box(p) * &black_box(x))
    });

    group.bench_function("mul_by_generator", |b| {
        b.iter(|| ProjectivePoint::mul_by_generator(&black_box(x)))
    });
}

fn bench_high_level(c: &mut Criterion) {
    let mut group = c.benchmark_group("high-level operations");
    bench_point_mul(&mut group);
    bench_point_mul_by_generator(&mut group);
    bench_point_lincomb(&mut group);
    group.finish();
}

fn bench_scalar_sub<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let x = test_scalar_x();
    let y = test_scalar_y();
    group.bench_function("sub", |b| b.iter(|| &black_box(x) - &black_box(y)));
}

fn bench_scalar_add<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let x = test_scalar_x();
    let y = test_scalar_y();
    group.bench_function("add", |b| b.iter(|| &black_box(x) + &black_box(y)));
}

fn bench_scalar_mul<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let x = test_scalar_x();
    let y = test_scalar_y();
    group.bench_function("mul", |b| b.iter(|| &black_box(x) * &black_box(y)));
}

fn bench_scalar_negate<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let x = test_scalar_x();
    group.bench_function("negate", |b| b.iter(|| -black_box(x)));
}

fn bench_scalar_invert<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let x = test_scalar_x();
    group.bench_function("invert", |b| b.iter(|| black_box(x).invert()));
}

fn bench_scalar(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar operations");
    bench_scalar_sub(&mut group);
    bench_scalar_add(&mut group);
    bench_scalar_mul(&mut group);
    bench_scalar_negate(&mut group);
    bench_scalar_invert(&mut group);
    group.finish();
}

criterion_group!(benches, bench_high_level, bench_scalar);
criterion_main!(benches);
