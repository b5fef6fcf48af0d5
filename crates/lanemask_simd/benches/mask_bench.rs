use criterion::{criterion_main, criterion_group, Criterion, black_box};

use lanemask_simd::*;

fn reduce_benchmark(c: &mut Criterion) {
    let mask = mask32x8::new(true, false, true, true, false, false, true, false);

    c.bench_function("mask32x8::movemask", |b| b.iter(|| black_box(mask).movemask()));
    c.bench_function("mask32x8::popcnt", |b| b.iter(|| black_box(mask).popcnt()));
    c.bench_function("mask32x8::all", |b| b.iter(|| black_box(mask).all()));
    c.bench_function("mask32x8::any", |b| b.iter(|| black_box(mask).any()));

    c.bench_function("mask32x8::popcnt (scalar)", |b| b.iter(|| black_box(mask).simd_popcnt::<Scalar>()));
    c.bench_function("mask32x8::any (scalar)", |b| b.iter(|| black_box(mask).simd_any::<Scalar>()));
}

fn select_benchmark(c: &mut Criterion) {
    let mask = mask32x8::new(true, false, true, true, false, false, true, false);
    let when_true = mask32x8::new4(true, false, false, true);
    let when_false = mask32x8::new2(false, true);

    c.bench_function("mask32x8::select", |b| b.iter(|| {
        black_box(mask).select(black_box(when_true), black_box(when_false))
    }));
    c.bench_function("mask32x8::select (scalar)", |b| b.iter(|| {
        black_box(mask).simd_select::<Scalar>(black_box(when_true), black_box(when_false))
    }));
    c.bench_function("mask32x8: and-or select", |b| b.iter(|| {
        let mask = black_box(mask);
        (mask & black_box(when_true)) | (!mask & black_box(when_false))
    }));
}

fn permute_benchmark(c: &mut Criterion) {
    let mask = mask32x8::new(true, false, true, true, false, false, true, false);

    c.bench_function("mask32x8::permute<0, 0, 2, 2>", |b| b.iter(|| black_box(mask).permute::<0, 0, 2, 2>()));
    c.bench_function("mask32x8::permute_general<0, 0, 2, 2>", |b| b.iter(|| black_box(mask).permute_general::<0, 0, 2, 2>()));
    c.bench_function("mask32x8::permute<0, 1, 0, 1>", |b| b.iter(|| black_box(mask).permute::<0, 1, 0, 1>()));
    c.bench_function("mask32x8::permute_general<0, 1, 0, 1>", |b| b.iter(|| black_box(mask).permute_general::<0, 1, 0, 1>()));
    c.bench_function("mask32x8::permute<3, 2, 1, 0>", |b| b.iter(|| black_box(mask).permute::<3, 2, 1, 0>()));
    c.bench_function("mask32x8::swap_halves", |b| b.iter(|| black_box(mask).swap_halves()));
}

criterion_group!(benches, reduce_benchmark, select_benchmark, permute_benchmark);
criterion_main!(benches);
