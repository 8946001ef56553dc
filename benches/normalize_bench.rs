use criterion::{Criterion, criterion_group, criterion_main};
use dcmnorm::normalize::{self, BiasGain};
use std::hint::black_box;

/// Synthetic 16-bit-style intensity buffer (values cycle through 0..4096)
fn synthetic_pixels(len: usize) -> Vec<f32> {
    (0..len).map(|i| (i % 4096) as f32).collect()
}

/// Benchmark the two-pass mean/stddev computation
fn bench_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("statistics");

    // ~4 MiB of samples, roughly a 1024x1024 16-bit image
    let pixels = synthetic_pixels(1024 * 1024);

    group.bench_function("mean_stddev_1m", |b| {
        b.iter(|| normalize::mean_stddev(black_box(&pixels)).unwrap());
    });

    group.finish();
}

/// Benchmark the bias/gain hot loop
fn bench_apply_bias_gain(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_bias_gain");

    let pixels = synthetic_pixels(1024 * 1024);
    let params = BiasGain::new(-2047.5, 1.0 / 1182.4);

    group.bench_function("allocating_1m", |b| {
        b.iter(|| normalize::apply_bias_gain(black_box(&pixels), black_box(params)));
    });

    group.bench_function("in_place_1m", |b| {
        b.iter(|| {
            let mut buf = pixels.clone();
            normalize::apply_bias_gain_in_place(black_box(&mut buf), black_box(params));
            black_box(buf);
        });
    });

    group.finish();
}

/// Full derive-and-apply pipeline on a cached buffer
fn bench_full_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_normalization");

    let pixels = synthetic_pixels(1024 * 1024);

    group.bench_function("derive_and_apply_1m", |b| {
        b.iter(|| {
            let params = BiasGain::from_samples(black_box(&pixels)).unwrap();
            let mut buf = pixels.clone();
            normalize::apply_bias_gain_in_place(&mut buf, params);
            black_box(buf);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_statistics,
    bench_apply_bias_gain,
    bench_full_normalization,
);

criterion_main!(benches);
