//! Benchmark comparing the closed-form and separable DCT implementations
//!
//! Run with: cargo bench --bench dct_comparison

use blockdct_transform::{
    dct8x8_forward, dct8x8_forward_reference, dct8x8_inverse, dct8x8_inverse_reference,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_dct_8x8_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("DCT 8x8 Comparison");
    let input: [f64; 64] = core::array::from_fn(|i| ((i * 37) % 256) as f64 - 128.0);

    group.bench_function("reference_forward", |b| {
        let mut output = [0.0f64; 64];
        b.iter(|| {
            dct8x8_forward_reference(black_box(&input), black_box(&mut output));
        });
    });

    group.bench_function("separable_forward", |b| {
        let mut output = [0.0f64; 64];
        b.iter(|| {
            dct8x8_forward(black_box(&input), black_box(&mut output));
        });
    });

    group.bench_function("reference_inverse", |b| {
        let mut output = [0.0f64; 64];
        b.iter(|| {
            dct8x8_inverse_reference(black_box(&input), black_box(&mut output));
        });
    });

    group.bench_function("separable_inverse", |b| {
        let mut output = [0.0f64; 64];
        b.iter(|| {
            dct8x8_inverse(black_box(&input), black_box(&mut output));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_dct_8x8_comparison);
criterion_main!(benches);
