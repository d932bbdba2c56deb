//! Per-stage benchmarks: color conversion, block split, quantization, zigzag
//!
//! Run with: cargo bench --bench pipeline_stages

use blockdct_color::{level_shift, ColorConverter};
use blockdct_core::{ChannelTriple, QuantMatrix};
use blockdct_transform::{quantize, split_channels, zigzag_scan_8x8};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn bench_color_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("Color Conversion");
    let converter = ColorConverter::default();

    for &size in &[64usize, 256, 512] {
        let rgb: Vec<f64> = (0..size * size * 3).map(|i| (i % 256) as f64).collect();
        group.throughput(Throughput::Elements((size * size) as u64));

        group.bench_function(format!("rgb_to_ycbcr_{}x{}", size, size), |b| {
            b.iter(|| converter.rgb_buffer_to_ycbcr(black_box(&rgb)));
        });

        let ycbcr = converter.rgb_buffer_to_ycbcr(&rgb);
        group.bench_function(format!("ycbcr_to_rgb_{}x{}", size, size), |b| {
            b.iter(|| converter.ycbcr_buffer_to_rgb(black_box(&ycbcr)));
        });
    }

    group.finish();
}

fn bench_split_channels(c: &mut Criterion) {
    let mut group = c.benchmark_group("Block Split");

    for &size in &[64usize, 256, 512] {
        let samples: Vec<f64> = (0..size * size * 3).map(|i| (i % 251) as f64).collect();
        let planes = level_shift(
            &ChannelTriple::from_interleaved(size, size, &samples).unwrap(),
            -128.0,
        );
        group.throughput(Throughput::Elements((size * size) as u64));

        group.bench_function(format!("split_{}x{}", size, size), |b| {
            b.iter(|| split_channels(black_box(&planes)));
        });
    }

    group.finish();
}

fn bench_quantize_zigzag(c: &mut Criterion) {
    let mut group = c.benchmark_group("Quantize and Zigzag");
    let coeffs: [f64; 64] = core::array::from_fn(|i| 1024.0 / (i + 1) as f64);
    let table = QuantMatrix::luma();

    group.bench_function("quantize_luma", |b| {
        let mut levels = [0i32; 64];
        b.iter(|| quantize(black_box(&coeffs), black_box(&table), black_box(&mut levels)));
    });

    let levels: [i32; 64] = core::array::from_fn(|i| i as i32);
    group.bench_function("zigzag_scan", |b| {
        let mut out = [0i32; 64];
        b.iter(|| zigzag_scan_8x8(black_box(&levels), black_box(&mut out)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_color_conversion,
    bench_split_channels,
    bench_quantize_zigzag
);
criterion_main!(benches);
