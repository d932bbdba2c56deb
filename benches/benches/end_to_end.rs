//! End-to-end encode/decode benchmarks
//!
//! Run with: cargo bench --bench end_to_end

use blockdct_core::{Dimensions, RasterImage, SampleBuffer};
use blockdct_decoder::Decoder;
use blockdct_encoder::Encoder;
use blockdct_io::{read_coefficients, write_coefficients};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::io::Cursor;

/// Gradient test image
fn create_test_image(width: u32, height: u32) -> RasterImage {
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            data.push(((x * 255) / width) as u8);
            data.push(((y * 255) / height) as u8);
            data.push(128);
        }
    }
    RasterImage::from_buffer(Dimensions::new(width, height), 255, SampleBuffer::U8(data)).unwrap()
}

fn bench_encode_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("Encode by Size");
    let encoder = Encoder::default();

    for &size in &[64u32, 128, 256, 512] {
        let image = create_test_image(size, size);
        group.throughput(Throughput::Elements(u64::from(size * size)));
        group.bench_with_input(BenchmarkId::from_parameter(size), &image, |b, image| {
            b.iter(|| encoder.encode(black_box(image)));
        });
    }

    group.finish();
}

fn bench_decode_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("Decode by Size");
    let encoder = Encoder::default();
    let decoder = Decoder::default();

    for &size in &[64u32, 128, 256, 512] {
        let coefficients = encoder.encode(&create_test_image(size, size)).unwrap();
        group.throughput(Throughput::Elements(u64::from(size * size)));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &coefficients,
            |b, coefficients| {
                b.iter(|| decoder.decode(black_box(coefficients)));
            },
        );
    }

    group.finish();
}

fn bench_text_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("Coefficient Text 256x256");
    let coefficients = Encoder::default()
        .encode(&create_test_image(256, 256))
        .unwrap();

    group.bench_function("write", |b| {
        b.iter(|| {
            let mut out = Vec::new();
            write_coefficients(black_box(&coefficients), &mut out).map(|_| out)
        });
    });

    let mut text = Vec::new();
    write_coefficients(&coefficients, &mut text).unwrap();
    group.bench_function("read", |b| {
        b.iter(|| read_coefficients(Cursor::new(black_box(&text))));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_encode_by_size,
    bench_decode_by_size,
    bench_text_format
);
criterion_main!(benches);
