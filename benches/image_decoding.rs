// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_loupe::selection::decode_bytes;
use image_rs::{ImageFormat, RgbaImage};
use std::hint::black_box;
use std::io::Cursor;

fn encode(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
    let mut bytes = Vec::new();
    RgbaImage::from_fn(width, height, |x, y| {
        image_rs::Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
    })
    .write_to(&mut Cursor::new(&mut bytes), format)
    .expect("encode benchmark image");
    bytes
}

fn image_decoding_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("image_decoding");

    for (width, height) in [(640, 480), (1920, 1080), (4000, 3000)] {
        let png = encode(width, height, ImageFormat::Png);
        group.bench_with_input(
            BenchmarkId::new("decode_png", format!("{width}x{height}")),
            &png,
            |b, bytes| {
                b.iter(|| black_box(decode_bytes(bytes.clone()).expect("decode")));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, image_decoding_benchmark);
criterion_main!(benches);
