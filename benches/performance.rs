use criterion::{black_box, criterion_group, criterion_main, Criterion};
use histogrammer::{render, ArgbImage, Histogram, PercentageHistogram};
use image::{DynamicImage, Rgba, RgbaImage};

fn test_image() -> ArgbImage {
    ArgbImage::from_fn(1920, 1080, |x, y| 0xFF00_0000 | (x % 256) << 16 | (y % 256) << 8 | ((x + y) % 256))
}

fn bench_accumulate(c: &mut Criterion) {
    let argb = test_image();
    let dynamic = DynamicImage::ImageRgba8(RgbaImage::from_pixel(1920, 1080, Rgba([200, 150, 100, 255])));

    c.bench_function("accumulate_argb_1920x1080", |b| {
        b.iter(|| Histogram::from_source(black_box(&argb)))
    });
    c.bench_function("accumulate_dynamic_1920x1080", |b| {
        b.iter(|| Histogram::from_source(black_box(&dynamic)))
    });
}

fn bench_normalize_and_render(c: &mut Criterion) {
    let argb = test_image();
    let histogram = Histogram::from_source(&argb);
    let total = 1920 * 1080;

    c.bench_function("normalize", |b| {
        b.iter(|| PercentageHistogram::from_histogram(black_box(&histogram), total))
    });

    let percentages = PercentageHistogram::from_histogram(&histogram, total).unwrap();
    c.bench_function("render_scale_2", |b| {
        b.iter(|| render::render_with_scale(black_box(&percentages), 2))
    });
}

criterion_group!(benches, bench_accumulate, bench_normalize_and_render);
criterion_main!(benches);
