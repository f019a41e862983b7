use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use yuvlab_rs::image_pipeline::{
    BitmapHeader, BmpToYuvPipeline, ConversionConfig, convert_pixels,
};

fn generate_mock_bitmap(width: usize, height: usize) -> Vec<u8> {
    let stride = (width * 3 + 3) & !3;
    let mut data = BitmapHeader::encode_rgb24(width as u32, height as u32, stride).to_vec();
    for y in 0..height {
        for x in 0..width {
            let value = ((x + y) % 256) as u8;
            data.extend_from_slice(&[value, value / 2, 255 - value]);
        }
        data.resize(data.len() + stride - width * 3, 0);
    }
    data
}

fn benchmark_conversion_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion_by_size");

    let sizes = vec![
        (100, 100, "100x100"),
        (500, 500, "500x500"),
        (1000, 1000, "1000x1000"),
    ];

    for (width, height, label) in sizes {
        let mock_data = generate_mock_bitmap(width, height);

        group.bench_with_input(
            BenchmarkId::from_parameter(label),
            &mock_data,
            |b, data| {
                let pipeline = BmpToYuvPipeline::new(ConversionConfig::default());

                b.iter(|| {
                    let mut output = Vec::new();
                    let _ = pipeline.convert(black_box(data), &mut output);
                });
            },
        );
    }

    group.finish();
}

fn benchmark_pixel_transform(c: &mut Criterion) {
    let rgb: Vec<u8> = (0..=255u8).cycle().take(3 * 500 * 500).collect();

    c.bench_function("convert_pixels_500x500", |b| {
        b.iter(|| convert_pixels(black_box(&rgb)));
    });
}

criterion_group!(
    benches,
    benchmark_conversion_sizes,
    benchmark_pixel_transform
);
criterion_main!(benches);
