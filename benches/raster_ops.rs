use criterion::{black_box, criterion_group, criterion_main, Criterion};
use raster_buffer::core::RasterBuffer;
use raster_buffer::term::RasterView;
use raster_buffer::types::Pixel;

fn bench_set_get(c: &mut Criterion) {
    let mut raster = RasterBuffer::new("bench", 64, 64);

    c.bench_function("set_get_pixel", |b| {
        b.iter(|| {
            raster.set_pixel(black_box(17), black_box(33), Pixel::new(1, 2, 3));
            black_box(raster.get_pixel(black_box(17), black_box(33)));
        })
    });
}

fn bench_increment(c: &mut Criterion) {
    let mut raster = RasterBuffer::new("bench", 64, 64);

    c.bench_function("increment_channel", |b| {
        b.iter(|| {
            raster.increment_channel(black_box(5), black_box(9), 1, black_box('g'));
        })
    });
}

fn bench_resize(c: &mut Criterion) {
    c.bench_function("resize_256_grow_shrink", |b| {
        b.iter(|| {
            let mut raster = RasterBuffer::new("bench", 256, 256);
            raster.resize(black_box(300), black_box(200));
            raster.resize(black_box(128), black_box(128));
            raster
        })
    });
}

fn bench_double(c: &mut Criterion) {
    c.bench_function("double_width_then_height", |b| {
        b.iter(|| {
            let mut raster = RasterBuffer::new("bench", 64, 64);
            raster.double_width();
            raster.double_height();
            raster
        })
    });
}

fn bench_equality(c: &mut Criterion) {
    let a = RasterBuffer::new("bench", 256, 256);
    let b_raster = a.clone();

    c.bench_function("equality_256", |b| {
        b.iter(|| black_box(&a) == black_box(&b_raster))
    });
}

fn bench_render(c: &mut Criterion) {
    let raster = RasterBuffer::new("bench", 32, 32);
    let view = RasterView::default();

    c.bench_function("text_render_32", |b| b.iter(|| black_box(&raster).to_string()));
    c.bench_function("preview_render_32", |b| b.iter(|| view.render(black_box(&raster))));
}

criterion_group!(
    benches,
    bench_set_get,
    bench_increment,
    bench_resize,
    bench_double,
    bench_equality,
    bench_render
);
criterion_main!(benches);
