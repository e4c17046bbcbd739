use criterion::{BatchSize, Criterion, criterion_group, criterion_main};

use mandelbrot_explorer::{Engine, PixelRect};

const WIDTH: u32 = 400;
const HEIGHT: u32 = 300;

fn bench_generate_full_view(c: &mut Criterion) {
    c.bench_function("generate_full_view_400x300", |b| {
        b.iter_batched(
            || Engine::new(WIDTH, HEIGHT).unwrap(),
            |mut engine| {
                let selection = PixelRect::new(0, WIDTH, 0, HEIGHT).unwrap();
                engine.generate(selection, 256, false, 1.0).unwrap();
                engine
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_zoom_with_animation(c: &mut Criterion) {
    c.bench_function("zoom_with_animation_400x300", |b| {
        b.iter_batched(
            || Engine::new(WIDTH, HEIGHT).unwrap(),
            |mut engine| {
                let selection = PixelRect::new(100, 300, 75, 225).unwrap();
                engine.generate(selection, 100, true, 2.0).unwrap();
                engine
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_recolour_current_view(c: &mut Criterion) {
    c.bench_function("recolour_current_view_400x300", |b| {
        b.iter_batched(
            || Engine::new(WIDTH, HEIGHT).unwrap(),
            |mut engine| {
                engine.change_colour_mapping();
                engine
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_generate_full_view,
    bench_zoom_with_animation,
    bench_recolour_current_view
);
criterion_main!(benches);
