use carousel_rs::api::{CarouselConfig, HeadlessCarousel};
use carousel_rs::core::{PageLayout, ViewportSize, round_to_page};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_layout_wrap_and_round(c: &mut Criterion) {
    let layout = PageLayout::new(1_000, true);

    c.bench_function("layout_wrap_and_round", |b| {
        b.iter(|| {
            let _ = layout.wrap_index(black_box(1_000.0));
            let _ = layout.wrap_index(black_box(-1.0));
            let _ = round_to_page(black_box(417.49), black_box(1_000));
        })
    });
}

fn bench_navigation_settle_cycle(c: &mut Criterion) {
    let mut engine = HeadlessCarousel::headless(
        CarouselConfig::default(),
        16,
        ViewportSize::new(1_280.0, 720.0),
    )
    .expect("engine init");

    c.bench_function("navigation_settle_cycle", |b| {
        b.iter(|| {
            let outcome = engine.scroll_to(black_box(1));
            if let carousel_rs::api::NavigationOutcome::Issued { target } = outcome {
                engine.on_settle(target);
            }
            engine.scroll_viewport_mut().clear();
        })
    });
}

fn bench_render_frame_200_pages(c: &mut Criterion) {
    let config = CarouselConfig::default().with_buttons(true);
    let mut engine =
        HeadlessCarousel::headless(config, 200, ViewportSize::new(1_280.0, 720.0))
            .expect("engine init");
    engine.set_page_titles((0..200).map(|page| Some(format!("Page {page}"))));

    c.bench_function("render_frame_200_pages", |b| {
        b.iter(|| {
            let frame = engine.build_render_frame();
            black_box(frame.slots.len());
        })
    });
}

criterion_group!(
    benches,
    bench_layout_wrap_and_round,
    bench_navigation_settle_cycle,
    bench_render_frame_200_pages
);
criterion_main!(benches);
