use carousel_rs::api::{CarouselConfig, HeadlessCarousel, NavigationOutcome};
use carousel_rs::core::{Offset, ViewportSize};
use carousel_rs::interaction::ViewportCommand;

fn engine(page_count: usize, loop_pages: bool, initial_index: usize) -> HeadlessCarousel {
    let config = CarouselConfig::default()
        .with_loop(loop_pages)
        .with_initial_index(initial_index);
    HeadlessCarousel::headless(config, page_count, ViewportSize::new(100.0, 50.0))
        .expect("engine init")
}

fn settle_last_scroll(engine: &mut HeadlessCarousel) {
    let target = engine
        .scroll_viewport()
        .last_scroll_target()
        .expect("scroll command issued");
    engine.on_settle(target);
}

#[test]
fn forward_from_last_page_wraps_to_first_slot() {
    let mut engine = engine(3, true, 2);
    assert_eq!(engine.offset(), Offset::new(300.0, 0.0));

    engine.next();
    assert_eq!(
        engine.scroll_viewport().last_scroll_target(),
        Some(Offset::new(400.0, 0.0))
    );
    settle_last_scroll(&mut engine);

    assert_eq!(engine.index(), 0.0);
    assert_eq!(engine.offset(), Offset::new(100.0, 0.0));
    assert_eq!(
        engine.scroll_viewport().commands().last(),
        Some(&ViewportCommand::SetOffset(Offset::new(100.0, 0.0)))
    );
}

#[test]
fn backward_from_first_page_wraps_to_last_real_slot() {
    let mut engine = engine(3, true, 0);

    engine.prev();
    assert_eq!(
        engine.scroll_viewport().last_scroll_target(),
        Some(Offset::new(0.0, 0.0))
    );
    settle_last_scroll(&mut engine);

    assert_eq!(engine.index(), 2.0);
    assert_eq!(engine.offset(), Offset::new(300.0, 0.0));
}

#[test]
fn second_scroll_to_before_settle_is_dropped() {
    let mut engine = engine(4, false, 0);

    assert!(engine.scroll_to(1).is_issued());
    assert_eq!(engine.scroll_to(1), NavigationOutcome::IgnoredWhileScrolling);
    assert_eq!(engine.scroll_to(-1), NavigationOutcome::IgnoredWhileScrolling);
    assert_eq!(engine.scroll_viewport().scroll_targets().len(), 1);

    settle_last_scroll(&mut engine);
    assert!(engine.scroll_to(1).is_issued());
    assert_eq!(engine.scroll_viewport().scroll_targets().len(), 2);
}

#[test]
fn scroll_to_is_dropped_while_dragging() {
    let mut engine = engine(3, true, 0);
    engine.on_drag_begin();

    assert_eq!(engine.scroll_to(1), NavigationOutcome::IgnoredWhileScrolling);
    assert!(engine.scroll_viewport().scroll_targets().is_empty());
}

#[test]
fn single_page_is_stable() {
    for page_count in [0, 1] {
        for loop_pages in [false, true] {
            let mut engine = engine(page_count, loop_pages, 3);
            assert_eq!(engine.offset(), Offset::ZERO);
            assert_eq!(engine.scroll_to(1), NavigationOutcome::IgnoredSinglePage);
            assert_eq!(engine.scroll_to(-1), NavigationOutcome::IgnoredSinglePage);
            assert!(!engine.is_scrolling());
            assert!(engine.scroll_viewport().scroll_targets().is_empty());
            assert_eq!(engine.offset(), Offset::ZERO);
        }
    }
}

#[test]
fn zero_step_is_ignored() {
    let mut engine = engine(3, true, 0);
    assert_eq!(engine.scroll_to(0), NavigationOutcome::IgnoredZeroStep);
    assert!(!engine.is_scrolling());
}

#[test]
fn scenario_three_pages_loop_advance_once() {
    let mut engine = engine(3, true, 0);
    engine.scroll_to(1);
    engine.on_settle(Offset::new(200.0, 0.0));
    assert_eq!(engine.index(), 1.0);
}

#[test]
fn round_trip_restores_index_and_offset() {
    for loop_pages in [false, true] {
        for start in 0..3 {
            if !loop_pages && start == 2 {
                continue;
            }
            let mut engine = engine(3, loop_pages, start);
            let index = engine.index();
            let offset = engine.offset();

            engine.scroll_to(1);
            settle_last_scroll(&mut engine);
            engine.scroll_to(-1);
            settle_last_scroll(&mut engine);

            assert_eq!(engine.index(), index, "loop={loop_pages} start={start}");
            assert_eq!(engine.offset(), offset, "loop={loop_pages} start={start}");
        }
    }
}

#[test]
fn zero_delta_settle_only_ends_scrolling() {
    let mut engine = engine(3, true, 1);
    let offset = engine.offset();
    engine.on_drag_begin();
    engine.on_settle(offset);

    assert!(!engine.is_scrolling());
    assert_eq!(engine.index(), 1.0);
    assert_eq!(engine.offset(), offset);
}

#[test]
fn multi_page_fling_accumulates_fractional_index() {
    let mut engine = engine(5, false, 0);
    engine.on_drag_begin();
    engine.on_settle(Offset::new(250.0, 0.0));

    assert_eq!(engine.index(), 2.5);
    assert_eq!(engine.active_page(), 3);

    engine.on_drag_begin();
    engine.on_settle(Offset::new(300.0, 0.0));
    assert_eq!(engine.index(), 3.0);
}

#[test]
fn non_looping_overscroll_is_not_clamped_in_state() {
    let mut engine = engine(3, false, 2);
    engine.scroll_to(1);
    settle_last_scroll(&mut engine);

    assert_eq!(engine.index(), 3.0);
    assert_eq!(engine.active_page(), 2);
}
