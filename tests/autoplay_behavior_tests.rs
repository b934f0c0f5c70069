use std::time::Duration;

use carousel_rs::api::{AutoplayScheduler, CarouselConfig, HeadlessCarousel};
use carousel_rs::core::{AutoplayDirection, Offset, ViewportSize};

const TICK: Duration = Duration::from_millis(1_000);

fn autoplay_engine(
    page_count: usize,
    loop_pages: bool,
    initial_index: usize,
    direction: AutoplayDirection,
) -> HeadlessCarousel {
    let config = CarouselConfig::default()
        .with_loop(loop_pages)
        .with_initial_index(initial_index)
        .with_autoplay(1_000.0, direction);
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
fn autoplay_arms_on_mount_and_advances_on_tick() {
    let mut engine = autoplay_engine(3, true, 0, AutoplayDirection::Forward);
    assert!(engine.is_autoplay_armed());

    assert_eq!(engine.advance_autoplay_clock(Duration::from_millis(999)), 0);
    assert_eq!(engine.advance_autoplay_clock(Duration::from_millis(1)), 1);
    assert!(engine.is_scrolling());
    assert!(!engine.is_autoplay_armed());
    assert_eq!(
        engine.scroll_viewport().last_scroll_target(),
        Some(Offset::new(200.0, 0.0))
    );

    settle_last_scroll(&mut engine);
    assert_eq!(engine.index(), 1.0);
    assert!(engine.is_autoplay_armed());
}

#[test]
fn looping_autoplay_keeps_cycling_through_the_wrap() {
    let mut engine = autoplay_engine(3, true, 0, AutoplayDirection::Forward);
    let mut pages = Vec::new();
    for _ in 0..4 {
        assert_eq!(engine.advance_autoplay_clock(TICK), 1);
        settle_last_scroll(&mut engine);
        pages.push(engine.active_page());
    }
    assert_eq!(pages, vec![1, 2, 0, 1]);
}

#[test]
fn backward_autoplay_steps_back() {
    let mut engine = autoplay_engine(3, true, 0, AutoplayDirection::Backward);
    engine.advance_autoplay_clock(TICK);
    settle_last_scroll(&mut engine);
    assert_eq!(engine.index(), 2.0);
}

#[test]
fn autoplay_ends_at_non_looping_boundary() {
    let mut engine = autoplay_engine(3, false, 2, AutoplayDirection::Forward);

    assert_eq!(engine.advance_autoplay_clock(TICK), 1);
    assert!(engine.autoplay_ended());
    assert!(!engine.is_autoplay_armed());
    assert!(engine.scroll_viewport().scroll_targets().is_empty());

    assert_eq!(engine.advance_autoplay_clock(TICK * 10), 0);
    assert!(engine.scroll_viewport().scroll_targets().is_empty());

    // a settle without manual navigation keeps autoplay ended
    engine.on_settle(engine.offset());
    assert!(engine.autoplay_ended());
    assert!(!engine.is_autoplay_armed());
}

#[test]
fn manual_navigation_rearms_ended_autoplay() {
    let mut engine = autoplay_engine(3, false, 2, AutoplayDirection::Forward);
    engine.advance_autoplay_clock(TICK);
    assert!(engine.autoplay_ended());

    assert!(engine.prev().is_issued());
    assert!(!engine.autoplay_ended());
    settle_last_scroll(&mut engine);
    assert_eq!(engine.index(), 1.0);
    assert!(engine.is_autoplay_armed());

    engine.advance_autoplay_clock(TICK);
    settle_last_scroll(&mut engine);
    assert_eq!(engine.index(), 2.0);

    engine.advance_autoplay_clock(TICK);
    assert!(engine.autoplay_ended());
}

#[test]
fn backward_autoplay_ends_at_first_page() {
    let mut engine = autoplay_engine(3, false, 0, AutoplayDirection::Backward);
    engine.advance_autoplay_clock(TICK);
    assert!(engine.autoplay_ended());
    assert!(engine.scroll_viewport().scroll_targets().is_empty());
}

#[test]
fn drag_cancels_pending_tick_and_settle_rearms() {
    let mut engine = autoplay_engine(3, true, 0, AutoplayDirection::Forward);
    engine.on_drag_begin();

    assert!(!engine.is_autoplay_armed());
    assert_eq!(engine.scheduler().pending_count(), 0);
    assert_eq!(engine.advance_autoplay_clock(TICK * 5), 0);

    engine.on_settle(Offset::new(200.0, 0.0));
    assert!(engine.is_autoplay_armed());
    assert_eq!(engine.scheduler().pending_count(), 1);
}

#[test]
fn rearming_never_stacks_timers() {
    let mut engine = autoplay_engine(3, true, 1, AutoplayDirection::Forward);
    let offset = engine.offset();
    for _ in 0..5 {
        engine.on_settle(offset);
        assert_eq!(engine.scheduler().pending_count(), 1);
    }
    assert_eq!(engine.scheduler().scheduled_total(), 6);
    assert_eq!(engine.scheduler().cancelled_total(), 5);
}

#[test]
fn stale_timer_token_is_ignored() {
    let mut engine = autoplay_engine(3, true, 0, AutoplayDirection::Forward);
    let stale = engine.scheduler_mut().schedule(Duration::ZERO);
    engine.scheduler_mut().cancel(stale);

    engine.on_timer_fired(stale);
    assert!(!engine.is_scrolling());
    assert!(engine.scroll_viewport().scroll_targets().is_empty());
    assert!(engine.is_autoplay_armed());
}

#[test]
fn negative_interval_never_arms() {
    let config = CarouselConfig::default().with_autoplay(-250.0, AutoplayDirection::Forward);
    let mut engine = HeadlessCarousel::headless(config, 3, ViewportSize::new(100.0, 50.0))
        .expect("engine init");

    assert!(!engine.is_autoplay_armed());
    assert_eq!(engine.scheduler().scheduled_total(), 0);
    engine.on_settle(Offset::new(200.0, 0.0));
    assert_eq!(engine.scheduler().scheduled_total(), 0);
}

#[test]
fn single_page_never_arms_autoplay() {
    let engine = autoplay_engine(1, true, 0, AutoplayDirection::Forward);
    assert!(!engine.is_autoplay_armed());
}

#[test]
fn unmount_cancels_pending_tick() {
    let engine = autoplay_engine(3, true, 0, AutoplayDirection::Forward);
    let (_renderer, _viewport, mut scheduler) = engine.unmount();

    assert_eq!(scheduler.pending_count(), 0);
    assert!(scheduler.advance(TICK * 3).is_empty());
}

#[derive(Clone, Default)]
struct SharedScheduler(std::rc::Rc<std::cell::RefCell<carousel_rs::api::ManualScheduler>>);

impl AutoplayScheduler for SharedScheduler {
    fn schedule(&mut self, delay: Duration) -> carousel_rs::api::TimerToken {
        self.0.borrow_mut().schedule(delay)
    }

    fn cancel(&mut self, token: carousel_rs::api::TimerToken) {
        self.0.borrow_mut().cancel(token);
    }
}

#[test]
fn dropping_engine_cancels_pending_tick() {
    let scheduler = SharedScheduler::default();
    let config = CarouselConfig::default().with_autoplay(1_000.0, AutoplayDirection::Forward);
    let engine = carousel_rs::api::CarouselEngine::new(
        carousel_rs::render::NullRenderer::default(),
        carousel_rs::interaction::RecordingViewport::default(),
        scheduler.clone(),
        config,
        3,
        ViewportSize::new(100.0, 50.0),
    )
    .expect("engine init");
    assert!(engine.is_autoplay_armed());
    assert_eq!(scheduler.0.borrow().pending_count(), 1);

    drop(engine);

    let clock = scheduler.0.borrow();
    assert_eq!(clock.pending_count(), 0);
    assert_eq!(clock.cancelled_total(), 1);
}
