mod autoplay_controller;
mod autoplay_scheduler;
mod callbacks;
mod carousel_model;
mod carousel_state;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_core;
mod engine_init;
mod engine_snapshot;
mod navigation_controller;
mod navigation_target_resolver;
mod plugin_dispatch;
mod plugin_registry;
mod render_frame_builder;
mod scroll_event_controller;
mod scroll_settle_resolver;
mod state_update_queue;
mod update_commit;
mod validation;

pub use autoplay_scheduler::{AutoplayScheduler, ManualScheduler, TimerToken};
pub use callbacks::{CarouselCallbacks, CarouselEvent, HostCallback};
pub use carousel_state::CarouselState;
pub use engine::CarouselEngine;
pub use engine_config::{CarouselConfig, ViewportBehavior};
pub use engine_init::HeadlessCarousel;
pub use engine_snapshot::EngineSnapshot;
pub use navigation_controller::NavigationOutcome;
