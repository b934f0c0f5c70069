//! carousel-rs: headless paged-scroller engine.
//!
//! The crate owns the position/index state machine of a carousel: mapping
//! settled scroll offsets to logical pages, seamless infinite looping,
//! autoplay scheduling and programmatic navigation targets. Scrolling,
//! timers and drawing stay behind small collaborator traits.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{CarouselConfig, CarouselEngine};
pub use error::{CarouselError, CarouselResult};
