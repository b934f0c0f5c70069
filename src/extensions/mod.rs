//! Optional observer hooks live here.
//!
//! Plugins see committed state only and never feed back into the core paths.

pub mod plugins;

pub use plugins::{CarouselPlugin, PluginEvent};
