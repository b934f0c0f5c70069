use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{AutoplayDirection, Axis, ViewportSize};
use crate::error::{CarouselError, CarouselResult};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load carousel
/// setup without inventing their own ad-hoc format. Missing fields fall back
/// to the defaults of [`CarouselConfig::default`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    #[serde(default = "default_true")]
    pub horizontal: bool,
    #[serde(default = "default_true")]
    pub paging_enabled: bool,
    #[serde(default)]
    pub bounces: bool,
    #[serde(rename = "loop", default = "default_true")]
    pub loop_pages: bool,
    #[serde(default)]
    pub autoplay: bool,
    #[serde(default = "default_autoplay_interval_ms")]
    pub autoplay_interval_ms: f64,
    #[serde(default)]
    pub autoplay_direction: AutoplayDirection,
    #[serde(default)]
    pub initial_index: usize,
    #[serde(default = "default_true")]
    pub shows_pagination: bool,
    #[serde(default)]
    pub shows_buttons: bool,
    /// Overrides the ambient viewport size supplied at mount.
    #[serde(default)]
    pub viewport_size: Option<ViewportSize>,
}

/// Settings the host forwards to its scroll primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportBehavior {
    pub axis: Axis,
    pub paging_enabled: bool,
    pub bounces: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            horizontal: true,
            paging_enabled: true,
            bounces: false,
            loop_pages: true,
            autoplay: false,
            autoplay_interval_ms: default_autoplay_interval_ms(),
            autoplay_direction: AutoplayDirection::Forward,
            initial_index: 0,
            shows_pagination: true,
            shows_buttons: false,
            viewport_size: None,
        }
    }
}

impl CarouselConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.horizontal = axis == Axis::Horizontal;
        self
    }

    #[must_use]
    pub fn with_loop(mut self, loop_pages: bool) -> Self {
        self.loop_pages = loop_pages;
        self
    }

    /// Enables autoplay with the given tick interval.
    #[must_use]
    pub fn with_autoplay(mut self, interval_ms: f64, direction: AutoplayDirection) -> Self {
        self.autoplay = true;
        self.autoplay_interval_ms = interval_ms;
        self.autoplay_direction = direction;
        self
    }

    #[must_use]
    pub fn with_initial_index(mut self, index: usize) -> Self {
        self.initial_index = index;
        self
    }

    #[must_use]
    pub fn with_pagination(mut self, shows_pagination: bool) -> Self {
        self.shows_pagination = shows_pagination;
        self
    }

    #[must_use]
    pub fn with_buttons(mut self, shows_buttons: bool) -> Self {
        self.shows_buttons = shows_buttons;
        self
    }

    #[must_use]
    pub fn with_viewport_size(mut self, size: ViewportSize) -> Self {
        self.viewport_size = Some(size);
        self
    }

    #[must_use]
    pub fn with_paging(mut self, paging_enabled: bool, bounces: bool) -> Self {
        self.paging_enabled = paging_enabled;
        self.bounces = bounces;
        self
    }

    #[must_use]
    pub fn axis(&self) -> Axis {
        Axis::from_horizontal(self.horizontal)
    }

    #[must_use]
    pub fn viewport_behavior(&self) -> ViewportBehavior {
        ViewportBehavior {
            axis: self.axis(),
            paging_enabled: self.paging_enabled,
            bounces: self.bounces,
        }
    }

    /// Autoplay tick delay, or `None` when the interval can never fire
    /// (negative, NaN or infinite).
    #[must_use]
    pub fn autoplay_delay(&self) -> Option<Duration> {
        Duration::try_from_secs_f64(self.autoplay_interval_ms / 1000.0).ok()
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> CarouselResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| CarouselError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> CarouselResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| CarouselError::InvalidConfig(format!("failed to parse config: {e}")))
    }
}

fn default_true() -> bool {
    true
}

fn default_autoplay_interval_ms() -> f64 {
    2_500.0
}
