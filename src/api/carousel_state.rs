use serde::{Deserialize, Serialize};

use crate::core::{Axis, Offset, ViewportSize, round_to_page};

/// Committed carousel state handed to hosts, callbacks and plugins.
///
/// `index` may be fractional between settles; use [`CarouselState::active_page`]
/// wherever a whole page is needed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarouselState {
    pub page_count: usize,
    pub axis: Axis,
    pub viewport_size: ViewportSize,
    pub index: f64,
    pub offset: Offset,
    pub is_scrolling: bool,
    pub autoplay_ended: bool,
}

impl CarouselState {
    /// Page extent along the scroll axis.
    #[must_use]
    pub fn extent(&self) -> f64 {
        self.viewport_size.extent(self.axis)
    }

    #[must_use]
    pub fn active_page(&self) -> usize {
        round_to_page(self.index, self.page_count)
    }
}
