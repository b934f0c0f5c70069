use crate::core::{Axis, Offset, PageLayout, ViewportSize};
use crate::interaction::ScrollPhase;

use super::CarouselState;

/// Paging model owned by the engine core.
pub(super) struct CarouselModel {
    pub(super) state: CarouselState,
    pub(super) layout: PageLayout,
    /// Size of the host collection before empty collections were padded to one page.
    pub(super) collection_len: usize,
    pub(super) phase: ScrollPhase,
    pub(super) page_titles: Vec<Option<String>>,
    /// Resize received mid-scroll, applied by the settle that ends it.
    pub(super) deferred_viewport: Option<ViewportSize>,
}

impl CarouselModel {
    #[must_use]
    pub(super) fn new(
        layout: PageLayout,
        collection_len: usize,
        axis: Axis,
        viewport_size: ViewportSize,
        index: f64,
    ) -> Self {
        let extent = viewport_size.extent(axis);
        let offset = Offset::along(axis, layout.slot_for_index(index) * extent);
        Self {
            state: CarouselState {
                page_count: layout.page_count(),
                axis,
                viewport_size,
                index,
                offset,
                is_scrolling: false,
                autoplay_ended: false,
            },
            layout,
            collection_len,
            phase: ScrollPhase::Idle,
            page_titles: Vec::new(),
            deferred_viewport: None,
        }
    }

    #[must_use]
    pub(super) fn active_title(&self) -> Option<&str> {
        self.page_titles
            .get(self.state.active_page())
            .and_then(Option::as_deref)
            .filter(|title| !title.is_empty())
    }
}
