use crate::core::ViewportSize;
use crate::error::CarouselResult;

use super::CarouselConfig;

/// Picks the config override when present, else the ambient size, and checks
/// that the result can be divided by.
pub(super) fn resolve_viewport_size(
    config: &CarouselConfig,
    ambient: ViewportSize,
) -> CarouselResult<ViewportSize> {
    config.viewport_size.unwrap_or(ambient).validate()
}

/// Clamps the requested start page into the collection.
pub(super) fn clamp_initial_index(initial_index: usize, page_count: usize) -> usize {
    if page_count <= 1 {
        return 0;
    }
    initial_index.min(page_count - 1)
}
