use crate::core::{Offset, PageLayout};

use super::CarouselState;

/// Position committed after a settle report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct SettledPosition {
    pub(super) index: f64,
    pub(super) offset: Offset,
    pub(super) wrapped: bool,
}

/// Folds a reported viewport offset into the logical index.
///
/// The index moves by the travelled distance in page extents, so several quick
/// swipes that settle once still land on the right page. Past either end of a
/// looping layout the index wraps and the offset is moved to the matching
/// real slot. Returns `None` when the reported offset did not move along the
/// scroll axis.
pub(super) fn resolve_settled_position(
    layout: PageLayout,
    state: &CarouselState,
    reported: Offset,
) -> Option<SettledPosition> {
    let axis = state.axis;
    let extent = state.extent();
    let diff = reported.get(axis) - state.offset.get(axis);
    if diff == 0.0 || !diff.is_finite() {
        return None;
    }

    let index = state.index + diff / extent;
    match layout.wrap_index(index) {
        Some(wrap) => Some(SettledPosition {
            index: wrap.index,
            offset: reported.with(axis, wrap.slot as f64 * extent),
            wrapped: true,
        }),
        None => Some(SettledPosition {
            index,
            offset: reported,
            wrapped: false,
        }),
    }
}
