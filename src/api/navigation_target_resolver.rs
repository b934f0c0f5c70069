use crate::core::{Offset, PageLayout};

use super::CarouselState;

/// Absolute viewport offset `step` pages away from the stored index.
///
/// Targets are expressed in rendered slots, so a looping layout can aim at
/// the clone slot one past either end; the settle that follows wraps back.
pub(super) fn resolve_navigation_target(
    layout: PageLayout,
    state: &CarouselState,
    step: i32,
) -> Offset {
    let slot = layout.slot_shift() as f64 + f64::from(step) + state.index;
    Offset::along(state.axis, slot * state.extent())
}
