use indexmap::IndexMap;

use crate::extensions::CarouselPlugin;
use crate::render::{ButtonStyle, DefaultDotRenderer, DotPagination, PaginationRenderer};

use super::{
    CarouselCallbacks, CarouselConfig, carousel_model::CarouselModel,
    state_update_queue::PendingUpdates,
};

/// Internal engine core state used by the public facade (`CarouselEngine`).
pub(super) struct EngineCore {
    pub(super) config: CarouselConfig,
    pub(super) model: CarouselModel,
    pub(super) presentation: CarouselPresentationState,
    pub(super) runtime: CarouselRuntimeState,
}

/// Injectable presentation strategies.
pub(super) struct CarouselPresentationState {
    pub(super) pagination: Box<dyn PaginationRenderer>,
    pub(super) button_style: ButtonStyle,
}

impl Default for CarouselPresentationState {
    fn default() -> Self {
        Self {
            pagination: Box::new(DotPagination::new(DefaultDotRenderer::default())),
            button_style: ButtonStyle::default(),
        }
    }
}

/// Event orchestration state grouped separately from the paging model.
#[derive(Default)]
pub(super) struct CarouselRuntimeState {
    pub(super) pending: PendingUpdates,
    pub(super) callbacks: CarouselCallbacks,
    pub(super) plugins: IndexMap<String, Box<dyn CarouselPlugin>>,
}
