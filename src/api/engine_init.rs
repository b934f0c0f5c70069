use tracing::debug;

use crate::core::{PageLayout, ViewportSize};
use crate::error::CarouselResult;
use crate::interaction::{RecordingViewport, ScrollViewport};
use crate::render::{NullRenderer, Renderer};

use super::{
    AutoplayScheduler, CarouselConfig, CarouselEngine, ManualScheduler,
    autoplay_controller::AutoplayTimer,
    carousel_model::CarouselModel,
    engine_core::{CarouselPresentationState, CarouselRuntimeState, EngineCore},
    validation::{clamp_initial_index, resolve_viewport_size},
};

/// Fully headless engine used by tests, benches and command-log hosts.
pub type HeadlessCarousel = CarouselEngine<NullRenderer, RecordingViewport, ManualScheduler>;

impl<R: Renderer, V: ScrollViewport, S: AutoplayScheduler> CarouselEngine<R, V, S> {
    /// Mounts a carousel over a collection of `page_count` pages.
    ///
    /// The viewport size comes from `config.viewport_size` when set, otherwise
    /// from `ambient_viewport`. The viewport is positioned on the initial page
    /// and autoplay is armed when enabled.
    pub fn new(
        renderer: R,
        viewport: V,
        scheduler: S,
        config: CarouselConfig,
        page_count: usize,
        ambient_viewport: ViewportSize,
    ) -> CarouselResult<Self> {
        let viewport_size = resolve_viewport_size(&config, ambient_viewport)?;
        let layout = PageLayout::new(page_count, config.loop_pages);
        let index = clamp_initial_index(config.initial_index, layout.page_count());
        let model = CarouselModel::new(
            layout,
            page_count,
            config.axis(),
            viewport_size,
            index as f64,
        );

        let mut engine = Self {
            renderer,
            viewport,
            autoplay: AutoplayTimer::new(scheduler),
            core: EngineCore {
                config,
                model,
                presentation: CarouselPresentationState::default(),
                runtime: CarouselRuntimeState::default(),
            },
        };

        let state = engine.core.model.state;
        debug!(
            page_count = state.page_count,
            index = state.index,
            axis = ?state.axis,
            looping = layout.is_looping(),
            autoplay = config.autoplay,
            "carousel mounted"
        );
        engine.viewport.set_offset(state.offset);
        engine.rearm_autoplay();

        Ok(engine)
    }
}

impl HeadlessCarousel {
    /// Mounts a carousel over headless collaborators.
    pub fn headless(
        config: CarouselConfig,
        page_count: usize,
        ambient_viewport: ViewportSize,
    ) -> CarouselResult<Self> {
        Self::new(
            NullRenderer::default(),
            RecordingViewport::default(),
            ManualScheduler::default(),
            config,
            page_count,
            ambient_viewport,
        )
    }
}
