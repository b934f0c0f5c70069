use tracing::debug;

use crate::error::CarouselResult;
use crate::extensions::PluginEvent;
use crate::interaction::ScrollViewport;
use crate::render::{ButtonStyle, PaginationRenderer, Renderer};

use super::{
    AutoplayScheduler, CarouselCallbacks, autoplay_controller::AutoplayTimer,
    engine_core::EngineCore,
};

/// Main orchestration facade consumed by host applications.
///
/// `CarouselEngine` owns the paging state machine and talks to three
/// collaborators: the renderer that paints frames, the scroll viewport that
/// executes scroll commands, and the scheduler behind autoplay ticks.
///
/// Dropping the engine cancels any pending autoplay tick; `unmount` does the
/// same and also hands the collaborators back.
pub struct CarouselEngine<R: Renderer, V: ScrollViewport, S: AutoplayScheduler> {
    pub(super) renderer: R,
    pub(super) viewport: V,
    pub(super) autoplay: AutoplayTimer<S>,
    pub(super) core: EngineCore,
}

impl<R: Renderer, V: ScrollViewport, S: AutoplayScheduler> CarouselEngine<R, V, S> {
    /// Replaces the host callback table.
    pub fn set_callbacks(&mut self, callbacks: CarouselCallbacks) {
        self.core.runtime.callbacks = callbacks;
    }

    /// Swaps the pagination strategy used by `build_render_frame`.
    pub fn set_pagination_renderer(&mut self, pagination: Box<dyn PaginationRenderer>) {
        self.core.presentation.pagination = pagination;
    }

    pub fn set_button_style(&mut self, style: ButtonStyle) {
        self.core.presentation.button_style = style;
    }

    pub fn render(&mut self) -> CarouselResult<()> {
        let frame = self.build_render_frame();
        self.renderer.render(&frame)?;
        self.emit_plugin_event(PluginEvent::Rendered);
        Ok(())
    }

    /// Tears the carousel down, cancelling any pending autoplay tick, and hands
    /// the collaborators back to the host.
    pub fn unmount(self) -> (R, V, S) {
        debug!(index = self.core.model.state.index, "carousel unmounted");
        (self.renderer, self.viewport, self.autoplay.release())
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.unmount().0
    }
}
