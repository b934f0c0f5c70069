use tracing::debug;

use crate::core::{Axis, ButtonState, Offset, PageLayout, ViewportSize};
use crate::error::CarouselResult;
use crate::extensions::PluginEvent;
use crate::interaction::{ScrollPhase, ScrollViewport};
use crate::render::Renderer;

use super::{
    AutoplayScheduler, CarouselConfig, CarouselEngine, CarouselState, ViewportBehavior,
    state_update_queue::{PostFlushHook, StateUpdate},
};

impl<R: Renderer, V: ScrollViewport, S: AutoplayScheduler> CarouselEngine<R, V, S> {
    /// Copy of the committed state.
    #[must_use]
    pub fn state(&self) -> CarouselState {
        self.core.model.state
    }

    /// Stored logical index; fractional between settles of a multi-page swipe.
    #[must_use]
    pub fn index(&self) -> f64 {
        self.core.model.state.index
    }

    /// Stored index rounded into `0..page_count`.
    #[must_use]
    pub fn active_page(&self) -> usize {
        self.core.model.state.active_page()
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.core.model.state.page_count
    }

    #[must_use]
    pub fn offset(&self) -> Offset {
        self.core.model.state.offset
    }

    #[must_use]
    pub fn axis(&self) -> Axis {
        self.core.model.state.axis
    }

    #[must_use]
    pub fn is_scrolling(&self) -> bool {
        self.core.model.state.is_scrolling
    }

    #[must_use]
    pub fn autoplay_ended(&self) -> bool {
        self.core.model.state.autoplay_ended
    }

    #[must_use]
    pub fn scroll_phase(&self) -> ScrollPhase {
        self.core.model.phase
    }

    #[must_use]
    pub fn layout(&self) -> PageLayout {
        self.core.model.layout
    }

    #[must_use]
    pub fn config(&self) -> CarouselConfig {
        self.core.config
    }

    #[must_use]
    pub fn viewport_behavior(&self) -> ViewportBehavior {
        self.core.config.viewport_behavior()
    }

    /// Prev/next enablement for the active page.
    #[must_use]
    pub fn button_state(&self) -> ButtonState {
        self.core.model.layout.button_state(self.core.model.state.index)
    }

    #[must_use]
    pub fn viewport_size(&self) -> ViewportSize {
        self.core.model.state.viewport_size
    }

    /// Updates the viewport size and re-snaps content to the active page.
    ///
    /// While a scroll is in flight the viewport still settles on a target
    /// measured in the old extent, so the resize is held back and applied by
    /// that settle.
    pub fn set_viewport_size(&mut self, size: ViewportSize) -> CarouselResult<()> {
        let size = size.validate()?;
        if self.core.model.state.is_scrolling {
            debug!(
                width = size.width,
                height = size.height,
                "carousel viewport resize deferred until settle"
            );
            self.core.model.deferred_viewport = Some(size);
            return Ok(());
        }
        let index = self.core.model.state.index;
        self.request_resnap(size, index);
        self.commit();
        Ok(())
    }

    /// Queues the new size plus a snap of `index` to its page slot under it.
    pub(super) fn request_resnap(&mut self, size: ViewportSize, index: f64) {
        let state = self.core.model.state;
        let layout = self.core.model.layout;
        let index = layout.active_page(index) as f64;
        let slot = layout.slot_for_index(index);
        let offset = state.offset.with(state.axis, slot * size.extent(state.axis));
        debug!(
            width = size.width,
            height = size.height,
            ?offset,
            "carousel viewport resized"
        );

        let pending = &mut self.core.runtime.pending;
        pending.request(StateUpdate::SetViewportSize(size));
        pending.request(StateUpdate::SetPosition { index, offset });
        pending.after_flush(PostFlushHook::RepositionViewport(offset));
        pending.after_flush(PostFlushHook::EmitPlugin(PluginEvent::Resized {
            viewport: size,
        }));
    }

    /// Sets per-page titles shown for the active page. Missing or empty
    /// entries show no title.
    pub fn set_page_titles<I, T>(&mut self, titles: I)
    where
        I: IntoIterator<Item = Option<T>>,
        T: Into<String>,
    {
        self.core.model.page_titles = titles
            .into_iter()
            .map(|title| title.map(Into::into))
            .collect();
    }

    /// Title of the active page, if any.
    #[must_use]
    pub fn active_title(&self) -> Option<&str> {
        self.core.model.active_title()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn scroll_viewport(&self) -> &V {
        &self.viewport
    }

    pub fn scroll_viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        self.autoplay.scheduler()
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        self.autoplay.scheduler_mut()
    }
}
