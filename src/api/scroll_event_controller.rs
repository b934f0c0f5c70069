use tracing::{debug, trace};

use crate::core::Offset;
use crate::extensions::PluginEvent;
use crate::interaction::{ScrollPhase, ScrollViewport};
use crate::render::Renderer;

use super::{
    AutoplayScheduler, CarouselEngine, CarouselEvent,
    scroll_settle_resolver::resolve_settled_position,
    state_update_queue::{PostFlushHook, StateUpdate},
};

impl<R: Renderer, V: ScrollViewport, S: AutoplayScheduler> CarouselEngine<R, V, S> {
    /// Viewport notification: the user started dragging.
    ///
    /// A drag is manual interaction, so any pending autoplay tick is dropped
    /// and an ended autoplay becomes eligible again.
    pub fn on_drag_begin(&mut self) {
        trace!(index = self.core.model.state.index, "drag began");
        let pending = &mut self.core.runtime.pending;
        pending.request(StateUpdate::BeginScroll(ScrollPhase::Dragging));
        pending.request(StateUpdate::SetAutoplayEnded(false));
        pending.after_flush(PostFlushHook::CancelAutoplay);
        pending.after_flush(PostFlushHook::NotifyHost(CarouselEvent::DragBegin));
        pending.after_flush(PostFlushHook::EmitPlugin(PluginEvent::DragBegan));
        self.commit();
    }

    /// Viewport notification: scrolling came to rest at `offset`.
    pub fn on_settle(&mut self, offset: Offset) {
        let state = self.core.model.state;
        let layout = self.core.model.layout;
        let previous_page = state.active_page();
        let pending = &mut self.core.runtime.pending;
        pending.request(StateUpdate::EndScroll);

        let settled_index = match resolve_settled_position(layout, &state, offset) {
            None => {
                trace!(?offset, "settle without travel along scroll axis ignored");
                state.index
            }
            Some(settled) => {
                pending.request(StateUpdate::SetPosition {
                    index: settled.index,
                    offset: settled.offset,
                });
                if settled.wrapped {
                    debug!(
                        from = state.index,
                        to = settled.index,
                        offset = ?settled.offset,
                        "index wrapped around loop boundary"
                    );
                    pending.after_flush(PostFlushHook::RepositionViewport(settled.offset));
                    pending.after_flush(PostFlushHook::EmitPlugin(PluginEvent::Wrapped {
                        to_index: settled.index,
                        offset: settled.offset,
                    }));
                }
                let page = layout.active_page(settled.index);
                if page != previous_page {
                    pending.after_flush(PostFlushHook::EmitPlugin(PluginEvent::PageChanged {
                        from: previous_page,
                        to: page,
                    }));
                }
                settled.index
            }
        };

        if let Some(size) = self.core.model.deferred_viewport.take() {
            self.request_resnap(size, settled_index);
        }

        let pending = &mut self.core.runtime.pending;
        pending.after_flush(PostFlushHook::RearmAutoplay);
        pending.after_flush(PostFlushHook::NotifyHost(CarouselEvent::Settle { offset }));
        pending.after_flush(PostFlushHook::EmitPlugin(PluginEvent::Settled { offset }));
        self.commit();
    }
}
