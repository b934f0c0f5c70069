use smallvec::SmallVec;
use tracing::trace;

use crate::core::{Offset, ViewportSize};
use crate::extensions::PluginEvent;
use crate::interaction::ScrollPhase;

use super::{CarouselEvent, carousel_model::CarouselModel};

/// One requested state mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum StateUpdate {
    BeginScroll(ScrollPhase),
    EndScroll,
    SetPosition { index: f64, offset: Offset },
    SetAutoplayEnded(bool),
    SetViewportSize(ViewportSize),
}

/// Side effect that must observe committed state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum PostFlushHook {
    CancelAutoplay,
    RearmAutoplay,
    IssueScroll(Offset),
    RepositionViewport(Offset),
    NotifyHost(CarouselEvent),
    EmitPlugin(PluginEvent),
}

pub(super) type FlushedHooks = SmallVec<[PostFlushHook; 4]>;

/// Pending updates for the event being handled.
///
/// Updates apply in request order during `flush`; hooks run afterwards, so
/// every hook reads the state of the whole event rather than a partial write.
#[derive(Debug, Default)]
pub(super) struct PendingUpdates {
    updates: SmallVec<[StateUpdate; 4]>,
    hooks: FlushedHooks,
}

impl PendingUpdates {
    pub(super) fn request(&mut self, update: StateUpdate) {
        self.updates.push(update);
    }

    pub(super) fn after_flush(&mut self, hook: PostFlushHook) {
        self.hooks.push(hook);
    }

    #[must_use]
    pub(super) fn is_empty(&self) -> bool {
        self.updates.is_empty() && self.hooks.is_empty()
    }

    /// Applies every pending update to `model` and hands back the hooks.
    pub(super) fn flush(&mut self, model: &mut CarouselModel) -> FlushedHooks {
        for update in self.updates.drain(..) {
            trace!(?update, "applying carousel state update");
            match update {
                StateUpdate::BeginScroll(phase) => {
                    model.state.is_scrolling = true;
                    model.phase = phase;
                }
                StateUpdate::EndScroll => {
                    model.state.is_scrolling = false;
                    model.phase = ScrollPhase::Idle;
                }
                StateUpdate::SetPosition { index, offset } => {
                    model.state.index = index;
                    model.state.offset = offset;
                }
                StateUpdate::SetAutoplayEnded(ended) => model.state.autoplay_ended = ended,
                StateUpdate::SetViewportSize(size) => model.state.viewport_size = size,
            }
        }
        std::mem::take(&mut self.hooks)
    }
}
