use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::Offset;
use crate::extensions::PluginEvent;
use crate::interaction::{ScrollPhase, ScrollViewport};
use crate::render::Renderer;

use super::{
    AutoplayScheduler, CarouselEngine,
    navigation_target_resolver::resolve_navigation_target,
    state_update_queue::{PostFlushHook, StateUpdate},
};

/// What a `scroll_to` request turned into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum NavigationOutcome {
    /// A scroll command for `target` went to the viewport.
    Issued { target: Offset },
    /// A scroll is already in flight; the request was dropped, not queued.
    IgnoredWhileScrolling,
    /// Nothing to navigate to.
    IgnoredSinglePage,
    IgnoredZeroStep,
}

impl NavigationOutcome {
    #[must_use]
    pub fn is_issued(self) -> bool {
        matches!(self, Self::Issued { .. })
    }
}

impl<R: Renderer, V: ScrollViewport, S: AutoplayScheduler> CarouselEngine<R, V, S> {
    /// Scrolls `step` pages relative to the current one.
    ///
    /// Index and offset are not touched here; they follow from the settle the
    /// viewport reports once the animation finishes. Navigation re-arms an
    /// ended autoplay.
    pub fn scroll_to(&mut self, step: i32) -> NavigationOutcome {
        let state = self.core.model.state;
        let layout = self.core.model.layout;
        let pending = &mut self.core.runtime.pending;

        let outcome = if state.is_scrolling {
            NavigationOutcome::IgnoredWhileScrolling
        } else if layout.is_single_page() {
            NavigationOutcome::IgnoredSinglePage
        } else if step == 0 {
            NavigationOutcome::IgnoredZeroStep
        } else {
            let target = resolve_navigation_target(layout, &state, step);
            pending.request(StateUpdate::BeginScroll(ScrollPhase::Navigating));
            pending.request(StateUpdate::SetAutoplayEnded(false));
            pending.after_flush(PostFlushHook::CancelAutoplay);
            pending.after_flush(PostFlushHook::IssueScroll(target));
            NavigationOutcome::Issued { target }
        };

        debug!(step, index = state.index, ?outcome, "scroll_to");
        pending.after_flush(PostFlushHook::EmitPlugin(PluginEvent::Navigation {
            step,
            outcome,
        }));
        self.commit();
        outcome
    }

    /// Scrolls one page forward.
    pub fn next(&mut self) -> NavigationOutcome {
        self.scroll_to(1)
    }

    /// Scrolls one page back.
    pub fn prev(&mut self) -> NavigationOutcome {
        self.scroll_to(-1)
    }
}
