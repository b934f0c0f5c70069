use crate::interaction::ScrollViewport;
use crate::render::Renderer;

use super::{AutoplayScheduler, CarouselEngine, state_update_queue::PostFlushHook};

impl<R: Renderer, V: ScrollViewport, S: AutoplayScheduler> CarouselEngine<R, V, S> {
    /// Flushes pending updates, then runs their hooks in request order.
    ///
    /// Hooks may request and commit further updates; those flush on their own.
    pub(super) fn commit(&mut self) {
        if self.core.runtime.pending.is_empty() {
            return;
        }
        let hooks = self.core.runtime.pending.flush(&mut self.core.model);
        for hook in hooks {
            self.run_post_flush_hook(hook);
        }
    }

    fn run_post_flush_hook(&mut self, hook: PostFlushHook) {
        match hook {
            PostFlushHook::CancelAutoplay => self.cancel_autoplay(),
            PostFlushHook::RearmAutoplay => self.rearm_autoplay(),
            PostFlushHook::IssueScroll(target) => self.viewport.scroll_to(target),
            PostFlushHook::RepositionViewport(offset) => self.viewport.set_offset(offset),
            PostFlushHook::NotifyHost(event) => self.notify_host(event),
            PostFlushHook::EmitPlugin(event) => self.emit_plugin_event(event),
        }
    }
}
