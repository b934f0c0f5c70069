use crate::extensions::PluginEvent;
use crate::interaction::ScrollViewport;
use crate::render::Renderer;

use super::{AutoplayScheduler, CarouselEngine, CarouselEvent};

impl<R: Renderer, V: ScrollViewport, S: AutoplayScheduler> CarouselEngine<R, V, S> {
    pub(super) fn emit_plugin_event(&mut self, event: PluginEvent) {
        let state = self.core.model.state;
        for plugin in self.core.runtime.plugins.values_mut() {
            plugin.on_event(event, state);
        }
    }

    pub(super) fn notify_host(&mut self, event: CarouselEvent) {
        let state = self.core.model.state;
        self.core.runtime.callbacks.dispatch(&event, &state);
    }
}
