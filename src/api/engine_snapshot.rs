use serde::{Deserialize, Serialize};

use crate::core::{ButtonState, PageLayout};
use crate::error::{CarouselError, CarouselResult};
use crate::interaction::{ScrollPhase, ScrollViewport};
use crate::render::Renderer;

use super::{AutoplayScheduler, CarouselEngine, CarouselState};

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub state: CarouselState,
    pub active_page: usize,
    pub layout: PageLayout,
    pub rendered_pages: Vec<usize>,
    pub scroll_phase: ScrollPhase,
    pub autoplay_armed: bool,
    pub buttons: ButtonState,
    pub plugin_ids: Vec<String>,
}

impl<R: Renderer, V: ScrollViewport, S: AutoplayScheduler> CarouselEngine<R, V, S> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let model = &self.core.model;
        EngineSnapshot {
            state: model.state,
            active_page: model.state.active_page(),
            layout: model.layout,
            rendered_pages: model.layout.rendered_pages(),
            scroll_phase: model.phase,
            autoplay_armed: self.is_autoplay_armed(),
            buttons: self.button_state(),
            plugin_ids: self.core.runtime.plugins.keys().cloned().collect(),
        }
    }

    pub fn snapshot_json_pretty(&self) -> CarouselResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| CarouselError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
