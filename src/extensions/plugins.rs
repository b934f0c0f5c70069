use serde::{Deserialize, Serialize};

use crate::api::{CarouselState, NavigationOutcome};
use crate::core::{Offset, ViewportSize};

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PluginEvent {
    DragBegan,
    Settled { offset: Offset },
    Wrapped { to_index: f64, offset: Offset },
    PageChanged { from: usize, to: usize },
    Navigation { step: i32, outcome: NavigationOutcome },
    AutoplayArmed { delay_ms: u64 },
    AutoplayEnded,
    Resized { viewport: ViewportSize },
    Rendered,
}

/// Extension hook interface for bounded custom logic.
///
/// Plugins observe events with a copy of the committed state and cannot
/// mutate engine internals.
pub trait CarouselPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: PluginEvent, state: CarouselState);
}
