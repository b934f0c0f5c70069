use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::Offset;

use super::CarouselState;

/// Viewport notification forwarded to host callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CarouselEvent {
    DragBegin,
    /// `offset` is the raw position reported by the viewport.
    Settle { offset: Offset },
}

pub type HostCallback = Box<dyn FnMut(&CarouselEvent, &CarouselState)>;

/// Host application callbacks, invoked after the triggering event's state
/// has been committed.
#[derive(Default)]
pub struct CarouselCallbacks {
    on_drag_begin: Option<HostCallback>,
    on_settle: Option<HostCallback>,
}

impl CarouselCallbacks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn on_drag_begin(
        mut self,
        callback: impl FnMut(&CarouselEvent, &CarouselState) + 'static,
    ) -> Self {
        self.on_drag_begin = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_settle(
        mut self,
        callback: impl FnMut(&CarouselEvent, &CarouselState) + 'static,
    ) -> Self {
        self.on_settle = Some(Box::new(callback));
        self
    }

    pub(super) fn dispatch(&mut self, event: &CarouselEvent, state: &CarouselState) {
        let callback = match event {
            CarouselEvent::DragBegin => self.on_drag_begin.as_mut(),
            CarouselEvent::Settle { .. } => self.on_settle.as_mut(),
        };
        if let Some(callback) = callback {
            callback(event, state);
        }
    }
}

impl fmt::Debug for CarouselCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarouselCallbacks")
            .field("on_drag_begin", &self.on_drag_begin.is_some())
            .field("on_settle", &self.on_settle.is_some())
            .finish()
    }
}
