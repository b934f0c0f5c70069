use serde::{Deserialize, Serialize};

use crate::core::Offset;

/// Why the carousel is currently moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScrollPhase {
    #[default]
    Idle,
    /// User drag or its momentum.
    Dragging,
    /// Animated scroll issued by `scroll_to`.
    Navigating,
}

/// Contract implemented by the scrollable viewport primitive.
///
/// The viewport reports drag begin and settle back to the engine through
/// `CarouselEngine::on_drag_begin` and `CarouselEngine::on_settle`.
pub trait ScrollViewport {
    /// Starts an animated scroll. Must eventually lead to a settle report.
    fn scroll_to(&mut self, offset: Offset);

    /// Repositions content without animation and without a settle report.
    fn set_offset(&mut self, offset: Offset);
}

/// Command observed by a [`RecordingViewport`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ViewportCommand {
    ScrollTo(Offset),
    SetOffset(Offset),
}

/// Headless viewport that records every command it receives.
///
/// Used by tests and by hosts that drive the viewport from a command log.
#[derive(Debug, Default, Clone)]
pub struct RecordingViewport {
    commands: Vec<ViewportCommand>,
    position: Offset,
}

impl RecordingViewport {
    #[must_use]
    pub fn commands(&self) -> &[ViewportCommand] {
        &self.commands
    }

    /// Last position requested by either command kind.
    #[must_use]
    pub fn position(&self) -> Offset {
        self.position
    }

    /// Animated scroll targets, in issue order.
    #[must_use]
    pub fn scroll_targets(&self) -> Vec<Offset> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                ViewportCommand::ScrollTo(offset) => Some(*offset),
                ViewportCommand::SetOffset(_) => None,
            })
            .collect()
    }

    #[must_use]
    pub fn last_scroll_target(&self) -> Option<Offset> {
        self.scroll_targets().last().copied()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl ScrollViewport for RecordingViewport {
    fn scroll_to(&mut self, offset: Offset) {
        self.position = offset;
        self.commands.push(ViewportCommand::ScrollTo(offset));
    }

    fn set_offset(&mut self, offset: Offset) {
        self.position = offset;
        self.commands.push(ViewportCommand::SetOffset(offset));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_viewport_separates_command_kinds() {
        let mut viewport = RecordingViewport::default();
        viewport.scroll_to(Offset::new(100.0, 0.0));
        viewport.set_offset(Offset::new(50.0, 0.0));

        assert_eq!(viewport.scroll_targets(), vec![Offset::new(100.0, 0.0)]);
        assert_eq!(viewport.position(), Offset::new(50.0, 0.0));
        assert_eq!(viewport.commands().len(), 2);
    }
}
