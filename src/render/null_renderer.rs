use crate::error::CarouselResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry before
/// a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_slot_count: usize,
    pub last_dot_count: usize,
    pub last_active_dot: Option<usize>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> CarouselResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_slot_count = frame.slots.len();
        self.last_dot_count = frame
            .pagination
            .as_ref()
            .map_or(0, |pagination| pagination.dots.len());
        self.last_active_dot = frame.active_dot();
        Ok(())
    }
}
