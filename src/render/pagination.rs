use crate::core::Axis;

use super::{Color, DotPrimitive, PaginationFrame, TextPrimitive};

/// Strategy producing the draw command for one pagination dot.
pub trait DotRenderer {
    fn render_dot(&self, page: usize, active: bool) -> DotPrimitive;
}

/// Strategy producing the whole pagination indicator.
///
/// Returning `None` hides pagination for this frame.
pub trait PaginationRenderer {
    fn render_pagination(
        &self,
        active_page: usize,
        page_count: usize,
        axis: Axis,
    ) -> Option<PaginationFrame>;
}

/// Small round dots: translucent black, blue when active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefaultDotRenderer {
    pub color: Color,
    pub active_color: Color,
    pub diameter_px: f64,
    pub margin_px: f64,
}

impl Default for DefaultDotRenderer {
    fn default() -> Self {
        Self {
            color: Color::rgba(0.0, 0.0, 0.0, 0.2),
            active_color: Color::rgb(0.0, 122.0 / 255.0, 1.0),
            diameter_px: 8.0,
            margin_px: 3.0,
        }
    }
}

impl DotRenderer for DefaultDotRenderer {
    fn render_dot(&self, page: usize, active: bool) -> DotPrimitive {
        DotPrimitive {
            page,
            active,
            diameter_px: self.diameter_px,
            margin_px: self.margin_px,
            color: if active { self.active_color } else { self.color },
        }
    }
}

/// One dot per page; hidden when there is nothing to page through.
#[derive(Debug, Clone, Default)]
pub struct DotPagination<D = DefaultDotRenderer> {
    dots: D,
}

impl<D: DotRenderer> DotPagination<D> {
    #[must_use]
    pub fn new(dots: D) -> Self {
        Self { dots }
    }
}

impl<D: DotRenderer> PaginationRenderer for DotPagination<D> {
    fn render_pagination(
        &self,
        active_page: usize,
        page_count: usize,
        axis: Axis,
    ) -> Option<PaginationFrame> {
        if page_count <= 1 {
            return None;
        }
        let dots = (0..page_count)
            .map(|page| self.dots.render_dot(page, page == active_page))
            .collect();
        Some(PaginationFrame { axis, dots })
    }
}

/// Labels and colors of the prev/next buttons.
///
/// An empty label leaves its button undrawn.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonStyle {
    pub prev_label: String,
    pub next_label: String,
    pub font_size_px: f64,
    pub color: Color,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            prev_label: "\u{2039}".to_owned(),
            next_label: "\u{203a}".to_owned(),
            font_size_px: 50.0,
            color: Color::rgb(0.0, 122.0 / 255.0, 1.0),
        }
    }
}

impl ButtonStyle {
    #[must_use]
    pub(crate) fn prev_text(&self) -> TextPrimitive {
        TextPrimitive::new(self.prev_label.clone(), self.font_size_px, self.color)
    }

    #[must_use]
    pub(crate) fn next_text(&self) -> TextPrimitive {
        TextPrimitive::new(self.next_label.clone(), self.font_size_px, self.color)
    }
}
