mod frame;
mod null_renderer;
mod pagination;
mod primitives;

pub use frame::{ButtonsFrame, NavigationButton, PageSlot, PaginationFrame, RenderFrame};
pub use null_renderer::NullRenderer;
pub use pagination::{
    ButtonStyle, DefaultDotRenderer, DotPagination, DotRenderer, PaginationRenderer,
};
pub use primitives::{Color, DotPrimitive, TextPrimitive};

use crate::error::CarouselResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame` so drawing code remains
/// isolated from paging and autoplay logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> CarouselResult<()>;
}
