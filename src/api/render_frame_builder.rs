use crate::core::Offset;
use crate::interaction::ScrollViewport;
use crate::render::{
    ButtonsFrame, Color, NavigationButton, PageSlot, RenderFrame, Renderer, TextPrimitive,
};

use super::{AutoplayScheduler, CarouselEngine};

const TITLE_FONT_SIZE_PX: f64 = 14.0;
const TITLE_COLOR: Color = Color::rgb(0.0, 0.0, 0.0);

impl<R: Renderer, V: ScrollViewport, S: AutoplayScheduler> CarouselEngine<R, V, S> {
    /// Materializes the presentation of the committed state.
    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        let model = &self.core.model;
        let presentation = &self.core.presentation;
        let config = self.core.config;
        let state = model.state;
        let extent = state.extent();
        let has_content = model.collection_len > 0;

        let mut frame = RenderFrame::new(state.viewport_size, state.axis, state.offset);
        for (slot, page) in model.layout.rendered_pages().into_iter().enumerate() {
            frame = frame.with_slot(PageSlot {
                slot,
                page: has_content.then_some(page),
                offset: Offset::along(state.axis, slot as f64 * extent),
            });
        }

        if config.shows_pagination {
            frame = frame.with_pagination(presentation.pagination.render_pagination(
                state.active_page(),
                state.page_count,
                state.axis,
            ));
        }

        if config.shows_buttons {
            let buttons = model.layout.button_state(state.index);
            let style = &presentation.button_style;
            frame = frame.with_buttons(ButtonsFrame {
                prev: NavigationButton {
                    enabled: buttons.prev_enabled,
                    label: style.prev_text(),
                },
                next: NavigationButton {
                    enabled: buttons.next_enabled,
                    label: style.next_text(),
                },
            });
        }

        if let Some(title) = model.active_title() {
            frame = frame.with_title(TextPrimitive::new(title, TITLE_FONT_SIZE_PX, TITLE_COLOR));
        }

        frame
    }
}
