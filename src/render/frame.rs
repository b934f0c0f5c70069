use serde::{Deserialize, Serialize};

use crate::core::{Axis, Offset, ViewportSize};
use crate::error::{CarouselError, CarouselResult};
use crate::render::{DotPrimitive, TextPrimitive};

/// One rendered page position.
///
/// `page` is `None` for the placeholder slot of an empty collection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSlot {
    pub slot: usize,
    pub page: Option<usize>,
    pub offset: Offset,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationFrame {
    pub axis: Axis,
    pub dots: Vec<DotPrimitive>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationButton {
    pub enabled: bool,
    pub label: TextPrimitive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonsFrame {
    pub prev: NavigationButton,
    pub next: NavigationButton,
}

/// Backend-agnostic scene for one carousel draw pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: ViewportSize,
    pub axis: Axis,
    pub content_offset: Offset,
    pub slots: Vec<PageSlot>,
    pub pagination: Option<PaginationFrame>,
    pub buttons: Option<ButtonsFrame>,
    pub title: Option<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: ViewportSize, axis: Axis, content_offset: Offset) -> Self {
        Self {
            viewport,
            axis,
            content_offset,
            slots: Vec::new(),
            pagination: None,
            buttons: None,
            title: None,
        }
    }

    #[must_use]
    pub fn with_slot(mut self, slot: PageSlot) -> Self {
        self.slots.push(slot);
        self
    }

    #[must_use]
    pub fn with_pagination(mut self, pagination: Option<PaginationFrame>) -> Self {
        self.pagination = pagination;
        self
    }

    #[must_use]
    pub fn with_buttons(mut self, buttons: ButtonsFrame) -> Self {
        self.buttons = Some(buttons);
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: TextPrimitive) -> Self {
        self.title = Some(title);
        self
    }

    /// Index into `pagination.dots` of the active dot, if pagination is shown.
    #[must_use]
    pub fn active_dot(&self) -> Option<usize> {
        self.pagination
            .as_ref()
            .and_then(|pagination| pagination.dots.iter().position(|dot| dot.active))
    }

    pub fn validate(&self) -> CarouselResult<()> {
        if !self.viewport.is_valid() {
            return Err(CarouselError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if self.slots.is_empty() {
            return Err(CarouselError::InvalidData(
                "frame must contain at least one page slot".to_owned(),
            ));
        }
        for slot in &self.slots {
            if !slot.offset.x.is_finite() || !slot.offset.y.is_finite() {
                return Err(CarouselError::InvalidData(
                    "page slot offset must be finite".to_owned(),
                ));
            }
        }
        if let Some(pagination) = &self.pagination {
            for dot in &pagination.dots {
                dot.validate()?;
            }
        }
        if let Some(buttons) = &self.buttons {
            // an empty label draws nothing
            for label in [&buttons.prev.label, &buttons.next.label] {
                if !label.text.is_empty() {
                    label.validate()?;
                }
            }
        }
        if let Some(title) = &self.title {
            title.validate()?;
        }

        Ok(())
    }
}
