pub mod page_layout;
pub mod types;

pub use page_layout::{ButtonState, IndexWrap, PageLayout, button_enablement, round_to_page};
pub use types::{AutoplayDirection, Axis, Offset, ViewportSize};
