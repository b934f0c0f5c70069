use serde::{Deserialize, Serialize};

/// Slack for float error in accumulated `offset / extent` travel.
const WRAP_EPSILON: f64 = 1e-6;

/// Maps logical pages onto rendered slots.
///
/// When looping with more than one page the rendered sequence is
/// `[last, p0, p1, .., p(n-1), first]`, so logical page `i` lives in slot `i + 1`
/// and the two clone slots let the viewport scroll past either end without a
/// visible jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLayout {
    page_count: usize,
    loop_pages: bool,
}

/// Result of folding an out-of-range logical index back into range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndexWrap {
    pub index: f64,
    pub slot: usize,
}

/// Prev/next button enablement for the active page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonState {
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl PageLayout {
    /// Builds a layout for a collection of `page_count` pages.
    ///
    /// An empty collection degrades to a single (empty) page.
    #[must_use]
    pub fn new(page_count: usize, loop_pages: bool) -> Self {
        Self {
            page_count: page_count.max(1),
            loop_pages,
        }
    }

    #[must_use]
    pub fn page_count(self) -> usize {
        self.page_count
    }

    #[must_use]
    pub fn loop_pages(self) -> bool {
        self.loop_pages
    }

    /// Wraparound needs at least two pages.
    #[must_use]
    pub fn is_looping(self) -> bool {
        self.loop_pages && self.page_count > 1
    }

    #[must_use]
    pub fn is_single_page(self) -> bool {
        self.page_count <= 1
    }

    /// Distance in slots between a logical index and its rendered slot.
    #[must_use]
    pub fn slot_shift(self) -> usize {
        usize::from(self.is_looping())
    }

    #[must_use]
    pub fn rendered_slot_count(self) -> usize {
        self.page_count + 2 * self.slot_shift()
    }

    /// Logical page shown in each rendered slot, in slot order.
    #[must_use]
    pub fn rendered_pages(self) -> Vec<usize> {
        let mut pages = Vec::with_capacity(self.rendered_slot_count());
        if self.is_looping() {
            pages.push(self.page_count - 1);
        }
        pages.extend(0..self.page_count);
        if self.is_looping() {
            pages.push(0);
        }
        pages
    }

    /// Rendered slot position for a (possibly fractional) logical index.
    #[must_use]
    pub fn slot_for_index(self, index: f64) -> f64 {
        if self.is_single_page() {
            return 0.0;
        }
        index + self.slot_shift() as f64
    }

    /// Rounds a stored index into a valid page number.
    #[must_use]
    pub fn active_page(self, index: f64) -> usize {
        round_to_page(index, self.page_count)
    }

    /// Folds an index that moved past either end back into range.
    ///
    /// Returns `None` when no wrap applies (not looping, or still in range).
    #[must_use]
    pub fn wrap_index(self, index: f64) -> Option<IndexWrap> {
        if !self.is_looping() {
            return None;
        }
        if index <= -1.0 + WRAP_EPSILON {
            return Some(IndexWrap {
                index: (self.page_count - 1) as f64,
                slot: self.page_count,
            });
        }
        if index >= self.page_count as f64 - WRAP_EPSILON {
            return Some(IndexWrap {
                index: 0.0,
                slot: 1,
            });
        }
        None
    }

    /// Button enablement for the page currently stored at `index`.
    #[must_use]
    pub fn button_state(self, index: f64) -> ButtonState {
        button_enablement(self.active_page(index), self.page_count, self.loop_pages)
    }
}

/// Rounds a possibly fractional index to a page in `0..page_count`.
#[must_use]
pub fn round_to_page(index: f64, page_count: usize) -> usize {
    if page_count <= 1 || !index.is_finite() {
        return 0;
    }
    let max = (page_count - 1) as f64;
    index.round().clamp(0.0, max) as usize
}

/// Prev is enabled unless on the first page; next unless on the last page.
/// Looping enables both unconditionally.
#[must_use]
pub fn button_enablement(active_page: usize, page_count: usize, loop_pages: bool) -> ButtonState {
    ButtonState {
        prev_enabled: loop_pages || active_page != 0,
        next_enabled: loop_pages || active_page != page_count.saturating_sub(1),
    }
}
