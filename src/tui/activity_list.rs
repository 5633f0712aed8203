use crate::config::DEFAULT_PAGE_SIZE;
use crate::domain::ActivityEvent;

pub const EMPTY_MESSAGE: &str = "No recent activity found for this user.";

/// Pagination and scroll state of the timeline
///
/// `visible` only grows, one page at a time, through `show_more`. The number
/// of rendered entries is always `min(visible, events.len())`.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityList {
    page_size: usize,
    visible: usize,

    /// First rendered entry, in entries not lines
    pub scroll_offset: usize,
}

impl Default for ActivityList {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ActivityList {
    pub fn new(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            page_size,
            visible: page_size,
            scroll_offset: 0,
        }
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn visible_len(&self, total: usize) -> usize {
        self.visible.min(total)
    }

    /// Leading events that should be rendered
    pub fn visible_events<'a>(&self, events: &'a [ActivityEvent]) -> &'a [ActivityEvent] {
        &events[..self.visible_len(events.len())]
    }

    /// Whether "show more" is currently offered
    pub fn has_more(&self, total: usize) -> bool {
        total > self.visible
    }

    /// Reveal one more page. Returns false when nothing is left to reveal.
    pub fn show_more(&mut self, total: usize) -> bool {
        if !self.has_more(total) {
            return false;
        }
        self.visible += self.page_size;
        true
    }

    /// Back to the first page, scrolled to the top
    pub fn reset(&mut self) {
        self.visible = self.page_size;
        self.scroll_offset = 0;
    }

    pub fn scroll_down(&mut self, total: usize) {
        if self.scroll_offset + 1 < self.visible_len(total) {
            self.scroll_offset += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        if self.scroll_offset > 0 {
            self.scroll_offset -= 1;
        }
    }
}
