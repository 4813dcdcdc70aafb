//! Scroll state of a status-listing panel.

use crate::application::services::PanelView;
use crate::domain::entities::Panel;

/// Scroll position within one timeline panel.
#[derive(Debug, Clone)]
pub struct TimelinePanelState {
    panel: Panel,
    item_count: usize,
    offset: usize,
}

impl TimelinePanelState {
    #[must_use]
    pub const fn new(panel: Panel) -> Self {
        Self {
            panel,
            item_count: 0,
            offset: 0,
        }
    }

    pub fn set_item_count(&mut self, count: usize) {
        self.item_count = count;
        self.offset = self.offset.min(count.saturating_sub(1));
    }

    pub fn scroll_down(&mut self) {
        if self.offset + 1 < self.item_count {
            self.offset += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    pub const fn panel(&self) -> Panel {
        self.panel
    }
}

impl PanelView for TimelinePanelState {
    fn scroll_to_top(&mut self) {
        self.offset = 0;
    }
}
