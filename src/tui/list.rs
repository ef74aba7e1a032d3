//! Result list display state

/// Selection and scroll state for the repository list
pub struct ListState {
    pub selected: Option<usize>,
    pub scroll_offset: usize,
    pub visible_rows: usize,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            selected: None,
            scroll_offset: 0,
            visible_rows: 20,
        }
    }
}

impl ListState {
    /// New results replace the old ones wholesale; selection restarts at the top
    pub fn reset(&mut self, total: usize) {
        self.selected = if total == 0 { None } else { Some(0) };
        self.scroll_offset = 0;
    }

    pub fn select_next(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        let i = match self.selected {
            Some(i) => (i + 1).min(total - 1),
            None => 0,
        };
        self.selected = Some(i);
        self.ensure_visible(i);
    }

    pub fn select_prev(&mut self) {
        let i = match self.selected {
            Some(0) | None => 0,
            Some(i) => i - 1,
        };
        self.selected = Some(i);
        self.ensure_visible(i);
    }

    pub fn page_down(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        let jump = self.visible_rows.saturating_sub(1);
        let i = match self.selected {
            Some(i) => (i + jump).min(total - 1),
            None => jump.min(total - 1),
        };
        self.selected = Some(i);
        self.ensure_visible(i);
    }

    pub fn page_up(&mut self) {
        let jump = self.visible_rows.saturating_sub(1);
        let i = match self.selected {
            Some(i) => i.saturating_sub(jump),
            None => 0,
        };
        self.selected = Some(i);
        self.ensure_visible(i);
    }

    pub fn select_first(&mut self) {
        self.selected = Some(0);
        self.scroll_offset = 0;
    }

    pub fn select_last(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        self.selected = Some(total - 1);
        self.ensure_visible(total - 1);
    }

    fn ensure_visible(&mut self, index: usize) {
        if index < self.scroll_offset {
            self.scroll_offset = index;
        } else if self.visible_rows > 0 && index >= self.scroll_offset + self.visible_rows {
            self.scroll_offset = index - self.visible_rows + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_selects_first_of_non_empty() {
        let mut list = ListState::default();
        list.selected = Some(7);
        list.scroll_offset = 5;
        list.reset(30);
        assert_eq!(list.selected, Some(0));
        assert_eq!(list.scroll_offset, 0);
    }

    #[test]
    fn reset_clears_selection_when_empty() {
        let mut list = ListState::default();
        list.selected = Some(3);
        list.reset(0);
        assert_eq!(list.selected, None);
    }

    #[test]
    fn selection_stays_within_bounds() {
        let mut list = ListState::default();
        list.reset(3);
        list.select_next(3);
        list.select_next(3);
        list.select_next(3);
        assert_eq!(list.selected, Some(2));
        list.select_prev();
        list.select_prev();
        list.select_prev();
        assert_eq!(list.selected, Some(0));
    }

    #[test]
    fn paging_scrolls_the_window() {
        let mut list = ListState {
            visible_rows: 10,
            ..Default::default()
        };
        list.reset(30);
        list.page_down(30);
        assert_eq!(list.selected, Some(9));
        list.page_down(30);
        assert_eq!(list.selected, Some(18));
        assert!(list.scroll_offset > 0);
        list.select_first();
        assert_eq!(list.scroll_offset, 0);
        list.select_last(30);
        assert_eq!(list.selected, Some(29));
        assert_eq!(list.scroll_offset, 20);
    }
}
