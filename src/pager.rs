//! Client-side pagination state
//!
//! Page 0 is a sentinel: no pagination is active, either because the query
//! is empty or because the last search matched nothing. Active pagination
//! lives in [1, total_pages].

/// Items per response page. GitHub's default for the search endpoint; the
/// request never overrides it, so this stays a fixed divisor.
pub const PAGE_SIZE: u32 = 30;

/// Total pages implied by a result count
pub fn total_pages_for(total_count: u32) -> u32 {
    total_count.div_ceil(PAGE_SIZE)
}

/// Pagination state for the result view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pager {
    page: u32,
    total_pages: u32,
}

impl Pager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current page (0 while idle)
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Total pages derived from the last successful fetch
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// No pagination active
    pub fn is_idle(&self) -> bool {
        self.page == 0
    }

    /// A query edit always lands on the first page
    pub fn reset_to_first(&mut self) {
        self.page = 1;
    }

    /// Back to the idle state (query cleared)
    pub fn clear(&mut self) {
        self.page = 0;
        self.total_pages = 0;
    }

    /// Fold a successful response into the pager. An empty item list forces
    /// the idle sentinel even when the query itself was non-empty.
    pub fn apply_total(&mut self, total_count: u32, items_empty: bool) {
        self.total_pages = total_pages_for(total_count);
        if items_empty {
            self.page = 0;
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page != 0 && self.page < self.total_pages
    }

    /// Step back one page. Returns false when already on the first page.
    pub fn prev(&mut self) -> bool {
        if self.has_prev() {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Step forward one page. Returns false when already on the last page.
    pub fn next(&mut self) -> bool {
        if self.has_next() {
            self.page += 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages_for(0), 0);
        assert_eq!(total_pages_for(1), 1);
        assert_eq!(total_pages_for(30), 1);
        assert_eq!(total_pages_for(31), 2);
        assert_eq!(total_pages_for(45), 2);
        assert_eq!(total_pages_for(61), 3);
        assert_eq!(total_pages_for(437_912), 14_598);
    }

    #[test]
    fn starts_idle() {
        let pager = Pager::new();
        assert!(pager.is_idle());
        assert_eq!(pager.page(), 0);
        assert!(!pager.has_prev());
        assert!(!pager.has_next());
    }

    #[test]
    fn first_page_of_multi_page_result() {
        let mut pager = Pager::new();
        pager.reset_to_first();
        pager.apply_total(61, false);
        assert_eq!(pager.page(), 1);
        assert_eq!(pager.total_pages(), 3);
        assert!(!pager.has_prev());
        assert!(pager.has_next());
    }

    #[test]
    fn next_and_prev_step_within_bounds() {
        let mut pager = Pager::new();
        pager.reset_to_first();
        pager.apply_total(61, false);

        assert!(pager.next());
        assert_eq!(pager.page(), 2);
        assert!(pager.has_prev());
        assert!(pager.has_next());

        assert!(pager.next());
        assert_eq!(pager.page(), 3);
        assert!(!pager.has_next());
        assert!(!pager.next());
        assert_eq!(pager.page(), 3);

        assert!(pager.prev());
        assert!(pager.prev());
        assert_eq!(pager.page(), 1);
        assert!(!pager.prev());
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn empty_result_forces_idle_page() {
        let mut pager = Pager::new();
        pager.reset_to_first();
        pager.apply_total(0, true);
        assert!(pager.is_idle());
        assert_eq!(pager.total_pages(), 0);
        assert!(!pager.has_prev());
        assert!(!pager.has_next());
    }

    #[test]
    fn empty_page_past_window_forces_idle_but_keeps_total() {
        // GitHub can report a large total while returning an empty page
        let mut pager = Pager::new();
        pager.reset_to_first();
        pager.apply_total(437_912, true);
        assert!(pager.is_idle());
        assert_eq!(pager.total_pages(), 14_598);
    }

    #[test]
    fn clear_resets_everything() {
        let mut pager = Pager::new();
        pager.reset_to_first();
        pager.apply_total(61, false);
        pager.clear();
        assert!(pager.is_idle());
        assert_eq!(pager.total_pages(), 0);
    }

    #[test]
    fn single_page_result_has_no_controls() {
        let mut pager = Pager::new();
        pager.reset_to_first();
        pager.apply_total(12, false);
        assert_eq!(pager.total_pages(), 1);
        assert!(!pager.has_prev());
        assert!(!pager.has_next());
    }
}
