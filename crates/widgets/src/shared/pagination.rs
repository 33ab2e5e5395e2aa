/// Client-side pagination over an in-memory row set.
///
/// Pages are 1-based. The paged slice is an owned copy of the current window
/// so a datatable can bind to it directly.
#[derive(Debug, Clone)]
pub struct Pagination<T> {
    /// Number of rows per page
    pub display_amount: usize,
    /// Current page of results on display
    pub current_page: usize,
    /// Current maximum pages in the source set
    pub max_pages: usize,
    /// Partial copy of the source rows to bind to the data table
    pub paged_data: Vec<T>,
    /// Indicators to disable the paging buttons
    pub previous_disabled: bool,
    pub next_disabled: bool,
    /// Loading indicator
    pub loading: bool,
}

impl<T: Clone> Pagination<T> {
    pub fn new(display_amount: usize) -> Self {
        debug_assert!(display_amount > 0);
        Self {
            display_amount,
            current_page: 1,
            max_pages: 1,
            paged_data: Vec::new(),
            previous_disabled: true,
            next_disabled: true,
            loading: false,
        }
    }

    /// Recompute and store the page count. There is always at least one page,
    /// even for an empty source.
    fn max_pages_for(&mut self, total: usize) -> usize {
        let pages = total.div_ceil(self.display_amount).max(1);
        self.max_pages = pages;
        pages
    }

    /// Change page. Requests outside `[1, max_pages]` are ignored; page 0 is
    /// rejected on the same path even though legitimate pages start at 1.
    pub fn goto_page(&mut self, source: &[T], page_number: usize) {
        self.loading = true;

        let max_pages = self.max_pages_for(source.len());
        if page_number == 0 || page_number > max_pages {
            log::warn!("pagination: page {page_number} out of range 1..={max_pages}, ignored");
            self.loading = false;
            return;
        }

        let start = self.display_amount * (page_number - 1);
        let end = (start + self.display_amount).min(source.len());
        // Короткая последняя страница — без добивки
        self.paged_data = source[start..end].to_vec();

        self.current_page = page_number;
        self.previous_disabled = self.current_page == 1;
        self.next_disabled = self.current_page == max_pages;
        self.loading = false;
    }

    /// Advance one page if a next page exists.
    pub fn next_page(&mut self, source: &[T]) {
        let next = self.current_page + 1;
        if next <= self.max_pages_for(source.len()) {
            self.goto_page(source, next);
        }
    }

    /// Step back one page if a previous page exists.
    pub fn previous_page(&mut self, source: &[T]) {
        let previous = self.current_page.saturating_sub(1);
        if previous >= 1 && previous <= self.max_pages_for(source.len()) {
            self.goto_page(source, previous);
        }
    }

    /// Navigate to the current page again after the source changed, clamping
    /// it into the recomputed range so a shrunken source never leaves stale
    /// rows on display.
    pub fn reapply(&mut self, source: &[T]) {
        let max_pages = self.max_pages_for(source.len());
        let page = self.current_page.clamp(1, max_pages);
        self.goto_page(source, page);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(total: usize) -> Vec<usize> {
        (0..total).collect()
    }

    fn pager() -> Pagination<usize> {
        Pagination::new(10)
    }

    #[test]
    fn test_max_pages_formula() {
        let mut p = pager();
        for (total, expected) in [(0, 1), (1, 1), (9, 1), (10, 1), (11, 2), (25, 3), (30, 3)] {
            assert_eq!(p.max_pages_for(total), expected, "total = {total}");
        }
    }

    #[test]
    fn test_25_rows_slice_into_three_pages() {
        let source = rows(25);
        let mut p = pager();

        p.goto_page(&source, 1);
        assert_eq!(p.paged_data, (0..10).collect::<Vec<_>>());
        assert!(p.previous_disabled);
        assert!(!p.next_disabled);

        p.goto_page(&source, 2);
        assert_eq!(p.paged_data, (10..20).collect::<Vec<_>>());
        assert!(!p.previous_disabled);
        assert!(!p.next_disabled);

        p.goto_page(&source, 3);
        assert_eq!(p.paged_data, (20..25).collect::<Vec<_>>());
        assert_eq!(p.paged_data.len(), 5);
        assert!(!p.previous_disabled);
        assert!(p.next_disabled);
    }

    #[test]
    fn test_page_zero_is_rejected() {
        let source = rows(25);
        let mut p = pager();
        p.goto_page(&source, 2);

        p.goto_page(&source, 0);
        assert_eq!(p.current_page, 2);
        assert_eq!(p.paged_data, (10..20).collect::<Vec<_>>());
        assert!(!p.loading);
    }

    #[test]
    fn test_page_beyond_max_is_rejected() {
        let source = rows(25);
        let mut p = pager();
        p.goto_page(&source, 2);

        p.goto_page(&source, 4);
        assert_eq!(p.current_page, 2);
        assert_eq!(p.paged_data, (10..20).collect::<Vec<_>>());
        assert!(!p.loading);
    }

    #[test]
    fn test_empty_source_is_one_empty_page() {
        let source: Vec<usize> = Vec::new();
        let mut p = pager();
        p.goto_page(&source, 1);

        assert_eq!(p.max_pages, 1);
        assert!(p.paged_data.is_empty());
        // Page 1 is both first and last
        assert!(p.previous_disabled);
        assert!(p.next_disabled);
    }

    #[test]
    fn test_next_and_previous_stop_at_bounds() {
        let source = rows(25);
        let mut p = pager();
        p.goto_page(&source, 1);

        p.previous_page(&source);
        assert_eq!(p.current_page, 1);

        p.next_page(&source);
        p.next_page(&source);
        assert_eq!(p.current_page, 3);

        p.next_page(&source);
        assert_eq!(p.current_page, 3);
    }

    #[test]
    fn test_reapply_clamps_after_source_shrinks() {
        let mut p = pager();
        p.goto_page(&rows(25), 3);
        assert_eq!(p.current_page, 3);

        let shrunk = rows(5);
        p.reapply(&shrunk);
        assert_eq!(p.current_page, 1);
        assert_eq!(p.max_pages, 1);
        assert_eq!(p.paged_data, (0..5).collect::<Vec<_>>());
    }

    #[test]
    fn test_reapply_keeps_page_when_still_in_range() {
        let mut p = pager();
        p.goto_page(&rows(25), 2);

        p.reapply(&rows(21));
        assert_eq!(p.current_page, 2);
        assert_eq!(p.paged_data, (10..20).collect::<Vec<_>>());
    }
}
