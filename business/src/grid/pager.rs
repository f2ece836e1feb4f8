use std::ops::Range;

/// Page size and index of one grid. Pages are zero-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    page_sizes: &'static [usize],
    page_size: usize,
    page: usize,
}

impl Pager {
    /// The first entry of `page_sizes` is the initial size.
    pub fn new(page_sizes: &'static [usize]) -> Self {
        Self {
            page_sizes,
            page_size: page_sizes.first().copied().unwrap_or(10).max(1),
            page: 0,
        }
    }

    pub fn page_sizes(&self) -> &'static [usize] {
        self.page_sizes
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// At least one page, even when there are no rows.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    /// Sizes not offered by the pager are ignored. Resets to the first page.
    pub fn set_page_size(&mut self, size: usize) -> bool {
        if !self.page_sizes.contains(&size) {
            return false;
        }
        self.page_size = size;
        self.page = 0;
        true
    }

    pub fn set_page(&mut self, page: usize, total: usize) {
        self.page = page.min(self.page_count(total) - 1);
    }

    pub fn next(&mut self, total: usize) {
        self.set_page(self.page + 1, total);
    }

    pub fn prev(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    pub fn clamp(&mut self, total: usize) {
        self.set_page(self.page, total);
    }

    /// Index range of the current page within `total` rows.
    pub fn range(&self, total: usize) -> Range<usize> {
        let start = (self.page * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_never_zero() {
        let pager = Pager::new(&[10, 20]);
        assert_eq!(pager.page_count(0), 1);
        assert_eq!(pager.page_count(10), 1);
        assert_eq!(pager.page_count(11), 2);
    }

    #[test]
    fn next_stops_at_last_page() {
        let mut pager = Pager::new(&[10, 20, 50]);
        pager.next(25);
        pager.next(25);
        pager.next(25);
        assert_eq!(pager.page(), 2);
        assert_eq!(pager.range(25), 20..25);
    }

    #[test]
    fn unknown_page_size_ignored() {
        let mut pager = Pager::new(&[10, 20]);
        pager.next(30);
        assert!(!pager.set_page_size(50));
        assert_eq!(pager.page(), 1);

        assert!(pager.set_page_size(20));
        assert_eq!(pager.page(), 0);
        assert_eq!(pager.range(30), 0..20);
    }

    #[test]
    fn clamp_after_rows_shrink() {
        let mut pager = Pager::new(&[10]);
        pager.set_page(4, 50);
        pager.clamp(12);
        assert_eq!(pager.page(), 1);
        pager.prev();
        pager.prev();
        assert_eq!(pager.page(), 0);
    }
}
