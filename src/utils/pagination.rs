//! Paging and carousel index math.

use std::ops::Range;

/// Current page of a fixed-size grid. Zero-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self { page: 0, page_size }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `ceil(total / page_size)`; an empty list has no pages.
    pub fn page_count(&self, total: usize) -> usize {
        if self.page_size == 0 {
            0
        } else {
            total.div_ceil(self.page_size)
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.page + 1 < self.page_count(total)
    }

    pub fn next(&mut self, total: usize) {
        if self.has_next(total) {
            self.page += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.has_prev() {
            self.page -= 1;
        }
    }

    pub fn reset(&mut self) {
        self.page = 0;
    }

    /// Pulls the page back inside range after the list shrank.
    pub fn clamp(&mut self, total: usize) {
        let last = self.page_count(total).saturating_sub(1);
        self.page = self.page.min(last);
    }

    pub fn range(&self, total: usize) -> Range<usize> {
        let start = (self.page * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.range(items.len())]
    }

    /// Position in the full list of the `offset`-th element on this page.
    pub fn absolute_index(&self, offset: usize) -> usize {
        self.page * self.page_size + offset
    }
}

/// Next slide, wrapping to the first.
pub fn wrap_next(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (index + 1) % len
    }
}

/// Previous slide, wrapping to the last.
pub fn wrap_prev(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (index + len - 1) % len
    }
}

/// Next lightbox image; stays on the last one.
pub fn step_next(index: usize, len: usize) -> usize {
    if index + 1 < len {
        index + 1
    } else {
        index
    }
}

/// Previous lightbox image; stays on the first one.
pub fn step_prev(index: usize) -> usize {
    index.saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count_is_ceiling() {
        let p = Pagination::new(6);
        assert_eq!(p.page_count(0), 0);
        assert_eq!(p.page_count(1), 1);
        assert_eq!(p.page_count(6), 1);
        assert_eq!(p.page_count(7), 2);
        assert_eq!(p.page_count(13), 3);
        assert_eq!(Pagination::new(9).page_count(12), 2);
    }

    #[test]
    fn test_navigation_is_bounded() {
        let mut p = Pagination::new(6);
        p.prev();
        assert_eq!(p.page(), 0);
        assert!(!p.has_prev());

        p.next(13);
        p.next(13);
        assert_eq!(p.page(), 2);
        assert!(!p.has_next(13));
        p.next(13);
        assert_eq!(p.page(), 2);

        p.reset();
        assert_eq!(p.page(), 0);
    }

    #[test]
    fn test_slice_last_page_is_partial() {
        let items: Vec<u32> = (0..13).collect();
        let mut p = Pagination::new(6);
        p.next(items.len());
        p.next(items.len());
        assert_eq!(p.slice(&items), &[12]);
        assert_eq!(p.absolute_index(0), 12);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut p = Pagination::new(9);
        p.next(20);
        p.next(20);
        assert_eq!(p.page(), 2);
        p.clamp(10);
        assert_eq!(p.page(), 1);
        p.clamp(0);
        assert_eq!(p.page(), 0);
        assert!(p.slice::<u8>(&[]).is_empty());
    }

    #[test]
    fn test_carousel_wraps() {
        assert_eq!(wrap_next(2, 3), 0);
        assert_eq!(wrap_prev(0, 3), 2);
        assert_eq!(wrap_next(0, 0), 0);
        assert_eq!(wrap_prev(0, 1), 0);
    }

    #[test]
    fn test_lightbox_is_bounded() {
        assert_eq!(step_next(4, 5), 4);
        assert_eq!(step_next(3, 5), 4);
        assert_eq!(step_prev(0), 0);
        assert_eq!(step_prev(3), 2);
    }
}
