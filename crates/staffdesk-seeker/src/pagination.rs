//! Page arithmetic for table views.
//!
//! A [`Paginator`] turns a match count and a requested page number into a
//! [`Page`]: the clamped page, the row range to show and the window of page
//! numbers for a pager control. Everything here is plain arithmetic; nothing
//! touches the rows themselves except [`Page::slice`].

use std::num::NonZeroUsize;
use std::ops::RangeInclusive;

use serde::Serialize;

/// Page-size and window settings for one view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: NonZeroUsize,
    window: NonZeroUsize,
}

impl Paginator {
    /// Creates a paginator.
    ///
    /// `window` is the maximum number of page links shown at once.
    pub fn new(page_size: NonZeroUsize, window: NonZeroUsize) -> Self {
        Paginator { page_size, window }
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    /// Width of the page-number window.
    pub fn window(&self) -> usize {
        self.window.get()
    }

    /// Number of pages needed for `match_count` rows. Always at least 1, so
    /// an empty result still has a (blank) first page.
    pub fn total_pages(&self, match_count: usize) -> usize {
        match_count.div_ceil(self.page_size.get()).max(1)
    }

    /// Computes the page to display.
    ///
    /// `requested` is clamped into `1..=total_pages`, so page 0 shows the
    /// first page and a page beyond the end shows the last one.
    ///
    /// ```
    /// use std::num::NonZeroUsize;
    /// use staffdesk_seeker::Paginator;
    ///
    /// let pager = Paginator::new(NonZeroUsize::new(10).unwrap(), NonZeroUsize::new(5).unwrap());
    /// let page = pager.paginate(23, 5);
    /// assert_eq!((page.total_pages, page.page), (3, 3));
    /// assert_eq!((page.start, page.end), (20, 23));
    /// ```
    pub fn paginate(&self, match_count: usize, requested: usize) -> Page {
        let size = self.page_size.get();
        let total_pages = self.total_pages(match_count);
        let page = requested.clamp(1, total_pages);
        let start = (page - 1) * size;
        let end = (start + size).min(match_count);

        let (window_start, window_end) = self.window_bounds(page, total_pages);

        Page {
            page,
            total_pages,
            match_count,
            start,
            end,
            window_start,
            window_end,
        }
    }

    /// Contiguous window of at most `window` pages around `page`, shifted
    /// left when it would run past the last page.
    fn window_bounds(&self, page: usize, total_pages: usize) -> (usize, usize) {
        let width = self.window.get();
        let mut first = page.saturating_sub(width / 2).max(1);
        let last = (first + width - 1).min(total_pages);
        if last + 1 - first < width {
            first = (last + 1).saturating_sub(width).max(1);
        }
        (first, last)
    }
}

/// One computed page of a view.
///
/// Row indices are zero-based and half-open (`start..end`); page numbers are
/// one-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page {
    /// The clamped, one-based page number.
    pub page: usize,
    /// Total number of pages, at least 1.
    pub total_pages: usize,
    /// Number of rows matching the view.
    pub match_count: usize,
    /// Index of the first row on this page.
    pub start: usize,
    /// Index one past the last row on this page.
    pub end: usize,
    window_start: usize,
    window_end: usize,
}

impl Page {
    /// The rows of `rows` that belong on this page.
    ///
    /// `rows` is expected to be the full view the page was computed for.
    /// A shorter slice yields whatever part of the range exists.
    pub fn slice<'r, R>(&self, rows: &'r [R]) -> &'r [R] {
        let end = self.end.min(rows.len());
        let start = self.start.min(end);
        &rows[start..end]
    }

    /// Page numbers to offer in a pager control.
    pub fn window(&self) -> RangeInclusive<usize> {
        self.window_start..=self.window_end
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// The previous page number, if there is one.
    pub fn previous(&self) -> Option<usize> {
        self.has_previous().then(|| self.page - 1)
    }

    /// The next page number, if there is one.
    pub fn next(&self) -> Option<usize> {
        self.has_next().then(|| self.page + 1)
    }

    /// One-based position of the first row shown, or 0 when nothing matched.
    pub fn showing_from(&self) -> usize {
        if self.match_count == 0 {
            0
        } else {
            self.start + 1
        }
    }

    /// One-based position of the last row shown.
    pub fn showing_to(&self) -> usize {
        self.end
    }

    /// "Showing X to Y of Z results".
    pub fn summary(&self) -> String {
        format!(
            "Showing {} to {} of {} results",
            self.showing_from(),
            self.showing_to(),
            self.match_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pager(size: usize, window: usize) -> Paginator {
        Paginator::new(
            NonZeroUsize::new(size).unwrap(),
            NonZeroUsize::new(window).unwrap(),
        )
    }

    #[test]
    fn clamps_past_the_end() {
        let page = pager(10, 5).paginate(23, 5);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.page, 3);
        assert_eq!(page.start, 20);
        assert_eq!(page.end, 23);
    }

    #[test]
    fn clamps_page_zero_to_first() {
        let page = pager(10, 5).paginate(23, 0);
        assert_eq!(page.page, 1);
        assert_eq!((page.start, page.end), (0, 10));
    }

    #[test]
    fn empty_result_has_one_blank_page() {
        let page = pager(10, 5).paginate(0, 4);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page, 1);
        assert_eq!((page.start, page.end), (0, 0));
        assert_eq!(page.window(), 1..=1);
        assert_eq!(page.summary(), "Showing 0 to 0 of 0 results");
        let rows: [u8; 0] = [];
        assert!(page.slice(&rows).is_empty());
    }

    #[test]
    fn exact_multiple_of_page_size() {
        let page = pager(10, 5).paginate(20, 2);
        assert_eq!(page.total_pages, 2);
        assert_eq!((page.start, page.end), (10, 20));
        assert!(!page.has_next());
    }

    #[test]
    fn window_is_centred() {
        let page = pager(1, 5).paginate(20, 10);
        assert_eq!(page.window(), 8..=12);
    }

    #[test]
    fn window_shifts_at_edges() {
        let p = pager(1, 5);
        assert_eq!(p.paginate(20, 1).window(), 1..=5);
        assert_eq!(p.paginate(20, 2).window(), 1..=5);
        assert_eq!(p.paginate(20, 19).window(), 16..=20);
        assert_eq!(p.paginate(20, 20).window(), 16..=20);
    }

    #[test]
    fn window_narrower_than_total() {
        assert_eq!(pager(10, 5).paginate(23, 2).window(), 1..=3);
    }

    #[test]
    fn even_window_width() {
        let p = pager(1, 4);
        assert_eq!(p.paginate(10, 5).window(), 3..=6);
        assert_eq!(p.paginate(10, 10).window(), 7..=10);
    }

    #[test]
    fn neighbours() {
        let p = pager(10, 5);
        let first = p.paginate(23, 1);
        assert_eq!((first.previous(), first.next()), (None, Some(2)));
        let middle = p.paginate(23, 2);
        assert_eq!((middle.previous(), middle.next()), (Some(1), Some(3)));
        let last = p.paginate(23, 3);
        assert_eq!((last.previous(), last.next()), (Some(2), None));
    }

    #[test]
    fn slice_and_summary() {
        let rows: Vec<u32> = (1..=23).collect();
        let page = pager(10, 5).paginate(rows.len(), 3);
        assert_eq!(page.slice(&rows), &[21, 22, 23]);
        assert_eq!(page.summary(), "Showing 21 to 23 of 23 results");
    }

    #[test]
    fn slice_of_short_input_does_not_panic() {
        let page = pager(10, 5).paginate(23, 3);
        let rows = [1, 2, 3];
        assert!(page.slice(&rows).is_empty());
    }
}
