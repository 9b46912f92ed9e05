//! Stateless, 1-based pagination over a fixed page size.
//!
//! A [`Pager`] is re-derived per request from the `?page=` query parameter
//! and the total row count. Out-of-range page numbers clamp to the nearest
//! valid page rather than erroring: below 1 clamps to the first page, beyond
//! the end clamps to the last. An empty result set still has one empty page.

use serde::Serialize;

/// Page math for a single listing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    /// Clamped 1-based page number actually served.
    pub number: i64,
    pub total_pages: i64,
    pub total_items: i64,
    pub page_size: i64,
}

impl Pager {
    /// Build a pager for `total_items` rows, clamping `requested` into range.
    ///
    /// `requested` is the raw `?page=` value; `None` means page 1.
    pub fn new(total_items: i64, page_size: i64, requested: Option<i64>) -> Self {
        debug_assert!(page_size > 0, "page size must be positive");
        let total_pages = (total_items.max(0) + page_size - 1) / page_size;
        let total_pages = total_pages.max(1);
        let number = requested.unwrap_or(1).clamp(1, total_pages);
        Self {
            number,
            total_pages,
            total_items: total_items.max(0),
            page_size,
        }
    }

    /// SQL LIMIT for this page.
    pub fn limit(&self) -> i64 {
        self.page_size
    }

    /// SQL OFFSET for this page.
    pub fn offset(&self) -> i64 {
        (self.number - 1) * self.page_size
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    /// Wrap the fetched rows in a serializable page envelope.
    pub fn into_page<T>(self, items: Vec<T>) -> Page<T> {
        Page {
            has_next: self.has_next(),
            has_previous: self.has_previous(),
            page: self.number,
            total_pages: self.total_pages,
            total_items: self.total_items,
            items,
        }
    }
}

/// Serializable page envelope returned by every listing endpoint.
#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub total_pages: i64,
    pub total_items: i64,
    pub has_next: bool,
    pub has_previous: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_defaults() {
        let pager = Pager::new(25, 10, None);
        assert_eq!(pager.number, 1);
        assert_eq!(pager.total_pages, 3);
        assert_eq!(pager.offset(), 0);
        assert!(pager.has_next());
        assert!(!pager.has_previous());
    }

    #[test]
    fn test_last_page_is_partial() {
        let pager = Pager::new(25, 10, Some(3));
        assert_eq!(pager.offset(), 20);
        assert!(!pager.has_next());
        assert!(pager.has_previous());
    }

    #[test]
    fn test_page_beyond_end_clamps_to_last() {
        let pager = Pager::new(25, 10, Some(99));
        assert_eq!(pager.number, 3);
    }

    #[test]
    fn test_page_below_one_clamps_to_first() {
        let pager = Pager::new(25, 10, Some(0));
        assert_eq!(pager.number, 1);

        let pager = Pager::new(25, 10, Some(-5));
        assert_eq!(pager.number, 1);
    }

    #[test]
    fn test_empty_set_has_one_empty_page() {
        let pager = Pager::new(0, 10, Some(4));
        assert_eq!(pager.number, 1);
        assert_eq!(pager.total_pages, 1);
        assert!(!pager.has_next());
        assert!(!pager.has_previous());

        let page = pager.into_page::<i64>(vec![]);
        assert!(page.items.is_empty());
        assert_eq!(page.total_items, 0);
    }

    #[test]
    fn test_exact_multiple_of_page_size() {
        let pager = Pager::new(30, 10, Some(3));
        assert_eq!(pager.total_pages, 3);
        assert!(!pager.has_next());
    }

    #[test]
    fn test_envelope_round_trip() {
        let pager = Pager::new(5, 10, None);
        let page = pager.into_page(vec!["a", "b", "c", "d", "e"]);
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
    }
}
