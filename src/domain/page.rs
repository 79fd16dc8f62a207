//! Pagination over ordered listings.

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// The items on this page. Empty when the page is past the end.
    pub items: &'a [T],
    /// The 1-based page number after clamping.
    pub number: usize,
    /// Total number of pages for the whole listing.
    pub total_pages: usize,
}

impl<T> Page<'_, T> {
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }
}

/// Slices `items` into page `page` of size `page_size`.
///
/// Page numbers below 1 clamp to 1, a page size of 0 is treated as 1, and
/// pages past the end yield an empty slice rather than an error.
pub fn paginate<T>(items: &[T], page: i64, page_size: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let number = usize::try_from(page.max(1)).unwrap_or(usize::MAX);
    let total_pages = items.len().div_ceil(page_size);

    let start = (number - 1).saturating_mul(page_size);
    let items = if start >= items.len() {
        &items[..0]
    } else {
        let end = start.saturating_add(page_size).min(items.len());
        &items[start..end]
    };

    Page {
        items,
        number,
        total_pages,
    }
}
