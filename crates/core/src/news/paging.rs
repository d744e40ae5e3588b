//! Pure pagination arithmetic.
//!
//! Pages wrap around: asking for a page past the end lands back at the
//! start, so a "next" button on the last page returns to page 0.

use super::PageRequest;

/// The slice of the record store a request resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Page index after wrap-around, always `< page_count`.
    pub page: u64,
    pub page_count: u64,
    pub offset: u64,
    pub limit: u64,
}

/// Number of pages for `total` records, never less than one.
pub fn page_count(total: u64, page_size: u64) -> u64 {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Wraps `page` into `[0, page_count)`.
pub fn wrap_page(page: u64, page_count: u64) -> u64 {
    page % page_count.max(1)
}

/// Resolves a sanitised request against the current record count.
pub fn resolve_window(request: PageRequest, total: u64) -> PageWindow {
    let page_count = page_count(total, request.page_size);
    let page = wrap_page(request.page, page_count);

    PageWindow {
        page,
        page_count,
        offset: page.saturating_mul(request.page_size),
        limit: request.page_size,
    }
}
