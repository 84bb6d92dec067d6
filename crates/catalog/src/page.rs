//! Pagination over the filtered, sorted list.

/// Books shown per catalog page.
pub const PAGE_SIZE: usize = 12;

/// One page of a sliced list, with boundary metadata for navigation
/// controls. Requesting a page past the end yields an empty page; the UI
/// disables the controls via `has_next`/`has_prev` rather than clamping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Items on this page.
    pub items: &'a [T],
    /// 1-based page number as requested.
    pub number: u32,
    /// Total number of pages; zero for an empty list.
    pub page_count: u32,
    /// Whether a previous page exists.
    pub has_prev: bool,
    /// Whether a next page exists.
    pub has_next: bool,
}

/// Total page count for a list of `len` items: `ceil(len / per_page)`.
#[must_use]
pub fn page_count(len: usize, per_page: usize) -> u32 {
    let pages = len.div_ceil(per_page.max(1));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Slice the 1-based page `number` out of `items`.
///
/// Concatenating pages `1..=page_count` reconstructs `items` exactly.
#[must_use]
pub fn page_of<T>(items: &[T], number: u32, per_page: usize) -> Page<'_, T> {
    let per_page = per_page.max(1);
    let count = page_count(items.len(), per_page);
    let number = number.max(1);

    let index = usize::try_from(number - 1).unwrap_or(usize::MAX);
    let start = index.saturating_mul(per_page);
    let end = start.saturating_add(per_page).min(items.len());
    let slice = items.get(start..end).unwrap_or(&[]);

    Page {
        items: slice,
        number,
        page_count: count,
        has_prev: number > 1 && count > 0,
        has_next: number < count,
    }
}
