// src/catalog/pagination.rs

/// Page used when the request does not name a valid one.
pub const DEFAULT_PAGE: usize = 1;

/// Interprets a raw `page` query value. Absent, non-numeric and
/// non-positive values fall back to [`DEFAULT_PAGE`].
pub fn page_from_param(raw: Option<&str>) -> usize {
    raw.and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(DEFAULT_PAGE)
}

/// Returns the half-open window `[(page-1)*page_size, page*page_size)` of
/// `items`. Windows past the end are empty. `items` must already be in
/// the order the caller wants pages to follow; nothing is re-sorted.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let page = page.max(1);
    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}
