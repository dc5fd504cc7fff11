/// Fixed page size for the result list.
pub const PAGE_SIZE: usize = 20;

/// 1-based page slice. Out-of-range pages yield an empty slice rather than
/// an error; page 0 is treated as page 1.
pub fn paginate<T>(items: &[T], page: usize) -> &[T] {
    let page = page.max(1);
    let start = (page - 1).saturating_mul(PAGE_SIZE);
    if start >= items.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start..end]
}

/// Number of pages needed for `len` items.
pub fn page_count(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}
