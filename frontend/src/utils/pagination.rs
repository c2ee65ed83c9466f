//! Client-side paging for the list tables.

/// Rows shown per table page.
pub const REGISTERS_PER_PAGE: usize = 5;

/// Page links rendered on each side of the current page.
pub const SIBLINGS_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based, clamped to `1..=last_page`.
    pub current: usize,
    pub last_page: usize,
    pub total: usize,
}

/// Slices `items` for the 1-based `page`. Out of range pages are clamped.
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> Page<'_, T> {
    let per_page = per_page.max(1);
    let total = items.len();
    let last_page = total.div_ceil(per_page).max(1);
    let current = page.clamp(1, last_page);
    let start = ((current - 1) * per_page).min(total);
    let end = (start + per_page).min(total);
    Page {
        items: &items[start..end],
        current,
        last_page,
        total,
    }
}

/// Page numbers around the current page, plus whether the first and last
/// pages need their own links and whether a gap marker precedes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub previous: Vec<usize>,
    pub next: Vec<usize>,
    pub show_first: bool,
    pub gap_after_first: bool,
    pub show_last: bool,
    pub gap_before_last: bool,
}

pub fn page_window(current: usize, last_page: usize) -> PageWindow {
    let previous = if current > 1 {
        (current.saturating_sub(SIBLINGS_COUNT).max(1)..current).collect()
    } else {
        Vec::new()
    };
    let next = if current < last_page {
        (current + 1..=(current + SIBLINGS_COUNT).min(last_page)).collect()
    } else {
        Vec::new()
    };
    PageWindow {
        previous,
        next,
        show_first: current > 1 + SIBLINGS_COUNT,
        gap_after_first: current > 2 + SIBLINGS_COUNT,
        show_last: current + SIBLINGS_COUNT < last_page,
        gap_before_last: current + 1 + SIBLINGS_COUNT < last_page,
    }
}
