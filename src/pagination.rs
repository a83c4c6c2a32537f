use serde::Serialize;

use crate::view::SortOrder;

/// Width of the numbered window around the current page.
pub const PAGE_WINDOW: usize = 5;

/// Page-number controls for `total_pages`, `None` standing for an elided gap.
///
/// Up to [`PAGE_WINDOW`] pages are shown in full. Beyond that a window of
/// that width is centered on `current_page` and shifted to stay inside
/// `[1, total_pages]`; the first and last pages are always present as
/// anchors, separated from the window by a gap unless they are adjacent.
pub fn get_pages(total_pages: usize, current_page: usize) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    if last_page <= PAGE_WINDOW {
        return (1..=last_page).map(Some).collect();
    }

    let current_page = current_page.clamp(1, last_page);
    let mid_start = current_page
        .saturating_sub(PAGE_WINDOW / 2)
        .clamp(1, last_page + 1 - PAGE_WINDOW);
    let mid_end = mid_start + PAGE_WINDOW - 1;

    let mut pages = Vec::with_capacity(PAGE_WINDOW + 4);

    if mid_start > 1 {
        pages.push(Some(1));
    }
    if mid_start > 2 {
        pages.push(None);
    }
    pages.extend((mid_start..=mid_end).map(Some));
    if mid_end + 1 < last_page {
        pages.push(None);
    }
    if mid_end < last_page {
        pages.push(Some(last_page));
    }

    pages
}

/// One rendered page of a list, ready for a template or JSON consumer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paginated<T, K> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub sort: Option<K>,
    pub order: SortOrder,
}
