//! Client-side paginated, sortable list view.
//!
//! A [`PagedSortedView`] owns a fetched collection together with the user's
//! [`ViewState`] and recomputes the visible slice on demand via [`derive`].
//! The source collection is only ever replaced wholesale, never reordered.

use std::cmp::Ordering;
use std::fmt::Debug;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::PageSize;
use crate::pagination::{Paginated, get_pages};

/// Direction applied to the active sort key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Returns the opposite direction.
    pub fn flip(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Comparable projection of a record field.
///
/// Only values produced for the same sort key are ever compared with each
/// other, so mixing variants across keys is fine.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortValue<'a> {
    Number(i64),
    Text(&'a str),
    Timestamp(NaiveDateTime),
}

/// Records that can be ordered by a closed set of keys.
pub trait Sortable {
    /// Enumeration of the fields a list of `Self` can be sorted by.
    type Key: Copy + Eq + Debug;

    /// Value of `key` for this record, or `None` when the record lacks it.
    fn sort_value(&self, key: Self::Key) -> Option<SortValue<'_>>;
}

/// User-controlled list state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewState<K> {
    pub current_page: usize,
    pub items_per_page: PageSize,
    pub sort_key: Option<K>,
    pub sort_order: SortOrder,
}

impl<K> ViewState<K> {
    pub fn new(items_per_page: PageSize) -> Self {
        Self {
            current_page: 1,
            items_per_page,
            sort_key: None,
            sort_order: SortOrder::default(),
        }
    }
}

/// Result of deriving the visible page from a collection.
#[derive(Debug, PartialEq)]
pub struct DerivedSlice<'a, T> {
    pub total_pages: usize,
    pub total_items: usize,
    pub visible_items: Vec<&'a T>,
}

/// Number of pages needed for `total_items`; zero for an empty collection.
pub fn total_pages(total_items: usize, items_per_page: PageSize) -> usize {
    total_items.div_ceil(items_per_page.get())
}

/// Compares two optional values; a missing value sorts as the minimum.
fn compare_values(
    a: Option<SortValue<'_>>,
    b: Option<SortValue<'_>>,
    order: SortOrder,
) -> Ordering {
    let ordering = a.cmp(&b);
    match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}

/// Derives the visible page of `collection` for `state`.
///
/// Sorting is stable and operates on a vector of references, so ties keep
/// their source order and `collection` itself is left untouched. A page past
/// the last one yields an empty slice.
pub fn derive<'a, T: Sortable>(
    collection: &'a [T],
    state: &ViewState<T::Key>,
) -> DerivedSlice<'a, T> {
    let mut ordered: Vec<&T> = collection.iter().collect();
    if let Some(key) = state.sort_key {
        ordered.sort_by(|a, b| {
            compare_values(a.sort_value(key), b.sort_value(key), state.sort_order)
        });
    }

    let per_page = state.items_per_page.get();
    let offset = state.current_page.saturating_sub(1).saturating_mul(per_page);

    let visible_items = ordered.into_iter().skip(offset).take(per_page).collect();

    DerivedSlice {
        total_pages: total_pages(collection.len(), state.items_per_page),
        total_items: collection.len(),
        visible_items,
    }
}

/// Stateful list view over an owned collection.
#[derive(Debug, Clone)]
pub struct PagedSortedView<T: Sortable> {
    items: Vec<T>,
    state: ViewState<T::Key>,
}

impl<T: Sortable> PagedSortedView<T> {
    /// Creates a view positioned on page 1 of `items`.
    pub fn new(items: Vec<T>, items_per_page: PageSize) -> Self {
        Self {
            items,
            state: ViewState::new(items_per_page),
        }
    }

    pub fn state(&self) -> &ViewState<T::Key> {
        &self.state
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Swaps in a freshly fetched collection and returns to page 1.
    pub fn replace_collection(&mut self, items: Vec<T>) {
        self.items = items;
        self.state.current_page = 1;
    }

    /// Moves to page `page`. Values past the last page are kept as-is and
    /// render an empty slice; `0` is treated as page 1.
    pub fn set_page(&mut self, page: usize) {
        self.state.current_page = page.max(1);
    }

    /// Changes the page density and returns to page 1.
    pub fn set_items_per_page(&mut self, items_per_page: PageSize) {
        self.state.items_per_page = items_per_page;
        self.state.current_page = 1;
    }

    /// Toggles sorting by `key`: the same key flips the direction, a new key
    /// starts descending. Always returns to page 1.
    pub fn set_sort(&mut self, key: T::Key) {
        if self.state.sort_key == Some(key) {
            self.state.sort_order = self.state.sort_order.flip();
        } else {
            self.state.sort_key = Some(key);
            self.state.sort_order = SortOrder::Desc;
        }
        self.state.current_page = 1;
    }

    /// Sets key and direction without toggling and returns to page 1.
    pub fn set_sort_explicit(&mut self, key: T::Key, order: SortOrder) {
        self.state.sort_key = Some(key);
        self.state.sort_order = order;
        self.state.current_page = 1;
    }

    /// Restores source order and returns to page 1.
    pub fn clear_sort(&mut self) {
        self.state.sort_key = None;
        self.state.sort_order = SortOrder::default();
        self.state.current_page = 1;
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.items.len(), self.state.items_per_page)
    }

    /// Pulls `current_page` back into `[1, max(total_pages, 1)]`.
    pub fn clamp_page(&mut self) {
        let last = self.total_pages().max(1);
        self.state.current_page = self.state.current_page.clamp(1, last);
    }

    pub fn derive(&self) -> DerivedSlice<'_, T> {
        derive(&self.items, &self.state)
    }

    /// Page-number controls for the current state; `None` marks a gap.
    pub fn page_window(&self) -> Vec<Option<usize>> {
        get_pages(self.total_pages(), self.state.current_page)
    }

    /// Builds the render-ready page payload.
    pub fn paginated(&self) -> Paginated<T, T::Key>
    where
        T: Clone,
    {
        let slice = self.derive();
        Paginated {
            items: slice.visible_items.into_iter().cloned().collect(),
            pages: self.page_window(),
            page: self.state.current_page,
            per_page: self.state.items_per_page.get(),
            total_pages: slice.total_pages,
            total_items: slice.total_items,
            sort: self.state.sort_key,
            order: self.state.sort_order,
        }
    }
}
