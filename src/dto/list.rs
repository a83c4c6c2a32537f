//! List query parameters and render-ready list pages.

use serde::{Deserialize, Serialize};

use crate::pagination::Paginated;
use crate::view::SortOrder;

/// List controls as read from the UI (query string or widget state).
///
/// Every field is optional; absent values leave the view's defaults alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(bound(deserialize = "K: Deserialize<'de>"))]
pub struct ListQuery<K> {
    pub page: Option<usize>,
    pub per_page: Option<usize>,
    pub sort: Option<K>,
    pub order: Option<SortOrder>,
}

impl<K> Default for ListQuery<K> {
    fn default() -> Self {
        Self {
            page: None,
            per_page: None,
            sort: None,
            order: None,
        }
    }
}

/// Data required to render one page of a resource list.
#[derive(Debug, Serialize)]
pub struct ListPageData<T, K> {
    pub list: Paginated<T, K>,
    /// Page sizes the user may pick from.
    pub per_page_choices: Vec<usize>,
}
