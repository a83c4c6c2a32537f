use crate::dto::list::{ListPageData, ListQuery};
use crate::models::config::ClientConfig;
use crate::view::{PagedSortedView, SortOrder, Sortable};

/// Applies UI list controls to `view`.
///
/// Page size and sort are applied first because both return the view to
/// page 1; the requested page is applied last.
pub fn apply_query<T: Sortable>(
    view: &mut PagedSortedView<T>,
    query: &ListQuery<T::Key>,
    config: &ClientConfig,
) {
    if query.per_page.is_some() {
        view.set_items_per_page(config.page_size(query.per_page));
    }

    match (query.sort, query.order) {
        (Some(key), order) => view.set_sort_explicit(key, order.unwrap_or(SortOrder::Desc)),
        (None, Some(_)) => log::warn!("Ignoring sort order without a sort key"),
        (None, None) => {}
    }

    if let Some(page) = query.page {
        view.set_page(page);
    }
}

/// Builds a list page over a freshly fetched collection.
pub fn build_list_page<T>(
    items: Vec<T>,
    query: &ListQuery<T::Key>,
    config: &ClientConfig,
) -> ListPageData<T, T::Key>
where
    T: Sortable + Clone,
{
    let mut view = PagedSortedView::new(items, config.default_page_size());
    apply_query(&mut view, query, config);

    ListPageData {
        list: view.paginated(),
        per_page_choices: config.items_per_page_choices.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::SortValue;

    #[derive(Clone, Debug, PartialEq)]
    struct Gig {
        id: i64,
        fee: i64,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum GigSortKey {
        Fee,
    }

    impl Sortable for Gig {
        type Key = GigSortKey;

        fn sort_value(&self, key: GigSortKey) -> Option<SortValue<'_>> {
            match key {
                GigSortKey::Fee => Some(SortValue::Number(self.fee)),
            }
        }
    }

    fn gigs() -> Vec<Gig> {
        [(1, 300), (2, 100), (3, 200)]
            .into_iter()
            .map(|(id, fee)| Gig { id, fee })
            .collect()
    }

    fn ids(page: &ListPageData<Gig, GigSortKey>) -> Vec<i64> {
        page.list.items.iter().map(|gig| gig.id).collect()
    }

    #[test]
    fn order_without_sort_key_keeps_source_order() {
        let query = ListQuery {
            order: Some(SortOrder::Asc),
            ..ListQuery::default()
        };

        let page = build_list_page(gigs(), &query, &ClientConfig::default());

        assert_eq!(ids(&page), vec![1, 2, 3]);
        assert_eq!(page.list.sort, None);
        assert_eq!(page.list.order, SortOrder::Desc);
    }

    #[test]
    fn sort_key_defaults_to_descending() {
        let query = ListQuery {
            sort: Some(GigSortKey::Fee),
            ..ListQuery::default()
        };

        let page = build_list_page(gigs(), &query, &ClientConfig::default());

        assert_eq!(ids(&page), vec![1, 3, 2]);
    }

    #[test]
    fn page_is_applied_after_page_size_and_sort() {
        let query = ListQuery {
            page: Some(2),
            per_page: Some(5),
            sort: Some(GigSortKey::Fee),
            order: Some(SortOrder::Asc),
        };
        let items = (1..=7).map(|id| Gig { id, fee: 10 * id }).collect();

        let page = build_list_page(items, &query, &ClientConfig::default());

        assert_eq!(page.list.page, 2);
        assert_eq!(ids(&page), vec![6, 7]);
    }
}
