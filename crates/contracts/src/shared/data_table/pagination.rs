use super::filter::FilterSelection;
use super::row::TableRow;

/// Search text, facet selection and current page (0-based) of one table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableQuery {
    pub search: String,
    pub filters: FilterSelection,
    pub page: usize,
}

/// A user action coming out of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    PageChanged(usize),
    SearchChanged(String),
    FiltersChanged(FilterSelection),
}

/// The slice of rows on screen plus everything the footer needs.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<T> {
    pub rows: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

impl<T> PageView<T> {
    /// 1-based index of the first row on the page, 0 for an empty result.
    pub fn first_index(&self) -> usize {
        if self.total_count == 0 || self.rows.is_empty() {
            0
        } else {
            self.page * self.page_size + 1
        }
    }

    /// 1-based index of the last row on the page.
    pub fn last_index(&self) -> usize {
        if self.rows.is_empty() {
            0
        } else {
            (self.page * self.page_size + self.rows.len()).min(self.total_count)
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }

    pub fn summary(&self) -> String {
        format!(
            "Showing {} to {} of {} records",
            self.first_index(),
            self.last_index(),
            self.total_count
        )
    }
}

fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// All rows are local; search, facets and slicing happen here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientPaging {
    pub page_size: usize,
}

impl ClientPaging {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    /// Rows passing both the search text and every facet, in input order.
    pub fn filter<'a, T: TableRow>(&self, rows: &'a [T], query: &TableQuery) -> Vec<&'a T> {
        let needle = query.search.trim().to_lowercase();
        rows.iter()
            .filter(|row| query.filters.matches(*row) && row.matches_search(&needle))
            .collect()
    }

    pub fn view<T: TableRow + Clone>(&self, rows: &[T], query: &TableQuery) -> PageView<T> {
        let filtered = self.filter(rows, query);
        let total_count = filtered.len();
        let total_pages = page_count(total_count, self.page_size);
        let page = query.page.min(total_pages.saturating_sub(1));
        let rows = filtered
            .into_iter()
            .skip(page * self.page_size)
            .take(self.page_size)
            .cloned()
            .collect();
        PageView {
            rows,
            page,
            page_size: self.page_size,
            total_count,
            total_pages,
        }
    }
}

/// The owner already fetched exactly one page; rows pass through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerPaging {
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
}

impl ServerPaging {
    pub fn new(page: usize, page_size: usize, total_count: usize) -> Self {
        Self {
            page,
            page_size: page_size.max(1),
            total_count,
        }
    }

    /// `skip` query parameter for the current page.
    pub fn offset(&self) -> usize {
        self.page * self.page_size
    }

    pub fn view<T: Clone>(&self, rows: &[T]) -> PageView<T> {
        PageView {
            rows: rows.to_vec(),
            page: self.page,
            page_size: self.page_size,
            total_count: self.total_count,
            total_pages: page_count(self.total_count, self.page_size),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationStrategy {
    Client(ClientPaging),
    Server(ServerPaging),
}

impl PaginationStrategy {
    pub fn client(page_size: usize) -> Self {
        PaginationStrategy::Client(ClientPaging::new(page_size))
    }

    pub fn server(page: usize, page_size: usize, total_count: usize) -> Self {
        PaginationStrategy::Server(ServerPaging::new(page, page_size, total_count))
    }

    pub fn is_server(&self) -> bool {
        matches!(self, PaginationStrategy::Server(_))
    }

    pub fn view<T: TableRow + Clone>(&self, rows: &[T], query: &TableQuery) -> PageView<T> {
        match self {
            PaginationStrategy::Client(client) => client.view(rows, query),
            PaginationStrategy::Server(server) => server.view(rows),
        }
    }

    /// Applies a user action to the table's own query state.
    ///
    /// Client mode folds the event into `query` (search and facet changes go
    /// back to the first page) and returns `None`. Server mode echoes search
    /// text and facets for display, never touches the page, and returns the
    /// event so the owner can re-fetch.
    pub fn dispatch(&self, query: &mut TableQuery, event: TableEvent) -> Option<TableEvent> {
        match self {
            PaginationStrategy::Client(_) => {
                match event {
                    TableEvent::PageChanged(page) => query.page = page,
                    TableEvent::SearchChanged(text) => {
                        query.search = text;
                        query.page = 0;
                    }
                    TableEvent::FiltersChanged(filters) => {
                        query.filters = filters;
                        query.page = 0;
                    }
                }
                None
            }
            PaginationStrategy::Server(_) => {
                match &event {
                    TableEvent::PageChanged(_) => {}
                    TableEvent::SearchChanged(text) => query.search = text.clone(),
                    TableEvent::FiltersChanged(filters) => query.filters = filters.clone(),
                }
                Some(event)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use std::collections::HashSet;

    #[derive(Debug, Clone, PartialEq, Serialize)]
    struct Unit {
        unit_id: String,
        unit_name: String,
    }

    impl TableRow for Unit {
        fn row_key(&self) -> String {
            self.unit_id.clone()
        }
    }

    fn units(n: usize) -> Vec<Unit> {
        (0..n)
            .map(|i| Unit {
                unit_id: format!("U{i:03}"),
                unit_name: if i % 3 == 0 { "Box".into() } else { "Kilogram".into() },
            })
            .collect()
    }

    #[test]
    fn test_client_pages_partition_rows() {
        for (n, size) in [(0, 10), (1, 10), (10, 10), (23, 10), (7, 3), (100, 7)] {
            let rows = units(n);
            let strategy = ClientPaging::new(size);
            let mut query = TableQuery::default();
            let first = strategy.view(&rows, &query);
            assert_eq!(first.total_pages, n.div_ceil(size));

            let mut seen = Vec::new();
            for page in 0..first.total_pages {
                query.page = page;
                let view = strategy.view(&rows, &query);
                assert!(view.rows.len() <= size);
                seen.extend(view.rows.into_iter().map(|r| r.unit_id));
            }
            let unique: HashSet<_> = seen.iter().cloned().collect();
            assert_eq!(seen.len(), n, "n={n} size={size}");
            assert_eq!(unique.len(), n);
        }
    }

    #[test]
    fn test_client_search_is_case_insensitive_substring() {
        let rows = units(9);
        let strategy = ClientPaging::new(100);
        for needle in ["box", "BOX", "kilo", "U00", "u008", "gram", "zzz", ""] {
            let query = TableQuery {
                search: needle.to_string(),
                ..Default::default()
            };
            let got: Vec<_> = strategy
                .filter(&rows, &query)
                .into_iter()
                .map(|r| r.unit_id.clone())
                .collect();
            let lower = needle.to_lowercase();
            let expected: Vec<_> = rows
                .iter()
                .filter(|r| {
                    r.unit_id.to_lowercase().contains(&lower)
                        || r.unit_name.to_lowercase().contains(&lower)
                })
                .map(|r| r.unit_id.clone())
                .collect();
            assert_eq!(got, expected, "needle={needle}");
        }
    }

    #[test]
    fn test_client_facets_and_search_combine() {
        let rows = units(12);
        let mut query = TableQuery::default();
        query.filters.toggle("unit_name", "Box");
        query.search = "U00".into();
        let view = ClientPaging::new(10).view(&rows, &query);
        let ids: Vec<_> = view.rows.iter().map(|r| r.unit_id.as_str()).collect();
        assert_eq!(ids, vec!["U000", "U003", "U006", "U009"]);
    }

    #[test]
    fn test_client_page_is_clamped() {
        let rows = units(15);
        let query = TableQuery {
            page: 9,
            ..Default::default()
        };
        let view = ClientPaging::new(10).view(&rows, &query);
        assert_eq!(view.page, 1);
        assert_eq!(view.rows.len(), 5);
        assert_eq!(view.summary(), "Showing 11 to 15 of 15 records");
    }

    #[test]
    fn test_client_dispatch_resets_page_on_search() {
        let strategy = PaginationStrategy::client(10);
        let mut query = TableQuery::default();
        assert_eq!(strategy.dispatch(&mut query, TableEvent::PageChanged(3)), None);
        assert_eq!(query.page, 3);
        strategy.dispatch(&mut query, TableEvent::SearchChanged("box".into()));
        assert_eq!(query.page, 0);
        assert_eq!(query.search, "box");

        query.page = 2;
        let mut filters = FilterSelection::new();
        filters.toggle("unit_name", "Box");
        strategy.dispatch(&mut query, TableEvent::FiltersChanged(filters.clone()));
        assert_eq!(query.page, 0);
        assert_eq!(query.filters, filters);
    }

    #[test]
    fn test_server_mode_passes_rows_through() {
        let rows = units(20);
        let strategy = PaginationStrategy::server(3, 20, 137);
        let query = TableQuery {
            search: "box".into(),
            page: 0,
            ..Default::default()
        };
        let view = strategy.view(&rows, &query);
        assert_eq!(view.rows, rows);
        assert_eq!(view.page, 3);
        assert_eq!(view.total_pages, 7);
        assert_eq!(view.summary(), "Showing 61 to 80 of 137 records");
    }

    #[test]
    fn test_server_mode_forwards_each_page_click_once() {
        let strategy = PaginationStrategy::server(0, 20, 100);
        let mut query = TableQuery::default();
        let mut forwarded = Vec::new();
        for page in [1, 2, 1] {
            if let Some(event) = strategy.dispatch(&mut query, TableEvent::PageChanged(page)) {
                forwarded.push(event);
            }
        }
        assert_eq!(
            forwarded,
            vec![
                TableEvent::PageChanged(1),
                TableEvent::PageChanged(2),
                TableEvent::PageChanged(1)
            ]
        );
        assert_eq!(query.page, 0);
    }

    #[test]
    fn test_server_offset() {
        assert_eq!(ServerPaging::new(4, 20, 500).offset(), 80);
    }

    #[test]
    fn test_empty_summary() {
        let view = ClientPaging::new(10).view::<Unit>(&[], &TableQuery::default());
        assert_eq!(view.summary(), "Showing 0 to 0 of 0 records");
        assert!(!view.has_next());
        assert!(!view.has_prev());
    }
}
