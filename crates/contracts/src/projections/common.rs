use crate::shared::period::DateRange;
use serde::{Deserialize, Serialize};

/// Query string of the server-paged transaction lists.
///
/// Absent parameters are omitted so the backend applies its own defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListQuery {
    pub skip: usize,
    pub limit: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl ListQuery {
    pub fn page(page: usize, page_size: usize) -> Self {
        Self {
            skip: page * page_size,
            limit: page_size,
            ..Default::default()
        }
    }

    pub fn search(mut self, text: &str) -> Self {
        self.search = non_blank(text);
        self
    }

    /// Sets `group_id`; the `ALL` sentinel and blanks mean no restriction.
    pub fn group(mut self, group_id: &str) -> Self {
        self.group_id = non_sentinel(group_id);
        self
    }

    pub fn warehouse(mut self, warehouse_id: &str) -> Self {
        self.warehouse_id = non_sentinel(warehouse_id);
        self
    }

    pub fn kind(mut self, kind: &str) -> Self {
        self.kind = non_sentinel(kind);
        self
    }

    pub fn period(mut self, range: Option<DateRange>) -> Self {
        self.start_date = range.map(|r| r.start_date());
        self.end_date = range.map(|r| r.end_date());
        self
    }
}

/// Value of "no filter" in every dropdown.
pub const ALL: &str = "ALL";

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn non_sentinel(value: &str) -> Option<String> {
    non_blank(value).filter(|v| v != ALL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_builder_drops_sentinels() {
        let q = ListQuery::page(2, 20)
            .search("  tea ")
            .group(ALL)
            .warehouse("WH1")
            .kind("PLANNED");
        assert_eq!(q.skip, 40);
        assert_eq!(q.limit, 20);
        assert_eq!(q.search.as_deref(), Some("tea"));
        assert_eq!(q.group_id, None);
        assert_eq!(q.warehouse_id.as_deref(), Some("WH1"));
        assert_eq!(q.kind.as_deref(), Some("PLANNED"));
    }

    #[test]
    fn test_period() {
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
        );
        let q = ListQuery::page(0, 20).period(Some(range));
        assert_eq!(q.start_date.as_deref(), Some("2025-01-01"));
        assert_eq!(q.end_date.as_deref(), Some("2025-12-31"));
        assert_eq!(ListQuery::page(0, 20).period(None).start_date, None);
    }
}
