//! Page category constants.
//!
//! Every tab page root carries `id="{entity}--{category}"` and
//! `data-page-category`, so a DOM id copied from the inspector leads back to
//! the module directory of the page.

/// Table with search, facets and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Planning workflow page (forecast, plans, matrix).
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Settings and integrations.
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Read-only KPI and chart pages.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_USECASE,
    PAGE_CAT_SYSTEM,
    PAGE_CAT_DASHBOARD,
];

/// `{entity}--{category}` with both parts non-empty.
pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((entity, category)) if !entity.is_empty() && !category.is_empty())
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a001_product--list"));
        assert!(!is_valid_page_id("a001_product"));
        assert!(!is_valid_page_id("--list"));
        assert!(is_known_category(PAGE_CAT_USECASE));
        assert!(is_known_category(PAGE_CAT_DASHBOARD));
        assert!(!is_known_category("legacy"));
    }
}
