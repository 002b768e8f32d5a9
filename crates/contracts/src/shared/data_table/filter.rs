use super::row::TableRow;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub label: String,
    pub value: String,
}

/// A named facet over one row field with a fixed option list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataTableFilter {
    pub key: String,
    pub title: String,
    pub options: Vec<FilterOption>,
}

impl DataTableFilter {
    pub fn new(key: impl Into<String>, title: impl Into<String>, options: Vec<FilterOption>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            options,
        }
    }

    /// Facet whose options are the distinct non-empty values, label = value.
    pub fn from_values<I, S>(key: impl Into<String>, title: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let distinct: BTreeSet<String> = values
            .into_iter()
            .map(Into::into)
            .filter(|v: &String| !v.is_empty())
            .collect();
        let options = distinct
            .into_iter()
            .map(|v| FilterOption {
                label: v.clone(),
                value: v,
            })
            .collect();
        Self::new(key, title, options)
    }
}

/// Selected values per facet key. A facet with no selected value does not
/// restrict anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection(BTreeMap<String, BTreeSet<String>>);

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, key: &str, value: &str) {
        let values = self.0.entry(key.to_string()).or_default();
        if !values.remove(value) {
            values.insert(value.to_string());
        }
        if values.is_empty() {
            self.0.remove(key);
        }
    }

    pub fn set(&mut self, key: &str, values: BTreeSet<String>) {
        if values.is_empty() {
            self.0.remove(key);
        } else {
            self.0.insert(key.to_string(), values);
        }
    }

    pub fn selected(&self, key: &str) -> Option<&BTreeSet<String>> {
        self.0.get(key)
    }

    pub fn is_selected(&self, key: &str, value: &str) -> bool {
        self.0.get(key).is_some_and(|v| v.contains(value))
    }

    /// A single selected value for the facet, used when a server endpoint
    /// takes exactly one value per parameter.
    pub fn single(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .filter(|v| v.len() == 1)
            .and_then(|v| v.iter().next())
            .map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of selected values across all facets.
    pub fn active_count(&self) -> usize {
        self.0.values().map(BTreeSet::len).sum()
    }

    /// Inclusion test: for every restricted facet the row's field value must
    /// be one of the selected values. A missing field counts as empty.
    pub fn matches<T: TableRow>(&self, row: &T) -> bool {
        if self.0.is_empty() {
            return true;
        }
        let values = row.field_values();
        self.0.iter().all(|(key, selected)| {
            let value = values.get(key).map(String::as_str).unwrap_or("");
            selected.contains(value)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Group {
        group_id: String,
        parent_name: Option<String>,
    }

    impl TableRow for Group {
        fn row_key(&self) -> String {
            self.group_id.clone()
        }
    }

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut sel = FilterSelection::new();
        sel.toggle("unit", "kg");
        sel.toggle("unit", "box");
        assert_eq!(sel.active_count(), 2);
        sel.toggle("unit", "kg");
        assert!(sel.is_selected("unit", "box"));
        assert!(!sel.is_selected("unit", "kg"));
        sel.toggle("unit", "box");
        assert!(sel.is_empty());
    }

    #[test]
    fn test_matches_inclusion() {
        let mut sel = FilterSelection::new();
        sel.toggle("parent_name", "Beverages");
        let tea = Group {
            group_id: "G1".into(),
            parent_name: Some("Beverages".into()),
        };
        let root = Group {
            group_id: "G0".into(),
            parent_name: None,
        };
        assert!(sel.matches(&tea));
        assert!(!sel.matches(&root));
    }

    #[test]
    fn test_single_value() {
        let mut sel = FilterSelection::new();
        sel.toggle("group_id", "G1");
        assert_eq!(sel.single("group_id"), Some("G1"));
        sel.toggle("group_id", "G2");
        assert_eq!(sel.single("group_id"), None);
    }

    #[test]
    fn test_from_values_dedups() {
        let f = DataTableFilter::from_values("unit", "Unit", ["kg", "box", "kg", ""]);
        let values: Vec<_> = f.options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["box", "kg"]);
    }
}
