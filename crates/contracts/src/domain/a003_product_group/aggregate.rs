use crate::shared::csv_export::CsvExportable;
use crate::shared::data_table::TableRow;
use serde::{Deserialize, Serialize};

/// Product group (`GET /api/data/groups`). Groups form a tree via `parent_id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductGroup {
    pub group_id: String,
    #[serde(default)]
    pub group_name: String,
    #[serde(default)]
    pub misa_code: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Group with the parent's name resolved; `parent_name` backs the facet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductGroupRow {
    pub group_id: String,
    pub group_name: String,
    pub misa_code: String,
    pub parent_id: String,
    pub parent_name: String,
    pub updated_at: String,
}

impl ProductGroupRow {
    /// Resolves parent names against the same list; unknown parents show `-`.
    pub fn build_all(groups: &[ProductGroup]) -> Vec<Self> {
        groups
            .iter()
            .map(|g| {
                let parent_id = g.parent_id.clone().unwrap_or_default();
                let parent_name = groups
                    .iter()
                    .find(|p| !parent_id.is_empty() && p.group_id == parent_id)
                    .map(|p| p.group_name.clone())
                    .unwrap_or_else(|| "-".to_string());
                Self {
                    group_id: g.group_id.clone(),
                    group_name: g.group_name.clone(),
                    misa_code: g.misa_code.clone().unwrap_or_default(),
                    parent_id,
                    parent_name,
                    updated_at: g.updated_at.clone().unwrap_or_default(),
                }
            })
            .collect()
    }
}

impl TableRow for ProductGroupRow {
    fn row_key(&self) -> String {
        self.group_id.clone()
    }
}

impl CsvExportable for ProductGroupRow {
    fn headers() -> Vec<&'static str> {
        vec!["group_id", "group_name", "misa_code", "parent_id", "parent_name", "updated_at"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.group_id.clone(),
            self.group_name.clone(),
            self.misa_code.clone(),
            self.parent_id.clone(),
            self.parent_name.clone(),
            self.updated_at.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_names_resolved() {
        let groups = vec![
            ProductGroup {
                group_id: "ROOT".into(),
                group_name: "Food".into(),
                ..Default::default()
            },
            ProductGroup {
                group_id: "TEA".into(),
                group_name: "Tea".into(),
                parent_id: Some("ROOT".into()),
                ..Default::default()
            },
            ProductGroup {
                group_id: "ORPHAN".into(),
                group_name: "Orphan".into(),
                parent_id: Some("GONE".into()),
                ..Default::default()
            },
        ];
        let rows = ProductGroupRow::build_all(&groups);
        let parents: Vec<_> = rows.iter().map(|r| r.parent_name.as_str()).collect();
        assert_eq!(parents, vec!["-", "Food", "-"]);
    }
}
