use crate::shared::csv_export::CsvExportable;
use crate::shared::data_table::TableRow;
use serde::{Deserialize, Serialize};

/// Customer group (`GET /api/data/partner-groups`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartnerGroup {
    pub group_id: String,
    #[serde(default)]
    pub group_name: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl TableRow for PartnerGroup {
    fn row_key(&self) -> String {
        self.group_id.clone()
    }
}

impl CsvExportable for PartnerGroup {
    fn headers() -> Vec<&'static str> {
        vec!["group_id", "group_name", "updated_at"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.group_id.clone(),
            self.group_name.clone(),
            self.updated_at.clone().unwrap_or_default(),
        ]
    }
}
