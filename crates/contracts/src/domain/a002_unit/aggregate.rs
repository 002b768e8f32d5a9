use crate::shared::csv_export::CsvExportable;
use crate::shared::data_table::TableRow;
use serde::{Deserialize, Serialize};

/// Unit of measure (`GET /api/data/units`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub unit_id: String,
    #[serde(default)]
    pub unit_name: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl TableRow for Unit {
    fn row_key(&self) -> String {
        self.unit_id.clone()
    }
}

impl CsvExportable for Unit {
    fn headers() -> Vec<&'static str> {
        vec!["unit_id", "unit_name", "updated_at"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.unit_id.clone(),
            self.unit_name.clone(),
            self.updated_at.clone().unwrap_or_default(),
        ]
    }
}
