use crate::shared::csv_export::CsvExportable;
use crate::shared::data_table::TableRow;
use serde::{Deserialize, Serialize};

/// Warehouse (`GET /api/data/warehouses`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    pub warehouse_id: String,
    #[serde(default)]
    pub warehouse_name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Warehouse {
    /// Name for dropdowns, falling back to the id.
    pub fn label(&self) -> String {
        if self.warehouse_name.is_empty() {
            self.warehouse_id.clone()
        } else {
            self.warehouse_name.clone()
        }
    }
}

impl TableRow for Warehouse {
    fn row_key(&self) -> String {
        self.warehouse_id.clone()
    }
}

impl CsvExportable for Warehouse {
    fn headers() -> Vec<&'static str> {
        vec!["warehouse_id", "warehouse_name", "address", "updated_at"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.warehouse_id.clone(),
            self.warehouse_name.clone(),
            self.address.clone().unwrap_or_default(),
            self.updated_at.clone().unwrap_or_default(),
        ]
    }
}
