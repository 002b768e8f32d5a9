use crate::shared::data_table::TableRow;
use serde::{Deserialize, Serialize};

/// Raw calculation bucket (`GET /api/data/rolling-raw`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RollingInventoryRecord {
    pub bucket_date: String,
    pub sku_id: String,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub warehouse_id: Option<String>,
    #[serde(default)]
    pub opening_stock: f64,
    #[serde(default)]
    pub closing_stock: f64,
    #[serde(default)]
    pub net_requirement: f64,
    #[serde(default)]
    pub actual_sold_qty: f64,
    #[serde(default)]
    pub actual_imported_qty: f64,
    #[serde(default)]
    pub forecast_demand: f64,
    #[serde(default)]
    pub status: String,
}

impl RollingInventoryRecord {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("OK")
    }
}

impl TableRow for RollingInventoryRecord {
    fn row_key(&self) -> String {
        format!(
            "{}|{}|{}",
            self.sku_id,
            self.warehouse_id.as_deref().unwrap_or(""),
            self.bucket_date
        )
    }
}
