use crate::shared::data_table::TableRow;
use serde::{Deserialize, Serialize};

/// Sales order line (`GET /api/data/sales`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub transaction_id: String,
    #[serde(default)]
    pub order_date: String,
    #[serde(default)]
    pub sku_id: String,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub extra_data: Option<String>,
}

impl TableRow for SaleRecord {
    fn row_key(&self) -> String {
        self.transaction_id.clone()
    }
}
