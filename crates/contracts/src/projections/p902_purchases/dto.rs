use crate::shared::data_table::TableRow;
use crate::shared::period::iso_week_label;
use serde::{Deserialize, Serialize};

/// Purchase line (`GET /api/data/purchases`), either received or still planned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub transaction_id: String,
    #[serde(default)]
    pub order_date: String,
    #[serde(default)]
    pub sku_id: String,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub quantity: f64,
    /// `ACTUAL` or `PLANNED`
    #[serde(default)]
    pub purchase_type: String,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub extra_data: Option<String>,
}

impl PurchaseRecord {
    pub fn week_label(&self) -> String {
        iso_week_label(&self.order_date)
    }

    pub fn is_planned(&self) -> bool {
        self.purchase_type.eq_ignore_ascii_case("PLANNED")
    }
}

impl TableRow for PurchaseRecord {
    fn row_key(&self) -> String {
        self.transaction_id.clone()
    }
}

/// Options of the purchase type dropdown.
pub const PURCHASE_TYPES: [(&str, &str); 3] =
    [("ALL", "All types"), ("ACTUAL", "Actual"), ("PLANNED", "Planned")];
