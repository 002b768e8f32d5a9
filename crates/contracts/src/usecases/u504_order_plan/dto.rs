use serde::{Deserialize, Serialize};

use crate::shared::csv_export::CsvExportable;
use crate::shared::data_table::TableRow;

/// Suggested order line from `GET /api/planning/order-plan`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderPlanRow {
    pub sku_id: String,
    pub product_name: String,
    pub current_stock: f64,
    pub stock_on_order: f64,
    pub safety_stock: f64,
    pub lead_time_days: f64,
    pub avg_sales: f64,
    pub forecast_month_1: f64,
    pub forecast_month_2: f64,
    pub forecast_month_3: f64,
    pub suggested_order: f64,
    pub notes: String,
}

impl OrderPlanRow {
    pub fn needs_order(&self) -> bool {
        self.suggested_order > 0.0
    }
}

impl TableRow for OrderPlanRow {
    fn row_key(&self) -> String {
        self.sku_id.clone()
    }

    // only SKU and name are searchable here
    fn matches_search(&self, needle: &str) -> bool {
        self.sku_id.to_lowercase().contains(needle)
            || self.product_name.to_lowercase().contains(needle)
    }
}

impl CsvExportable for OrderPlanRow {
    fn headers() -> Vec<&'static str> {
        vec![
            "sku_id",
            "product_name",
            "current_stock",
            "stock_on_order",
            "safety_stock",
            "lead_time_days",
            "avg_sales",
            "forecast_month_1",
            "forecast_month_2",
            "forecast_month_3",
            "suggested_order",
            "notes",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.sku_id.clone(),
            self.product_name.clone(),
            self.current_stock.to_string(),
            self.stock_on_order.to_string(),
            self.safety_stock.to_string(),
            self.lead_time_days.to_string(),
            self.avg_sales.to_string(),
            self.forecast_month_1.to_string(),
            self.forecast_month_2.to_string(),
            self.forecast_month_3.to_string(),
            self.suggested_order.to_string(),
            self.notes.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_is_limited_to_sku_and_name() {
        let row = OrderPlanRow {
            sku_id: "A001".into(),
            product_name: "Blue Widget".into(),
            notes: "urgent".into(),
            ..Default::default()
        };
        assert!(row.matches_search("widget"));
        assert!(row.matches_search("a00"));
        assert!(!row.matches_search("urgent"));
    }
}
