use crate::domain::common::non_negative;
use crate::projections::common::ALL;
use crate::shared::api::ApiError;
use crate::shared::data_table::TableRow;
use serde::{Deserialize, Serialize};

/// Opening stock checkpoint (`GET /api/data/inventory`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub snapshot_date: String,
    pub warehouse_id: String,
    #[serde(default)]
    pub warehouse_name: Option<String>,
    pub sku_id: String,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub group_name: Option<String>,
    #[serde(default)]
    pub quantity_on_hand: f64,
    /// Book quantity before a manual correction.
    #[serde(default)]
    pub quantity_original: Option<f64>,
    /// Counted quantity; overrides `quantity_on_hand` when positive.
    #[serde(default)]
    pub quantity_update: Option<f64>,
    #[serde(default)]
    pub quantity_on_order: f64,
    #[serde(default)]
    pub quantity_allocated: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl InventoryItem {
    pub fn effective_on_hand(&self) -> f64 {
        match self.quantity_update {
            Some(q) if q > 0.0 => q,
            _ => self.quantity_on_hand,
        }
    }

    pub fn has_correction(&self) -> bool {
        self.quantity_update.is_some_and(|q| q > 0.0)
    }

    pub fn warehouse_label(&self) -> String {
        self.warehouse_name
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| self.warehouse_id.clone())
    }
}

impl TableRow for InventoryItem {
    fn row_key(&self) -> String {
        format!("{}|{}|{}", self.sku_id, self.warehouse_id, self.snapshot_date)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryAggregates {
    #[serde(default)]
    pub total_on_hand: f64,
    #[serde(default)]
    pub total_on_order: f64,
    #[serde(default)]
    pub total_allocated: f64,
}

impl InventoryAggregates {
    /// Sums of the rows currently on screen.
    pub fn of_page(items: &[InventoryItem]) -> Self {
        items.iter().fold(Self::default(), |acc, item| Self {
            total_on_hand: acc.total_on_hand + item.effective_on_hand(),
            total_on_order: acc.total_on_order + item.quantity_on_order,
            total_allocated: acc.total_allocated + item.quantity_allocated.unwrap_or(0.0),
        })
    }
}

/// `{data, total, aggregates}` body of the inventory and snapshot lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryListResponse {
    #[serde(default)]
    pub data: Vec<InventoryItem>,
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub aggregates: Option<InventoryAggregates>,
}

/// Query of `DELETE /api/data/inventory/delete`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryKey {
    pub sku_id: String,
    pub warehouse_id: String,
    pub snapshot_date: String,
}

impl From<&InventoryItem> for InventoryKey {
    fn from(item: &InventoryItem) -> Self {
        Self {
            sku_id: item.sku_id.clone(),
            warehouse_id: item.warehouse_id.clone(),
            snapshot_date: item.snapshot_date.clone(),
        }
    }
}

/// Body of `POST /api/data/inventory/update`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryUpdateRequest {
    pub sku_id: String,
    /// Warehouse the record currently belongs to.
    pub warehouse_id: String,
    /// Target warehouse when the record moves, otherwise `None`.
    pub new_warehouse_id: Option<String>,
    pub snapshot_date: String,
    pub quantity_on_hand: f64,
    pub quantity_update: Option<f64>,
    pub group_id: Option<String>,
}

/// Edit dialog state; quantities are kept as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryForm {
    pub original: InventoryItem,
    pub warehouse_id: String,
    /// Empty keeps the current group.
    pub group_id: String,
    pub quantity_on_hand: String,
    pub quantity_update: String,
}

impl InventoryForm {
    pub fn for_edit(item: &InventoryItem) -> Self {
        Self {
            original: item.clone(),
            warehouse_id: item.warehouse_id.clone(),
            group_id: item.group_id.clone().unwrap_or_default(),
            quantity_on_hand: item.quantity_on_hand.to_string(),
            quantity_update: item
                .quantity_update
                .map(|q| q.to_string())
                .unwrap_or_default(),
        }
    }

    pub fn to_request(&self) -> Result<InventoryUpdateRequest, ApiError> {
        let quantity_update = non_negative(&self.quantity_update, "Actual quantity")?;
        let warehouse = self.warehouse_id.trim();
        let group = self.group_id.trim();
        Ok(InventoryUpdateRequest {
            sku_id: self.original.sku_id.clone(),
            warehouse_id: self.original.warehouse_id.clone(),
            new_warehouse_id: (!warehouse.is_empty() && warehouse != self.original.warehouse_id)
                .then(|| warehouse.to_string()),
            snapshot_date: self.original.snapshot_date.clone(),
            quantity_on_hand: non_negative(&self.quantity_on_hand, "Opening quantity")?,
            quantity_update: (quantity_update != 0.0).then_some(quantity_update),
            group_id: (!group.is_empty() && group != ALL)
                .then(|| group.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(on_hand: f64, update: Option<f64>) -> InventoryItem {
        InventoryItem {
            snapshot_date: "2025-01-01".into(),
            warehouse_id: "WH1".into(),
            sku_id: "A001".into(),
            quantity_on_hand: on_hand,
            quantity_update: update,
            quantity_on_order: 5.0,
            quantity_allocated: Some(2.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_effective_on_hand() {
        assert_eq!(item(100.0, None).effective_on_hand(), 100.0);
        assert_eq!(item(100.0, Some(0.0)).effective_on_hand(), 100.0);
        assert_eq!(item(100.0, Some(80.0)).effective_on_hand(), 80.0);
    }

    #[test]
    fn test_page_totals() {
        let totals = InventoryAggregates::of_page(&[item(100.0, Some(80.0)), item(20.0, None)]);
        assert_eq!(totals.total_on_hand, 100.0);
        assert_eq!(totals.total_on_order, 10.0);
        assert_eq!(totals.total_allocated, 4.0);
    }

    #[test]
    fn test_update_request_only_sends_changes() {
        let original = item(100.0, None);
        let mut form = InventoryForm::for_edit(&original);
        let req = form.to_request().unwrap();
        assert_eq!(req.new_warehouse_id, None);
        assert_eq!(req.quantity_update, None);
        assert_eq!(req.group_id, None);

        form.warehouse_id = "WH2".into();
        form.quantity_update = "95".into();
        form.group_id = "G7".into();
        let req = form.to_request().unwrap();
        assert_eq!(req.warehouse_id, "WH1");
        assert_eq!(req.new_warehouse_id.as_deref(), Some("WH2"));
        assert_eq!(req.quantity_update, Some(95.0));
        assert_eq!(req.group_id.as_deref(), Some("G7"));
    }
}
