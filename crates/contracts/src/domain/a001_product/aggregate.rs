use crate::domain::a002_unit::aggregate::Unit;
use crate::domain::a003_product_group::aggregate::ProductGroup;
use crate::domain::common::{non_negative, optional, required, sync_status, EntityForm};
use crate::shared::api::ApiError;
use crate::shared::csv_export::CsvExportable;
use crate::shared::data_table::TableRow;
use serde::{Deserialize, Serialize};

// ============================================================================
// Wire types
// ============================================================================

/// Product master record as returned by `GET /api/data/products`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub sku_id: String,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub base_unit_id: Option<String>,
    #[serde(default)]
    pub min_stock_level: Option<f64>,
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Denormalized group name, used when `group_id` has no match.
    #[serde(default)]
    pub category: Option<String>,
    /// Denormalized unit name, used when `base_unit_id` has no match.
    #[serde(default)]
    pub unit: Option<String>,
}

/// Body of `POST /api/data/products` and `PUT /api/data/products/{sku_id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    pub sku_id: String,
    pub product_name: String,
    pub group_id: Option<String>,
    pub base_unit_id: Option<String>,
    pub category: Option<String>,
    pub unit: Option<String>,
    pub min_stock_level: f64,
}

// ============================================================================
// Table row
// ============================================================================

/// Product with its group and unit names resolved for display and facets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRow {
    pub sku_id: String,
    pub product_name: String,
    pub group_id: String,
    pub group_name: String,
    pub base_unit_id: String,
    pub unit_name: String,
    pub min_stock_level: f64,
    pub sync_status: String,
}

impl ProductRow {
    pub fn resolve(product: &Product, groups: &[ProductGroup], units: &[Unit]) -> Self {
        let group_id = product.group_id.clone().unwrap_or_default();
        let group_name = groups
            .iter()
            .find(|g| g.group_id == group_id)
            .map(|g| g.group_name.clone())
            .or_else(|| product.category.clone().filter(|c| !c.is_empty()))
            .unwrap_or_else(|| "-".to_string());

        let base_unit_id = product.base_unit_id.clone().unwrap_or_default();
        let unit_name = units
            .iter()
            .find(|u| u.unit_id == base_unit_id)
            .map(|u| u.unit_name.clone())
            .or_else(|| product.unit.clone().filter(|u| !u.is_empty()))
            .unwrap_or_else(|| "-".to_string());

        Self {
            sku_id: product.sku_id.clone(),
            product_name: product.product_name.clone(),
            group_id,
            group_name,
            base_unit_id,
            unit_name,
            min_stock_level: product.min_stock_level.unwrap_or(0.0),
            sync_status: sync_status(product.updated_at.as_deref()),
        }
    }
}

impl TableRow for ProductRow {
    fn row_key(&self) -> String {
        self.sku_id.clone()
    }
}

impl CsvExportable for ProductRow {
    fn headers() -> Vec<&'static str> {
        vec!["sku_id", "product_name", "group_name", "unit_name", "min_stock_level", "sync_status"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.sku_id.clone(),
            self.product_name.clone(),
            self.group_name.clone(),
            self.unit_name.clone(),
            self.min_stock_level.to_string(),
            self.sync_status.clone(),
        ]
    }
}

// ============================================================================
// Form
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    /// SKU of the record being edited; `None` while adding.
    pub editing: Option<String>,
    pub sku_id: String,
    pub product_name: String,
    pub group_id: String,
    pub base_unit_id: String,
    pub min_stock_level: String,
    /// Lookup lists used to fill the denormalized name fields.
    pub group_names: Vec<(String, String)>,
    pub unit_names: Vec<(String, String)>,
}

impl ProductForm {
    pub fn for_edit(row: &ProductRow) -> Self {
        Self {
            editing: Some(row.sku_id.clone()),
            sku_id: row.sku_id.clone(),
            product_name: row.product_name.clone(),
            group_id: row.group_id.clone(),
            base_unit_id: row.base_unit_id.clone(),
            min_stock_level: row.min_stock_level.to_string(),
            ..Default::default()
        }
    }

    pub fn with_lookups(mut self, groups: &[ProductGroup], units: &[Unit]) -> Self {
        self.group_names = groups
            .iter()
            .map(|g| (g.group_id.clone(), g.group_name.clone()))
            .collect();
        self.unit_names = units
            .iter()
            .map(|u| (u.unit_id.clone(), u.unit_name.clone()))
            .collect();
        self
    }

    fn name_of(list: &[(String, String)], id: &Option<String>) -> Option<String> {
        let id = id.as_deref()?;
        list.iter().find(|(k, _)| k == id).map(|(_, n)| n.clone())
    }
}

impl EntityForm for ProductForm {
    type Payload = ProductPayload;

    fn existing_key(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    fn to_payload(&self) -> Result<ProductPayload, ApiError> {
        let group_id = optional(&self.group_id);
        let base_unit_id = optional(&self.base_unit_id);
        Ok(ProductPayload {
            sku_id: required(&self.sku_id, "SKU")?,
            product_name: required(&self.product_name, "Product name")?,
            category: Self::name_of(&self.group_names, &group_id),
            unit: Self::name_of(&self.unit_names, &base_unit_id),
            group_id,
            base_unit_id,
            min_stock_level: non_negative(&self.min_stock_level, "Min stock level")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::SaveMode;

    fn groups() -> Vec<ProductGroup> {
        vec![ProductGroup {
            group_id: "G1".into(),
            group_name: "Beverages".into(),
            ..Default::default()
        }]
    }

    fn units() -> Vec<Unit> {
        vec![Unit {
            unit_id: "KG".into(),
            unit_name: "Kilogram".into(),
            updated_at: None,
        }]
    }

    #[test]
    fn test_resolve_names_with_fallback() {
        let product = Product {
            sku_id: "A001".into(),
            product_name: "Green Tea".into(),
            group_id: Some("G1".into()),
            base_unit_id: Some("PCS".into()),
            unit: Some("Piece".into()),
            updated_at: Some("2025-01-02T00:00:00".into()),
            ..Default::default()
        };
        let row = ProductRow::resolve(&product, &groups(), &units());
        assert_eq!(row.group_name, "Beverages");
        assert_eq!(row.unit_name, "Piece");
        assert_eq!(row.sync_status, "Synced");

        let bare = Product {
            sku_id: "B002".into(),
            ..Default::default()
        };
        let row = ProductRow::resolve(&bare, &groups(), &units());
        assert_eq!(row.group_name, "-");
        assert_eq!(row.unit_name, "-");
        assert_eq!(row.sync_status, "Pending");
    }

    #[test]
    fn test_form_payload_and_mode() {
        let form = ProductForm {
            sku_id: " A001 ".into(),
            product_name: "Green Tea".into(),
            group_id: "G1".into(),
            base_unit_id: "KG".into(),
            min_stock_level: "15".into(),
            ..Default::default()
        }
        .with_lookups(&groups(), &units());
        assert_eq!(form.save_mode(), SaveMode::Create);
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.sku_id, "A001");
        assert_eq!(payload.category.as_deref(), Some("Beverages"));
        assert_eq!(payload.unit.as_deref(), Some("Kilogram"));
        assert_eq!(payload.min_stock_level, 15.0);
    }

    #[test]
    fn test_form_requires_sku() {
        let form = ProductForm {
            product_name: "Nameless".into(),
            ..Default::default()
        };
        assert_eq!(
            form.to_payload(),
            Err(ApiError::Validation("SKU is required".into()))
        );
    }

    #[test]
    fn test_edit_form_updates() {
        let row = ProductRow::resolve(
            &Product {
                sku_id: "A001".into(),
                product_name: "Tea".into(),
                ..Default::default()
            },
            &[],
            &[],
        );
        assert_eq!(
            ProductForm::for_edit(&row).save_mode(),
            SaveMode::Update("A001".into())
        );
    }
}
