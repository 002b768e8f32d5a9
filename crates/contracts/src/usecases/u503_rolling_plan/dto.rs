use serde::{Deserialize, Serialize};

/// One weekly bucket of `GET /api/planning/rolling/matrix`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RollingRecord {
    pub sku_id: String,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub warehouse_id: Option<String>,
    #[serde(default)]
    pub bucket_date: String,
    #[serde(default)]
    pub opening_stock: f64,
    #[serde(default)]
    pub forecast: f64,
    #[serde(default)]
    pub incoming: f64,
    #[serde(default)]
    pub planned: f64,
    #[serde(default)]
    pub closing: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub net_req: f64,
    #[serde(default)]
    pub dos: f64,
}

impl RollingRecord {
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::parse(&self.status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    Critical,
    Low,
    Overstock,
    Ok,
    Unknown,
}

impl StockStatus {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "CRITICAL" => StockStatus::Critical,
            "LOW" => StockStatus::Low,
            "OVERSTOCK" => StockStatus::Overstock,
            "OK" => StockStatus::Ok,
            _ => StockStatus::Unknown,
        }
    }

    /// Modifier class of a matrix cell.
    pub fn css_class(&self) -> &'static str {
        match self {
            StockStatus::Critical => "matrix-cell--critical",
            StockStatus::Low => "matrix-cell--low",
            StockStatus::Overstock => "matrix-cell--overstock",
            StockStatus::Ok | StockStatus::Unknown => "",
        }
    }
}

/// Distribution profile (`GET /api/planning/rolling/profiles`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanningProfile {
    pub profile_id: String,
    #[serde(default)]
    pub profile_name: String,
    #[serde(default)]
    pub description: Option<String>,
}

pub const DEFAULT_PROFILE_ID: &str = "STD";

/// Result of `GET /api/planning/rolling/products/search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductHit {
    pub sku_id: String,
    #[serde(default)]
    pub product_name: String,
}

pub const PRODUCT_SEARCH_LIMIT: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSearchQuery {
    pub q: String,
    pub limit: usize,
}

impl ProductSearchQuery {
    /// `None` for a blank query; the picker then shows no options.
    pub fn new(text: &str) -> Option<Self> {
        let q = text.trim();
        (!q.is_empty()).then(|| Self {
            q: q.to_string(),
            limit: PRODUCT_SEARCH_LIMIT,
        })
    }
}

/// Query parameters of the matrix endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatrixQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse_id: Option<String>,
}

/// Body of `POST /api/planning/rolling/run`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRequest {
    pub horizon_months: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku_ids: Option<Vec<String>>,
    pub profile_id: String,
}

impl Default for RunRequest {
    fn default() -> Self {
        Self {
            horizon_months: 12,
            sku_ids: None,
            profile_id: DEFAULT_PROFILE_ID.to_string(),
        }
    }
}

impl RunRequest {
    /// An empty selection means every SKU.
    pub fn new(profile_id: &str, sku_ids: Vec<String>) -> Self {
        let profile_id = if profile_id.trim().is_empty() {
            DEFAULT_PROFILE_ID.to_string()
        } else {
            profile_id.to_string()
        };
        Self {
            profile_id,
            sku_ids: (!sku_ids.is_empty()).then_some(sku_ids),
            ..Default::default()
        }
    }
}

/// Body of `POST /api/planning/rolling/update`, one per edited cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedSupplyUpdate {
    pub sku_id: String,
    pub bucket_date: String,
    pub warehouse_id: String,
    pub planned_supply: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_search_query() {
        assert!(ProductSearchQuery::new("  ").is_none());
        let q = ProductSearchQuery::new(" coffee ").unwrap();
        assert_eq!(q.q, "coffee");
        assert_eq!(q.limit, 20);
    }

    #[test]
    fn test_run_request_defaults() {
        let body = serde_json::to_value(RunRequest::new("", vec![])).unwrap();
        assert_eq!(body, serde_json::json!({"horizon_months": 12, "profile_id": "STD"}));

        let body = serde_json::to_value(RunRequest::new("SEASONAL", vec!["A001".into()])).unwrap();
        assert_eq!(body["sku_ids"], serde_json::json!(["A001"]));
        assert_eq!(body["profile_id"], "SEASONAL");
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(StockStatus::parse("critical"), StockStatus::Critical);
        assert_eq!(StockStatus::parse("OVERSTOCK").css_class(), "matrix-cell--overstock");
        assert_eq!(StockStatus::parse("???"), StockStatus::Unknown);
    }
}
