use contracts::shared::api::{ApiError, ListEnvelope};
use contracts::usecases::u502_purchase_plans::dto::{
    ApproveRequest, PlanQuery, PlanUpdateRequest, PurchasePlan,
};

use crate::shared::api_client::ApiClient;

pub const IMPORT_PATH: &str = "/api/planning/plans/import";
const EXPORT_PATH: &str = "/api/planning/plans/export";

pub async fn fetch_plans(api: &ApiClient, query: &PlanQuery) -> Result<Vec<PurchasePlan>, ApiError> {
    api.get_json::<ListEnvelope<PurchasePlan>, _>("/api/planning/plans", query)
        .await
        .map(ListEnvelope::into_rows)
}

pub async fn generate(api: &ApiClient) -> Result<serde_json::Value, ApiError> {
    api.post_empty("/api/planning/generate-plans").await
}

pub async fn approve(api: &ApiClient, plan_id: i64) -> Result<(), ApiError> {
    api.post_json::<_, serde_json::Value>("/api/planning/plans/approve", &ApproveRequest { plan_id })
        .await
        .map(|_| ())
}

pub async fn update(api: &ApiClient, request: &PlanUpdateRequest) -> Result<(), ApiError> {
    api.post_json::<_, serde_json::Value>("/api/planning/plans/update", request)
        .await
        .map(|_| ())
}

/// The workbook is generated server-side and opened directly.
pub fn open_export(api: &ApiClient, query: &PlanQuery) -> Result<(), ApiError> {
    let url = api.url_with(EXPORT_PATH, query)?;
    api.open_in_new_tab(&url)
}
