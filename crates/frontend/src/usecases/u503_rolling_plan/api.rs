use contracts::domain::a004_warehouse::aggregate::Warehouse;
use contracts::shared::api::{ApiError, ListEnvelope};
use contracts::usecases::u503_rolling_plan::{
    MatrixQuery, PlannedSupplyUpdate, PlanningProfile, RollingRecord, RunRequest,
};

use crate::shared::api_client::ApiClient;

const BASE: &str = "/api/planning/rolling";

fn path(tail: &str) -> String {
    format!("{BASE}/{tail}")
}

pub async fn fetch_profiles(api: &ApiClient) -> Result<Vec<PlanningProfile>, ApiError> {
    api.get::<ListEnvelope<PlanningProfile>>(&path("profiles"))
        .await
        .map(ListEnvelope::into_rows)
}

pub async fn fetch_warehouses(api: &ApiClient) -> Result<Vec<Warehouse>, ApiError> {
    api.get::<ListEnvelope<Warehouse>>(&path("warehouses"))
        .await
        .map(ListEnvelope::into_rows)
}

pub async fn fetch_matrix(api: &ApiClient, query: &MatrixQuery) -> Result<Vec<RollingRecord>, ApiError> {
    api.get_json::<ListEnvelope<RollingRecord>, _>(&path("matrix"), query)
        .await
        .map(ListEnvelope::into_rows)
}

pub async fn run(api: &ApiClient, request: &RunRequest) -> Result<(), ApiError> {
    api.post_json::<_, serde_json::Value>(&path("run"), request)
        .await
        .map(|_| ())
}

/// Posts the updates one after another and pairs each with its result.
pub async fn save_updates(
    api: &ApiClient,
    updates: Vec<PlannedSupplyUpdate>,
) -> Vec<(PlannedSupplyUpdate, Result<(), ApiError>)> {
    let endpoint = path("update");
    let mut results = Vec::with_capacity(updates.len());
    for update in updates {
        let result = api
            .post_json::<_, serde_json::Value>(&endpoint, &update)
            .await
            .map(|_| ());
        if let Err(e) = &result {
            log::warn!("planned supply update {} @ {} failed: {e}", update.sku_id, update.bucket_date);
        }
        results.push((update, result));
    }
    results
}
