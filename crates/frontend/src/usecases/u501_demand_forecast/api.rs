use contracts::domain::a001_product::aggregate::Product;
use contracts::shared::api::{ApiError, ListEnvelope};
use contracts::usecases::u501_demand_forecast::dto::{ForecastPoint, ForecastRequest, ForecastResult};

use crate::shared::api_client::ApiClient;

pub async fn fetch_products(api: &ApiClient) -> Result<Vec<Product>, ApiError> {
    api.get::<ListEnvelope<Product>>("/api/data/products?limit=2000")
        .await
        .map(ListEnvelope::into_rows)
}

pub async fn run_forecast(api: &ApiClient, request: &ForecastRequest) -> Result<ForecastResult, ApiError> {
    api.post_json("/api/planning/forecast", request).await
}

/// Sales history followed by the stored forecast horizon.
pub async fn fetch_history(api: &ApiClient, sku_id: &str) -> Result<Vec<ForecastPoint>, ApiError> {
    let path = format!("/api/planning/forecast/{}", urlencoding::encode(sku_id));
    api.get(&path).await
}
