use contracts::domain::a001_product::aggregate::ProductPayload;
use contracts::domain::common::SaveMode;
use contracts::shared::api::ApiError;

use crate::shared::api_client::ApiClient;

const PRODUCTS_PATH: &str = "/api/data/products";

pub fn product_path(sku_id: &str) -> String {
    format!("{PRODUCTS_PATH}/{}", urlencoding::encode(sku_id))
}

/// POST for a new product, PUT for an existing SKU.
pub async fn save_form(
    api: &ApiClient,
    mode: &SaveMode,
    payload: &ProductPayload,
) -> Result<(), ApiError> {
    match mode {
        SaveMode::Create => api
            .post_json::<_, serde_json::Value>(PRODUCTS_PATH, payload)
            .await
            .map(|_| ()),
        SaveMode::Update(sku_id) => api
            .put_json::<_, serde_json::Value>(&product_path(sku_id), payload)
            .await
            .map(|_| ()),
    }
}
