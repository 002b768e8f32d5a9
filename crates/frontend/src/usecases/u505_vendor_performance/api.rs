use contracts::shared::api::{ApiError, ListEnvelope};
use contracts::usecases::u505_vendor_performance::dto::{
    rank_vendors, MockResult, VendorScore, GENERATE_MOCK_PATH, RANKING_PATH,
};

use crate::shared::api_client::ApiClient;

/// Latest-month ranking, best vendor first.
pub async fn fetch_ranking(api: &ApiClient) -> Result<Vec<VendorScore>, ApiError> {
    api.get::<ListEnvelope<VendorScore>>(RANKING_PATH)
        .await
        .map(|body| rank_vendors(body.into_rows()))
}

pub async fn generate_mock(api: &ApiClient) -> Result<MockResult, ApiError> {
    api.post_empty(GENERATE_MOCK_PATH).await
}
