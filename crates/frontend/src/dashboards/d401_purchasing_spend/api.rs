use contracts::dashboards::d401_purchasing_spend::dto::{SpendingAnalytics, SPENDING_PATH};
use contracts::shared::api::{ApiError, DataEnvelope};

use crate::shared::api_client::ApiClient;

pub async fn fetch_spending(api: &ApiClient) -> Result<SpendingAnalytics, ApiError> {
    api.get::<DataEnvelope<SpendingAnalytics>>(SPENDING_PATH)
        .await
        .map(|body| body.data)
}
