use contracts::dashboards::d400_home::dto::{ActivityItem, RECENT_ACTIVITY_PATH};
use contracts::shared::api::{ApiError, ListEnvelope};

use crate::shared::api_client::ApiClient;

pub use crate::dashboards::d401_purchasing_spend::api::fetch_spending;

/// The five most recently created purchase plans.
pub async fn fetch_recent_activity(api: &ApiClient) -> Result<Vec<ActivityItem>, ApiError> {
    api.get::<ListEnvelope<ActivityItem>>(RECENT_ACTIVITY_PATH)
        .await
        .map(ListEnvelope::into_rows)
}
