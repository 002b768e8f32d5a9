use contracts::domain::a005_vendor::aggregate::Vendor;
use contracts::domain::common::SaveMode;
use contracts::shared::api::ApiError;

use crate::shared::api_client::ApiClient;

const VENDORS_PATH: &str = "/api/data/vendors";

pub async fn save_form(api: &ApiClient, mode: &SaveMode, vendor: &Vendor) -> Result<(), ApiError> {
    match mode {
        SaveMode::Create => api
            .post_json::<_, serde_json::Value>(VENDORS_PATH, vendor)
            .await
            .map(|_| ()),
        SaveMode::Update(id) => {
            let path = format!("{VENDORS_PATH}/{}", urlencoding::encode(id));
            api.put_json::<_, serde_json::Value>(&path, vendor)
                .await
                .map(|_| ())
        }
    }
}
