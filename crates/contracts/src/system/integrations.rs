use serde::{Deserialize, Serialize};

pub const CRM_CONFIG_PATH: &str = "/api/data/crm/config";
pub const CRM_SYNC_PATH: &str = "/api/data/sync/crm";
pub const CRM_SYNC_PROMPT: &str =
    "Start syncing Inventory from MISA CRM? This may take a few minutes.";

/// CRM and accounting credentials as stored by the backend.
///
/// Keys keep the backend's environment-variable names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrmConfig {
    #[serde(rename = "MISA_CRM_CLIENT_ID")]
    pub crm_client_id: String,
    #[serde(rename = "MISA_CRM_CLIENT_SECRET")]
    pub crm_client_secret: String,
    pub company_code: String,
    #[serde(rename = "MISA_AMIS_ACT_APP_ID")]
    pub act_app_id: String,
    #[serde(rename = "MISA_AMIS_ACT_ACCESS_CODE")]
    pub act_access_code: String,
    #[serde(rename = "MISA_AMIS_ACT_BASE_URL")]
    pub act_base_url: String,
}

impl CrmConfig {
    /// The backend may send `null` for unset keys.
    pub fn from_value(value: serde_json::Value) -> Self {
        let text = |key: &str| {
            value
                .get(key)
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string()
        };
        Self {
            crm_client_id: text("MISA_CRM_CLIENT_ID"),
            crm_client_secret: text("MISA_CRM_CLIENT_SECRET"),
            company_code: text("company_code"),
            act_app_id: text("MISA_AMIS_ACT_APP_ID"),
            act_access_code: text("MISA_AMIS_ACT_ACCESS_CODE"),
            act_base_url: text("MISA_AMIS_ACT_BASE_URL"),
        }
    }

    pub fn crm_ready(&self) -> bool {
        !self.crm_client_id.trim().is_empty() && !self.crm_client_secret.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_wire_names() {
        let cfg = CrmConfig::from_value(serde_json::json!({
            "MISA_CRM_CLIENT_ID": "id",
            "MISA_CRM_CLIENT_SECRET": null,
            "company_code": "ACME"
        }));
        assert_eq!(cfg.crm_client_id, "id");
        assert_eq!(cfg.crm_client_secret, "");
        assert!(!cfg.crm_ready());

        let body = serde_json::to_value(&cfg).unwrap();
        assert_eq!(body["MISA_CRM_CLIENT_ID"], "id");
        assert_eq!(body["company_code"], "ACME");
        assert_eq!(body["MISA_AMIS_ACT_BASE_URL"], "");
    }
}
