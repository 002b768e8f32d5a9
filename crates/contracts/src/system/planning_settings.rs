use serde::{Deserialize, Serialize};

use crate::domain::common::non_negative;
use crate::shared::api::ApiError;

/// Safety-stock policy (`GET /api/planning/rolling/policies`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    pub policy_id: i64,
    #[serde(default)]
    pub policy_name: String,
    #[serde(default)]
    pub safety_stock_days: f64,
    #[serde(default)]
    pub service_level_target: f64,
    #[serde(default)]
    pub is_default: bool,
}

/// Body of `PUT /api/planning/rolling/policies/{policy_id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyUpdate {
    pub safety_stock_days: f64,
    pub service_level_target: f64,
}

impl Policy {
    pub fn endpoint(&self) -> String {
        format!("/api/planning/rolling/policies/{}", self.policy_id)
    }

    pub fn to_update(&self) -> PolicyUpdate {
        PolicyUpdate {
            safety_stock_days: self.safety_stock_days,
            service_level_target: self.service_level_target,
        }
    }

    /// Applies a typed cell value; unparsable input is rejected.
    pub fn set_field(&mut self, field: PolicyField, input: &str) -> Result<(), ApiError> {
        match field {
            PolicyField::SafetyStockDays => {
                self.safety_stock_days = non_negative(input, "Safety stock days")?
            }
            PolicyField::ServiceLevelTarget => {
                let value = non_negative(input, "Service level target")?;
                if value > 1.0 {
                    return Err(ApiError::Validation(
                        "Service level target must be between 0 and 1".into(),
                    ));
                }
                self.service_level_target = value;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyField {
    SafetyStockDays,
    ServiceLevelTarget,
}

pub const RESET_TRANSACTIONS_PATH: &str = "/api/data/reset-transactions";

pub const RESET_FIRST_PROMPT: &str = "DANGER: Are you sure you want to RESET ALL TRANSACTION DATA?\n\nThis will delete all Sales, Purchases, Inventory, and Plans.\nThis cannot be undone.";
pub const RESET_SECOND_PROMPT: &str =
    "Double Check: Do you really want to proceed? Log records will also be truncated.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_edit() {
        let mut policy: Policy = serde_json::from_str(
            r#"{"policy_id":3,"policy_name":"Standard","safety_stock_days":7,"service_level_target":0.95,"is_default":true}"#,
        )
        .unwrap();
        assert_eq!(policy.endpoint(), "/api/planning/rolling/policies/3");

        policy.set_field(PolicyField::SafetyStockDays, "14").unwrap();
        assert!(policy.set_field(PolicyField::ServiceLevelTarget, "1.5").is_err());
        assert_eq!(
            policy.to_update(),
            PolicyUpdate {
                safety_stock_days: 14.0,
                service_level_target: 0.95
            }
        );
    }
}
