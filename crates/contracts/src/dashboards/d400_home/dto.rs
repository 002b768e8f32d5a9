use serde::{Deserialize, Serialize};

pub const RECENT_ACTIVITY_PATH: &str = "/api/dashboard/recent-activity";
pub const DEFAULT_CURRENCY: &str = "VND";

/// One of the latest purchase plans shown on the home page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityItem {
    pub id: String,
    pub sku_id: String,
    pub order_id: String,
    pub status: String,
    pub amount: Option<f64>,
    pub currency: Option<String>,
    pub date: Option<String>,
}

impl ActivityItem {
    pub fn amount(&self) -> f64 {
        self.amount.unwrap_or_default()
    }

    pub fn currency(&self) -> &str {
        self.currency
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CURRENCY)
    }

    pub fn status_class(&self) -> &'static str {
        match self.status.to_ascii_uppercase().as_str() {
            "APPROVED" => "badge--success",
            "DRAFT" => "badge--warning",
            _ => "badge--neutral",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::ListEnvelope;

    #[test]
    fn test_activity_feed_tolerates_nulls() {
        let body = r#"{"status":"success","data":[
            {"id":"7","sku_id":"A001","order_id":"PLAN-7","status":"APPROVED","amount":1500.0,"currency":"USD","date":"2025-02-01 10:00"},
            {"id":"8","sku_id":"B002","order_id":"PLAN-8","status":"draft","amount":null,"currency":null,"date":null}
        ]}"#;
        let items = serde_json::from_str::<ListEnvelope<ActivityItem>>(body)
            .unwrap()
            .into_rows();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].currency(), "USD");
        assert_eq!(items[0].status_class(), "badge--success");
        assert_eq!(items[1].amount(), 0.0);
        assert_eq!(items[1].currency(), DEFAULT_CURRENCY);
        assert_eq!(items[1].status_class(), "badge--warning");
    }
}
