use serde::{Deserialize, Serialize};

use crate::domain::common::non_negative;
use crate::projections::common::ALL;
use crate::shared::api::ApiError;
use crate::shared::data_table::TableRow;

pub const STATUS_APPROVED: &str = "APPROVED";
pub const PLAN_PAGE_LIMIT: usize = 100;

/// System-generated purchase recommendation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PurchasePlan {
    pub id: i64,
    #[serde(default)]
    pub plan_date: String,
    pub sku_id: String,
    #[serde(default)]
    pub vendor_id: Option<String>,
    #[serde(default)]
    pub suggested_quantity: f64,
    #[serde(default)]
    pub final_quantity: f64,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl PurchasePlan {
    /// Approved plans are locked against edits and re-approval.
    pub fn is_approved(&self) -> bool {
        self.status.eq_ignore_ascii_case(STATUS_APPROVED)
    }

    pub fn is_adjusted(&self) -> bool {
        self.final_quantity != self.suggested_quantity
    }

    pub fn approve_prompt(&self) -> String {
        format!("Approve plan for {}? This will lock the plan.", self.sku_id)
    }
}

impl TableRow for PurchasePlan {
    fn row_key(&self) -> String {
        self.id.to_string()
    }
}

/// Query of both the list and the export endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

impl PlanQuery {
    /// `group` equal to `ALL` means no group restriction.
    pub fn list(search: &str, group: &str) -> Self {
        Self {
            limit: Some(PLAN_PAGE_LIMIT),
            ..Self::filtered(search, group)
        }
    }

    pub fn export(search: &str, group: &str) -> Self {
        Self {
            pending_only: Some(false),
            ..Self::filtered(search, group)
        }
    }

    fn filtered(search: &str, group: &str) -> Self {
        let search = search.trim();
        let group = group.trim();
        Self {
            search: (!search.is_empty()).then(|| search.to_string()),
            group_id: (!group.is_empty() && group != ALL).then(|| group.to_string()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApproveRequest {
    pub plan_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanUpdateRequest {
    pub plan_id: i64,
    pub final_quantity: f64,
    pub notes: String,
}

/// Edit dialog state; the suggested quantity is shown read-only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanEditForm {
    pub plan_id: i64,
    pub sku_id: String,
    pub suggested_quantity: f64,
    pub final_quantity: String,
    pub notes: String,
}

impl PlanEditForm {
    pub fn for_plan(plan: &PurchasePlan) -> Self {
        Self {
            plan_id: plan.id,
            sku_id: plan.sku_id.clone(),
            suggested_quantity: plan.suggested_quantity,
            final_quantity: plan.final_quantity.to_string(),
            notes: plan.notes.clone().unwrap_or_default(),
        }
    }

    pub fn to_request(&self) -> Result<PlanUpdateRequest, ApiError> {
        Ok(PlanUpdateRequest {
            plan_id: self.plan_id,
            final_quantity: non_negative(&self.final_quantity, "Final quantity")?,
            notes: self.notes.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(status: &str) -> PurchasePlan {
        PurchasePlan {
            id: 7,
            sku_id: "A001".into(),
            suggested_quantity: 120.0,
            final_quantity: 100.0,
            status: status.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_approved_plans_are_locked() {
        assert!(plan("APPROVED").is_approved());
        assert!(!plan("DRAFT").is_approved());
        assert!(plan("DRAFT").is_adjusted());
        assert_eq!(
            plan("DRAFT").approve_prompt(),
            "Approve plan for A001? This will lock the plan."
        );
    }

    #[test]
    fn test_query_drops_all_group() {
        let q = PlanQuery::list(" A0 ", "ALL");
        assert_eq!(q.limit, Some(100));
        assert_eq!(q.search.as_deref(), Some("A0"));
        assert_eq!(q.group_id, None);

        let q = PlanQuery::export("", "G1");
        assert_eq!(q.pending_only, Some(false));
        assert_eq!(q.group_id.as_deref(), Some("G1"));
        assert_eq!(q.limit, None);
    }

    #[test]
    fn test_edit_form_request() {
        let mut form = PlanEditForm::for_plan(&plan("DRAFT"));
        assert_eq!(form.final_quantity, "100");
        form.final_quantity = "90".into();
        form.notes = " rush ".into();
        let req = form.to_request().unwrap();
        assert_eq!(req.final_quantity, 90.0);
        assert_eq!(req.notes, "rush");

        form.final_quantity = "abc".into();
        assert!(form.to_request().is_err());
    }
}
