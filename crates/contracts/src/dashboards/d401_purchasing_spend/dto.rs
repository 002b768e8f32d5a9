use serde::{Deserialize, Serialize};

pub const SPENDING_PATH: &str = "/api/dashboard/spending";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpendingKpi {
    /// Planned spend over all plans that are not cancelled.
    pub total_spend: f64,
    pub total_plans: u64,
    pub currency: String,
}

/// One category or vendor total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpendSlice {
    pub name: Option<String>,
    pub value: Option<f64>,
}

impl SpendSlice {
    pub fn label(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or("Uncategorized")
    }

    pub fn value(&self) -> f64 {
        self.value.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpendingCharts {
    pub spend_by_category: Vec<SpendSlice>,
    pub spend_by_vendor: Vec<SpendSlice>,
}

/// `data` of `GET /api/dashboard/spending`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpendingAnalytics {
    pub kpi: SpendingKpi,
    pub charts: SpendingCharts,
}

/// A slice prepared for a horizontal bar.
#[derive(Debug, Clone, PartialEq)]
pub struct SpendBar {
    pub label: String,
    pub value: f64,
    /// Bar length relative to the largest slice, 0..=100.
    pub width: f64,
    /// Share of the total of all slices, 0..=100.
    pub share: f64,
}

/// Bars in the order the backend ranked them.
pub fn spend_bars(slices: &[SpendSlice]) -> Vec<SpendBar> {
    let max = slices.iter().map(SpendSlice::value).fold(0.0, f64::max);
    let total: f64 = slices.iter().map(SpendSlice::value).filter(|v| *v > 0.0).sum();
    let percent = |value: f64, of: f64| {
        if of > 0.0 {
            (value.max(0.0) / of * 100.0).min(100.0)
        } else {
            0.0
        }
    };
    slices
        .iter()
        .map(|slice| SpendBar {
            label: slice.label().to_string(),
            value: slice.value(),
            width: percent(slice.value(), max),
            share: percent(slice.value(), total),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::DataEnvelope;

    #[test]
    fn test_spending_body() {
        let body = r#"{"status":"success","data":{
            "kpi":{"total_spend":3000000,"total_plans":12,"currency":"VND"},
            "charts":{"spend_by_category":[{"name":"Tools","value":2000000},{"name":null,"value":1000000}],
                      "spend_by_vendor":[]}
        }}"#;
        let data = serde_json::from_str::<DataEnvelope<SpendingAnalytics>>(body)
            .unwrap()
            .data;
        assert_eq!(data.kpi.total_plans, 12);
        assert_eq!(data.charts.spend_by_category[1].label(), "Uncategorized");
        assert!(data.charts.spend_by_vendor.is_empty());
    }

    #[test]
    fn test_spend_bars_scale_to_largest_and_total() {
        let slices = vec![
            SpendSlice { name: Some("A".into()), value: Some(300.0) },
            SpendSlice { name: Some("B".into()), value: Some(100.0) },
            SpendSlice { name: Some("C".into()), value: None },
        ];
        let bars = spend_bars(&slices);
        assert_eq!(bars[0].width, 100.0);
        assert_eq!(bars[0].share, 75.0);
        assert!((bars[1].width - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(bars[1].share, 25.0);
        assert_eq!(bars[2].width, 0.0);
        assert!(spend_bars(&[]).is_empty());
    }
}
