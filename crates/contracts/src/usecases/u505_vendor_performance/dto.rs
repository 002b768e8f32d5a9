use serde::{Deserialize, Serialize};

use crate::shared::data_table::TableRow;

pub const RANKING_PATH: &str = "/api/vendors/performance/ranking";
pub const GENERATE_MOCK_PATH: &str = "/api/vendors/performance/generate-mock";

/// Latest-month scorecard of one vendor.
///
/// `score` is the backend's composite of quality (60%) and on-time
/// reliability (40%).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VendorScore {
    /// 1-based position after [`rank_vendors`]; not sent by the backend.
    #[serde(skip_deserializing)]
    pub rank: usize,
    pub vendor_id: String,
    pub vendor_name: String,
    pub score: f64,
    /// Pass rate in percent.
    pub quality: Option<f64>,
    /// Share of late deliveries, 0..=1.
    pub delay_rate: Option<f64>,
    /// Average actual lead time in days.
    pub lead_time: Option<f64>,
    pub total_orders: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    High,
    Medium,
    Low,
}

impl ScoreTier {
    pub fn of(score: f64) -> Self {
        if score >= 90.0 {
            ScoreTier::High
        } else if score >= 70.0 {
            ScoreTier::Medium
        } else {
            ScoreTier::Low
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ScoreTier::High => "badge--success",
            ScoreTier::Medium => "badge--primary",
            ScoreTier::Low => "badge--warning",
        }
    }
}

impl VendorScore {
    pub fn tier(&self) -> ScoreTier {
        ScoreTier::of(self.score)
    }

    pub fn delay_percent(&self) -> Option<f64> {
        self.delay_rate.map(|r| r * 100.0)
    }
}

impl TableRow for VendorScore {
    fn row_key(&self) -> String {
        self.vendor_id.clone()
    }
}

/// Sorts by score, best first, and numbers the positions.
pub fn rank_vendors(mut vendors: Vec<VendorScore>) -> Vec<VendorScore> {
    vendors.sort_by(|a, b| b.score.total_cmp(&a.score));
    for (i, vendor) in vendors.iter_mut().enumerate() {
        vendor.rank = i + 1;
    }
    vendors
}

/// Header cards of the performance page. Averages only count vendors that
/// report the metric; `None` means no vendor does.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerformanceSummary {
    pub top_score: Option<f64>,
    pub avg_lead_time: Option<f64>,
    pub avg_quality: Option<f64>,
    pub avg_delay_percent: Option<f64>,
}

fn average(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (count > 0).then(|| sum / count as f64)
}

impl PerformanceSummary {
    pub fn from_ranking(ranking: &[VendorScore]) -> Self {
        Self {
            top_score: ranking.iter().map(|v| v.score).reduce(f64::max),
            avg_lead_time: average(ranking.iter().filter_map(|v| v.lead_time)),
            avg_quality: average(ranking.iter().filter_map(|v| v.quality)),
            avg_delay_percent: average(ranking.iter().filter_map(VendorScore::delay_percent)),
        }
    }
}

/// Body of `POST /generate-mock`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MockResult {
    pub status: Option<String>,
    pub records_generated: Option<u64>,
}

impl MockResult {
    pub fn summary(&self) -> String {
        match self.records_generated {
            Some(n) => format!("Data Generated! {n} performance records."),
            None => "Data Generated!".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vendor(id: &str, score: f64, quality: Option<f64>, delay: Option<f64>, lead: Option<f64>) -> VendorScore {
        VendorScore {
            vendor_id: id.into(),
            vendor_name: format!("Vendor {id}"),
            score,
            quality,
            delay_rate: delay,
            lead_time: lead,
            ..Default::default()
        }
    }

    #[test]
    fn test_rank_vendors_orders_by_score() {
        let ranked = rank_vendors(vec![
            vendor("V1", 71.5, None, None, None),
            vendor("V2", 93.0, None, None, None),
            vendor("V3", 40.0, None, None, None),
        ]);
        let order: Vec<_> = ranked.iter().map(|v| (v.rank, v.vendor_id.as_str())).collect();
        assert_eq!(order, vec![(1, "V2"), (2, "V1"), (3, "V3")]);
        assert_eq!(ranked[0].tier(), ScoreTier::High);
        assert_eq!(ranked[1].tier(), ScoreTier::Medium);
        assert_eq!(ranked[2].tier().css_class(), "badge--warning");
    }

    #[test]
    fn test_summary_skips_missing_metrics() {
        let ranking = vec![
            vendor("V1", 90.0, Some(95.0), Some(0.25), Some(10.0)),
            vendor("V2", 80.0, Some(85.0), None, Some(14.0)),
        ];
        let summary = PerformanceSummary::from_ranking(&ranking);
        assert_eq!(summary.top_score, Some(90.0));
        assert_eq!(summary.avg_lead_time, Some(12.0));
        assert_eq!(summary.avg_quality, Some(90.0));
        assert_eq!(summary.avg_delay_percent, Some(25.0));

        assert_eq!(PerformanceSummary::from_ranking(&[]), PerformanceSummary::default());
    }

    #[test]
    fn test_ranking_body_has_no_rank() {
        let body = r#"[{"vendor_id":"V1","vendor_name":"Acme","score":88.4,"quality":92.0,
            "delay_rate":0.05,"lead_time":7.5,"total_orders":30,"rank":99}]"#;
        let ranked = rank_vendors(serde_json::from_str(body).unwrap());
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[0].field("vendor_name").as_deref(), Some("Acme"));
    }
}
