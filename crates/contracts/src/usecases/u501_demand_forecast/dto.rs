use serde::{Deserialize, Serialize};

/// Forecasting model offered by `POST /api/planning/forecast`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForecastModel {
    #[default]
    #[serde(rename = "SMA")]
    Sma,
    #[serde(rename = "EMA")]
    Ema,
}

impl ForecastModel {
    pub const ALL: [ForecastModel; 2] = [ForecastModel::Sma, ForecastModel::Ema];

    pub fn code(&self) -> &'static str {
        match self {
            ForecastModel::Sma => "SMA",
            ForecastModel::Ema => "EMA",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ForecastModel::Sma => "Simple Moving Average (SMA)",
            ForecastModel::Ema => "Exponential Moving Average (EMA)",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "EMA" => ForecastModel::Ema,
            _ => ForecastModel::Sma,
        }
    }
}

pub const FORECAST_PERIODS: u32 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRequest {
    pub sku_id: String,
    pub model: ForecastModel,
    pub periods: u32,
}

impl ForecastRequest {
    pub fn new(sku_id: &str, model: ForecastModel) -> Self {
        Self {
            sku_id: sku_id.to_string(),
            model,
            periods: FORECAST_PERIODS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    #[serde(default)]
    pub avg_predicted_qty: f64,
}

impl ForecastResult {
    pub fn summary(&self) -> String {
        format!("Success! Avg predicted: {}", self.avg_predicted_qty)
    }
}

/// One point of `GET /api/planning/forecast/{sku}`: history has `actual`,
/// the horizon has `forecast`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: String,
    #[serde(default)]
    pub actual: Option<f64>,
    #[serde(default)]
    pub forecast: Option<f64>,
}

/// Largest value of the series, used to scale the bars.
pub fn series_peak(points: &[ForecastPoint]) -> f64 {
    points
        .iter()
        .flat_map(|p| [p.actual, p.forecast])
        .flatten()
        .fold(0.0, f64::max)
}

/// The most recent `count` points, oldest first.
pub fn latest(points: &[ForecastPoint], count: usize) -> &[ForecastPoint] {
    &points[points.len().saturating_sub(count)..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body() {
        let body = serde_json::to_value(ForecastRequest::new("A001", ForecastModel::Ema)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"sku_id": "A001", "model": "EMA", "periods": 30})
        );
    }

    #[test]
    fn test_series_helpers() {
        let points: Vec<ForecastPoint> = serde_json::from_str(
            r#"[{"date":"2025-01-01","actual":4},{"date":"2025-01-02","forecast":9.5},{"date":"2025-01-03","actual":null}]"#,
        )
        .unwrap();
        assert_eq!(series_peak(&points), 9.5);
        assert_eq!(latest(&points, 2).len(), 2);
        assert_eq!(latest(&points, 2)[0].date, "2025-01-02");
        assert_eq!(latest(&points, 10).len(), 3);
        assert_eq!(ForecastResult { avg_predicted_qty: 12.5 }.summary(), "Success! Avg predicted: 12.5");
    }
}
