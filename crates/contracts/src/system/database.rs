use serde::{Deserialize, Serialize};

use crate::domain::common::required;
use crate::shared::api::ApiError;

pub const HEALTH_PATH: &str = "/api/system/health";
pub const DB_CONFIG_PATH: &str = "/api/system/config/database";
pub const UNREACHABLE_ERROR: &str = "Failed to connect to backend API";

const HEALTHY: &str = "healthy";

/// Body of `GET /api/system/health`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthReport {
    pub status: String,
    pub timestamp: String,
    pub details: HealthDetails,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthDetails {
    pub database: DatabaseHealth,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseHealth {
    pub status: Option<String>,
    pub latency_ms: Option<f64>,
    pub name: Option<String>,
    /// Masked by the backend to its last four characters.
    pub server: Option<String>,
    pub error: Option<String>,
}

impl HealthReport {
    /// Report for a backend that did not answer at all.
    pub fn unreachable(timestamp: String) -> Self {
        Self {
            status: "unhealthy".to_string(),
            timestamp,
            details: HealthDetails {
                database: DatabaseHealth {
                    error: Some(UNREACHABLE_ERROR.to_string()),
                    ..Default::default()
                },
            },
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case(HEALTHY)
    }

    pub fn database(&self) -> &DatabaseHealth {
        &self.details.database
    }

    pub fn error_text(&self) -> &str {
        self.database().error.as_deref().unwrap_or("Unknown Error")
    }
}

/// Connection form. The backend writes it to its environment file and
/// reconnects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub db_server: String,
    pub db_name: String,
    pub username: String,
    pub password: String,
}

impl DatabaseConfig {
    /// Prefills the database name from a healthy report. The password is
    /// never reported back.
    pub fn prefill(&mut self, report: &HealthReport) {
        if let Some(name) = report.database().name.as_ref().filter(|_| report.is_healthy()) {
            self.db_name = name.clone();
        }
    }

    /// Trimmed body; server, database and user are mandatory.
    pub fn to_payload(&self) -> Result<Self, ApiError> {
        Ok(Self {
            db_server: required(&self.db_server, "Server Address")?,
            db_name: required(&self.db_name, "Database Name")?,
            username: required(&self.username, "Username")?,
            password: self.password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_report() {
        let healthy: HealthReport = serde_json::from_str(
            r#"{"status":"healthy","timestamp":"2025-03-01 09:00:00",
                "details":{"database":{"status":"connected","latency_ms":3.21,"name":"PlanningDB","server":"***0.12"}}}"#,
        )
        .unwrap();
        assert!(healthy.is_healthy());
        assert_eq!(healthy.database().latency_ms, Some(3.21));

        let down: HealthReport = serde_json::from_str(
            r#"{"status":"unhealthy","timestamp":"t","details":{"database":{"status":"disconnected","error":"login failed"}}}"#,
        )
        .unwrap();
        assert!(!down.is_healthy());
        assert_eq!(down.error_text(), "login failed");

        let unreachable = HealthReport::unreachable("now".into());
        assert!(!unreachable.is_healthy());
        assert_eq!(unreachable.error_text(), UNREACHABLE_ERROR);
    }

    #[test]
    fn test_prefill_only_from_healthy_report() {
        let mut form = DatabaseConfig::default();
        let mut report = HealthReport {
            status: "unhealthy".into(),
            ..Default::default()
        };
        report.details.database.name = Some("PlanningDB".into());
        form.prefill(&report);
        assert_eq!(form.db_name, "");

        report.status = "healthy".into();
        form.prefill(&report);
        assert_eq!(form.db_name, "PlanningDB");
    }

    #[test]
    fn test_config_payload_requires_connection_fields() {
        let form = DatabaseConfig {
            db_server: " localhost ".into(),
            db_name: "PlanningDB".into(),
            username: "".into(),
            password: "secret".into(),
        };
        assert_eq!(
            form.to_payload(),
            Err(ApiError::Validation("Username is required".into()))
        );

        let ok = DatabaseConfig {
            username: "sa".into(),
            ..form
        }
        .to_payload()
        .unwrap();
        assert_eq!(ok.db_server, "localhost");
        assert_eq!(ok.password, "secret");
    }
}
