//! Pieces shared by all master-data entities.

use crate::shared::api::ApiError;

/// Whether a form submission creates a record or updates an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveMode {
    Create,
    Update(String),
}

impl SaveMode {
    /// `Update` when the form already carries a non-blank identifying key.
    pub fn from_key(key: Option<&str>) -> Self {
        match key.map(str::trim).filter(|k| !k.is_empty()) {
            Some(k) => SaveMode::Update(k.to_string()),
            None => SaveMode::Create,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, SaveMode::Update(_))
    }
}

/// Transient add/edit form state of a master-data dialog.
pub trait EntityForm {
    /// Wire body sent on create/update.
    type Payload: serde::Serialize;

    /// Key of the record being edited, `None` for a new record.
    fn existing_key(&self) -> Option<&str>;

    /// Checks the form and converts it into the request body.
    fn to_payload(&self) -> Result<Self::Payload, ApiError>;

    fn save_mode(&self) -> SaveMode {
        SaveMode::from_key(self.existing_key())
    }
}

pub(crate) fn required(value: &str, label: &str) -> Result<String, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ApiError::Validation(format!("{label} is required")))
    } else {
        Ok(trimmed.to_string())
    }
}

pub(crate) fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Parses a numeric input; blank means zero, negatives are rejected.
pub(crate) fn non_negative(value: &str, label: &str) -> Result<f64, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    match trimmed.replace(',', ".").parse::<f64>() {
        Ok(v) if v >= 0.0 && v.is_finite() => Ok(v),
        _ => Err(ApiError::Validation(format!(
            "{label} must be a non-negative number"
        ))),
    }
}

/// `"Synced"` once the record has been touched by an ERP sync.
pub(crate) fn sync_status(updated_at: Option<&str>) -> String {
    match updated_at {
        Some(ts) if !ts.is_empty() => "Synced".to_string(),
        _ => "Pending".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_mode_from_key() {
        assert_eq!(SaveMode::from_key(None), SaveMode::Create);
        assert_eq!(SaveMode::from_key(Some("  ")), SaveMode::Create);
        assert_eq!(
            SaveMode::from_key(Some("A001")),
            SaveMode::Update("A001".to_string())
        );
    }

    #[test]
    fn test_non_negative() {
        assert_eq!(non_negative("", "Min stock").unwrap(), 0.0);
        assert_eq!(non_negative("12,5", "Min stock").unwrap(), 12.5);
        assert!(non_negative("-1", "Min stock").is_err());
        assert!(non_negative("abc", "Min stock").is_err());
    }
}
