//! Wire-level envelopes and the error taxonomy shared by every API call.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of a backend call or of a local validation step preceding it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never completed (connection refused, CORS, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status.
    #[error("HTTP {status}: {detail}")]
    Http { status: u16, detail: String },

    /// The body could not be decoded into the expected shape.
    #[error("unexpected response: {0}")]
    Parse(String),

    /// Rejected before sending.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// Builds an `Http` error from a status code and the raw response body.
    ///
    /// Falls back to the status code alone when the body carries no `detail`.
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorDetail>(body)
            .ok()
            .and_then(|d| d.message())
            .unwrap_or_else(|| format!("request failed with status {status}"));
        ApiError::Http { status, detail }
    }

    /// Text shown to the user in the blocking notification.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(msg) => format!("Network error: {msg}"),
            ApiError::Http { detail, .. } => detail.clone(),
            ApiError::Parse(msg) => format!("Unexpected server response: {msg}"),
            ApiError::Validation(msg) => msg.clone(),
        }
    }
}

/// Error body returned by the backend: `{detail}` and optionally `{errors}`.
///
/// `detail` is usually a string; validation failures send an array of
/// `{loc, msg}` objects instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
    #[serde(default)]
    pub errors: Option<Vec<String>>,
}

impl ErrorDetail {
    pub fn message(&self) -> Option<String> {
        let mut text = match self.detail.as_ref()? {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Array(items) => items
                .iter()
                .map(|item| {
                    item.get("msg")
                        .and_then(|m| m.as_str())
                        .map(str::to_string)
                        .unwrap_or_else(|| item.to_string())
                })
                .collect::<Vec<_>>()
                .join("; "),
            other => other.to_string(),
        };
        if let Some(errors) = self.errors.as_ref().filter(|e| !e.is_empty()) {
            text.push('\n');
            text.push_str(&errors.join("\n"));
        }
        Some(text)
    }
}

/// List endpoints answer either with a bare array or with `{data, total}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Plain(Vec<T>),
    Paged {
        data: Vec<T>,
        #[serde(default)]
        total: Option<usize>,
    },
}

impl<T> ListEnvelope<T> {
    /// Total row count on the server; a bare array counts itself.
    pub fn total(&self) -> usize {
        match self {
            ListEnvelope::Paged { data, total } => total.unwrap_or(data.len()),
            ListEnvelope::Plain(items) => items.len(),
        }
    }

    pub fn into_rows(self) -> Vec<T> {
        match self {
            ListEnvelope::Paged { data, .. } => data,
            ListEnvelope::Plain(items) => items,
        }
    }
}

/// `{status, data}` body whose payload is a single object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Success body of `POST /api/data/import/upload`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub imported_count: Option<u64>,
}

impl ImportResponse {
    pub fn summary(&self) -> String {
        match (&self.message, self.imported_count) {
            (Some(msg), _) => msg.clone(),
            (None, Some(count)) => format!("Imported {count} rows"),
            (None, None) => "Upload successful".to_string(),
        }
    }
}

/// Generic `{status, message}` acknowledgement from trigger endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_uses_detail_string() {
        let err = ApiError::from_response(400, r#"{"detail":"SKU already exists"}"#);
        assert_eq!(
            err,
            ApiError::Http {
                status: 400,
                detail: "SKU already exists".to_string()
            }
        );
        assert_eq!(err.user_message(), "SKU already exists");
    }

    #[test]
    fn test_http_error_flattens_validation_array() {
        let body = r#"{"detail":[{"loc":["body","sku_id"],"msg":"field required"},{"msg":"bad unit"}]}"#;
        let err = ApiError::from_response(422, body);
        assert_eq!(err.user_message(), "field required; bad unit");
    }

    #[test]
    fn test_http_error_appends_import_errors() {
        let body = r#"{"detail":"Import failed","errors":["row 2: bad date","row 5: unknown SKU"]}"#;
        let err = ApiError::from_response(400, body);
        assert_eq!(
            err.user_message(),
            "Import failed\nrow 2: bad date\nrow 5: unknown SKU"
        );
    }

    #[test]
    fn test_http_error_without_body() {
        let err = ApiError::from_response(502, "<html>Bad Gateway</html>");
        assert_eq!(err.user_message(), "request failed with status 502");
    }

    #[test]
    fn test_list_envelope_shapes() {
        let plain: ListEnvelope<u32> = serde_json::from_str("[1,2,3]").unwrap();
        assert_eq!(plain.total(), 3);

        let paged: ListEnvelope<u32> =
            serde_json::from_str(r#"{"data":[1,2],"total":40}"#).unwrap();
        assert_eq!(paged.total(), 40);
        assert_eq!(paged.into_rows(), vec![1, 2]);

        let no_total: ListEnvelope<u32> = serde_json::from_str(r#"{"data":[7]}"#).unwrap();
        assert_eq!(no_total.total(), 1);

        let with_status: ListEnvelope<u32> =
            serde_json::from_str(r#"{"status":"success","data":[4,5]}"#).unwrap();
        assert_eq!(with_status.into_rows(), vec![4, 5]);
    }

    #[test]
    fn test_import_summary() {
        let r: ImportResponse = serde_json::from_str(r#"{"imported_count": 12}"#).unwrap();
        assert_eq!(r.summary(), "Imported 12 rows");
        let r: ImportResponse = serde_json::from_str(r#"{"message":"Done"}"#).unwrap();
        assert_eq!(r.summary(), "Done");
    }
}
