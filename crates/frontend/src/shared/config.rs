//! Runtime configuration injected by the host page.
//!
//! `index.html` may define `window.__APP_CONFIG__ = { api_base_url: "..." }`
//! before the wasm bundle loads. Missing keys take their defaults.

use contracts::system::sync::RefetchDelay;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

const CONFIG_GLOBAL: &str = "__APP_CONFIG__";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub request_timeout_ms: u32,
    pub sync_refetch_delay_ms: u32,
    pub partner_sync_refetch_delay_ms: u32,
    pub search_debounce_ms: u32,
    pub client_page_size: usize,
    pub server_page_size: usize,
    pub default_currency: String,
    pub erp_sync_enabled: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8000".to_string(),
            request_timeout_ms: 10_000,
            sync_refetch_delay_ms: 2_000,
            partner_sync_refetch_delay_ms: 3_000,
            search_debounce_ms: 500,
            client_page_size: 10,
            server_page_size: 20,
            default_currency: "VND".to_string(),
            erp_sync_enabled: true,
        }
    }
}

impl AppConfig {
    /// Reads `window.__APP_CONFIG__`; falls back to defaults when it is
    /// absent or malformed.
    pub fn load() -> Self {
        let value = web_sys::window()
            .and_then(|w| js_sys::Reflect::get(&w, &JsValue::from_str(CONFIG_GLOBAL)).ok())
            .filter(|v| !v.is_undefined() && !v.is_null());

        let Some(value) = value else {
            log::info!("{CONFIG_GLOBAL} not set, using default configuration");
            return Self::default();
        };

        match serde_wasm_bindgen::from_value::<AppConfig>(value) {
            Ok(config) => config.normalized(),
            Err(e) => {
                log::warn!("Malformed {CONFIG_GLOBAL}, using defaults: {e}");
                Self::default()
            }
        }
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<AppConfig>(text).map(Self::normalized)
    }

    fn normalized(mut self) -> Self {
        let trimmed = self.api_base_url.trim().trim_end_matches('/').to_string();
        self.api_base_url = if trimmed.is_empty() {
            Self::default().api_base_url
        } else {
            trimmed
        };
        self.client_page_size = self.client_page_size.max(1);
        self.server_page_size = self.server_page_size.max(1);
        self
    }

    pub fn refetch_delay_ms(&self, delay: RefetchDelay) -> u32 {
        match delay {
            RefetchDelay::Standard => self.sync_refetch_delay_ms,
            RefetchDelay::Partner => self.partner_sync_refetch_delay_ms,
        }
    }
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig not found in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.api_base_url, "http://127.0.0.1:8000");
        assert_eq!(cfg.request_timeout_ms, 10_000);
        assert_eq!(cfg.client_page_size, 10);
        assert_eq!(cfg.server_page_size, 20);
        assert_eq!(cfg.refetch_delay_ms(RefetchDelay::Partner), 3_000);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let cfg = AppConfig::from_json(
            r#"{"api_base_url": "https://planner.example.com/", "search_debounce_ms": 250, "unknown": 1}"#,
        )
        .unwrap();
        assert_eq!(cfg.api_base_url, "https://planner.example.com");
        assert_eq!(cfg.search_debounce_ms, 250);
        assert_eq!(cfg.sync_refetch_delay_ms, 2_000);
        assert_eq!(cfg.default_currency, "VND");
    }

    #[test]
    fn test_blank_base_url_and_zero_page_size() {
        let cfg = AppConfig::from_json(r#"{"api_base_url": " ", "client_page_size": 0}"#).unwrap();
        assert_eq!(cfg.api_base_url, "http://127.0.0.1:8000");
        assert_eq!(cfg.client_page_size, 1);
    }
}
