use leptos::logging::log;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use crate::layout::tabs::tab_label_for_key;

const ACTIVE_PARAM: &str = "active";
/// Opened when the address bar names no page.
const HOME_TAB: &str = "d400_home";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

/// Adds `key` unless it is already open. Returns whether a tab was added.
fn push_tab(tabs: &mut Vec<Tab>, key: &str, title: &str) -> bool {
    if tabs.iter().any(|t| t.key == key) {
        return false;
    }
    tabs.push(Tab {
        key: key.to_string(),
        title: title.to_string(),
    });
    true
}

/// Removes `key`; when it was the active tab the last remaining one takes over.
fn remove_tab(tabs: &mut Vec<Tab>, active: Option<&str>, key: &str) -> Option<String> {
    tabs.retain(|t| t.key != key);
    match active {
        Some(a) if a == key => tabs.last().map(|t| t.key.clone()),
        other => other.map(str::to_string),
    }
}

/// Tab key named by `?active=`, if it is a known page.
fn active_from_query(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params
        .get(ACTIVE_PARAM)
        .filter(|key| tab_label_for_key(key) != key.as_str())
        .cloned()
}

/// Open tabs, the active tab and sidebar visibility.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Reopens the page named in the address bar and mirrors the active tab
    /// there afterwards, so a reload lands on the same page.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let key = active_from_query(&search).unwrap_or_else(|| HOME_TAB.to_string());
        self.open_tab(&key, tab_label_for_key(&key));

        let this = *self;
        Effect::new(move |_| {
            let Some(key) = this.active.get() else {
                return;
            };
            let Ok(query) = serde_qs::to_string(&HashMap::from([(ACTIVE_PARAM, key)])) else {
                return;
            };
            let url = format!("?{query}");
            let Some(w) = window() else {
                return;
            };
            if w.location().search().ok().as_deref() == Some(url.as_str()) {
                return;
            }
            if let Ok(history) = w.history() {
                let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url));
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        let added = self.opened.try_update(|tabs| push_tab(tabs, key, title));
        if added == Some(true) {
            log!("🔷 tab opened: {key}");
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        let active = self.active.get_untracked();
        let next = self
            .opened
            .try_update(|tabs| remove_tab(tabs, active.as_deref(), key))
            .flatten();
        log!("🔴 tab closed: {key}, active now {next:?}");
        self.active.set(next);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(tabs: &[Tab]) -> Vec<&str> {
        tabs.iter().map(|t| t.key.as_str()).collect()
    }

    #[test]
    fn test_push_tab_once() {
        let mut tabs = Vec::new();
        assert!(push_tab(&mut tabs, "a001_product", "Products"));
        assert!(!push_tab(&mut tabs, "a001_product", "Products"));
        assert!(push_tab(&mut tabs, "p901_sales", "Sales History"));
        assert_eq!(keys(&tabs), vec!["a001_product", "p901_sales"]);
    }

    #[test]
    fn test_remove_active_tab_falls_back_to_last() {
        let mut tabs = Vec::new();
        for key in ["a", "b", "c"] {
            push_tab(&mut tabs, key, key);
        }
        assert_eq!(remove_tab(&mut tabs, Some("b"), "b"), Some("c".to_string()));
        assert_eq!(remove_tab(&mut tabs, Some("c"), "a"), Some("c".to_string()));
        assert_eq!(remove_tab(&mut tabs, Some("c"), "c"), None);
        assert!(tabs.is_empty());
    }

    #[test]
    fn test_active_from_query() {
        assert_eq!(
            active_from_query("?active=u503_rolling_plan"),
            Some("u503_rolling_plan".to_string())
        );
        assert_eq!(active_from_query("?active=legacy_page"), None);
        assert_eq!(active_from_query(""), None);
        assert_eq!(active_from_query("?active=d400_home").as_deref(), Some(HOME_TAB));
    }
}
