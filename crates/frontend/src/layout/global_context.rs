use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use super::tabs::tab_label_for_key;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

/// Tab key carried by a `?active=...` query string.
pub fn active_from_query(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params
        .get("active")
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
}

/// Query string (with the leading `?`) mirroring the active tab.
pub fn active_query(key: &str) -> String {
    let query_string =
        serde_qs::to_string(&HashMap::from([("active".to_string(), key.to_string())]))
            .unwrap_or_default();
    format!("?{}", query_string)
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Reopen the tab named in the URL and keep `?active=` in sync afterwards.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        match active_from_query(&search) {
            Some(active_key) => {
                let title = tab_label_for_key(&active_key);
                self.open_tab(&active_key, &title);
            }
            None => self.open_tab(
                contracts::system::navigation::keys::DASHBOARD,
                &tab_label_for_key(contracts::system::navigation::keys::DASHBOARD),
            ),
        }

        let this = *self;
        Effect::new(move |_| {
            if let Some(active_key) = this.active.get() {
                let new_url = active_query(&active_key);

                let current_search = window()
                    .and_then(|w| w.location().search().ok())
                    .unwrap_or_default();

                // Only update URL if it actually changed
                if current_search != new_url {
                    if let Some(w) = window() {
                        if let Ok(history) = w.history() {
                            let _ = history.replace_state_with_url(
                                &wasm_bindgen::JsValue::NULL,
                                "",
                                Some(&new_url),
                            );
                        }
                    }
                }
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        leptos::logging::log!("🔷 open_tab: key='{}', title='{}'", key, title);
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            let tab = Tab {
                key: key.to_string(),
                title: title.to_string(),
            };
            self.opened.update(|tabs| {
                tabs.push(tab);
                leptos::logging::log!("✅ Tab added. Total tabs: {}", tabs.len());
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        leptos::logging::log!("🔴 close_tab: key='{}'", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    /// Drop every tab, used on logout
    pub fn close_all(&self) {
        self.opened.set(vec![]);
        self.active.set(None);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_from_query() {
        assert_eq!(
            active_from_query("?active=a006_offer"),
            Some("a006_offer".to_string())
        );
        assert_eq!(
            active_from_query("foo=1&active=dashboard"),
            Some("dashboard".to_string())
        );
        assert_eq!(active_from_query("?active="), None);
        assert_eq!(active_from_query(""), None);
    }

    #[test]
    fn test_active_query_round_trips() {
        let query = active_query("a008_amc_price");
        assert_eq!(query, "?active=a008_amc_price");
        assert_eq!(active_from_query(&query), Some("a008_amc_price".to_string()));
    }
}
