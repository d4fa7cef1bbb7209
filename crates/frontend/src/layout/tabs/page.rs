//! One open tab

use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::logging::log;
use leptos::prelude::*;

/// Mounts the page of `tab` once and hides it while another tab is active,
/// so list filters and open forms survive tab switches.
#[component]
pub fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let key = StoredValue::new(tab.key.clone());
    let is_active = Memo::new(move |_| {
        tabs_store
            .active
            .with(|active| key.with_value(|k| active.as_deref() == Some(k.as_str())))
    });

    log!("🔨 tab '{}' mounted", tab.key);
    on_cleanup(move || key.with_value(|k| log!("💥 tab '{}' closed", k)));

    let content = render_tab_content(&tab.key);

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active.get()
            data-tab-key=tab.key
        >
            {content}
        </div>
    }
}
