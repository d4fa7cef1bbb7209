//! Application shell
//!
//! - `AppShell` gates the console on a stored session
//! - `MainLayout` is the signed-in layout (Shell + Sidebar + Tabs)

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::left::sidebar::Sidebar;
use crate::layout::tabs::TabPage;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::RequireAuth;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

/// Signed-in layout. Reopens the tab named in `?active=` on mount.
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| {
                            log!("📋 mounting tab '{}'", tab.key);
                            view! {
                                <TabPage tab=tab tabs_store=tabs_store />
                            }
                        }
                    />
                }.into_any()
            }
        />
    }
}

/// Auth gate.
///
/// A stored token whose user is still being fetched shows a spinner,
/// a missing token shows the sign-in notice, anything else the console.
#[component]
pub fn AppShell() -> impl IntoView {
    let (auth_state, _) = use_auth();

    let restoring = move || auth_state.with(|s| s.loading && s.user_info.is_none());

    view! {
        <RequireAuth>
            <Show
                when=move || !restoring()
                fallback=|| view! {
                    <div class="app-loading">
                        <Spinner label="Restoring session..." />
                    </div>
                }
            >
                <MainLayout />
            </Show>
        </RequireAuth>
    }
}
