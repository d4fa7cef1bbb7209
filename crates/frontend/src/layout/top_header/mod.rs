//! TopHeader component - application top navigation bar.
//!
//! Contains the sidebar toggle, application title, signed-in user with role
//! label and the logout button.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::logging::log;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let (auth_state, set_auth_state) = use_auth();

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let logout = move |_| {
        log!("🚪 Logout");
        ctx.close_all();
        do_logout(set_auth_state);
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    let user_name = move || {
        auth_state.with(|s| {
            s.user_info
                .as_ref()
                .map(|u| u.display_name().to_string())
                .unwrap_or_else(|| "Guest".to_string())
        })
    };
    let role_label = move || {
        auth_state.with(|s| s.user_info.as_ref().map(|u| u.role.label()).unwrap_or(""))
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"Solar ERP Admin"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>{user_name}</span>
                    <span class="top-header__role">{role_label}</span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Logout">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
