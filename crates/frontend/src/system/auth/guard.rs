use contracts::system::navigation::can_open;
use leptos::prelude::*;
use thaw::*;

use super::context::use_auth;

/// Component that requires a signed-in session
/// Shows fallback if the token is missing
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.access_token.is_some())
            fallback=|| view! {
                <div class="auth-notice">
                    <MessageBar intent=MessageBarIntent::Warning>
                        "Sign in required. Open the sign-in page and come back to this console."
                    </MessageBar>
                </div>
            }
        >
            {children()}
        </Show>
    }
}

/// Renders `children` only when the current user's menu contains `tab_key`.
///
/// Pages opened from a stale `?active=` link or after a grant was revoked
/// get an access notice instead of their content.
#[component]
pub fn RequireModule(#[prop(into)] tab_key: String, children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let key = StoredValue::new(tab_key);

    let allowed = move || {
        auth_state.with(|s| {
            s.user_info
                .as_ref()
                .map(|user| key.with_value(|k| can_open(user, k)))
                .unwrap_or(false)
        })
    };

    view! {
        <Show
            when=allowed
            fallback=|| view! {
                <div class="page">
                    <MessageBar intent=MessageBarIntent::Warning>
                        "Access denied. This module is not assigned to your department."
                    </MessageBar>
                </div>
            }
        >
            {children()}
        </Show>
    }
}
