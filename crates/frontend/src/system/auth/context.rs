use contracts::system::auth::UserInfo;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};
use crate::shared::api_utils::ApiError;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
    /// `/auth/me` is in flight
    pub loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    pub fn is_signed_in(&self) -> bool {
        self.access_token.is_some() && self.user_info.is_some()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let initial = match storage::get_token() {
        Some(token) => AuthState {
            access_token: Some(token),
            user_info: storage::get_cached_user_json().and_then(|json| api::parse_cached_user(&json)),
            loading: true,
            error: None,
        },
        None => AuthState::default(),
    };
    let has_token = initial.access_token.is_some();
    let (auth_state, set_auth_state) = signal(initial);

    // Restore the session: validate the stored token by fetching the current user
    if has_token {
        spawn_local(async move {
            match api::get_current_user().await {
                Ok(user_info) => {
                    log!("🔐 Session restored for {} ({})", user_info.display_name(), user_info.role.as_str());
                    if let Ok(json) = serde_json::to_string(&user_info) {
                        storage::save_cached_user_json(&json);
                    }
                    set_auth_state.update(|state| {
                        state.user_info = Some(user_info);
                        state.loading = false;
                        state.error = None;
                    });
                }
                Err(ApiError::Unauthorized) => {
                    log!("🔐 Stored token rejected, signing out");
                    set_auth_state.set(AuthState::default());
                }
                Err(e) => {
                    log::warn!("Failed to load current user: {}", e);
                    // A cached user keeps the console usable while the API is unreachable
                    set_auth_state.update(|state| {
                        state.loading = false;
                        state.error = Some(e.to_string());
                    });
                }
            }
        });
    }

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Reactive current user (`None` until `/auth/me` answers)
pub fn use_current_user() -> Signal<Option<UserInfo>> {
    let (auth_state, _) = use_auth();
    Signal::derive(move || auth_state.with(|s| s.user_info.clone()))
}

/// Helper: Perform logout
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_tokens();
    set_auth_state.set(AuthState::default());
}
