use web_sys::window;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save bearer token to localStorage
pub fn save_token(token: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

/// Get bearer token from localStorage
pub fn get_token() -> Option<String> {
    get_local_storage()?
        .get_item(TOKEN_KEY)
        .ok()?
        .filter(|t| !t.trim().is_empty())
}

/// Cached `/auth/me` payload, written by the sign-in app next to the token
pub fn get_cached_user_json() -> Option<String> {
    get_local_storage()?.get_item(USER_KEY).ok()?
}

pub fn save_cached_user_json(json: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(USER_KEY, json);
    }
}

/// Clear the token and the cached user
pub fn clear_tokens() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}
