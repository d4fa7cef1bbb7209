use contracts::system::auth::{CurrentUserResponse, UserInfo};

use crate::shared::api_utils::{decode_body, get_json, ApiError};

/// Get current user info for the stored token
pub async fn get_current_user() -> Result<UserInfo, ApiError> {
    let payload: serde_json::Value = get_json("/auth/me").await?;
    user_from_payload(payload)
}

/// `/auth/me` answers `{ user }`, `{ data: { user } }` or the bare user.
pub fn user_from_payload(payload: serde_json::Value) -> Result<UserInfo, ApiError> {
    let result = if payload.get("user").is_some() {
        serde_json::from_value::<CurrentUserResponse>(payload).map(|r| r.user)
    } else {
        serde_json::from_value::<UserInfo>(payload)
    };
    result.map_err(|e| ApiError::Decode(e.to_string()))
}

/// User cached by the sign-in app, used until `/auth/me` answers.
pub fn parse_cached_user(json: &str) -> Option<UserInfo> {
    let payload: serde_json::Value = decode_body(json).ok()?;
    user_from_payload(payload).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::Role;

    #[test]
    fn test_user_payload_shapes() {
        let nested = r#"{"success":true,"data":{"user":{"_id":"u1","name":"Asha","role":"franchisee"}}}"#;
        let user = parse_cached_user(nested).unwrap();
        assert_eq!(user.role, Role::Franchisee);

        let bare = r#"{"_id":"u2","name":"Admin","role":"admin"}"#;
        assert!(parse_cached_user(bare).unwrap().is_admin());

        assert!(parse_cached_user(r#"{"user":{"_id":"u3","role":"root"}}"#).is_none());
        assert!(parse_cached_user("not json").is_none());
    }
}
