//! API utilities for frontend-backend communication
//!
//! Every request goes through `request_text`: base URL from config, bearer
//! token from localStorage, abort after `api.timeout_ms`, then the reply is
//! mapped to `ApiError` or decoded from either envelope shape.

use contracts::shared::api_response::{ApiErrorBody, ApiResponse};
use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::shared::config::config;
use crate::system::auth::storage;

/// Failure of an API call. Display text is what the error toast shows.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Session expired, please sign in again")]
    Unauthorized,
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("Unexpected response: {0}")]
    Decode(String),
    #[error("{0}")]
    Server(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

/// Get the base URL for API requests (no trailing slash)
pub fn api_base() -> String {
    config().api.base_url.clone()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/installer/installers");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[derive(Debug, Clone, Copy)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }

    fn builder(&self, url: &str) -> RequestBuilder {
        match self {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Delete => Request::delete(url),
        }
    }
}

async fn request_text(method: Method, path: &str, body: Option<String>) -> Result<String, ApiError> {
    let url = api_url(path);
    log::debug!("➡️ {} {}", method.as_str(), url);

    let mut builder = method.builder(&url).header("Accept", "application/json");
    if let Some(token) = storage::get_token() {
        builder = builder.header("Authorization", &format!("Bearer {}", token));
    }

    let controller = web_sys::AbortController::new().ok();
    if let Some(controller) = &controller {
        builder = builder.abort_signal(Some(&controller.signal()));
    }
    // Dropping the timeout cancels it, so it lives until the reply arrives.
    let _timeout = controller.map(|controller| {
        Timeout::new(config().api.timeout_ms, move || controller.abort())
    });

    let sent = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(json)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await,
        None => builder.send().await,
    };
    let response = sent.map_err(|e| {
        log::warn!("⚠️ {} {} failed: {}", method.as_str(), url, e);
        ApiError::Network(e.to_string())
    })?;

    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    log::debug!("⬅️ {} {} -> {}", method.as_str(), url, status);

    if status == 401 {
        storage::clear_tokens();
        return Err(ApiError::Unauthorized);
    }
    if !(200..300).contains(&status) {
        return Err(error_from_status(status, &text));
    }
    Ok(text)
}

/// Map a non-2xx reply to an error, preferring the server's own message.
pub fn error_from_status(status: u16, body: &str) -> ApiError {
    if status == 401 {
        return ApiError::Unauthorized;
    }
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| match status {
            403 => "Access denied".to_string(),
            404 => "Not found".to_string(),
            500..=599 => "Server error".to_string(),
            _ => "Request was rejected".to_string(),
        });
    ApiError::Http { status, message }
}

/// Decode a 2xx body given bare or wrapped in `{ success, data, message }`.
pub fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    let text = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str::<ApiResponse<T>>(text)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .into_result()
        .map_err(ApiError::Server)
}

/// Replies without a payload only fail through an explicit `"success": false`.
pub fn check_ack(text: &str) -> Result<(), ApiError> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(text) else {
        return Ok(());
    };
    if value.get("success") == Some(&serde_json::Value::Bool(false)) {
        let message = value
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or("Request was not successful");
        return Err(ApiError::Server(message.to_string()));
    }
    Ok(())
}

fn to_body<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let text = request_text(Method::Get, path, None).await?;
    decode_body(&text)
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let text = request_text(Method::Post, path, Some(to_body(body)?)).await?;
    decode_body(&text)
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let text = request_text(Method::Put, path, Some(to_body(body)?)).await?;
    decode_body(&text)
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let text = request_text(Method::Delete, path, None).await?;
    check_ack(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_from_status_prefers_server_message() {
        assert_eq!(
            error_from_status(409, r#"{"success":false,"message":"Agency already exists"}"#),
            ApiError::Http {
                status: 409,
                message: "Agency already exists".to_string()
            }
        );
        assert_eq!(
            error_from_status(500, "<html>oops</html>"),
            ApiError::Http {
                status: 500,
                message: "Server error".to_string()
            }
        );
        assert_eq!(error_from_status(401, ""), ApiError::Unauthorized);
        assert_eq!(
            error_from_status(400, r#"{"error":"Name is required"}"#).to_string(),
            "Request failed (400): Name is required"
        );
    }

    #[test]
    fn test_decode_body_shapes() {
        let wrapped: Vec<String> = decode_body(r#"{"success":true,"data":["a"]}"#).unwrap();
        assert_eq!(wrapped, vec!["a"]);
        let bare: Vec<String> = decode_body(r#"["b"]"#).unwrap();
        assert_eq!(bare, vec!["b"]);
        let empty: Option<u32> = decode_body("").unwrap();
        assert_eq!(empty, None);
        assert_eq!(
            decode_body::<Option<u32>>(r#"{"success":false,"data":null,"message":"Denied"}"#),
            Err(ApiError::Server("Denied".to_string()))
        );
        assert_eq!(
            decode_body::<serde_json::Value>(r#"{"success":false,"message":"Offer title already exists"}"#),
            Err(ApiError::Server("Offer title already exists".to_string()))
        );
        assert!(matches!(
            decode_body::<Vec<u32>>(r#"{"foo":1}"#),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn test_check_ack() {
        assert!(check_ack("").is_ok());
        assert!(check_ack(r#"{"success":true,"message":"Deleted"}"#).is_ok());
        assert!(check_ack(r#"{"message":"Deleted"}"#).is_ok());
        assert_eq!(
            check_ack(r#"{"success":false,"message":"In use by 3 installers"}"#),
            Err(ApiError::Server("In use by 3 installers".to_string()))
        );
    }
}
