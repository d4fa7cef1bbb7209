use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Response body as the ERP API sends it.
///
/// Most endpoints wrap their payload as `{ "success": true, "data": ... }`,
/// a few older ones return the payload bare. An object with
/// `"success": false` is a failure whether or not it carries `data`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ApiResponse<T> {
    Wrapped {
        data: T,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    Failed {
        message: Option<String>,
    },
    Bare(T),
}

fn message_of(value: &Value) -> Option<String> {
    value
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for ApiResponse<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;

        if value.get("success") == Some(&Value::Bool(false)) {
            return Ok(ApiResponse::Failed {
                message: message_of(&value),
            });
        }
        if let Some(data) = value.get("data") {
            if let Ok(data) = T::deserialize(data.clone()) {
                return Ok(ApiResponse::Wrapped {
                    data,
                    message: message_of(&value),
                });
            }
        }
        T::deserialize(value)
            .map(ApiResponse::Bare)
            .map_err(D::Error::custom)
    }
}

impl<T> ApiResponse<T> {
    /// Payload, or the server message when the envelope reports failure.
    pub fn into_result(self) -> Result<T, String> {
        match self {
            ApiResponse::Wrapped { data, .. } | ApiResponse::Bare(data) => Ok(data),
            ApiResponse::Failed { message } => {
                Err(message.unwrap_or_else(|| "Request was not successful".to_string()))
            }
        }
    }
}

/// Error body (`{ "success": false, "message": "..." }`) of non-2xx replies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub success: bool,
    #[serde(default, alias = "error")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_payload() {
        let r: ApiResponse<Vec<u32>> =
            serde_json::from_str(r#"{"success":true,"data":[1,2,3]}"#).unwrap();
        assert_eq!(r.into_result().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_bare_payload() {
        let r: ApiResponse<Vec<u32>> = serde_json::from_str("[4,5]").unwrap();
        assert_eq!(r.into_result().unwrap(), vec![4, 5]);
    }

    #[test]
    fn test_unsuccessful_envelope() {
        let r: ApiResponse<Option<u32>> =
            serde_json::from_str(r#"{"success":false,"data":null,"message":"Duplicate name"}"#)
                .unwrap();
        assert_eq!(r.into_result().unwrap_err(), "Duplicate name");
    }

    #[test]
    fn test_rejection_without_data_is_an_error() {
        let r: ApiResponse<Value> =
            serde_json::from_str(r#"{"success":false,"message":"Offer title already exists"}"#)
                .unwrap();
        assert_eq!(r.into_result().unwrap_err(), "Offer title already exists");

        let r: ApiResponse<Value> = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert_eq!(r.into_result().unwrap_err(), "Request was not successful");
    }

    #[test]
    fn test_record_without_envelope_is_bare() {
        let r: ApiResponse<Value> =
            serde_json::from_str(r#"{"_id":"o1","title":"Diwali"}"#).unwrap();
        assert_eq!(r.into_result().unwrap()["_id"], "o1");
    }

    #[test]
    fn test_error_body_alias() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"error":"Not found"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("Not found"));
    }
}
