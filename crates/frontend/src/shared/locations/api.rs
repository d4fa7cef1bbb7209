use contracts::domain::location::{FetchRequest, Location};
use serde_json::Value;

use crate::shared::api_utils::{get_json, ApiError};

/// Endpoint of a cascade fetch with its parent filter.
pub fn location_path(request: &FetchRequest) -> String {
    match request.query() {
        Some((param, value)) => format!(
            "{}?{}={}",
            request.level.endpoint(),
            param,
            urlencoding::encode(value)
        ),
        None => request.level.endpoint().to_string(),
    }
}

/// Options of a location reply: a bare array or the first array inside an object
/// (`{ "states": [...] }`).
pub fn locations_from_reply(value: Value) -> Result<Vec<Location>, ApiError> {
    let rows = match value {
        Value::Array(_) => value,
        Value::Null => Value::Array(vec![]),
        Value::Object(map) => map
            .into_iter()
            .map(|(_, v)| v)
            .find(Value::is_array)
            .ok_or_else(|| ApiError::Decode("no location list in reply".to_string()))?,
        other => return Err(ApiError::Decode(format!("unexpected location reply: {}", other))),
    };
    serde_json::from_value(rows).map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn fetch_locations(request: &FetchRequest) -> Result<Vec<Location>, ApiError> {
    let reply: Value = get_json(&location_path(request)).await?;
    locations_from_reply(reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::location::LocationLevel;
    use serde_json::json;

    #[test]
    fn test_location_path() {
        let districts = FetchRequest {
            level: LocationLevel::District,
            parent_level: Some(LocationLevel::State),
            parent_id: Some("st 1".to_string()),
            ticket: 3,
        };
        assert_eq!(location_path(&districts), "/locations/districts?stateId=st%201");

        let states = FetchRequest {
            level: LocationLevel::State,
            parent_level: Some(LocationLevel::Country),
            parent_id: None,
            ticket: 1,
        };
        assert_eq!(location_path(&states), "/locations/states");

        let state_clusters = FetchRequest {
            level: LocationLevel::Cluster,
            parent_level: Some(LocationLevel::State),
            parent_id: Some("s1".to_string()),
            ticket: 4,
        };
        assert_eq!(location_path(&state_clusters), "/locations/clusters?stateId=s1");
    }

    #[test]
    fn test_location_reply_shapes() {
        let bare = locations_from_reply(json!([{"_id": "s1", "name": "Gujarat"}])).unwrap();
        assert_eq!(bare[0].name, "Gujarat");

        let keyed =
            locations_from_reply(json!({"count": 1, "clusters": [{"_id": "c1", "name": "Surat"}]}))
                .unwrap();
        assert_eq!(keyed[0].id, "c1");

        assert!(locations_from_reply(json!({"count": 0})).is_err());
    }
}
