//! REST calls shared by every settings aggregate.
//!
//! Paths come from `AggregateRoot::resource_path`: list = `GET {path}?filter`,
//! create = `POST {path}`, update = `PUT {path}/{id}`, delete = `DELETE {path}/{id}`.

use contracts::domain::common::{AggregateRoot, FormDto, RecordStatus};
use contracts::shared::list_filter::ListFilter;
use serde_json::Value;

use super::api_utils::{delete as delete_path, get_json, post_json, put_json, ApiError};

/// Collection path with the filter appended as a query string.
pub fn list_path<T: AggregateRoot>(filter: &ListFilter) -> String {
    if filter.is_empty() {
        return T::resource_path().to_string();
    }
    match serde_qs::to_string(filter) {
        Ok(query) if !query.is_empty() => format!("{}?{}", T::resource_path(), query),
        _ => T::resource_path().to_string(),
    }
}

/// Path of one record with the id percent-encoded.
pub fn record_path<T: AggregateRoot>(id: &str) -> String {
    T::item_path(&urlencoding::encode(id))
}

/// Rows of a list reply: a bare array or an object holding it under
/// `items`, `records` or `data`.
pub fn list_from_reply<T: AggregateRoot>(value: Value) -> Result<Vec<T>, ApiError> {
    let rows = match value {
        Value::Array(_) => value,
        Value::Null => Value::Array(vec![]),
        Value::Object(mut map) => ["items", "records", "data"]
            .iter()
            .find_map(|key| map.remove(*key).filter(Value::is_array))
            .ok_or_else(|| ApiError::Decode(format!("no {} list in reply", T::list_name())))?,
        other => {
            return Err(ApiError::Decode(format!(
                "expected a list of {}, got {}",
                T::list_name(),
                other
            )))
        }
    };
    serde_json::from_value(rows).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Saved record of a create/update reply, when the server sends one back.
///
/// Replies without a record (`{ "message": "Updated" }`) give `None` and the
/// caller refetches the list instead.
pub fn record_from_reply<T: AggregateRoot>(value: Value) -> Option<T> {
    if let Ok(record) = serde_json::from_value::<T>(value.clone()) {
        return Some(record);
    }
    let Value::Object(mut map) = value else {
        return None;
    };
    [T::collection_name(), "item", "record"]
        .iter()
        .find_map(|key| map.remove(*key))
        .and_then(|inner| serde_json::from_value(inner).ok())
}

pub async fn fetch_list<T: AggregateRoot>(filter: &ListFilter) -> Result<Vec<T>, ApiError> {
    let reply: Value = get_json(&list_path::<T>(filter)).await?;
    list_from_reply(reply)
}

/// Create (no id) or update (with id) from a validated form.
pub async fn save<T: AggregateRoot>(dto: &T::Dto) -> Result<Option<T>, ApiError> {
    let reply: Value = match dto.id() {
        Some(id) => put_json(&record_path::<T>(id), dto).await?,
        None => post_json(T::resource_path(), dto).await?,
    };
    Ok(record_from_reply(reply))
}

pub async fn delete<T: AggregateRoot>(id: &str) -> Result<(), ApiError> {
    delete_path(&record_path::<T>(id)).await
}

/// Update a row with only its status changed.
pub async fn set_status<T: AggregateRoot>(
    record: &T,
    status: RecordStatus,
) -> Result<Option<T>, ApiError> {
    let mut dto = record.to_dto();
    dto.set_status(status);
    save::<T>(&dto).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_installer::aggregate::Installer;
    use contracts::domain::a006_offer::aggregate::Offer;
    use serde_json::json;

    #[test]
    fn test_list_path_with_filter() {
        assert_eq!(list_path::<Installer>(&ListFilter::default()), "/installer/installers");

        let filter = ListFilter {
            state_id: Some("st1".into()),
            status: Some(RecordStatus::Active),
            ..Default::default()
        };
        assert_eq!(
            list_path::<Installer>(&filter),
            "/installer/installers?stateId=st1&status=active"
        );
    }

    #[test]
    fn test_record_path_encodes_id() {
        assert_eq!(record_path::<Offer>("a b/c"), "/sales-settings/offers/a%20b%2Fc");
    }

    #[test]
    fn test_list_reply_shapes() {
        let row = json!({"_id": "i1", "name": "Ravi", "mobile": "9876543210"});
        let bare: Vec<Installer> = list_from_reply(json!([row.clone()])).unwrap();
        assert_eq!(bare.len(), 1);

        let nested: Vec<Installer> = list_from_reply(json!({"items": [row], "total": 1})).unwrap();
        assert_eq!(nested[0].id, "i1");

        let empty: Vec<Installer> = list_from_reply(Value::Null).unwrap();
        assert!(empty.is_empty());

        assert!(list_from_reply::<Installer>(json!({"total": 0})).is_err());
    }

    #[test]
    fn test_record_reply_shapes() {
        let row = json!({"_id": "i1", "name": "Ravi"});
        assert!(record_from_reply::<Installer>(row.clone()).is_some());
        assert_eq!(
            record_from_reply::<Installer>(json!({"installer": row})).map(|i| i.id),
            Some("i1".to_string())
        );
        assert!(record_from_reply::<Installer>(json!({"message": "Updated"})).is_none());
    }
}
