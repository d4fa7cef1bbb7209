use serde::{Deserialize, Serialize};

/// Reference to another record as the API returns it.
///
/// Foreign keys arrive either as a bare id string or, when the server
/// populates the relation, as an object carrying at least `_id` and
/// usually a display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityRef {
    Id(String),
    Populated {
        #[serde(rename = "_id", alias = "id")]
        id: String,
        #[serde(default, alias = "title", skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
}

impl EntityRef {
    pub fn id(&self) -> &str {
        match self {
            EntityRef::Id(id) => id,
            EntityRef::Populated { id, .. } => id,
        }
    }

    /// Display name if populated, otherwise the raw id.
    pub fn label(&self) -> &str {
        match self {
            EntityRef::Id(id) => id,
            EntityRef::Populated { id, name } => name.as_deref().unwrap_or(id),
        }
    }
}

/// Id of an optional reference, empty string when absent (form binding).
pub fn ref_id(value: &Option<EntityRef>) -> String {
    value.as_ref().map(|r| r.id().to_string()).unwrap_or_default()
}

/// Label of an optional reference, `-` when absent (table cells).
pub fn ref_label(value: &Option<EntityRef>) -> String {
    value
        .as_ref()
        .map(|r| r.label().to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_id() {
        let r: EntityRef = serde_json::from_str(r#""64f0c0ffee""#).unwrap();
        assert_eq!(r.id(), "64f0c0ffee");
        assert_eq!(r.label(), "64f0c0ffee");
    }

    #[test]
    fn test_populated_reference() {
        let r: EntityRef =
            serde_json::from_str(r#"{"_id":"s1","name":"Gujarat","code":"GJ"}"#).unwrap();
        assert_eq!(r.id(), "s1");
        assert_eq!(r.label(), "Gujarat");
    }

    #[test]
    fn test_populated_without_name_falls_back_to_id() {
        let r: EntityRef = serde_json::from_str(r#"{"id":"s2"}"#).unwrap();
        assert_eq!(r.label(), "s2");
        assert_eq!(ref_label(&None), "-");
        assert_eq!(ref_id(&Some(r)), "s2");
    }
}
