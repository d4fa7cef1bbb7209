use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle timestamps stamped by the server.
///
/// Flattened into every record; both fields are optional because older
/// documents were stored without them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl EntityMetadata {
    /// Most recent known change, for "last modified" columns.
    pub fn last_modified(&self) -> Option<DateTime<Utc>> {
        self.updated_at.or(self.created_at)
    }
}
