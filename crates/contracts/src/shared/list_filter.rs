use serde::{Deserialize, Serialize};

use crate::domain::common::RecordStatus;
use crate::domain::location::LocationSelection;

/// Query string of settings list requests (`?stateId=..&status=active`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<RecordStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl ListFilter {
    pub fn from_selection(selection: &LocationSelection) -> Self {
        Self {
            state_id: selection.state_id.clone(),
            district_id: selection.district_id.clone(),
            cluster_id: selection.cluster_id.clone(),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: Option<RecordStatus>) -> Self {
        self.status = status;
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
