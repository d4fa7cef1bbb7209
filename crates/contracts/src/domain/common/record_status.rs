use serde::{Deserialize, Serialize};

/// Active flag shared by every settings record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    #[default]
    Active,
    Inactive,
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Active => "active",
            RecordStatus::Inactive => "inactive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecordStatus::Active => "Active",
            RecordStatus::Inactive => "Inactive",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, RecordStatus::Active)
    }

    pub fn toggled(&self) -> Self {
        match self {
            RecordStatus::Active => RecordStatus::Inactive,
            RecordStatus::Inactive => RecordStatus::Active,
        }
    }

    pub fn from_str_lossy(value: &str) -> Self {
        if value.eq_ignore_ascii_case("inactive") {
            RecordStatus::Inactive
        } else {
            RecordStatus::Active
        }
    }
}
