use serde::{Deserialize, Serialize};

use crate::domain::common::entity_ref::{ref_id, ref_label};
use crate::domain::common::validation::require_text;
use crate::domain::common::{
    AggregateRoot, EntityMetadata, EntityRef, FormDto, RecordStatus, ValidationError,
};

/// How long a project may sit in a journey stage before it is flagged overdue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverdueConfig {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<EntityRef>,
    pub overdue_days: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_days: Option<u32>,
    /// Role notified once the stage is overdue
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escalate_to: Option<String>,
    #[serde(default)]
    pub status: RecordStatus,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

/// Where a project stands relative to its stage deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineState {
    OnTrack,
    Reminder,
    Overdue,
}

impl OverdueConfig {
    pub fn stage_name(&self) -> String {
        ref_label(&self.stage)
    }

    pub fn evaluate(&self, days_in_stage: u32) -> DeadlineState {
        if days_in_stage >= self.overdue_days {
            DeadlineState::Overdue
        } else if self.reminder_days.is_some_and(|r| days_in_stage >= r) {
            DeadlineState::Reminder
        } else {
            DeadlineState::OnTrack
        }
    }
}

impl AggregateRoot for OverdueConfig {
    type Dto = OverdueConfigDto;

    fn id(&self) -> &str {
        &self.id
    }

    fn description(&self) -> String {
        format!("{} ({} days)", self.stage_name(), self.overdue_days)
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn to_dto(&self) -> OverdueConfigDto {
        OverdueConfigDto {
            id: Some(self.id.clone()),
            stage: ref_id(&self.stage),
            overdue_days: Some(self.overdue_days),
            reminder_days: self.reminder_days,
            escalate_to: self.escalate_to.clone(),
            status: self.status,
        }
    }

    fn aggregate_index() -> &'static str {
        "a011"
    }

    fn collection_name() -> &'static str {
        "overdue_config"
    }

    fn resource_path() -> &'static str {
        "/project-settings/overdue"
    }

    fn element_name() -> &'static str {
        "Overdue Rule"
    }

    fn list_name() -> &'static str {
        "Overdue Settings"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverdueConfigDto {
    #[serde(skip)]
    pub id: Option<String>,
    pub stage: String,
    pub overdue_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escalate_to: Option<String>,
    pub status: RecordStatus,
}

impl FormDto for OverdueConfigDto {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("Stage", &self.stage)?;
        let overdue = match self.overdue_days {
            None => return Err(ValidationError::Required("Overdue days")),
            Some(0) => {
                return Err(ValidationError::invalid("Overdue days", "must be at least 1"))
            }
            Some(days) => days,
        };
        if let Some(reminder) = self.reminder_days {
            if reminder >= overdue {
                return Err(ValidationError::invalid(
                    "Reminder days",
                    "must be less than Overdue days",
                ));
            }
        }
        Ok(())
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn set_status(&mut self, status: RecordStatus) {
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        let dto = OverdueConfigDto {
            stage: "st1".into(),
            overdue_days: Some(7),
            reminder_days: Some(5),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
        assert_eq!(
            OverdueConfigDto {
                reminder_days: Some(7),
                ..dto.clone()
            }
            .validate()
            .unwrap_err()
            .field(),
            "Reminder days"
        );
        assert_eq!(
            OverdueConfigDto {
                stage: String::new(),
                ..dto
            }
            .validate(),
            Err(ValidationError::Required("Stage"))
        );
    }

    #[test]
    fn test_evaluate() {
        let config: OverdueConfig = serde_json::from_str(
            r#"{"_id":"o1","stage":{"_id":"st1","name":"Net Metering"},"overdueDays":10,"reminderDays":7}"#,
        )
        .unwrap();
        assert_eq!(config.evaluate(3), DeadlineState::OnTrack);
        assert_eq!(config.evaluate(7), DeadlineState::Reminder);
        assert_eq!(config.evaluate(12), DeadlineState::Overdue);
        assert_eq!(config.description(), "Net Metering (10 days)");
    }
}
