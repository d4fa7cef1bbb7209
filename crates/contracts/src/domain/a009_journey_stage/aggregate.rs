use serde::{Deserialize, Serialize};

use crate::domain::common::validation::require_text;
use crate::domain::common::{AggregateRoot, EntityMetadata, FormDto, RecordStatus, ValidationError};

/// One step of the customer project journey (survey, installation, net metering...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyStage {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default, alias = "sequence")]
    pub order: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub is_mandatory: bool,
    #[serde(default)]
    pub status: RecordStatus,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl AggregateRoot for JourneyStage {
    type Dto = JourneyStageDto;

    fn id(&self) -> &str {
        &self.id
    }

    fn description(&self) -> String {
        self.name.clone()
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn to_dto(&self) -> JourneyStageDto {
        JourneyStageDto {
            id: Some(self.id.clone()),
            name: self.name.clone(),
            order: Some(self.order),
            description: self.description.clone(),
            is_mandatory: self.is_mandatory,
            status: self.status,
        }
    }

    fn aggregate_index() -> &'static str {
        "a009"
    }

    fn collection_name() -> &'static str {
        "journey_stage"
    }

    fn resource_path() -> &'static str {
        "/project-settings/stages"
    }

    fn element_name() -> &'static str {
        "Journey Stage"
    }

    fn list_name() -> &'static str {
        "Journey Stages"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyStageDto {
    #[serde(skip)]
    pub id: Option<String>,
    pub name: String,
    pub order: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_mandatory: bool,
    pub status: RecordStatus,
}

/// Next free position after the existing stages.
pub fn next_order(stages: &[JourneyStage]) -> u32 {
    stages.iter().map(|s| s.order).max().unwrap_or(0) + 1
}

impl FormDto for JourneyStageDto {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("Stage name", &self.name)?;
        match self.order {
            None => Err(ValidationError::Required("Order")),
            Some(0) => Err(ValidationError::invalid("Order", "must be at least 1")),
            Some(_) => Ok(()),
        }
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
    fn test_validate_order() {
        let dto = JourneyStageDto {
            name: "Site Survey".into(),
            order: Some(1),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
        assert!(JourneyStageDto {
            order: Some(0),
            ..dto.clone()
        }
        .validate()
        .is_err());
        assert_eq!(
            JourneyStageDto {
                name: String::new(),
                ..dto
            }
            .validate(),
            Err(ValidationError::Required("Stage name"))
        );
    }

    #[test]
    fn test_next_order() {
        let stages: Vec<JourneyStage> = serde_json::from_str(
            r#"[{"_id":"1","name":"Survey","order":1},{"_id":"2","name":"Install","sequence":4}]"#,
        )
        .unwrap();
        assert_eq!(next_order(&stages), 5);
        assert_eq!(next_order(&[]), 1);
    }
}
