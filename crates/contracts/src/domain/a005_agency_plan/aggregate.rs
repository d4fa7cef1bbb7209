use serde::{Deserialize, Serialize};

use crate::domain::common::validation::{require_non_negative, require_text};
use crate::domain::common::{AggregateRoot, EntityMetadata, FormDto, RecordStatus, ValidationError};

/// Subscription plan offered to installer agencies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgencyPlan {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validity_days: Option<u32>,
    #[serde(default = "default_max_installers")]
    pub max_installers: u32,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub status: RecordStatus,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

fn default_max_installers() -> u32 {
    1
}

impl AgencyPlan {
    pub fn validity_label(&self) -> String {
        match self.validity_days {
            Some(days) => format!("{} days", days),
            None => "Unlimited".to_string(),
        }
    }
}

impl AggregateRoot for AgencyPlan {
    type Dto = AgencyPlanDto;

    fn id(&self) -> &str {
        &self.id
    }

    fn description(&self) -> String {
        self.name.clone()
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn to_dto(&self) -> AgencyPlanDto {
        AgencyPlanDto {
            id: Some(self.id.clone()),
            name: self.name.clone(),
            description: self.description.clone(),
            price: Some(self.price),
            validity_days: self.validity_days,
            max_installers: Some(self.max_installers),
            features: self.features.clone(),
            status: self.status,
        }
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.name, self.features.join(" "))
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "agency_plan"
    }

    fn resource_path() -> &'static str {
        "/installer/agency-plans"
    }

    fn element_name() -> &'static str {
        "Agency Plan"
    }

    fn list_name() -> &'static str {
        "Agency Plans"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgencyPlanDto {
    #[serde(skip)]
    pub id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validity_days: Option<u32>,
    pub max_installers: Option<u32>,
    pub features: Vec<String>,
    pub status: RecordStatus,
}

impl AgencyPlanDto {
    /// Features are edited as one comma separated line.
    pub fn set_features_from_line(&mut self, line: &str) {
        self.features = line
            .split(',')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(str::to_string)
            .collect();
    }

    pub fn features_line(&self) -> String {
        self.features.join(", ")
    }
}

impl FormDto for AgencyPlanDto {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("Plan name", &self.name)?;
        require_non_negative("Price", self.price)?;
        match self.max_installers {
            None => Err(ValidationError::Required("Max installers")),
            Some(0) => Err(ValidationError::invalid("Max installers", "must be at least 1")),
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
    fn test_validate() {
        let dto = AgencyPlanDto {
            name: "Starter".into(),
            price: Some(0.0),
            max_installers: Some(3),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
        assert!(AgencyPlanDto {
            max_installers: Some(0),
            ..dto.clone()
        }
        .validate()
        .is_err());
        assert_eq!(
            AgencyPlanDto { price: None, ..dto }.validate(),
            Err(ValidationError::Required("Price"))
        );
    }

    #[test]
    fn test_features_line() {
        let mut dto = AgencyPlanDto::default();
        dto.set_features_from_line(" Lead sharing, ,Priority support ");
        assert_eq!(dto.features, vec!["Lead sharing", "Priority support"]);
        assert_eq!(dto.features_line(), "Lead sharing, Priority support");
    }
}
