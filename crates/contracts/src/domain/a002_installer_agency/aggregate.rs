use serde::{Deserialize, Serialize};

use crate::domain::common::entity_ref::{ref_id, ref_label};
use crate::domain::common::validation::{non_blank, require_mobile, require_text};
use crate::domain::common::{
    AggregateRoot, EntityMetadata, EntityRef, FormDto, RecordStatus, ValidationError,
};

/// Installer agency: the company installers are contracted through
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallerAgency {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub contact_person: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gst_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<EntityRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<EntityRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster: Option<EntityRef>,
    /// Subscribed agency plan
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<EntityRef>,
    #[serde(default)]
    pub status: RecordStatus,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl InstallerAgency {
    pub fn plan_name(&self) -> String {
        ref_label(&self.plan)
    }
}

impl AggregateRoot for InstallerAgency {
    type Dto = InstallerAgencyDto;

    fn id(&self) -> &str {
        &self.id
    }

    fn description(&self) -> String {
        self.name.clone()
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn to_dto(&self) -> InstallerAgencyDto {
        InstallerAgencyDto {
            id: Some(self.id.clone()),
            name: self.name.clone(),
            contact_person: self.contact_person.clone(),
            mobile: self.mobile.clone(),
            email: self.email.clone(),
            gst_number: self.gst_number.clone(),
            state: ref_id(&self.state),
            district: self.district.as_ref().map(|r| r.id().to_string()),
            cluster: self.cluster.as_ref().map(|r| r.id().to_string()),
            plan: self.plan.as_ref().map(|r| r.id().to_string()),
            status: self.status,
        }
    }

    fn search_text(&self) -> String {
        format!("{} {} {}", self.name, self.contact_person, self.mobile)
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "installer_agency"
    }

    fn resource_path() -> &'static str {
        "/installer/agencies"
    }

    fn element_name() -> &'static str {
        "Installer Agency"
    }

    fn list_name() -> &'static str {
        "Installer Agencies"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallerAgencyDto {
    #[serde(skip)]
    pub id: Option<String>,
    pub name: String,
    pub contact_person: String,
    pub mobile: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gst_number: Option<String>,
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    pub status: RecordStatus,
}

/// GSTIN: 15 alphanumeric characters, the first two being the state code.
fn is_valid_gstin(value: &str) -> bool {
    value.len() == 15
        && value.chars().all(|c| c.is_ascii_alphanumeric())
        && value[..2].chars().all(|c| c.is_ascii_digit())
}

impl FormDto for InstallerAgencyDto {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("Agency name", &self.name)?;
        require_text("Contact person", &self.contact_person)?;
        require_mobile("Mobile", &self.mobile)?;
        require_text("State", &self.state)?;
        if let Some(gst) = self.gst_number.as_deref().and_then(non_blank) {
            if !is_valid_gstin(&gst.to_ascii_uppercase()) {
                return Err(ValidationError::invalid(
                    "GST number",
                    "must be a 15 character GSTIN",
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

    fn valid_dto() -> InstallerAgencyDto {
        InstallerAgencyDto {
            name: "SunFit Installers".into(),
            contact_person: "Kiran Shah".into(),
            mobile: "9825012345".into(),
            state: "s1".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate() {
        assert!(valid_dto().validate().is_ok());
        assert_eq!(
            InstallerAgencyDto {
                state: " ".into(),
                ..valid_dto()
            }
            .validate(),
            Err(ValidationError::Required("State"))
        );
        assert!(InstallerAgencyDto {
            gst_number: Some("24AAACS1234F1Z5".into()),
            ..valid_dto()
        }
        .validate()
        .is_ok());
        assert!(InstallerAgencyDto {
            gst_number: Some("AAACS1234F".into()),
            ..valid_dto()
        }
        .validate()
        .is_err());
    }

    #[test]
    fn test_plan_name_from_populated_ref() {
        let agency: InstallerAgency = serde_json::from_str(
            r#"{"_id":"ag1","name":"SunFit","plan":{"_id":"p1","name":"Gold"}}"#,
        )
        .unwrap();
        assert_eq!(agency.plan_name(), "Gold");
        assert_eq!(agency.to_dto().plan.as_deref(), Some("p1"));
        assert_eq!(agency.status, RecordStatus::Active);
    }
}
