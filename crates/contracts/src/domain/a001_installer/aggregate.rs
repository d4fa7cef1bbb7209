use serde::{Deserialize, Serialize};

use crate::domain::common::entity_ref::{ref_id, ref_label};
use crate::domain::common::validation::{non_blank, require_mobile, require_text};
use crate::domain::common::{
    AggregateRoot, EntityMetadata, EntityRef, FormDto, RecordStatus, ValidationError,
};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Installer (technician) working for an installer agency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Installer {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agency: Option<EntityRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<EntityRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<EntityRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster: Option<EntityRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<u32>,
    #[serde(default)]
    pub status: RecordStatus,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Installer {
    pub fn agency_name(&self) -> String {
        ref_label(&self.agency)
    }

    /// "Cluster, District, State" with unknown parts skipped.
    pub fn location_label(&self) -> String {
        let parts: Vec<&str> = [&self.cluster, &self.district, &self.state]
            .into_iter()
            .filter_map(|r| r.as_ref().map(|r| r.label()))
            .collect();
        if parts.is_empty() {
            "-".to_string()
        } else {
            parts.join(", ")
        }
    }
}

impl AggregateRoot for Installer {
    type Dto = InstallerDto;

    fn id(&self) -> &str {
        &self.id
    }

    fn description(&self) -> String {
        self.name.clone()
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn to_dto(&self) -> InstallerDto {
        InstallerDto {
            id: Some(self.id.clone()),
            name: self.name.clone(),
            mobile: self.mobile.clone(),
            email: self.email.clone(),
            agency: ref_id(&self.agency),
            state: self.state.as_ref().map(|r| r.id().to_string()),
            district: self.district.as_ref().map(|r| r.id().to_string()),
            cluster: self.cluster.as_ref().map(|r| r.id().to_string()),
            experience_years: self.experience_years,
            status: self.status,
        }
    }

    fn search_text(&self) -> String {
        format!("{} {} {}", self.name, self.mobile, self.agency_name())
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "installer"
    }

    fn resource_path() -> &'static str {
        "/installer/installers"
    }

    fn element_name() -> &'static str {
        "Installer"
    }

    fn list_name() -> &'static str {
        "Installers"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Create/update payload of an installer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallerDto {
    #[serde(skip)]
    pub id: Option<String>,
    pub name: String,
    pub mobile: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub agency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<u32>,
    pub status: RecordStatus,
}

impl FormDto for InstallerDto {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("Name", &self.name)?;
        require_mobile("Mobile", &self.mobile)?;
        require_text("Agency", &self.agency)?;
        if let Some(email) = self.email.as_deref().and_then(non_blank) {
            if !email.contains('@') {
                return Err(ValidationError::invalid("Email", "is not a valid address"));
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

    fn valid_dto() -> InstallerDto {
        InstallerDto {
            name: "Mahesh Solanki".into(),
            mobile: "9876543210".into(),
            agency: "ag1".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_required_fields() {
        assert!(valid_dto().validate().is_ok());

        let missing_agency = InstallerDto {
            agency: String::new(),
            ..valid_dto()
        };
        assert_eq!(
            missing_agency.validate(),
            Err(ValidationError::Required("Agency"))
        );

        let bad_email = InstallerDto {
            email: Some("mahesh.example.com".into()),
            ..valid_dto()
        };
        assert_eq!(bad_email.validate().unwrap_err().field(), "Email");
    }

    #[test]
    fn test_decode_populated_record() {
        let json = r#"{
            "_id": "i1",
            "name": "Mahesh Solanki",
            "mobile": "9876543210",
            "agency": { "_id": "ag1", "name": "SunFit Installers" },
            "state": { "_id": "s1", "name": "Gujarat" },
            "cluster": "c1",
            "status": "inactive",
            "createdAt": "2024-05-01T10:00:00Z"
        }"#;
        let installer: Installer = serde_json::from_str(json).unwrap();
        assert_eq!(installer.agency_name(), "SunFit Installers");
        assert_eq!(installer.location_label(), "c1, Gujarat");
        assert_eq!(installer.status, RecordStatus::Inactive);
        assert!(installer.metadata.created_at.is_some());

        let dto = installer.to_dto();
        assert_eq!(dto.agency, "ag1");
        assert_eq!(dto.state.as_deref(), Some("s1"));
        assert!(dto.is_edit_mode());
    }

    #[test]
    fn test_dto_body_has_no_id() {
        let body = serde_json::to_value(InstallerDto {
            id: Some("i1".into()),
            ..valid_dto()
        })
        .unwrap();
        assert!(body.get("id").is_none());
        assert_eq!(body["agency"], "ag1");
        assert_eq!(body["status"], "active");
    }
}
