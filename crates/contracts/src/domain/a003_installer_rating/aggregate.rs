use serde::{Deserialize, Serialize};

use crate::domain::common::entity_ref::{ref_id, ref_label};
use crate::domain::common::validation::require_text;
use crate::domain::common::{
    AggregateRoot, EntityMetadata, EntityRef, FormDto, RecordStatus, ValidationError,
};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Rating given to an installer after a completed project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallerRating {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installer: Option<EntityRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_code: Option<String>,
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    #[serde(default)]
    pub status: RecordStatus,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl InstallerRating {
    pub fn installer_name(&self) -> String {
        ref_label(&self.installer)
    }

    /// "★★★☆☆"
    pub fn stars(&self) -> String {
        let filled = self.rating.min(MAX_RATING) as usize;
        let mut s = "★".repeat(filled);
        s.push_str(&"☆".repeat(MAX_RATING as usize - filled));
        s
    }
}

impl AggregateRoot for InstallerRating {
    type Dto = InstallerRatingDto;

    fn id(&self) -> &str {
        &self.id
    }

    fn description(&self) -> String {
        format!("{} ({}/{})", self.installer_name(), self.rating, MAX_RATING)
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn to_dto(&self) -> InstallerRatingDto {
        InstallerRatingDto {
            id: Some(self.id.clone()),
            installer: ref_id(&self.installer),
            project_code: self.project_code.clone(),
            rating: Some(self.rating),
            remarks: self.remarks.clone(),
            status: self.status,
        }
    }

    fn search_text(&self) -> String {
        format!(
            "{} {} {}",
            self.installer_name(),
            self.project_code.as_deref().unwrap_or_default(),
            self.remarks.as_deref().unwrap_or_default()
        )
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "installer_rating"
    }

    fn resource_path() -> &'static str {
        "/installer/ratings"
    }

    fn element_name() -> &'static str {
        "Installer Rating"
    }

    fn list_name() -> &'static str {
        "Installer Ratings"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallerRatingDto {
    #[serde(skip)]
    pub id: Option<String>,
    pub installer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_code: Option<String>,
    pub rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    pub status: RecordStatus,
}

impl FormDto for InstallerRatingDto {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("Installer", &self.installer)?;
        match self.rating {
            None => Err(ValidationError::Required("Rating")),
            Some(r) if !(MIN_RATING..=MAX_RATING).contains(&r) => Err(ValidationError::invalid(
                "Rating",
                format!("must be between {} and {}", MIN_RATING, MAX_RATING),
            )),
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
    fn test_rating_range() {
        let dto = InstallerRatingDto {
            installer: "i1".into(),
            rating: Some(4),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
        assert_eq!(
            InstallerRatingDto {
                rating: None,
                ..dto.clone()
            }
            .validate(),
            Err(ValidationError::Required("Rating"))
        );
        assert!(InstallerRatingDto {
            rating: Some(6),
            ..dto.clone()
        }
        .validate()
        .is_err());
        assert!(InstallerRatingDto {
            rating: Some(0),
            ..dto
        }
        .validate()
        .is_err());
    }

    #[test]
    fn test_stars() {
        let rating: InstallerRating =
            serde_json::from_str(r#"{"_id":"r1","installer":"i1","rating":3}"#).unwrap();
        assert_eq!(rating.stars(), "★★★☆☆");
        assert_eq!(rating.description(), "i1 (3/5)");
    }
}
