use serde::{Deserialize, Serialize};

use crate::domain::common::entity_ref::{ref_id, ref_label};
use crate::domain::common::validation::require_text;
use crate::domain::common::{
    AggregateRoot, EntityMetadata, EntityRef, FormDto, RecordStatus, ValidationError,
};

/// File types a document upload may accept.
pub const FILE_TYPES: [&str; 4] = ["pdf", "jpg", "png", "docx"];

/// Document the customer or installer has to upload at a journey stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDocument {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<EntityRef>,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default)]
    pub allowed_types: Vec<String>,
    #[serde(default)]
    pub status: RecordStatus,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl ProjectDocument {
    pub fn stage_name(&self) -> String {
        ref_label(&self.stage)
    }

    /// "PDF, JPG" or "Any"
    pub fn types_label(&self) -> String {
        if self.allowed_types.is_empty() {
            "Any".to_string()
        } else {
            self.allowed_types
                .iter()
                .map(|t| t.to_ascii_uppercase())
                .collect::<Vec<_>>()
                .join(", ")
        }
    }

    pub fn accepts(&self, file_name: &str) -> bool {
        if self.allowed_types.is_empty() {
            return true;
        }
        match file_name.rsplit_once('.') {
            Some((_, ext)) => self
                .allowed_types
                .iter()
                .any(|t| t.eq_ignore_ascii_case(ext)),
            None => false,
        }
    }
}

impl AggregateRoot for ProjectDocument {
    type Dto = ProjectDocumentDto;

    fn id(&self) -> &str {
        &self.id
    }

    fn description(&self) -> String {
        self.name.clone()
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn to_dto(&self) -> ProjectDocumentDto {
        ProjectDocumentDto {
            id: Some(self.id.clone()),
            name: self.name.clone(),
            stage: ref_id(&self.stage),
            is_required: self.is_required,
            allowed_types: self.allowed_types.clone(),
            status: self.status,
        }
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.name, self.stage_name())
    }

    fn aggregate_index() -> &'static str {
        "a012"
    }

    fn collection_name() -> &'static str {
        "project_document"
    }

    fn resource_path() -> &'static str {
        "/project-settings/documents"
    }

    fn element_name() -> &'static str {
        "Project Document"
    }

    fn list_name() -> &'static str {
        "Project Documents"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDocumentDto {
    #[serde(skip)]
    pub id: Option<String>,
    pub name: String,
    pub stage: String,
    pub is_required: bool,
    pub allowed_types: Vec<String>,
    pub status: RecordStatus,
}

impl ProjectDocumentDto {
    pub fn toggle_type(&mut self, file_type: &str) {
        if let Some(pos) = self.allowed_types.iter().position(|t| t == file_type) {
            self.allowed_types.remove(pos);
        } else {
            self.allowed_types.push(file_type.to_string());
        }
    }
}

impl FormDto for ProjectDocumentDto {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("Document name", &self.name)?;
        require_text("Stage", &self.stage)?;
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
        let dto = ProjectDocumentDto {
            name: "Electricity bill".into(),
            stage: "st1".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
        assert_eq!(
            ProjectDocumentDto {
                stage: " ".into(),
                ..dto
            }
            .validate(),
            Err(ValidationError::Required("Stage"))
        );
    }

    #[test]
    fn test_allowed_types() {
        let mut doc: ProjectDocument = serde_json::from_str(
            r#"{"_id":"d1","name":"Aadhaar","stage":"st1","allowedTypes":["pdf","jpg"]}"#,
        )
        .unwrap();
        assert_eq!(doc.types_label(), "PDF, JPG");
        assert!(doc.accepts("scan.JPG"));
        assert!(!doc.accepts("scan.docx"));
        assert!(!doc.accepts("scan"));

        let mut dto = doc.to_dto();
        dto.toggle_type("jpg");
        dto.toggle_type("png");
        assert_eq!(dto.allowed_types, vec!["pdf", "png"]);

        doc.allowed_types.clear();
        assert_eq!(doc.types_label(), "Any");
        assert!(doc.accepts("anything"));
    }
}
