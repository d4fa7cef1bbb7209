use serde::{Deserialize, Serialize};

use crate::domain::common::validation::require_text;
use crate::domain::common::{AggregateRoot, EntityMetadata, FormDto, RecordStatus, ValidationError};

/// Template placeholder substituted into project documents as `{{key}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placeholder {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub key: String,
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default)]
    pub status: RecordStatus,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Placeholder {
    pub fn token(&self) -> String {
        format!("{{{{{}}}}}", self.key)
    }
}

/// Letters, digits and underscores, not starting with a digit.
pub fn is_valid_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Replace every `{{key}}` occurrence of active placeholders with its default value.
pub fn render_template(template: &str, placeholders: &[Placeholder]) -> String {
    placeholders
        .iter()
        .filter(|p| p.status.is_active())
        .fold(template.to_string(), |acc, p| {
            acc.replace(&p.token(), p.default_value.as_deref().unwrap_or_default())
        })
}

impl AggregateRoot for Placeholder {
    type Dto = PlaceholderDto;

    fn id(&self) -> &str {
        &self.id
    }

    fn description(&self) -> String {
        self.token()
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn to_dto(&self) -> PlaceholderDto {
        PlaceholderDto {
            id: Some(self.id.clone()),
            key: self.key.clone(),
            label: self.label.clone(),
            description: self.description.clone(),
            default_value: self.default_value.clone(),
            status: self.status,
        }
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.key, self.label)
    }

    fn aggregate_index() -> &'static str {
        "a010"
    }

    fn collection_name() -> &'static str {
        "placeholder"
    }

    fn resource_path() -> &'static str {
        "/project-settings/placeholders"
    }

    fn element_name() -> &'static str {
        "Placeholder"
    }

    fn list_name() -> &'static str {
        "Placeholders"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderDto {
    #[serde(skip)]
    pub id: Option<String>,
    pub key: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    pub status: RecordStatus,
}

impl FormDto for PlaceholderDto {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("Key", &self.key)?;
        if !is_valid_key(self.key.trim()) {
            return Err(ValidationError::invalid(
                "Key",
                "may contain only letters, digits and underscores",
            ));
        }
        require_text("Label", &self.label)?;
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
    fn test_key_rules() {
        assert!(is_valid_key("customer_name"));
        assert!(is_valid_key("_kw2"));
        assert!(!is_valid_key("2kw"));
        assert!(!is_valid_key("customer-name"));
        assert!(!is_valid_key("{{name}}"));
        assert!(!is_valid_key(""));

        let dto = PlaceholderDto {
            key: "customer name".into(),
            label: "Customer".into(),
            ..Default::default()
        };
        assert_eq!(dto.validate().unwrap_err().field(), "Key");
    }

    #[test]
    fn test_render_template() {
        let placeholders: Vec<Placeholder> = serde_json::from_str(
            r#"[{"_id":"1","key":"company","label":"Company","defaultValue":"SunVolt"},
                {"_id":"2","key":"city","label":"City","defaultValue":"Surat","status":"inactive"}]"#,
        )
        .unwrap();
        assert_eq!(placeholders[0].token(), "{{company}}");
        assert_eq!(
            render_template("{{company}}, {{city}}", &placeholders),
            "SunVolt, {{city}}"
        );
    }
}
