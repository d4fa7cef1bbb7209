use serde::{Deserialize, Serialize};

use crate::domain::common::entity_ref::{ref_id, ref_label};
use crate::domain::common::validation::{require_positive, require_text};
use crate::domain::common::{
    AggregateRoot, EntityMetadata, EntityRef, FormDto, RecordStatus, ValidationError,
};

/// Project category a price or rate applies to.
pub const CATEGORIES: [(&str, &str); 3] = [
    ("residential", "Residential"),
    ("commercial", "Commercial"),
    ("industrial", "Industrial"),
];

pub fn category_label(value: &str) -> &str {
    CATEGORIES
        .iter()
        .find(|(key, _)| *key == value)
        .map(|(_, label)| *label)
        .unwrap_or(value)
}

/// Per-kW rate paid to installers, by state/cluster and project size band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallationRate {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<EntityRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster: Option<EntityRef>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub min_kw: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_kw: Option<f64>,
    pub rate_per_kw: f64,
    #[serde(default)]
    pub status: RecordStatus,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl InstallationRate {
    /// "3 - 10 kW", "10+ kW"
    pub fn band_label(&self) -> String {
        match self.max_kw {
            Some(max) => format!("{} - {} kW", self.min_kw, max),
            None => format!("{}+ kW", self.min_kw),
        }
    }

    /// Whether a system of `capacity_kw` falls inside this band.
    pub fn covers(&self, capacity_kw: f64) -> bool {
        capacity_kw >= self.min_kw && self.max_kw.map_or(true, |max| capacity_kw <= max)
    }

    /// Installer payout for a system of `capacity_kw`.
    pub fn payout(&self, capacity_kw: f64) -> f64 {
        self.rate_per_kw * capacity_kw
    }
}

impl AggregateRoot for InstallationRate {
    type Dto = InstallationRateDto;

    fn id(&self) -> &str {
        &self.id
    }

    fn description(&self) -> String {
        format!(
            "{} {} ({})",
            ref_label(&self.state),
            category_label(&self.category),
            self.band_label()
        )
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn to_dto(&self) -> InstallationRateDto {
        InstallationRateDto {
            id: Some(self.id.clone()),
            state: ref_id(&self.state),
            cluster: self.cluster.as_ref().map(|r| r.id().to_string()),
            category: self.category.clone(),
            min_kw: Some(self.min_kw),
            max_kw: self.max_kw,
            rate_per_kw: Some(self.rate_per_kw),
            status: self.status,
        }
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "installation_rate"
    }

    fn resource_path() -> &'static str {
        "/installer/installation-rates"
    }

    fn element_name() -> &'static str {
        "Installation Rate"
    }

    fn list_name() -> &'static str {
        "Installation Rates"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallationRateDto {
    #[serde(skip)]
    pub id: Option<String>,
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    pub category: String,
    pub min_kw: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_kw: Option<f64>,
    pub rate_per_kw: Option<f64>,
    pub status: RecordStatus,
}

impl FormDto for InstallationRateDto {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("State", &self.state)?;
        require_text("Category", &self.category)?;
        let min = self.min_kw.unwrap_or(0.0);
        if min < 0.0 {
            return Err(ValidationError::invalid("Min kW", "must not be negative"));
        }
        if let Some(max) = self.max_kw {
            if max <= min {
                return Err(ValidationError::invalid("Max kW", "must be above Min kW"));
            }
        }
        require_positive("Rate per kW", self.rate_per_kw)?;
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
    fn test_band() {
        let rate: InstallationRate = serde_json::from_str(
            r#"{"_id":"r1","state":"s1","category":"residential","minKw":3,"maxKw":10,"ratePerKw":2500}"#,
        )
        .unwrap();
        assert_eq!(rate.band_label(), "3 - 10 kW");
        assert!(rate.covers(3.0));
        assert!(rate.covers(10.0));
        assert!(!rate.covers(10.5));
        assert_eq!(rate.payout(4.0), 10000.0);
    }

    #[test]
    fn test_validate() {
        let dto = InstallationRateDto {
            state: "s1".into(),
            category: "commercial".into(),
            min_kw: Some(10.0),
            max_kw: Some(50.0),
            rate_per_kw: Some(1800.0),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
        assert_eq!(
            InstallationRateDto {
                max_kw: Some(5.0),
                ..dto.clone()
            }
            .validate()
            .unwrap_err()
            .field(),
            "Max kW"
        );
        assert_eq!(
            InstallationRateDto {
                rate_per_kw: None,
                ..dto
            }
            .validate(),
            Err(ValidationError::Required("Rate per kW"))
        );
        assert_eq!(category_label("industrial"), "Industrial");
        assert_eq!(category_label("other"), "other");
    }
}
