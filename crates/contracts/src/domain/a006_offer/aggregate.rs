use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::entity_ref::ref_label;
use crate::domain::common::validation::{require_positive, require_text};
use crate::domain::common::{
    AggregateRoot, EntityMetadata, EntityRef, FormDto, RecordStatus, ValidationError,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    #[default]
    Percentage,
    Flat,
}

impl DiscountType {
    pub const ALL: [DiscountType; 2] = [DiscountType::Percentage, DiscountType::Flat];

    pub fn as_str(&self) -> &'static str {
        match self {
            DiscountType::Percentage => "percentage",
            DiscountType::Flat => "flat",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DiscountType::Percentage => "Percentage",
            DiscountType::Flat => "Flat amount",
        }
    }

    pub fn from_str_lossy(value: &str) -> Self {
        if value.eq_ignore_ascii_case("flat") {
            DiscountType::Flat
        } else {
            DiscountType::Percentage
        }
    }
}

/// Promotional discount on quotes, optionally limited to a state/cluster and a date window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(alias = "name")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub discount_type: DiscountType,
    #[serde(default)]
    pub discount_value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_to: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<EntityRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster: Option<EntityRef>,
    #[serde(default)]
    pub status: RecordStatus,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Offer {
    /// "10%" or "₹5000"
    pub fn discount_label(&self) -> String {
        match self.discount_type {
            DiscountType::Percentage => format!("{}%", self.discount_value),
            DiscountType::Flat => format!("₹{}", self.discount_value),
        }
    }

    /// Offer applies on `date`: active and inside the (open-ended) window.
    pub fn is_running_on(&self, date: NaiveDate) -> bool {
        self.status.is_active()
            && self.valid_from.map_or(true, |from| from <= date)
            && self.valid_to.map_or(true, |to| date <= to)
    }

    pub fn scope_label(&self) -> String {
        match (&self.state, &self.cluster) {
            (None, None) => "All locations".to_string(),
            (_, Some(_)) => format!("{} / {}", ref_label(&self.state), ref_label(&self.cluster)),
            (Some(_), None) => ref_label(&self.state),
        }
    }
}

impl AggregateRoot for Offer {
    type Dto = OfferDto;

    fn id(&self) -> &str {
        &self.id
    }

    fn description(&self) -> String {
        self.title.clone()
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn to_dto(&self) -> OfferDto {
        OfferDto {
            id: Some(self.id.clone()),
            title: self.title.clone(),
            description: self.description.clone(),
            discount_type: self.discount_type,
            discount_value: Some(self.discount_value),
            valid_from: self.valid_from,
            valid_to: self.valid_to,
            state: self.state.as_ref().map(|r| r.id().to_string()),
            cluster: self.cluster.as_ref().map(|r| r.id().to_string()),
            status: self.status,
        }
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "offer"
    }

    fn resource_path() -> &'static str {
        "/sales-settings/offers"
    }

    fn element_name() -> &'static str {
        "Offer"
    }

    fn list_name() -> &'static str {
        "Offers"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferDto {
    #[serde(skip)]
    pub id: Option<String>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub discount_type: DiscountType,
    pub discount_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_to: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    pub status: RecordStatus,
}

impl FormDto for OfferDto {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("Title", &self.title)?;
        let value = require_positive("Discount", self.discount_value)?;
        if self.discount_type == DiscountType::Percentage && value > 100.0 {
            return Err(ValidationError::invalid("Discount", "cannot exceed 100%"));
        }
        if let (Some(from), Some(to)) = (self.valid_from, self.valid_to) {
            if to < from {
                return Err(ValidationError::invalid("Valid to", "must not be before Valid from"));
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

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn valid_dto() -> OfferDto {
        OfferDto {
            title: "Diwali 10%".into(),
            discount_value: Some(10.0),
            valid_from: Some(date("2024-10-20")),
            valid_to: Some(date("2024-11-05")),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate() {
        assert!(valid_dto().validate().is_ok());
        assert!(OfferDto {
            discount_value: Some(120.0),
            ..valid_dto()
        }
        .validate()
        .is_err());
        assert!(OfferDto {
            discount_type: DiscountType::Flat,
            discount_value: Some(5000.0),
            ..valid_dto()
        }
        .validate()
        .is_ok());
        assert_eq!(
            OfferDto {
                valid_to: Some(date("2024-10-01")),
                ..valid_dto()
            }
            .validate()
            .unwrap_err()
            .field(),
            "Valid to"
        );
    }

    #[test]
    fn test_running_window() {
        let offer: Offer = serde_json::from_str(
            r#"{"_id":"o1","title":"Monsoon","discountType":"flat","discountValue":2500,
                "validFrom":"2024-06-01","validTo":"2024-08-31"}"#,
        )
        .unwrap();
        assert_eq!(offer.discount_label(), "₹2500");
        assert!(offer.is_running_on(date("2024-07-15")));
        assert!(!offer.is_running_on(date("2024-09-01")));
        assert_eq!(offer.scope_label(), "All locations");
    }
}
