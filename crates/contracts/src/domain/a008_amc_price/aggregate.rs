use serde::{Deserialize, Serialize};

use crate::domain::a004_installation_rate::aggregate::category_label;
use crate::domain::common::entity_ref::{ref_id, ref_label};
use crate::domain::common::validation::{require_positive, require_text};
use crate::domain::common::{
    AggregateRoot, EntityMetadata, EntityRef, FormDto, RecordStatus, ValidationError,
};

/// Annual maintenance contract price for a state, category and system size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmcPrice {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<EntityRef>,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity_kw: Option<f64>,
    #[serde(default)]
    pub cost_price: f64,
    #[serde(default)]
    pub selling_price: f64,
    #[serde(default = "default_tenure")]
    pub tenure_years: u32,
    #[serde(default)]
    pub status: RecordStatus,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

fn default_tenure() -> u32 {
    1
}

/// Margin over selling price, in percent. `None` when nothing is sold.
pub fn margin_percent(cost_price: f64, selling_price: f64) -> Option<f64> {
    (selling_price > 0.0).then(|| (selling_price - cost_price) / selling_price * 100.0)
}

impl AmcPrice {
    pub fn margin(&self) -> f64 {
        self.selling_price - self.cost_price
    }

    pub fn margin_percent(&self) -> Option<f64> {
        margin_percent(self.cost_price, self.selling_price)
    }

    pub fn state_name(&self) -> String {
        ref_label(&self.state)
    }
}

impl AggregateRoot for AmcPrice {
    type Dto = AmcPriceDto;

    fn id(&self) -> &str {
        &self.id
    }

    fn description(&self) -> String {
        format!(
            "{} {} {}y",
            self.state_name(),
            category_label(&self.category),
            self.tenure_years
        )
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn to_dto(&self) -> AmcPriceDto {
        AmcPriceDto {
            id: Some(self.id.clone()),
            state: ref_id(&self.state),
            category: self.category.clone(),
            capacity_kw: self.capacity_kw,
            cost_price: Some(self.cost_price),
            selling_price: Some(self.selling_price),
            tenure_years: Some(self.tenure_years),
            status: self.status,
        }
    }

    fn aggregate_index() -> &'static str {
        "a008"
    }

    fn collection_name() -> &'static str {
        "amc_price"
    }

    fn resource_path() -> &'static str {
        "/sales-settings/set-price-amc"
    }

    fn element_name() -> &'static str {
        "AMC Price"
    }

    fn list_name() -> &'static str {
        "AMC Prices"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmcPriceDto {
    #[serde(skip)]
    pub id: Option<String>,
    pub state: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_kw: Option<f64>,
    pub cost_price: Option<f64>,
    pub selling_price: Option<f64>,
    pub tenure_years: Option<u32>,
    pub status: RecordStatus,
}

impl AmcPriceDto {
    /// Live margin shown under the price inputs while editing.
    pub fn margin_percent(&self) -> Option<f64> {
        margin_percent(self.cost_price?, self.selling_price?)
    }
}

impl FormDto for AmcPriceDto {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("State", &self.state)?;
        require_text("Category", &self.category)?;
        require_positive("Cost price", self.cost_price)?;
        require_positive("Selling price", self.selling_price)?;
        if self.tenure_years == Some(0) {
            return Err(ValidationError::invalid("Tenure", "must be at least 1 year"));
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
    use crate::domain::common::validation::parse_number;

    #[test]
    fn test_margin() {
        let price: AmcPrice = serde_json::from_str(
            r#"{"_id":"p1","state":{"_id":"s1","name":"Gujarat"},"category":"residential",
                "costPrice":1500,"sellingPrice":2000}"#,
        )
        .unwrap();
        assert_eq!(price.margin(), 500.0);
        assert_eq!(price.margin_percent(), Some(25.0));
        assert_eq!(price.tenure_years, 1);
        assert_eq!(price.description(), "Gujarat Residential 1y");
        assert_eq!(margin_percent(100.0, 0.0), None);
    }

    #[test]
    fn test_grouped_prices_keep_their_value() {
        let dto = AmcPriceDto {
            state: "s1".into(),
            category: "residential".into(),
            cost_price: parse_number("12,000"),
            selling_price: parse_number("16,000"),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
        assert_eq!(dto.cost_price, Some(12000.0));
        assert_eq!(dto.margin_percent(), Some(25.0));
    }

    #[test]
    fn test_validate() {
        let dto = AmcPriceDto {
            state: "s1".into(),
            category: "commercial".into(),
            cost_price: Some(900.0),
            selling_price: Some(1200.0),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
        assert_eq!(dto.margin_percent(), Some(25.0));
        assert_eq!(
            AmcPriceDto {
                selling_price: None,
                ..dto.clone()
            }
            .validate(),
            Err(ValidationError::Required("Selling price"))
        );
        assert!(AmcPriceDto {
            tenure_years: Some(0),
            ..dto
        }
        .validate()
        .is_err());
    }
}
