use serde::{Deserialize, Serialize};

use crate::domain::common::entity_ref::{ref_id, ref_label};
use crate::domain::common::validation::{require_positive, require_text};
use crate::domain::common::{
    AggregateRoot, EntityMetadata, EntityRef, FormDto, RecordStatus, ValidationError,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleComponent {
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

/// Pre-priced solar kit (panels, inverter, structure) sold as one bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundlePlan {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<EntityRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster: Option<EntityRef>,
    #[serde(default)]
    pub capacity_kw: f64,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub components: Vec<BundleComponent>,
    #[serde(default)]
    pub status: RecordStatus,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl BundlePlan {
    pub fn price_per_kw(&self) -> Option<f64> {
        (self.capacity_kw > 0.0).then(|| self.price / self.capacity_kw)
    }

    pub fn state_name(&self) -> String {
        ref_label(&self.state)
    }
}

impl AggregateRoot for BundlePlan {
    type Dto = BundlePlanDto;

    fn id(&self) -> &str {
        &self.id
    }

    fn description(&self) -> String {
        format!("{} ({} kW)", self.name, self.capacity_kw)
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn to_dto(&self) -> BundlePlanDto {
        BundlePlanDto {
            id: Some(self.id.clone()),
            name: self.name.clone(),
            state: ref_id(&self.state),
            cluster: self.cluster.as_ref().map(|r| r.id().to_string()),
            capacity_kw: Some(self.capacity_kw),
            price: Some(self.price),
            components: self.components.clone(),
            status: self.status,
        }
    }

    fn search_text(&self) -> String {
        let components: Vec<&str> = self.components.iter().map(|c| c.name.as_str()).collect();
        format!("{} {} {}", self.name, self.state_name(), components.join(" "))
    }

    fn aggregate_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "bundle_plan"
    }

    fn resource_path() -> &'static str {
        "/sales-settings/bundles"
    }

    fn element_name() -> &'static str {
        "Bundle Plan"
    }

    fn list_name() -> &'static str {
        "Bundle Plans"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundlePlanDto {
    #[serde(skip)]
    pub id: Option<String>,
    pub name: String,
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    pub capacity_kw: Option<f64>,
    pub price: Option<f64>,
    pub components: Vec<BundleComponent>,
    pub status: RecordStatus,
}

impl BundlePlanDto {
    pub fn add_component(&mut self) {
        self.components.push(BundleComponent {
            name: String::new(),
            quantity: 1,
        });
    }

    pub fn remove_component(&mut self, index: usize) {
        if index < self.components.len() {
            self.components.remove(index);
        }
    }
}

impl FormDto for BundlePlanDto {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("Bundle name", &self.name)?;
        require_text("State", &self.state)?;
        require_positive("Capacity (kW)", self.capacity_kw)?;
        require_positive("Price", self.price)?;
        for component in &self.components {
            require_text("Component name", &component.name)?;
            if component.quantity == 0 {
                return Err(ValidationError::invalid(
                    "Component quantity",
                    "must be at least 1",
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

    #[test]
    fn test_validate_components() {
        let mut dto = BundlePlanDto {
            name: "3 kW Rooftop".into(),
            state: "s1".into(),
            capacity_kw: Some(3.0),
            price: Some(165000.0),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());

        dto.add_component();
        assert_eq!(dto.validate(), Err(ValidationError::Required("Component name")));
        dto.components[0].name = "540W Mono PERC".into();
        assert!(dto.validate().is_ok());

        dto.remove_component(0);
        dto.remove_component(5);
        assert!(dto.components.is_empty());

        dto.capacity_kw = Some(0.0);
        assert_eq!(dto.validate().unwrap_err().field(), "Capacity (kW)");
    }

    #[test]
    fn test_price_per_kw() {
        let plan: BundlePlan = serde_json::from_str(
            r#"{"_id":"b1","name":"Home 3","capacityKw":3,"price":150000,
                "components":[{"name":"Inverter"}]}"#,
        )
        .unwrap();
        assert_eq!(plan.price_per_kw(), Some(50000.0));
        assert_eq!(plan.components[0].quantity, 1);
        assert_eq!(plan.description(), "Home 3 (3 kW)");
    }
}
