//! Location hierarchy: Country → State → District → Cluster.

pub mod cascade;

pub use cascade::{FetchRequest, LocationCascade, LocationSelection};

use serde::{Deserialize, Serialize};

use crate::domain::common::EntityRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationLevel {
    Country,
    State,
    District,
    Cluster,
}

impl LocationLevel {
    pub const ALL: [LocationLevel; 4] = [
        LocationLevel::Country,
        LocationLevel::State,
        LocationLevel::District,
        LocationLevel::Cluster,
    ];

    /// API path of the level's list endpoint, relative to the API base.
    pub fn endpoint(&self) -> &'static str {
        match self {
            LocationLevel::Country => "/locations/countries",
            LocationLevel::State => "/locations/states",
            LocationLevel::District => "/locations/districts",
            LocationLevel::Cluster => "/locations/clusters",
        }
    }

    /// Query parameter carrying an id of this level.
    pub fn id_param(&self) -> &'static str {
        match self {
            LocationLevel::Country => "countryId",
            LocationLevel::State => "stateId",
            LocationLevel::District => "districtId",
            LocationLevel::Cluster => "clusterId",
        }
    }

    /// Query parameter that filters this level by its parent.
    pub fn parent_param(&self) -> Option<&'static str> {
        self.parent().map(|parent| parent.id_param())
    }

    pub fn parent(&self) -> Option<LocationLevel> {
        match self {
            LocationLevel::Country => None,
            LocationLevel::State => Some(LocationLevel::Country),
            LocationLevel::District => Some(LocationLevel::State),
            LocationLevel::Cluster => Some(LocationLevel::District),
        }
    }

    pub fn child(&self) -> Option<LocationLevel> {
        match self {
            LocationLevel::Country => Some(LocationLevel::State),
            LocationLevel::State => Some(LocationLevel::District),
            LocationLevel::District => Some(LocationLevel::Cluster),
            LocationLevel::Cluster => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LocationLevel::Country => "Country",
            LocationLevel::State => "State",
            LocationLevel::District => "District",
            LocationLevel::Cluster => "Cluster",
        }
    }

    fn index(&self) -> usize {
        match self {
            LocationLevel::Country => 0,
            LocationLevel::State => 1,
            LocationLevel::District => 2,
            LocationLevel::Cluster => 3,
        }
    }
}

/// One option of a location dropdown.
///
/// The four levels share a shape on the wire: `_id`, `name` and references
/// to the ancestors the server chose to include.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<EntityRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<EntityRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<EntityRef>,
}

impl Location {
    /// Id of the direct parent when this record sits at `level`.
    pub fn parent_id(&self, level: LocationLevel) -> Option<&str> {
        let parent = match level {
            LocationLevel::Country => None,
            LocationLevel::State => self.country.as_ref(),
            LocationLevel::District => self.state.as_ref(),
            LocationLevel::Cluster => self.district.as_ref(),
        };
        parent.map(|p| p.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_parent_by_level() {
        let district: Location =
            serde_json::from_str(r#"{"_id":"d1","name":"Ahmedabad","state":"s1"}"#).unwrap();
        assert_eq!(district.parent_id(LocationLevel::District), Some("s1"));

        let cluster: Location = serde_json::from_str(
            r#"{"_id":"c1","name":"Bopal","state":"s1","district":{"_id":"d1","name":"Ahmedabad"}}"#,
        )
        .unwrap();
        assert_eq!(cluster.parent_id(LocationLevel::Cluster), Some("d1"));
        assert_eq!(cluster.parent_id(LocationLevel::Country), None);
    }

    #[test]
    fn test_level_chain() {
        assert_eq!(LocationLevel::State.child(), Some(LocationLevel::District));
        assert_eq!(LocationLevel::District.child(), Some(LocationLevel::Cluster));
        assert_eq!(LocationLevel::Cluster.child(), None);
        assert_eq!(LocationLevel::Cluster.parent_param(), Some("districtId"));
        assert_eq!(LocationLevel::District.parent(), Some(LocationLevel::State));
        assert_eq!(LocationLevel::Country.parent_param(), None);
    }
}
