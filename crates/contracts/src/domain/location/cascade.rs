//! Cascading location selector state.
//!
//! Selecting a parent clears every descendant selection and option list and
//! asks for exactly one fetch: the options of the immediate child level.
//! Each fetch carries a ticket; a response is applied only if its ticket is
//! still the one awaited for that level, so a slow response for a parent the
//! user already left can never overwrite the lists of the newer parent.

use serde::{Deserialize, Serialize};

use super::{Location, LocationLevel};

/// Fetch the caller must perform and report back with the same ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub level: LocationLevel,
    /// Level of `parent_id`; the direct parent except when a saved cluster
    /// is resolved from its state.
    pub parent_level: Option<LocationLevel>,
    pub parent_id: Option<String>,
    pub ticket: u64,
}

impl FetchRequest {
    /// `(param, value)` filter for the request query string, if any.
    pub fn query(&self) -> Option<(&'static str, &str)> {
        let param = self.parent_level?.id_param();
        let value = self.parent_id.as_deref()?;
        Some((param, value))
    }

    fn resolves_cluster(&self) -> bool {
        self.level == LocationLevel::Cluster && self.parent_level == Some(LocationLevel::State)
    }
}

/// Currently selected ids, also used as the list filter of settings pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSelection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<String>,
}

impl LocationSelection {
    pub fn get(&self, level: LocationLevel) -> Option<&str> {
        match level {
            LocationLevel::Country => self.country_id.as_deref(),
            LocationLevel::State => self.state_id.as_deref(),
            LocationLevel::District => self.district_id.as_deref(),
            LocationLevel::Cluster => self.cluster_id.as_deref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        LocationLevel::ALL.iter().all(|level| self.get(*level).is_none())
    }
}

#[derive(Debug, Clone, Default)]
pub struct LocationCascade {
    options: [Vec<Location>; 4],
    selected: [Option<String>; 4],
    awaiting: [Option<u64>; 4],
    next_ticket: u64,
    error: Option<String>,
}

impl LocationCascade {
    pub fn new() -> Self {
        Self::default()
    }

    fn issue(&mut self, level: LocationLevel, parent_id: Option<String>) -> FetchRequest {
        self.issue_under(level, level.parent(), parent_id)
    }

    fn issue_under(
        &mut self,
        level: LocationLevel,
        parent_level: Option<LocationLevel>,
        parent_id: Option<String>,
    ) -> FetchRequest {
        self.next_ticket += 1;
        let ticket = self.next_ticket;
        self.awaiting[level.index()] = Some(ticket);
        FetchRequest {
            level,
            parent_level,
            parent_id,
            ticket,
        }
    }

    fn clear_below(&mut self, level: LocationLevel) {
        let mut next = level.child();
        while let Some(child) = next {
            let i = child.index();
            self.selected[i] = None;
            self.options[i].clear();
            self.awaiting[i] = None;
            next = child.child();
        }
    }

    /// Initial fetch of the state list (of the selected country, or all).
    pub fn load_states(&mut self) -> FetchRequest {
        let country = self.selected[LocationLevel::Country.index()].clone();
        self.issue(LocationLevel::State, country)
    }

    /// Select (or clear, with `None`/empty) the value of `level`.
    ///
    /// Returns the single fetch for the immediate child level, or `None`
    /// when the selection was cleared or `level` has no child.
    pub fn select(&mut self, level: LocationLevel, id: Option<String>) -> Option<FetchRequest> {
        let id = id.filter(|value| !value.trim().is_empty());
        self.selected[level.index()] = id.clone();
        self.clear_below(level);
        self.error = None;

        let child = level.child()?;
        let parent_id = id?;
        Some(self.issue(child, Some(parent_id)))
    }

    pub fn select_state(&mut self, id: Option<String>) -> Option<FetchRequest> {
        self.select(LocationLevel::State, id)
    }

    pub fn select_district(&mut self, id: Option<String>) -> Option<FetchRequest> {
        self.select(LocationLevel::District, id)
    }

    pub fn select_cluster(&mut self, id: Option<String>) -> Option<FetchRequest> {
        self.select(LocationLevel::Cluster, id)
    }

    /// Restore a saved selection (edit forms, persisted filters).
    ///
    /// Sets every level at once and requests the option lists of each level
    /// whose parent is known, without clearing the restored children.
    ///
    /// Records that keep a cluster but no district get the clusters of their
    /// state; `apply` then selects the district the saved cluster belongs to.
    pub fn restore(&mut self, selection: &LocationSelection) -> Vec<FetchRequest> {
        let mut requests = Vec::new();
        for level in LocationLevel::ALL {
            self.selected[level.index()] = selection.get(level).map(str::to_string);
        }
        for level in LocationLevel::ALL {
            if let (Some(child), Some(id)) = (level.child(), selection.get(level)) {
                requests.push(self.issue(child, Some(id.to_string())));
            }
        }
        if let (Some(state_id), None, Some(_)) = (
            selection.state_id.as_deref(),
            selection.district_id.as_deref(),
            selection.cluster_id.as_deref(),
        ) {
            requests.push(self.issue_under(
                LocationLevel::Cluster,
                Some(LocationLevel::State),
                Some(state_id.to_string()),
            ));
        }
        requests
    }

    /// Pick the district of the restored cluster out of a state-wide list and
    /// keep only that district's clusters as options.
    fn resolve_cluster(&mut self, items: Vec<Location>) -> Vec<Location> {
        let Some(cluster_id) = self.selected(LocationLevel::Cluster) else {
            return items;
        };
        let district_id = items
            .iter()
            .find(|location| location.id == cluster_id)
            .and_then(|location| location.parent_id(LocationLevel::Cluster))
            .map(str::to_string);
        match district_id {
            Some(district_id) => {
                let siblings = items
                    .into_iter()
                    .filter(|location| {
                        location.parent_id(LocationLevel::Cluster) == Some(district_id.as_str())
                    })
                    .collect();
                self.selected[LocationLevel::District.index()] = Some(district_id);
                siblings
            }
            None => items,
        }
    }

    /// Apply a fetched list. Returns `false` (and changes nothing) for stale
    /// or unexpected responses.
    pub fn apply(&mut self, request: &FetchRequest, items: Vec<Location>) -> bool {
        let i = request.level.index();
        if self.awaiting[i] != Some(request.ticket) {
            return false;
        }
        self.awaiting[i] = None;
        self.options[i] = if request.resolves_cluster() {
            self.resolve_cluster(items)
        } else {
            items
        };
        true
    }

    /// Record a failed fetch. Stale failures are ignored like stale data.
    pub fn fail(&mut self, request: &FetchRequest, message: &str) -> bool {
        let i = request.level.index();
        if self.awaiting[i] != Some(request.ticket) {
            return false;
        }
        self.awaiting[i] = None;
        self.error = Some(format!(
            "Failed to load {} list: {}",
            request.level.label().to_lowercase(),
            message
        ));
        true
    }

    pub fn options(&self, level: LocationLevel) -> &[Location] {
        &self.options[level.index()]
    }

    pub fn selected(&self, level: LocationLevel) -> Option<&str> {
        self.selected[level.index()].as_deref()
    }

    pub fn is_loading(&self, level: LocationLevel) -> bool {
        self.awaiting[level.index()].is_some()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn states(&self) -> &[Location] {
        self.options(LocationLevel::State)
    }

    pub fn districts(&self) -> &[Location] {
        self.options(LocationLevel::District)
    }

    pub fn clusters(&self) -> &[Location] {
        self.options(LocationLevel::Cluster)
    }

    /// Display name of the selected option at `level`.
    pub fn selected_name(&self, level: LocationLevel) -> Option<&str> {
        let id = self.selected(level)?;
        self.options(level)
            .iter()
            .find(|location| location.id == id)
            .map(|location| location.name.as_str())
    }

    pub fn selection(&self) -> LocationSelection {
        LocationSelection {
            country_id: self.selected[LocationLevel::Country.index()].clone(),
            state_id: self.selected[LocationLevel::State.index()].clone(),
            district_id: self.selected[LocationLevel::District.index()].clone(),
            cluster_id: self.selected[LocationLevel::Cluster.index()].clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::EntityRef;

    fn loc(id: &str, name: &str) -> Location {
        Location {
            id: id.to_string(),
            name: name.to_string(),
            code: None,
            country: None,
            state: None,
            district: None,
        }
    }

    /// Cascade with states loaded, state `s1` selected and its districts in.
    fn with_state_selected() -> LocationCascade {
        let mut cascade = LocationCascade::new();
        let states = cascade.load_states();
        assert!(cascade.apply(&states, vec![loc("s1", "Gujarat"), loc("s2", "Rajasthan")]));

        let districts = cascade.select_state(Some("s1".into())).unwrap();
        assert!(cascade.apply(&districts, vec![loc("d1", "Ahmedabad"), loc("d2", "Surat")]));
        cascade
    }

    #[test]
    fn test_select_parent_issues_one_child_fetch() {
        let mut cascade = LocationCascade::new();
        let request = cascade.select_state(Some("s1".into())).unwrap();
        assert_eq!(request.level, LocationLevel::District);
        assert_eq!(request.query(), Some(("stateId", "s1")));
        assert!(cascade.is_loading(LocationLevel::District));
        assert!(!cascade.is_loading(LocationLevel::Cluster));
    }

    #[test]
    fn test_select_parent_clears_descendants() {
        let mut cascade = with_state_selected();
        let clusters = cascade.select_district(Some("d1".into())).unwrap();
        assert!(cascade.apply(&clusters, vec![loc("c1", "Bopal")]));
        cascade.select_cluster(Some("c1".into()));

        let request = cascade.select_state(Some("s2".into()));
        assert_eq!(request.map(|r| r.level), Some(LocationLevel::District));
        assert_eq!(cascade.selected(LocationLevel::State), Some("s2"));
        assert_eq!(cascade.selected(LocationLevel::District), None);
        assert_eq!(cascade.selected(LocationLevel::Cluster), None);
        assert!(cascade.districts().is_empty());
        assert!(cascade.clusters().is_empty());
        // Sibling/ancestor lists are untouched.
        assert_eq!(cascade.states().len(), 2);
    }

    #[test]
    fn test_leaf_and_cleared_selection_fetch_nothing() {
        let mut cascade = with_state_selected();
        assert!(cascade.select_cluster(Some("c1".into())).is_none());
        assert!(cascade.select_state(None).is_none());
        assert!(cascade.select_state(Some("  ".into())).is_none());
        assert_eq!(cascade.selected(LocationLevel::State), None);
        assert!(cascade.districts().is_empty());
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut cascade = LocationCascade::new();
        let first = cascade.select_state(Some("s1".into())).unwrap();
        let second = cascade.select_state(Some("s2".into())).unwrap();

        assert!(cascade.apply(&second, vec![loc("d9", "Jaipur")]));
        // The response for s1 resolves late and must not win.
        assert!(!cascade.apply(&first, vec![loc("d1", "Ahmedabad")]));
        assert_eq!(cascade.districts()[0].name, "Jaipur");
    }

    #[test]
    fn test_response_after_parent_cleared_is_dropped() {
        let mut cascade = LocationCascade::new();
        let pending = cascade.select_state(Some("s1".into())).unwrap();
        cascade.select_state(None);
        assert!(!cascade.apply(&pending, vec![loc("d1", "Ahmedabad")]));
        assert!(cascade.districts().is_empty());
    }

    #[test]
    fn test_failure_sets_error_and_stale_failure_is_ignored() {
        let mut cascade = LocationCascade::new();
        let first = cascade.select_state(Some("s1".into())).unwrap();
        let second = cascade.select_state(Some("s2".into())).unwrap();

        assert!(!cascade.fail(&first, "timeout"));
        assert!(cascade.error().is_none());

        assert!(cascade.fail(&second, "HTTP 500"));
        assert_eq!(cascade.error(), Some("Failed to load district list: HTTP 500"));
        assert!(!cascade.is_loading(LocationLevel::District));

        // A fresh selection clears the error.
        cascade.select_state(Some("s1".into()));
        assert!(cascade.error().is_none());
    }

    #[test]
    fn test_restore_keeps_children_and_requests_lists() {
        let mut cascade = LocationCascade::new();
        let selection = LocationSelection {
            country_id: None,
            state_id: Some("s1".into()),
            district_id: Some("d1".into()),
            cluster_id: Some("c1".into()),
        };
        let requests = cascade.restore(&selection);
        let levels: Vec<_> = requests.iter().map(|r| r.level).collect();
        assert_eq!(levels, vec![LocationLevel::District, LocationLevel::Cluster]);
        assert_eq!(cascade.selection(), selection);
    }

    fn cluster_in(id: &str, name: &str, district: &str) -> Location {
        Location {
            district: Some(EntityRef::Id(district.to_string())),
            ..loc(id, name)
        }
    }

    #[test]
    fn test_restore_cluster_without_district() {
        let mut cascade = LocationCascade::new();
        let requests = cascade.restore(&LocationSelection {
            state_id: Some("s1".into()),
            cluster_id: Some("c2".into()),
            ..Default::default()
        });
        let clusters = requests
            .iter()
            .find(|r| r.level == LocationLevel::Cluster)
            .cloned()
            .unwrap();
        assert_eq!(clusters.query(), Some(("stateId", "s1")));
        assert!(cascade.is_loading(LocationLevel::Cluster));

        assert!(cascade.apply(
            &clusters,
            vec![
                cluster_in("c1", "Bopal", "d1"),
                cluster_in("c2", "Adajan", "d2"),
                cluster_in("c3", "Vesu", "d2"),
            ],
        ));
        assert_eq!(cascade.selected(LocationLevel::District), Some("d2"));
        assert_eq!(cascade.selected(LocationLevel::Cluster), Some("c2"));
        let names: Vec<_> = cascade.clusters().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Adajan", "Vesu"]);
        assert_eq!(cascade.selected_name(LocationLevel::Cluster), Some("Adajan"));
    }

    #[test]
    fn test_restore_state_only_requests_districts() {
        let mut cascade = LocationCascade::new();
        let requests = cascade.restore(&LocationSelection {
            state_id: Some("s1".into()),
            ..Default::default()
        });
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].level, LocationLevel::District);
    }

    #[test]
    fn test_selection_and_names() {
        let cascade = with_state_selected();
        let selection = cascade.selection();
        assert_eq!(selection.state_id.as_deref(), Some("s1"));
        assert!(selection.district_id.is_none());
        assert!(!selection.is_empty());
        assert_eq!(cascade.selected_name(LocationLevel::State), Some("Gujarat"));
        assert!(LocationSelection::default().is_empty());
    }
}
