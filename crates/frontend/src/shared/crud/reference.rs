use contracts::domain::common::AggregateRoot;
use contracts::shared::list_filter::ListFilter;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::crud_api;

/// `(id, name)` pairs of another settings list, for a reference select.
///
/// Only active records are offered; `keep_id` (the value already stored in
/// an edited record) stays selectable even when it was deactivated since.
pub fn reference_options<R: AggregateRoot>(records: &[R], keep_id: Option<&str>) -> Vec<(String, String)> {
    records
        .iter()
        .filter(|r| r.status().is_active() || keep_id == Some(r.id()))
        .map(|r| (r.id().to_string(), r.description()))
        .collect()
}

/// Load the options of a reference select once.
pub fn use_reference_options<R: AggregateRoot>(keep_id: Option<String>) -> Signal<Vec<(String, String)>> {
    let records = RwSignal::new(Vec::<R>::new());
    spawn_local(async move {
        match crud_api::fetch_list::<R>(&ListFilter::default()).await {
            Ok(items) => records.set(items),
            Err(e) => log::warn!("Failed to load {} options: {}", R::list_name(), e),
        }
    });
    Signal::derive(move || records.with(|items| reference_options(items, keep_id.as_deref())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a009_journey_stage::aggregate::JourneyStage;

    fn stage(id: &str, name: &str, status: &str) -> JourneyStage {
        serde_json::from_value(serde_json::json!({
            "_id": id, "name": name, "order": 1, "status": status
        }))
        .unwrap()
    }

    #[test]
    fn test_reference_options_skip_inactive() {
        let stages = vec![
            stage("s1", "Site Survey", "active"),
            stage("s2", "Legacy Step", "inactive"),
        ];
        assert_eq!(
            reference_options(&stages, None),
            vec![("s1".to_string(), "Site Survey".to_string())]
        );
        assert_eq!(reference_options(&stages, Some("s2")).len(), 2);
    }
}
