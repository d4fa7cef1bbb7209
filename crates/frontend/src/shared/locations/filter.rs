use contracts::domain::location::{LocationLevel, LocationSelection};
use leptos::prelude::*;
use thaw::*;

use super::hook::LocationsHandle;
use crate::shared::components::ui::Select;

const LEVELS: [LocationLevel; 3] = [
    LocationLevel::State,
    LocationLevel::District,
    LocationLevel::Cluster,
];

/// Dependent State / District / Cluster selects.
///
/// `depth` limits how many levels are shown (1 = state only, 3 = all).
/// A level is disabled until its parent is chosen. `on_change` receives the
/// whole selection after every change.
#[component]
pub fn LocationFilter(
    locations: LocationsHandle,
    on_change: Callback<LocationSelection>,
    #[prop(optional, default = 3)] depth: usize,
    /// Marks the state select as required
    #[prop(optional)]
    required: bool,
    /// Placeholder of empty selects ("All" in list filters)
    #[prop(optional, into)]
    empty_label: MaybeProp<String>,
) -> impl IntoView {
    let levels = LEVELS.iter().copied().take(depth.clamp(1, 3));

    view! {
        <div class="location-filter">
            {levels.map(|level| {
                let parent_missing = move || match level {
                    LocationLevel::District => locations.selected(LocationLevel::State).is_empty(),
                    LocationLevel::Cluster => locations.selected(LocationLevel::District).is_empty(),
                    _ => false,
                };
                let placeholder = move || {
                    if locations.is_loading(level) {
                        "Loading...".to_string()
                    } else {
                        empty_label.get().unwrap_or_else(|| format!("All {}s", level.label().to_lowercase()))
                    }
                };
                view! {
                    <Select
                        label=level.label()
                        value=Signal::derive(move || locations.selected(level))
                        options=Signal::derive(move || locations.options(level))
                        placeholder=Signal::derive(placeholder)
                        required=required && level == LocationLevel::State
                        disabled=Signal::derive(parent_missing)
                        on_change=Callback::new(move |id: String| {
                            locations.select(level, id);
                            on_change.run(locations.selection());
                        })
                    />
                }
            }).collect_view()}
            {move || locations.error().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Warning>{e}</MessageBar>
            })}
        </div>
    }
}
