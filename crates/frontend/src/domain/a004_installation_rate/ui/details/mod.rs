use contracts::domain::a004_installation_rate::aggregate::{InstallationRate, CATEGORIES};
use contracts::domain::location::LocationSelection;
use leptos::prelude::*;

use crate::shared::components::table::format_money;
use crate::shared::components::ui::{Checkbox, Input, Select};
use crate::shared::crud::{DetailsFrame, DetailsViewModel};
use crate::shared::locations::{use_locations, LocationFilter};

/// Sample system size used for the payout preview
const PREVIEW_KW: f64 = 5.0;

pub fn category_options() -> Vec<(String, String)> {
    CATEGORIES
        .iter()
        .map(|(key, label)| (key.to_string(), label.to_string()))
        .collect()
}

#[component]
pub fn InstallationRateDetails(
    vm: DetailsViewModel<InstallationRate>,
    on_saved: Callback<Option<InstallationRate>>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let (category, set_category) = vm.text(|d| d.category.clone(), |d, v| d.category = v);
    let (min_kw, set_min_kw) = vm.number(|d| d.min_kw, |d, v| d.min_kw = v);
    let (max_kw, set_max_kw) = vm.number(|d| d.max_kw, |d, v| d.max_kw = v);
    let (rate, set_rate) = vm.number(|d| d.rate_per_kw, |d, v| d.rate_per_kw = v);
    let (active, set_active) = vm.active_flag();

    // District only narrows the cluster list; the rate stores state and cluster.
    let locations = use_locations();
    vm.form.with_untracked(|d| {
        locations.restore(&LocationSelection {
            state_id: Some(d.state.clone()).filter(|s| !s.is_empty()),
            cluster_id: d.cluster.clone(),
            ..Default::default()
        })
    });
    let on_location = Callback::new(move |sel: LocationSelection| {
        vm.form.update(|d| {
            d.state = sel.state_id.unwrap_or_default();
            d.cluster = sel.cluster_id;
        })
    });

    let preview = move || {
        vm.form
            .with(|d| d.rate_per_kw)
            .map(|r| format!("Payout for a {} kW system: {}", PREVIEW_KW, format_money(r * PREVIEW_KW)))
    };

    view! {
        <DetailsFrame vm on_saved on_cancel>
            <LocationFilter locations on_change=on_location empty_label="Select..." required=true />
            <Select
                label="Category"
                value=category
                on_change=set_category
                options=Signal::stored(category_options())
                required=true
            />
            <div class="form__row">
                <Input label="From (kW)" value=min_kw on_input=set_min_kw input_type="number" />
                <Input label="To (kW)" value=max_kw on_input=set_max_kw input_type="number" placeholder="No upper limit" />
                <Input label="Rate per kW (₹)" value=rate on_input=set_rate input_type="number" required=true />
            </div>
            {move || preview().map(|text| view! { <div class="form__hint">{text}</div> })}
            <Checkbox label="Active" checked=active on_change=set_active />
        </DetailsFrame>
    }
}
