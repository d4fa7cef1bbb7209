use contracts::domain::a008_amc_price::aggregate::AmcPrice;
use contracts::domain::location::LocationSelection;
use leptos::prelude::*;

use crate::domain::a004_installation_rate::ui::details::category_options;
use crate::shared::components::table::format_percent;
use crate::shared::components::ui::{Checkbox, Input, Select};
use crate::shared::config::config;
use crate::shared::crud::{DetailsFrame, DetailsViewModel};
use crate::shared::locations::{use_locations, LocationFilter};

#[component]
pub fn AmcPriceDetails(
    vm: DetailsViewModel<AmcPrice>,
    on_saved: Callback<Option<AmcPrice>>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let (category, set_category) = vm.text(|d| d.category.clone(), |d, v| d.category = v);
    let (capacity, set_capacity) = vm.number(|d| d.capacity_kw, |d, v| d.capacity_kw = v);
    let (cost, set_cost) = vm.number(|d| d.cost_price, |d, v| d.cost_price = v);
    let (selling, set_selling) = vm.number(|d| d.selling_price, |d, v| d.selling_price = v);
    let (tenure, set_tenure) = vm.count(|d| d.tenure_years, |d, v| d.tenure_years = v);
    let (active, set_active) = vm.active_flag();

    let locations = use_locations();
    vm.form.with_untracked(|d| {
        locations.restore(&LocationSelection {
            state_id: Some(d.state.clone()).filter(|s| !s.is_empty()),
            ..Default::default()
        })
    });
    let on_location = Callback::new(move |sel: LocationSelection| {
        vm.form.update(|d| d.state = sel.state_id.unwrap_or_default())
    });

    let margin = move || vm.form.with(|d| d.margin_percent());
    let margin_class = move || match margin() {
        Some(m) if m < 0.0 => "form__hint form__hint--error",
        Some(m) if m < config().pricing.low_margin_percent => "form__hint form__hint--warning",
        _ => "form__hint",
    };

    view! {
        <DetailsFrame vm on_saved on_cancel>
            <div class="form__row">
                <LocationFilter locations on_change=on_location depth=1 empty_label="Select..." required=true />
                <Select
                    label="Category"
                    value=category
                    on_change=set_category
                    options=Signal::stored(category_options())
                    required=true
                />
            </div>
            <div class="form__row">
                <Input label="Capacity (kW)" value=capacity on_input=set_capacity input_type="number" placeholder="Any" />
                <Input label="Tenure (years)" value=tenure on_input=set_tenure input_type="number" />
            </div>
            <div class="form__row">
                <Input label="Cost price (₹)" value=cost on_input=set_cost input_type="number" required=true />
                <Input label="Selling price (₹)" value=selling on_input=set_selling input_type="number" required=true />
            </div>
            <div class=margin_class>"Margin: " {move || format_percent(margin())}</div>
            <Checkbox label="Active" checked=active on_change=set_active />
        </DetailsFrame>
    }
}
