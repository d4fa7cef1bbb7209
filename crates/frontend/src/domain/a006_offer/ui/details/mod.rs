use contracts::domain::a006_offer::aggregate::{DiscountType, Offer};
use contracts::domain::location::LocationSelection;
use leptos::prelude::*;

use crate::shared::components::ui::{Checkbox, Input, Select, Textarea};
use crate::shared::components::DateInput;
use crate::shared::crud::{DetailsFrame, DetailsViewModel};
use crate::shared::date_utils::{date_input_value, parse_date_input};
use crate::shared::locations::{use_locations, LocationFilter};

fn discount_type_options() -> Vec<(String, String)> {
    DiscountType::ALL
        .iter()
        .map(|t| (t.as_str().to_string(), t.label().to_string()))
        .collect()
}

#[component]
pub fn OfferDetails(
    vm: DetailsViewModel<Offer>,
    on_saved: Callback<Option<Offer>>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let (title, set_title) = vm.text(|d| d.title.clone(), |d, v| d.title = v);
    let (description, set_description) =
        vm.opt_text(|d| d.description.clone(), |d, v| d.description = v);
    let (discount_type, set_discount_type) = vm.text(
        |d| d.discount_type.as_str().to_string(),
        |d, v| d.discount_type = DiscountType::from_str_lossy(&v),
    );
    let (discount, set_discount) = vm.number(|d| d.discount_value, |d, v| d.discount_value = v);
    let (valid_from, set_valid_from) = vm.text(
        |d| date_input_value(d.valid_from),
        |d, v| d.valid_from = parse_date_input(&v),
    );
    let (valid_to, set_valid_to) = vm.text(
        |d| date_input_value(d.valid_to),
        |d, v| d.valid_to = parse_date_input(&v),
    );
    let (active, set_active) = vm.active_flag();

    let discount_label = move || match vm.form.with(|d| d.discount_type) {
        DiscountType::Percentage => "Discount (%)",
        DiscountType::Flat => "Discount (₹)",
    };

    // An offer without a location applies everywhere
    let locations = use_locations();
    vm.form.with_untracked(|d| {
        locations.restore(&LocationSelection {
            state_id: d.state.clone(),
            cluster_id: d.cluster.clone(),
            ..Default::default()
        })
    });
    let on_location = Callback::new(move |sel: LocationSelection| {
        vm.form.update(|d| {
            d.state = sel.state_id;
            d.cluster = sel.cluster_id;
        })
    });

    view! {
        <DetailsFrame vm on_saved on_cancel>
            <Input label="Title" value=title on_input=set_title required=true />
            <Textarea label="Description" value=description on_input=set_description rows=2 />
            <div class="form__row">
                <Select
                    label="Discount type"
                    value=discount_type
                    on_change=set_discount_type
                    options=Signal::stored(discount_type_options())
                />
                <Input
                    label=Signal::derive(move || discount_label().to_string())
                    value=discount
                    on_input=set_discount
                    input_type="number"
                    required=true
                />
            </div>
            <div class="form__row">
                <DateInput label="Valid from" value=valid_from on_change=set_valid_from />
                <DateInput label="Valid to" value=valid_to on_change=set_valid_to min=valid_from />
            </div>
            <LocationFilter locations on_change=on_location empty_label="All" />
            <Checkbox label="Active" checked=active on_change=set_active />
        </DetailsFrame>
    }
}
