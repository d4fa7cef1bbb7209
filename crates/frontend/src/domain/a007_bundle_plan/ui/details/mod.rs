use contracts::domain::a007_bundle_plan::aggregate::BundlePlan;
use contracts::domain::common::validation::parse_count;
use contracts::domain::location::LocationSelection;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::table::format_money;
use crate::shared::components::ui::{Checkbox, Input};
use crate::shared::crud::{DetailsFrame, DetailsViewModel};
use crate::shared::icons::icon;
use crate::shared::locations::{use_locations, LocationFilter};

/// Editable rows of the bundle's bill of materials.
#[component]
fn ComponentsEditor(vm: DetailsViewModel<BundlePlan>) -> impl IntoView {
    // Rows are rebuilt only when one is added or removed, not on every keystroke
    let count = Memo::new(move |_| vm.form.with(|d| d.components.len()));

    view! {
        <div class="form__group">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <label class="form__label">"Components"</label>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| vm.form.update(|d| d.add_component())
                >
                    {icon("plus")}
                    " Add"
                </Button>
            </Flex>
            {move || (0..count.get()).map(|index| {
                let name = Signal::derive(move || {
                    vm.form.with(|d| d.components.get(index).map(|c| c.name.clone()).unwrap_or_default())
                });
                let quantity = Signal::derive(move || {
                    vm.form.with(|d| d.components.get(index).map(|c| c.quantity.to_string()).unwrap_or_default())
                });
                view! {
                    <div class="form__row bundle-component">
                        <Input
                            value=name
                            placeholder="Panel 540 Wp"
                            on_input=Callback::new(move |v: String| vm.form.update(|d| {
                                if let Some(c) = d.components.get_mut(index) {
                                    c.name = v;
                                }
                            }))
                        />
                        <Input
                            value=quantity
                            input_type="number"
                            on_input=Callback::new(move |v: String| vm.form.update(|d| {
                                if let Some(c) = d.components.get_mut(index) {
                                    c.quantity = parse_count(&v).unwrap_or(0);
                                }
                            }))
                        />
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| vm.form.update(|d| d.remove_component(index))
                        >
                            {icon("delete")}
                        </Button>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[component]
pub fn BundlePlanDetails(
    vm: DetailsViewModel<BundlePlan>,
    on_saved: Callback<Option<BundlePlan>>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let (name, set_name) = vm.text(|d| d.name.clone(), |d, v| d.name = v);
    let (capacity, set_capacity) = vm.number(|d| d.capacity_kw, |d, v| d.capacity_kw = v);
    let (price, set_price) = vm.number(|d| d.price, |d, v| d.price = v);
    let (active, set_active) = vm.active_flag();

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

    let per_kw = move || {
        vm.form.with(|d| match (d.capacity_kw, d.price) {
            (Some(kw), Some(price)) if kw > 0.0 => Some(format!("{} per kW", format_money(price / kw))),
            _ => None,
        })
    };

    view! {
        <DetailsFrame vm on_saved on_cancel>
            <Input label="Bundle name" value=name on_input=set_name required=true />
            <LocationFilter locations on_change=on_location empty_label="Select..." required=true />
            <div class="form__row">
                <Input label="Capacity (kW)" value=capacity on_input=set_capacity input_type="number" required=true />
                <Input label="Price (₹)" value=price on_input=set_price input_type="number" required=true />
            </div>
            {move || per_kw().map(|text| view! { <div class="form__hint">{text}</div> })}
            <ComponentsEditor vm />
            <Checkbox label="Active" checked=active on_change=set_active />
        </DetailsFrame>
    }
}
