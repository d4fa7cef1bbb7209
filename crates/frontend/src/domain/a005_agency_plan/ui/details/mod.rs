use contracts::domain::a005_agency_plan::aggregate::AgencyPlan;
use leptos::prelude::*;

use crate::shared::components::ui::{Checkbox, Input, Textarea};
use crate::shared::crud::{DetailsFrame, DetailsViewModel};

#[component]
pub fn AgencyPlanDetails(
    vm: DetailsViewModel<AgencyPlan>,
    on_saved: Callback<Option<AgencyPlan>>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let (name, set_name) = vm.text(|d| d.name.clone(), |d, v| d.name = v);
    let (description, set_description) =
        vm.opt_text(|d| d.description.clone(), |d, v| d.description = v);
    let (price, set_price) = vm.number(|d| d.price, |d, v| d.price = v);
    let (validity, set_validity) = vm.count(|d| d.validity_days, |d, v| d.validity_days = v);
    let (max_installers, set_max_installers) =
        vm.count(|d| d.max_installers, |d, v| d.max_installers = v);
    let (active, set_active) = vm.active_flag();

    // Raw line keeps a trailing comma while the next feature is typed
    let features = RwSignal::new(vm.form.with_untracked(|d| d.features_line()));
    let set_features = Callback::new(move |line: String| {
        vm.form.update(|d| d.set_features_from_line(&line));
        features.set(line);
    });

    view! {
        <DetailsFrame vm on_saved on_cancel>
            <Input label="Plan name" value=name on_input=set_name required=true />
            <Textarea label="Description" value=description on_input=set_description rows=2 />
            <div class="form__row">
                <Input label="Price (₹)" value=price on_input=set_price input_type="number" required=true />
                <Input label="Validity (days)" value=validity on_input=set_validity input_type="number" placeholder="Unlimited" />
                <Input label="Max installers" value=max_installers on_input=set_max_installers input_type="number" required=true />
            </div>
            <Input
                label="Features"
                value=features
                on_input=set_features
                placeholder="Lead access, Priority support, ..."
            />
            <Checkbox label="Active" checked=active on_change=set_active />
        </DetailsFrame>
    }
}
