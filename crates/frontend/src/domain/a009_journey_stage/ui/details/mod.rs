use contracts::domain::a009_journey_stage::aggregate::JourneyStage;
use leptos::prelude::*;

use crate::shared::components::ui::{Checkbox, Input, Textarea};
use crate::shared::crud::{DetailsFrame, DetailsViewModel};

/// Stage form. A new stage is placed after the last one (`next_order`).
#[component]
pub fn JourneyStageDetails(
    vm: DetailsViewModel<JourneyStage>,
    on_saved: Callback<Option<JourneyStage>>,
    on_cancel: Callback<()>,
    #[prop(optional)] next_order: Option<u32>,
) -> impl IntoView {
    vm.form.update(|d| {
        if d.id.is_none() && d.order.is_none() {
            d.order = next_order;
        }
    });

    let (name, set_name) = vm.text(|d| d.name.clone(), |d, v| d.name = v);
    let (order, set_order) = vm.count(|d| d.order, |d, v| d.order = v);
    let (description, set_description) =
        vm.opt_text(|d| d.description.clone(), |d, v| d.description = v);
    let mandatory = Signal::derive(move || vm.form.with(|d| d.is_mandatory));
    let set_mandatory = Callback::new(move |v: bool| vm.form.update(|d| d.is_mandatory = v));
    let (active, set_active) = vm.active_flag();

    view! {
        <DetailsFrame vm on_saved on_cancel>
            <div class="form__row">
                <Input label="Stage name" value=name on_input=set_name required=true />
                <Input label="Order" value=order on_input=set_order input_type="number" required=true />
            </div>
            <Textarea label="Description" value=description on_input=set_description />
            <Checkbox label="Mandatory stage" checked=mandatory on_change=set_mandatory />
            <Checkbox label="Active" checked=active on_change=set_active />
        </DetailsFrame>
    }
}
