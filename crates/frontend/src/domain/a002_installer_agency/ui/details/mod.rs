use contracts::domain::a002_installer_agency::aggregate::InstallerAgency;
use contracts::domain::a005_agency_plan::aggregate::AgencyPlan;
use contracts::domain::location::LocationSelection;
use leptos::prelude::*;

use crate::shared::components::ui::{Checkbox, Input, Select};
use crate::shared::crud::{use_reference_options, DetailsFrame, DetailsViewModel};
use crate::shared::locations::{use_locations, LocationFilter};

#[component]
pub fn InstallerAgencyDetails(
    vm: DetailsViewModel<InstallerAgency>,
    on_saved: Callback<Option<InstallerAgency>>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let (name, set_name) = vm.text(|d| d.name.clone(), |d, v| d.name = v);
    let (contact, set_contact) = vm.text(|d| d.contact_person.clone(), |d, v| d.contact_person = v);
    let (mobile, set_mobile) = vm.text(|d| d.mobile.clone(), |d, v| d.mobile = v);
    let (email, set_email) = vm.opt_text(|d| d.email.clone(), |d, v| d.email = v);
    let (gst, set_gst) = vm.opt_text(|d| d.gst_number.clone(), |d, v| d.gst_number = v);
    let (plan, set_plan) = vm.opt_text(|d| d.plan.clone(), |d, v| d.plan = v);
    let (active, set_active) = vm.active_flag();

    let plans = use_reference_options::<AgencyPlan>(vm.form.with_untracked(|d| d.plan.clone()));

    let locations = use_locations();
    vm.form.with_untracked(|d| {
        locations.restore(&LocationSelection {
            state_id: Some(d.state.clone()).filter(|s| !s.is_empty()),
            district_id: d.district.clone(),
            cluster_id: d.cluster.clone(),
            ..Default::default()
        })
    });
    let on_location = Callback::new(move |sel: LocationSelection| {
        vm.form.update(|d| {
            d.state = sel.state_id.unwrap_or_default();
            d.district = sel.district_id;
            d.cluster = sel.cluster_id;
        })
    });

    view! {
        <DetailsFrame vm on_saved on_cancel>
            <Input label="Agency name" value=name on_input=set_name required=true />
            <div class="form__row">
                <Input label="Contact person" value=contact on_input=set_contact required=true />
                <Input label="Mobile" value=mobile on_input=set_mobile input_type="tel" required=true />
            </div>
            <div class="form__row">
                <Input label="Email" value=email on_input=set_email input_type="email" />
                <Input label="GSTIN" value=gst on_input=set_gst placeholder="24ABCDE1234F1Z5" />
            </div>
            <Select label="Plan" value=plan on_change=set_plan options=plans placeholder="No plan" />
            <LocationFilter locations on_change=on_location empty_label="Select..." required=true />
            <Checkbox label="Active" checked=active on_change=set_active />
        </DetailsFrame>
    }
}
