use contracts::domain::a001_installer::aggregate::Installer;
use contracts::domain::a002_installer_agency::aggregate::InstallerAgency;
use contracts::domain::location::LocationSelection;
use leptos::prelude::*;

use crate::shared::components::ui::{Checkbox, Input, Select};
use crate::shared::crud::{use_reference_options, DetailsFrame, DetailsViewModel};
use crate::shared::locations::{use_locations, LocationFilter};

#[component]
pub fn InstallerDetails(
    vm: DetailsViewModel<Installer>,
    on_saved: Callback<Option<Installer>>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let (name, set_name) = vm.text(|d| d.name.clone(), |d, v| d.name = v);
    let (mobile, set_mobile) = vm.text(|d| d.mobile.clone(), |d, v| d.mobile = v);
    let (email, set_email) = vm.opt_text(|d| d.email.clone(), |d, v| d.email = v);
    let (agency, set_agency) = vm.text(|d| d.agency.clone(), |d, v| d.agency = v);
    let (experience, set_experience) =
        vm.count(|d| d.experience_years, |d, v| d.experience_years = v);
    let (active, set_active) = vm.active_flag();

    let agencies = use_reference_options::<InstallerAgency>(
        Some(agency.get_untracked()).filter(|id| !id.is_empty()),
    );

    let locations = use_locations();
    vm.form.with_untracked(|d| {
        locations.restore(&LocationSelection {
            state_id: d.state.clone(),
            district_id: d.district.clone(),
            cluster_id: d.cluster.clone(),
            ..Default::default()
        })
    });
    let on_location = Callback::new(move |sel: LocationSelection| {
        vm.form.update(|d| {
            d.state = sel.state_id;
            d.district = sel.district_id;
            d.cluster = sel.cluster_id;
        })
    });

    view! {
        <DetailsFrame vm on_saved on_cancel>
            <div class="form__row">
                <Input label="Name" value=name on_input=set_name required=true />
                <Input label="Mobile" value=mobile on_input=set_mobile input_type="tel" required=true />
            </div>
            <div class="form__row">
                <Input label="Email" value=email on_input=set_email input_type="email" />
                <Input label="Experience (years)" value=experience on_input=set_experience input_type="number" />
            </div>
            <Select label="Agency" value=agency on_change=set_agency options=agencies required=true />
            <LocationFilter locations on_change=on_location empty_label="Select..." />
            <Checkbox label="Active" checked=active on_change=set_active />
        </DetailsFrame>
    }
}
