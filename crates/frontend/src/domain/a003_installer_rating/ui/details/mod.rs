use contracts::domain::a001_installer::aggregate::Installer;
use contracts::domain::a003_installer_rating::aggregate::{InstallerRating, MAX_RATING, MIN_RATING};
use leptos::prelude::*;

use crate::shared::components::ui::{Checkbox, Input, Select, Textarea};
use crate::shared::crud::{use_reference_options, DetailsFrame, DetailsViewModel};

fn rating_options() -> Vec<(String, String)> {
    (MIN_RATING..=MAX_RATING)
        .rev()
        .map(|r| {
            let label = format!("{} {}", "★".repeat(r as usize), r);
            (r.to_string(), label)
        })
        .collect()
}

#[component]
pub fn InstallerRatingDetails(
    vm: DetailsViewModel<InstallerRating>,
    on_saved: Callback<Option<InstallerRating>>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let (installer, set_installer) = vm.text(|d| d.installer.clone(), |d, v| d.installer = v);
    let (rating, set_rating) = vm.text(
        |d| d.rating.map(|r| r.to_string()).unwrap_or_default(),
        |d, v| d.rating = v.parse().ok(),
    );
    let (project, set_project) = vm.opt_text(|d| d.project_code.clone(), |d, v| d.project_code = v);
    let (remarks, set_remarks) = vm.opt_text(|d| d.remarks.clone(), |d, v| d.remarks = v);
    let (active, set_active) = vm.active_flag();

    let installers = use_reference_options::<Installer>(
        Some(installer.get_untracked()).filter(|id| !id.is_empty()),
    );

    view! {
        <DetailsFrame vm on_saved on_cancel>
            <Select label="Installer" value=installer on_change=set_installer options=installers required=true />
            <div class="form__row">
                <Select
                    label="Rating"
                    value=rating
                    on_change=set_rating
                    options=Signal::stored(rating_options())
                    required=true
                />
                <Input label="Project code" value=project on_input=set_project />
            </div>
            <Textarea label="Remarks" value=remarks on_input=set_remarks />
            <Checkbox label="Active" checked=active on_change=set_active />
        </DetailsFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_options_best_first() {
        let options = rating_options();
        assert_eq!(options.len(), 5);
        assert_eq!(options[0].0, "5");
        assert_eq!(options[4].1, "★ 1");
    }
}
