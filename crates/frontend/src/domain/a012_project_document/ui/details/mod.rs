use contracts::domain::a009_journey_stage::aggregate::JourneyStage;
use contracts::domain::a012_project_document::aggregate::{ProjectDocument, FILE_TYPES};
use leptos::prelude::*;

use crate::shared::components::ui::{Checkbox, Input, Select};
use crate::shared::crud::{use_reference_options, DetailsFrame, DetailsViewModel};

#[component]
pub fn ProjectDocumentDetails(
    vm: DetailsViewModel<ProjectDocument>,
    on_saved: Callback<Option<ProjectDocument>>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let (name, set_name) = vm.text(|d| d.name.clone(), |d, v| d.name = v);
    let (stage, set_stage) = vm.text(|d| d.stage.clone(), |d, v| d.stage = v);
    let required = Signal::derive(move || vm.form.with(|d| d.is_required));
    let set_required = Callback::new(move |v: bool| vm.form.update(|d| d.is_required = v));
    let (active, set_active) = vm.active_flag();

    let stages = use_reference_options::<JourneyStage>(
        Some(stage.get_untracked()).filter(|id| !id.is_empty()),
    );

    let file_types = FILE_TYPES
        .into_iter()
        .map(|file_type: &'static str| {
            let checked = Signal::derive(move || {
                vm.form.with(|d| d.allowed_types.iter().any(|t| t.as_str() == file_type))
            });
            view! {
                <Checkbox
                    label=file_type.to_ascii_uppercase()
                    checked=checked
                    on_change=Callback::new(move |_| vm.form.update(|d| d.toggle_type(file_type)))
                />
            }
        })
        .collect_view();

    view! {
        <DetailsFrame vm on_saved on_cancel>
            <Input label="Document name" value=name on_input=set_name required=true />
            <Select label="Journey stage" value=stage on_change=set_stage options=stages required=true />
            <div class="form__group">
                <label class="form__label">"Allowed file types"</label>
                <div class="form__checkbox-row">{file_types}</div>
                <div class="form__hint">"None selected accepts any file"</div>
            </div>
            <Checkbox label="Required upload" checked=required on_change=set_required />
            <Checkbox label="Active" checked=active on_change=set_active />
        </DetailsFrame>
    }
}
