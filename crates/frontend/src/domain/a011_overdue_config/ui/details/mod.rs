use contracts::domain::a009_journey_stage::aggregate::JourneyStage;
use contracts::domain::a011_overdue_config::aggregate::OverdueConfig;
use contracts::system::auth::Role;
use leptos::prelude::*;

use crate::shared::components::ui::{Checkbox, Input, Select};
use crate::shared::crud::{use_reference_options, DetailsFrame, DetailsViewModel};

fn role_options() -> Vec<(String, String)> {
    Role::ALL
        .iter()
        .map(|r| (r.as_str().to_string(), r.label().to_string()))
        .collect()
}

#[component]
pub fn OverdueConfigDetails(
    vm: DetailsViewModel<OverdueConfig>,
    on_saved: Callback<Option<OverdueConfig>>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let (stage, set_stage) = vm.text(|d| d.stage.clone(), |d, v| d.stage = v);
    let (overdue, set_overdue) = vm.count(|d| d.overdue_days, |d, v| d.overdue_days = v);
    let (reminder, set_reminder) = vm.count(|d| d.reminder_days, |d, v| d.reminder_days = v);
    let (escalate, set_escalate) = vm.opt_text(|d| d.escalate_to.clone(), |d, v| d.escalate_to = v);
    let (active, set_active) = vm.active_flag();

    let stages = use_reference_options::<JourneyStage>(
        Some(stage.get_untracked()).filter(|id| !id.is_empty()),
    );

    view! {
        <DetailsFrame vm on_saved on_cancel>
            <Select label="Journey stage" value=stage on_change=set_stage options=stages required=true />
            <div class="form__row">
                <Input label="Overdue after (days)" value=overdue on_input=set_overdue input_type="number" required=true />
                <Input label="Reminder after (days)" value=reminder on_input=set_reminder input_type="number" placeholder="No reminder" />
            </div>
            <Select
                label="Escalate to"
                value=escalate
                on_change=set_escalate
                options=Signal::stored(role_options())
                placeholder="Nobody"
            />
            <Checkbox label="Active" checked=active on_change=set_active />
        </DetailsFrame>
    }
}
