use contracts::domain::a010_placeholder::aggregate::{is_valid_key, Placeholder};
use leptos::prelude::*;

use crate::shared::components::ui::{Checkbox, Input, Textarea};
use crate::shared::crud::{DetailsFrame, DetailsViewModel};

#[component]
pub fn PlaceholderDetails(
    vm: DetailsViewModel<Placeholder>,
    on_saved: Callback<Option<Placeholder>>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let (key, set_key) = vm.text(|d| d.key.clone(), |d, v| d.key = v);
    let (label, set_label) = vm.text(|d| d.label.clone(), |d, v| d.label = v);
    let (description, set_description) =
        vm.opt_text(|d| d.description.clone(), |d, v| d.description = v);
    let (default_value, set_default_value) =
        vm.opt_text(|d| d.default_value.clone(), |d, v| d.default_value = v);
    let (active, set_active) = vm.active_flag();

    let key_hint = move || {
        let key = key.get();
        let key = key.trim();
        if key.is_empty() {
            ("form__hint", "Letters, digits and underscores".to_string())
        } else if is_valid_key(key) {
            ("form__hint", format!("Used in templates as {{{{{}}}}}", key))
        } else {
            ("form__hint form__hint--error", "Only letters, digits and underscores".to_string())
        }
    };

    view! {
        <DetailsFrame vm on_saved on_cancel>
            <div class="form__row">
                <Input label="Key" value=key on_input=set_key placeholder="customer_name" required=true />
                <Input label="Label" value=label on_input=set_label required=true />
            </div>
            <div class=move || key_hint().0>{move || key_hint().1}</div>
            <Input label="Default value" value=default_value on_input=set_default_value />
            <Textarea label="Description" value=description on_input=set_description rows=2 />
            <Checkbox label="Active" checked=active on_change=set_active />
        </DetailsFrame>
    }
}
