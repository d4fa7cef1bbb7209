use leptos::prelude::*;

/// Labelled native date picker
///
/// Value is `yyyy-mm-dd`; an empty string means no date.
#[component]
pub fn DateInput(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)] min: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! { <label class="form__label">{l}</label> })}
            <input
                type="date"
                class="form__input"
                prop:value=move || value.get()
                min=move || min.get().unwrap_or_default()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
        </div>
    }
}
