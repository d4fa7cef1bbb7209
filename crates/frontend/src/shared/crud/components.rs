use contracts::domain::common::{AggregateRoot, RecordStatus};
use leptos::prelude::*;
use thaw::*;

use super::details::DetailsViewModel;
use super::state::CrudPageState;
use crate::shared::icons::icon;
use crate::shared::list_utils::{SearchInput, Sortable};
use crate::shared::modal_stack::ModalSurface;
use crate::shared::page_standard::{page_id, PAGE_CAT_DETAIL};

/// Open the create/edit form of a list page in a modal.
///
/// `render` builds the form body from the view model; a successful save
/// patches the list (or refetches) and closes the modal.
pub fn open_details_modal<T, F>(state: CrudPageState<T>, record: Option<T>, render: F)
where
    T: AggregateRoot + Sortable,
    F: Fn(DetailsViewModel<T>, Callback<Option<T>>, Callback<()>) -> AnyView
        + Send
        + Sync
        + 'static,
{
    state.modals.open(
        ModalSurface::form(&T::full_name()),
        move |handle| {
            let vm = DetailsViewModel::<T>::new(record.as_ref(), state.feedback);
            let on_saved = Callback::new(move |saved: Option<T>| {
                state.apply_saved(saved);
                handle.close();
            });
            let on_cancel = Callback::new(move |_| handle.close());
            render(vm, on_saved, on_cancel)
        },
    );
}

fn status_filter_value(status: Option<RecordStatus>) -> &'static str {
    status.map(|s| s.as_str()).unwrap_or("")
}

/// Title row of a list page: count, search, status filter, refresh, create.
///
/// `children` go between the title and the search box (location filters).
#[component]
pub fn CrudToolbar<T>(
    state: CrudPageState<T>,
    on_create: Callback<()>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView
where
    T: AggregateRoot + Sortable,
{
    let count = move || state.rows.with(|rows| rows.len());

    view! {
        <div class="page__header">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h1 class="page__title">
                    {T::list_name()}
                    <span class="badge badge--neutral page__count">{count}</span>
                </h1>
                <Space>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| on_create.run(())>
                        {icon("plus")}
                        {format!(" New {}", T::element_name())}
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| state.fetch()>
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </Space>
            </Flex>
            <div class="page__filters">
                {children.map(|c| c())}
                <SearchInput
                    value=state.search
                    on_change=Callback::new(move |v: String| state.search.set(v))
                    placeholder=format!("Search {}...", T::list_name().to_lowercase())
                />
                <select
                    class="form__select page__status-filter"
                    prop:value=move || status_filter_value(state.status_filter.get())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        let status = (!value.is_empty()).then(|| RecordStatus::from_str_lossy(&value));
                        state.set_status_filter(status);
                    }
                >
                    <option value="">"All statuses"</option>
                    <option value="active">"Active"</option>
                    <option value="inactive">"Inactive"</option>
                </select>
            </div>
        </div>
    }
}

/// Loading spinner, error bar and empty notice around a list table.
#[component]
pub fn ListStateView<T>(state: CrudPageState<T>, children: Children) -> impl IntoView
where
    T: AggregateRoot + Sortable,
{
    let is_empty = move || !state.loading.get() && state.rows.with(|rows| rows.is_empty());

    view! {
        <div class="page__content">
            {move || state.error.get().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
            })}
            <Show when=move || state.loading.get()>
                <div class="page__loading">
                    <Spinner label=format!("Loading {}...", T::list_name().to_lowercase()) />
                </div>
            </Show>
            <Show when=is_empty>
                <div class="page__empty">{format!("No {} yet", T::list_name().to_lowercase())}</div>
            </Show>
            {children()}
        </div>
    }
}

/// Edit / activate-deactivate / delete buttons of one row.
#[component]
pub fn RowActions<T>(state: CrudPageState<T>, record: T, on_edit: Callback<T>) -> impl IntoView
where
    T: AggregateRoot + Sortable,
{
    let record = StoredValue::new(record);
    let is_active = record.with_value(|r| r.status().is_active());
    let toggle_title = if is_active { "Deactivate" } else { "Activate" };

    view! {
        <Space>
            <Button
                size=ButtonSize::Small
                appearance=ButtonAppearance::Subtle
                on_click=move |_| on_edit.run(record.get_value())
            >
                {icon("edit")}
            </Button>
            <Button
                size=ButtonSize::Small
                appearance=ButtonAppearance::Subtle
                on_click=move |_| record.with_value(|r| state.toggle_status(r))
            >
                <span title=toggle_title>{icon("toggle")}</span>
            </Button>
            <Button
                size=ButtonSize::Small
                appearance=ButtonAppearance::Subtle
                on_click=move |_| record.with_value(|r| state.delete(r))
            >
                <span title="Delete">{icon("delete")}</span>
            </Button>
        </Space>
    }
}

/// Header, error bar and Save/Cancel footer around a details form.
#[component]
pub fn DetailsFrame<T>(
    vm: DetailsViewModel<T>,
    on_saved: Callback<Option<T>>,
    on_cancel: Callback<()>,
    children: Children,
) -> impl IntoView
where
    T: AggregateRoot,
{
    let title = vm.title();
    let id = page_id(&T::full_name(), PAGE_CAT_DETAIL);

    view! {
        <div id=id class="details" data-page-category=PAGE_CAT_DETAIL>
            <div class="details__header">
                <h2 class="details__title">{title}</h2>
                <Button appearance=ButtonAppearance::Transparent on_click=move |_| on_cancel.run(())>
                    {icon("x")}
                </Button>
            </div>
            {move || vm.error.get().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
            })}
            <div class="details__body">
                {children()}
            </div>
            <div class="details__footer">
                <Space>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || vm.saving.get())
                        on_click=move |_| vm.save_command(on_saved)
                    >
                        {icon("save")}
                        {move || if vm.saving.get() { " Saving..." } else { " Save" }}
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                        "Cancel"
                    </Button>
                </Space>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_filter_value() {
        assert_eq!(status_filter_value(None), "");
        assert_eq!(status_filter_value(Some(RecordStatus::Inactive)), "inactive");
    }
}
