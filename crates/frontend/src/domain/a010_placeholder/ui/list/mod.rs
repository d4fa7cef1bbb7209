use std::cmp::Ordering;

use contracts::domain::a010_placeholder::aggregate::{render_template, Placeholder};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a010_placeholder::ui::details::PlaceholderDetails;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::{StatusBadge, Textarea};
use crate::shared::crud::{open_details_modal, CrudPageState, CrudToolbar, ListStateView, RowActions};
use crate::shared::list_utils::{cmp_text, Sortable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};

impl Sortable for Placeholder {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "key" => self.key.cmp(&other.key),
            "label" => cmp_text(&self.label, &other.label),
            "status" => self.status.as_str().cmp(other.status.as_str()),
            _ => Ordering::Equal,
        }
    }
}

/// Try a message template against the loaded placeholders.
#[component]
fn TemplatePreview(state: CrudPageState<Placeholder>) -> impl IntoView {
    let template = RwSignal::new(String::new());
    let rendered = move || {
        let text = template.get();
        state.rows.with(|rows| render_template(&text, rows.items()))
    };

    view! {
        <div class="template-preview">
            <Textarea
                label="Template preview"
                value=template
                on_input=Callback::new(move |v: String| template.set(v))
                placeholder="Dear {{customer_name}}, your installation is scheduled..."
            />
            <Show when=move || !template.with(|t| t.is_empty())>
                <div class="template-preview__output">{rendered}</div>
            </Show>
        </div>
    }
}

#[component]
pub fn PlaceholderList() -> impl IntoView {
    let state = CrudPageState::<Placeholder>::new("key");

    let open = move |record: Option<Placeholder>| {
        open_details_modal(state, record, |vm, on_saved, on_cancel| {
            view! { <PlaceholderDetails vm on_saved on_cancel /> }.into_any()
        })
    };
    let on_sort = Callback::new(move |field: &'static str| state.toggle_sort(field));

    state.fetch();

    view! {
        <PageFrame page_id=page_id(&Placeholder::full_name(), PAGE_CAT_LIST) category=PAGE_CAT_LIST>
            <CrudToolbar state on_create=Callback::new(move |_| open(None)) />
            <ListStateView state>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <SortableHeaderCell label="Token" sort_field="key" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort min_width=180.0 />
                            <SortableHeaderCell label="Label" sort_field="label" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort min_width=160.0 />
                            <TableHeaderCell>"Default value"</TableHeaderCell>
                            <TableHeaderCell min_width=220.0>"Description"</TableHeaderCell>
                            <SortableHeaderCell label="Status" sort_field="status" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort />
                            <TableHeaderCell>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || state.visible().into_iter().map(|row| {
                            let status = row.status;
                            let token = row.token();
                            let label = row.label.clone();
                            let default_value = row.default_value.clone().unwrap_or_else(|| "-".to_string());
                            let description = row.description.clone().unwrap_or_default();
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout><code>{token}</code></TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout truncate=true>{label}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout truncate=true>{default_value}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout truncate=true>{description}</TableCellLayout></TableCell>
                                    <TableCell><StatusBadge status=Signal::stored(status) /></TableCell>
                                    <TableCell>
                                        <RowActions state record=row on_edit=Callback::new(move |r| open(Some(r))) />
                                    </TableCell>
                                </TableRow>
                            }
                        }).collect_view()}
                    </TableBody>
                </Table>
                <TemplatePreview state />
            </ListStateView>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::sort_list;

    #[test]
    fn test_sort_by_key_is_case_sensitive() {
        let mut rows: Vec<Placeholder> = ["project_id", "Customer", "amount"]
            .iter()
            .map(|key| {
                serde_json::from_value(serde_json::json!({ "_id": key, "key": key, "label": key }))
                    .unwrap()
            })
            .collect();
        sort_list(&mut rows, "key", true);
        let keys: Vec<&str> = rows.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["Customer", "amount", "project_id"]);
    }
}
