use std::cmp::Ordering;

use contracts::domain::a012_project_document::aggregate::ProjectDocument;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a012_project_document::ui::details::ProjectDocumentDetails;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::{Badge, StatusBadge};
use crate::shared::crud::{open_details_modal, CrudPageState, CrudToolbar, ListStateView, RowActions};
use crate::shared::list_utils::{cmp_text, Sortable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};

impl Sortable for ProjectDocument {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => cmp_text(&self.name, &other.name),
            "stage" => cmp_text(&self.stage_name(), &other.stage_name()),
            "required" => self.is_required.cmp(&other.is_required),
            "status" => self.status.as_str().cmp(other.status.as_str()),
            _ => Ordering::Equal,
        }
    }
}

#[component]
pub fn ProjectDocumentList() -> impl IntoView {
    let state = CrudPageState::<ProjectDocument>::new("stage");

    let open = move |record: Option<ProjectDocument>| {
        open_details_modal(state, record, |vm, on_saved, on_cancel| {
            view! { <ProjectDocumentDetails vm on_saved on_cancel /> }.into_any()
        })
    };
    let on_sort = Callback::new(move |field: &'static str| state.toggle_sort(field));

    state.fetch();

    view! {
        <PageFrame page_id=page_id(&ProjectDocument::full_name(), PAGE_CAT_LIST) category=PAGE_CAT_LIST>
            <CrudToolbar state on_create=Callback::new(move |_| open(None)) />
            <ListStateView state>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <SortableHeaderCell label="Document" sort_field="name" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort min_width=200.0 />
                            <SortableHeaderCell label="Stage" sort_field="stage" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort min_width=160.0 />
                            <SortableHeaderCell label="Required" sort_field="required" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort />
                            <TableHeaderCell>"File types"</TableHeaderCell>
                            <SortableHeaderCell label="Status" sort_field="status" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort />
                            <TableHeaderCell>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || state.visible().into_iter().map(|row| {
                            let status = row.status;
                            let name = row.name.clone();
                            let stage_name = row.stage_name();
                            let types_label = row.types_label();
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout truncate=true>{name}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout truncate=true>{stage_name}</TableCellLayout></TableCell>
                                    <TableCell>
                                        {if row.is_required {
                                            view! { <Badge variant="warning">"Required"</Badge> }.into_any()
                                        } else {
                                            view! { <Badge>"Optional"</Badge> }.into_any()
                                        }}
                                    </TableCell>
                                    <TableCell><TableCellLayout>{types_label}</TableCellLayout></TableCell>
                                    <TableCell><StatusBadge status=Signal::stored(status) /></TableCell>
                                    <TableCell>
                                        <RowActions state record=row on_edit=Callback::new(move |r| open(Some(r))) />
                                    </TableCell>
                                </TableRow>
                            }
                        }).collect_view()}
                    </TableBody>
                </Table>
            </ListStateView>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::visible_rows;
    use contracts::domain::common::CrudList;

    fn document(id: &str, name: &str, stage: &str) -> ProjectDocument {
        serde_json::from_value(serde_json::json!({
            "_id": id,
            "name": name,
            "stage": { "_id": stage, "name": stage },
            "isRequired": true,
            "allowedTypes": ["pdf"],
        }))
        .unwrap()
    }

    #[test]
    fn test_search_matches_stage_name() {
        let rows = CrudList::new(vec![
            document("1", "Electricity bill", "KYC"),
            document("2", "Net meter approval", "Commissioning"),
        ]);
        let found = visible_rows(&rows, "commission", "name", true);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "2");
        assert_eq!(found[0].types_label(), "PDF");
    }
}
