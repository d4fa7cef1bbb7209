use std::cmp::Ordering;

use contracts::domain::a009_journey_stage::aggregate::{next_order, JourneyStage};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a009_journey_stage::ui::details::JourneyStageDetails;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::{Badge, StatusBadge};
use crate::shared::crud::{open_details_modal, CrudPageState, CrudToolbar, ListStateView, RowActions};
use crate::shared::list_utils::{cmp_text, Sortable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};

impl Sortable for JourneyStage {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "order" => self.order.cmp(&other.order),
            "name" => cmp_text(&self.name, &other.name),
            "mandatory" => self.is_mandatory.cmp(&other.is_mandatory),
            "status" => self.status.as_str().cmp(other.status.as_str()),
            _ => Ordering::Equal,
        }
    }
}

#[component]
pub fn JourneyStageList() -> impl IntoView {
    let state = CrudPageState::<JourneyStage>::new("order");

    let open = move |record: Option<JourneyStage>| {
        let next = state.rows.with_untracked(|rows| next_order(rows.items()));
        open_details_modal(state, record, move |vm, on_saved, on_cancel| {
            view! { <JourneyStageDetails vm on_saved on_cancel next_order=next /> }.into_any()
        })
    };
    let on_sort = Callback::new(move |field: &'static str| state.toggle_sort(field));

    state.fetch();

    view! {
        <PageFrame page_id=page_id(&JourneyStage::full_name(), PAGE_CAT_LIST) category=PAGE_CAT_LIST>
            <CrudToolbar state on_create=Callback::new(move |_| open(None)) />
            <ListStateView state>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <SortableHeaderCell label="#" sort_field="order" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort min_width=60.0 />
                            <SortableHeaderCell label="Stage" sort_field="name" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort min_width=180.0 />
                            <TableHeaderCell min_width=240.0>"Description"</TableHeaderCell>
                            <SortableHeaderCell label="Mandatory" sort_field="mandatory" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort />
                            <SortableHeaderCell label="Status" sort_field="status" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort />
                            <TableHeaderCell>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || state.visible().into_iter().map(|row| {
                            let status = row.status;
                            let order = row.order;
                            let name = row.name.clone();
                            let description = row.description.clone().unwrap_or_default();
                            let mandatory = row.is_mandatory.then(|| view! { <Badge variant="primary">"Mandatory"</Badge> });
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{order}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout truncate=true>{name}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout truncate=true>{description}</TableCellLayout></TableCell>
                                    <TableCell>
                                        {mandatory}
                                    </TableCell>
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

    fn stage(id: &str, name: &str, order: u32) -> JourneyStage {
        serde_json::from_value(serde_json::json!({ "_id": id, "name": name, "order": order })).unwrap()
    }

    #[test]
    fn test_stages_listed_in_workflow_order() {
        let rows = CrudList::new(vec![
            stage("3", "Installation", 3),
            stage("1", "Site Survey", 1),
            stage("2", "Design Approval", 2),
        ]);
        let names: Vec<String> = visible_rows(&rows, "", "order", true)
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Site Survey", "Design Approval", "Installation"]);
        assert_eq!(next_order(rows.items()), 4);
    }
}
