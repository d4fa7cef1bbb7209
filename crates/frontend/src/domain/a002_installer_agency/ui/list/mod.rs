use std::cmp::Ordering;

use contracts::domain::a002_installer_agency::aggregate::InstallerAgency;
use contracts::domain::common::entity_ref::ref_label;
use contracts::domain::common::AggregateRoot;
use contracts::shared::list_filter::ListFilter;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a002_installer_agency::ui::details::InstallerAgencyDetails;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::StatusBadge;
use crate::shared::crud::{open_details_modal, CrudPageState, CrudToolbar, ListStateView, RowActions};
use crate::shared::list_utils::{cmp_text, Sortable};
use crate::shared::locations::{use_locations, LocationFilter};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};

impl Sortable for InstallerAgency {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => cmp_text(&self.name, &other.name),
            "contact" => cmp_text(&self.contact_person, &other.contact_person),
            "plan" => cmp_text(&self.plan_name(), &other.plan_name()),
            "state" => cmp_text(&ref_label(&self.state), &ref_label(&other.state)),
            "status" => self.status.as_str().cmp(other.status.as_str()),
            _ => Ordering::Equal,
        }
    }
}

#[component]
pub fn InstallerAgencyList() -> impl IntoView {
    let state = CrudPageState::<InstallerAgency>::new("name");
    let locations = use_locations();

    let open = move |record: Option<InstallerAgency>| {
        open_details_modal(state, record, |vm, on_saved, on_cancel| {
            view! { <InstallerAgencyDetails vm on_saved on_cancel /> }.into_any()
        })
    };
    let on_sort = Callback::new(move |field: &'static str| state.toggle_sort(field));

    state.fetch();

    view! {
        <PageFrame page_id=page_id(&InstallerAgency::full_name(), PAGE_CAT_LIST) category=PAGE_CAT_LIST>
            <CrudToolbar state on_create=Callback::new(move |_| open(None))>
                <LocationFilter
                    locations
                    on_change=Callback::new(move |sel| state.set_filter(ListFilter::from_selection(&sel)))
                />
            </CrudToolbar>
            <ListStateView state>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <SortableHeaderCell label="Agency" sort_field="name" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort min_width=180.0 />
                            <SortableHeaderCell label="Contact" sort_field="contact" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort min_width=160.0 />
                            <TableHeaderCell>"Mobile"</TableHeaderCell>
                            <TableHeaderCell>"GSTIN"</TableHeaderCell>
                            <SortableHeaderCell label="Plan" sort_field="plan" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort />
                            <SortableHeaderCell label="State" sort_field="state" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort />
                            <SortableHeaderCell label="Status" sort_field="status" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort />
                            <TableHeaderCell>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || state.visible().into_iter().map(|row| {
                            let status = row.status;
                            let name = row.name.clone();
                            let contact_person = row.contact_person.clone();
                            let mobile = row.mobile.clone();
                            let gst_number = row.gst_number.clone().unwrap_or_else(|| "-".to_string());
                            let plan_name = row.plan_name();
                            let state_label = ref_label(&row.state);
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout truncate=true>{name}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout truncate=true>{contact_person}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{mobile}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{gst_number}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{plan_name}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{state_label}</TableCellLayout></TableCell>
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
    use crate::shared::list_utils::sort_list;

    fn agency(name: &str, plan: Option<&str>) -> InstallerAgency {
        serde_json::from_value(serde_json::json!({
            "_id": name,
            "name": name,
            "contactPerson": "Owner",
            "mobile": "9876543210",
            "plan": plan.map(|p| serde_json::json!({ "_id": p, "name": p })),
        }))
        .unwrap()
    }

    #[test]
    fn test_sort_by_plan_puts_missing_first() {
        let mut rows = vec![agency("A", Some("Gold")), agency("B", None), agency("C", Some("Basic"))];
        sort_list(&mut rows, "plan", true);
        let names: Vec<&str> = rows.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "A"]);
    }
}
