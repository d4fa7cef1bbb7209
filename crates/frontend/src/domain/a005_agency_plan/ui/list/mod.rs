use std::cmp::Ordering;

use contracts::domain::a005_agency_plan::aggregate::AgencyPlan;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a005_agency_plan::ui::details::AgencyPlanDetails;
use crate::shared::components::table::{SortableHeaderCell, TableCellMoney};
use crate::shared::components::ui::{Badge, StatusBadge};
use crate::shared::crud::{open_details_modal, CrudPageState, CrudToolbar, ListStateView, RowActions};
use crate::shared::list_utils::{cmp_f64, cmp_text, Sortable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};

impl Sortable for AgencyPlan {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => cmp_text(&self.name, &other.name),
            "price" => cmp_f64(self.price, other.price),
            // Unlimited validity sorts after every bounded plan
            "validity" => match (self.validity_days, other.validity_days) {
                (Some(a), Some(b)) => a.cmp(&b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            "max_installers" => self.max_installers.cmp(&other.max_installers),
            "status" => self.status.as_str().cmp(other.status.as_str()),
            _ => Ordering::Equal,
        }
    }
}

#[component]
pub fn AgencyPlanList() -> impl IntoView {
    let state = CrudPageState::<AgencyPlan>::new("price");

    let open = move |record: Option<AgencyPlan>| {
        open_details_modal(state, record, |vm, on_saved, on_cancel| {
            view! { <AgencyPlanDetails vm on_saved on_cancel /> }.into_any()
        })
    };
    let on_sort = Callback::new(move |field: &'static str| state.toggle_sort(field));

    state.fetch();

    view! {
        <PageFrame page_id=page_id(&AgencyPlan::full_name(), PAGE_CAT_LIST) category=PAGE_CAT_LIST>
            <CrudToolbar state on_create=Callback::new(move |_| open(None)) />
            <ListStateView state>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <SortableHeaderCell label="Plan" sort_field="name" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort min_width=160.0 />
                            <SortableHeaderCell label="Price" sort_field="price" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort align="right" />
                            <SortableHeaderCell label="Validity" sort_field="validity" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort />
                            <SortableHeaderCell label="Max installers" sort_field="max_installers" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort />
                            <TableHeaderCell min_width=240.0>"Features"</TableHeaderCell>
                            <SortableHeaderCell label="Status" sort_field="status" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort />
                            <TableHeaderCell>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || state.visible().into_iter().map(|row| {
                            let status = row.status;
                            let price = row.price;
                            let features = row
                                .features
                                .iter()
                                .cloned()
                                .map(|f| view! { <Badge>{f.clone()}</Badge> })
                                .collect_view();
                            let name = row.name.clone();
                            let validity_label = row.validity_label();
                            let max_installers = row.max_installers;
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout truncate=true>{name}</TableCellLayout></TableCell>
                                    <TableCellMoney value=Signal::stored(Some(price)) bold=true />
                                    <TableCell><TableCellLayout>{validity_label}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{max_installers}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout><div class="badge-list">{features}</div></TableCellLayout></TableCell>
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

    fn plan(name: &str, validity: Option<u32>) -> AgencyPlan {
        serde_json::from_value(serde_json::json!({
            "_id": name,
            "name": name,
            "price": 999.0,
            "validityDays": validity,
            "maxInstallers": 5,
        }))
        .unwrap()
    }

    #[test]
    fn test_unlimited_validity_sorts_last() {
        let mut rows = vec![plan("Lifetime", None), plan("Annual", Some(365)), plan("Trial", Some(30))];
        sort_list(&mut rows, "validity", true);
        let names: Vec<&str> = rows.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Trial", "Annual", "Lifetime"]);
    }
}
