use std::cmp::Ordering;

use contracts::domain::a007_bundle_plan::aggregate::BundlePlan;
use contracts::domain::common::AggregateRoot;
use contracts::shared::list_filter::ListFilter;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a007_bundle_plan::ui::details::BundlePlanDetails;
use crate::shared::components::table::{format_kw, SortableHeaderCell, TableCellMoney};
use crate::shared::components::ui::StatusBadge;
use crate::shared::crud::{open_details_modal, CrudPageState, CrudToolbar, ListStateView, RowActions};
use crate::shared::list_utils::{cmp_f64, cmp_opt_f64, cmp_text, Sortable};
use crate::shared::locations::{use_locations, LocationFilter};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};

impl Sortable for BundlePlan {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => cmp_text(&self.name, &other.name),
            "state" => cmp_text(&self.state_name(), &other.state_name()),
            "capacity" => cmp_f64(self.capacity_kw, other.capacity_kw),
            "price" => cmp_f64(self.price, other.price),
            "per_kw" => cmp_opt_f64(self.price_per_kw(), other.price_per_kw()),
            "status" => self.status.as_str().cmp(other.status.as_str()),
            _ => Ordering::Equal,
        }
    }
}

fn components_summary(plan: &BundlePlan) -> String {
    if plan.components.is_empty() {
        return "-".to_string();
    }
    plan.components
        .iter()
        .map(|c| format!("{} × {}", c.quantity, c.name))
        .collect::<Vec<_>>()
        .join(", ")
}

#[component]
pub fn BundlePlanList() -> impl IntoView {
    let state = CrudPageState::<BundlePlan>::new("capacity");
    let locations = use_locations();

    let open = move |record: Option<BundlePlan>| {
        open_details_modal(state, record, |vm, on_saved, on_cancel| {
            view! { <BundlePlanDetails vm on_saved on_cancel /> }.into_any()
        })
    };
    let on_sort = Callback::new(move |field: &'static str| state.toggle_sort(field));

    state.fetch();

    view! {
        <PageFrame page_id=page_id(&BundlePlan::full_name(), PAGE_CAT_LIST) category=PAGE_CAT_LIST>
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
                            <SortableHeaderCell label="Bundle" sort_field="name" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort min_width=180.0 />
                            <SortableHeaderCell label="State" sort_field="state" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort />
                            <SortableHeaderCell label="Capacity" sort_field="capacity" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort align="right" />
                            <SortableHeaderCell label="Price" sort_field="price" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort align="right" />
                            <SortableHeaderCell label="Price / kW" sort_field="per_kw" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort align="right" />
                            <TableHeaderCell min_width=220.0>"Components"</TableHeaderCell>
                            <SortableHeaderCell label="Status" sort_field="status" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort />
                            <TableHeaderCell>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || state.visible().into_iter().map(|row| {
                            let status = row.status;
                            let price = row.price;
                            let per_kw = row.price_per_kw();
                            let name = row.name.clone();
                            let state_name = row.state_name();
                            let capacity = format_kw(row.capacity_kw);
                            let components = components_summary(&row);
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout truncate=true>{name}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{state_name}</TableCellLayout></TableCell>
                                    <TableCell class="text-right"><TableCellLayout>{capacity}</TableCellLayout></TableCell>
                                    <TableCellMoney value=Signal::stored(Some(price)) bold=true />
                                    <TableCellMoney value=Signal::stored(per_kw) />
                                    <TableCell><TableCellLayout truncate=true>{components}</TableCellLayout></TableCell>
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

    #[test]
    fn test_components_summary() {
        let plan: BundlePlan = serde_json::from_value(serde_json::json!({
            "_id": "b1",
            "name": "Home 3 kW",
            "state": "s1",
            "capacityKw": 3.0,
            "price": 165000.0,
            "components": [
                { "name": "Panel 540 Wp", "quantity": 6 },
                { "name": "Inverter 3 kW", "quantity": 1 }
            ]
        }))
        .unwrap();
        assert_eq!(components_summary(&plan), "6 × Panel 540 Wp, 1 × Inverter 3 kW");
    }
}
