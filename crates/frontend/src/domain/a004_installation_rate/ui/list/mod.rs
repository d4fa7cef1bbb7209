use std::cmp::Ordering;

use contracts::domain::a004_installation_rate::aggregate::{category_label, InstallationRate};
use contracts::domain::common::entity_ref::ref_label;
use contracts::domain::common::AggregateRoot;
use contracts::shared::list_filter::ListFilter;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a004_installation_rate::ui::details::InstallationRateDetails;
use crate::shared::components::table::{SortableHeaderCell, TableCellMoney};
use crate::shared::components::ui::StatusBadge;
use crate::shared::crud::{open_details_modal, CrudPageState, CrudToolbar, ListStateView, RowActions};
use crate::shared::list_utils::{cmp_f64, cmp_text, Sortable};
use crate::shared::locations::{use_locations, LocationFilter};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};

impl Sortable for InstallationRate {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "state" => cmp_text(&ref_label(&self.state), &ref_label(&other.state)),
            "cluster" => cmp_text(&ref_label(&self.cluster), &ref_label(&other.cluster)),
            "category" => self.category.cmp(&other.category),
            "band" => cmp_f64(self.min_kw, other.min_kw),
            "rate" => cmp_f64(self.rate_per_kw, other.rate_per_kw),
            "status" => self.status.as_str().cmp(other.status.as_str()),
            _ => Ordering::Equal,
        }
    }
}

#[component]
pub fn InstallationRateList() -> impl IntoView {
    let state = CrudPageState::<InstallationRate>::new("state");
    let locations = use_locations();

    let open = move |record: Option<InstallationRate>| {
        open_details_modal(state, record, |vm, on_saved, on_cancel| {
            view! { <InstallationRateDetails vm on_saved on_cancel /> }.into_any()
        })
    };
    let on_sort = Callback::new(move |field: &'static str| state.toggle_sort(field));

    state.fetch();

    view! {
        <PageFrame page_id=page_id(&InstallationRate::full_name(), PAGE_CAT_LIST) category=PAGE_CAT_LIST>
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
                            <SortableHeaderCell label="State" sort_field="state" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort />
                            <SortableHeaderCell label="Cluster" sort_field="cluster" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort />
                            <SortableHeaderCell label="Category" sort_field="category" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort />
                            <SortableHeaderCell label="Capacity" sort_field="band" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort />
                            <SortableHeaderCell label="Rate / kW" sort_field="rate" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort align="right" />
                            <SortableHeaderCell label="Status" sort_field="status" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort />
                            <TableHeaderCell>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || state.visible().into_iter().map(|row| {
                            let status = row.status;
                            let rate = row.rate_per_kw;
                            let state_label = ref_label(&row.state);
                            let cluster_label = ref_label(&row.cluster);
                            let category = category_label(&row.category).to_string();
                            let band_label = row.band_label();
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{state_label}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{cluster_label}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{category}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{band_label}</TableCellLayout></TableCell>
                                    <TableCellMoney value=Signal::stored(Some(rate)) />
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

    fn rate(id: &str, min_kw: f64, rate_per_kw: f64) -> InstallationRate {
        serde_json::from_value(serde_json::json!({
            "_id": id,
            "state": "s1",
            "category": "residential",
            "minKw": min_kw,
            "ratePerKw": rate_per_kw,
        }))
        .unwrap()
    }

    #[test]
    fn test_sort_by_band_and_rate() {
        let mut rows = vec![rate("a", 10.0, 2500.0), rate("b", 0.0, 3000.0), rate("c", 3.0, 2800.0)];
        sort_list(&mut rows, "band", true);
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);

        sort_list(&mut rows, "rate", false);
        assert_eq!(rows[0].id, "b");
    }
}
