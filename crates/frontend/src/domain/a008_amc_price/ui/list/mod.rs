use std::cmp::Ordering;

use contracts::domain::a004_installation_rate::aggregate::category_label;
use contracts::domain::a008_amc_price::aggregate::AmcPrice;
use contracts::domain::common::AggregateRoot;
use contracts::shared::list_filter::ListFilter;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a008_amc_price::ui::details::AmcPriceDetails;
use crate::shared::components::table::{format_kw, format_percent, SortableHeaderCell, TableCellMoney};
use crate::shared::components::ui::StatusBadge;
use crate::shared::config::config;
use crate::shared::crud::{open_details_modal, CrudPageState, CrudToolbar, ListStateView, RowActions};
use crate::shared::list_utils::{cmp_f64, cmp_opt_f64, cmp_text, Sortable};
use crate::shared::locations::{use_locations, LocationFilter};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};

impl Sortable for AmcPrice {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "state" => cmp_text(&self.state_name(), &other.state_name()),
            "category" => self.category.cmp(&other.category),
            "capacity" => cmp_opt_f64(self.capacity_kw, other.capacity_kw),
            "cost" => cmp_f64(self.cost_price, other.cost_price),
            "selling" => cmp_f64(self.selling_price, other.selling_price),
            "margin" => cmp_opt_f64(self.margin_percent(), other.margin_percent()),
            "tenure" => self.tenure_years.cmp(&other.tenure_years),
            "status" => self.status.as_str().cmp(other.status.as_str()),
            _ => Ordering::Equal,
        }
    }
}

/// Row highlight for prices below cost or under the configured margin.
fn margin_class(margin: Option<f64>, low_margin_percent: f64) -> &'static str {
    match margin {
        Some(m) if m < 0.0 => "text-error",
        Some(m) if m < low_margin_percent => "text-warning",
        _ => "",
    }
}

#[component]
pub fn AmcPriceList() -> impl IntoView {
    let state = CrudPageState::<AmcPrice>::new("state");
    let locations = use_locations();
    let low_margin = config().pricing.low_margin_percent;

    let open = move |record: Option<AmcPrice>| {
        open_details_modal(state, record, |vm, on_saved, on_cancel| {
            view! { <AmcPriceDetails vm on_saved on_cancel /> }.into_any()
        })
    };
    let on_sort = Callback::new(move |field: &'static str| state.toggle_sort(field));

    state.fetch();

    view! {
        <PageFrame page_id=page_id(&AmcPrice::full_name(), PAGE_CAT_LIST) category=PAGE_CAT_LIST>
            <CrudToolbar state on_create=Callback::new(move |_| open(None))>
                <LocationFilter
                    locations
                    depth=1
                    on_change=Callback::new(move |sel| state.set_filter(ListFilter::from_selection(&sel)))
                />
            </CrudToolbar>
            <ListStateView state>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <SortableHeaderCell label="State" sort_field="state" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort />
                            <SortableHeaderCell label="Category" sort_field="category" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort />
                            <SortableHeaderCell label="Capacity" sort_field="capacity" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort align="right" />
                            <SortableHeaderCell label="Cost" sort_field="cost" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort align="right" />
                            <SortableHeaderCell label="Selling" sort_field="selling" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort align="right" />
                            <SortableHeaderCell label="Margin" sort_field="margin" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort align="right" />
                            <SortableHeaderCell label="Tenure" sort_field="tenure" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort />
                            <SortableHeaderCell label="Status" sort_field="status" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort />
                            <TableHeaderCell>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || state.visible().into_iter().map(|row| {
                            let status = row.status;
                            let (cost, selling) = (row.cost_price, row.selling_price);
                            let margin = row.margin_percent();
                            let capacity = row.capacity_kw.map(format_kw).unwrap_or_else(|| "Any".to_string());
                            let state_name = row.state_name();
                            let category = category_label(&row.category).to_string();
                            let tenure = format!("{} yr", row.tenure_years);
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{state_name}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{category}</TableCellLayout></TableCell>
                                    <TableCell class="text-right"><TableCellLayout>{capacity}</TableCellLayout></TableCell>
                                    <TableCellMoney value=Signal::stored(Some(cost)) />
                                    <TableCellMoney value=Signal::stored(Some(selling)) bold=true />
                                    <TableCell class="text-right">
                                        <span class=margin_class(margin, low_margin)>{format_percent(margin)}</span>
                                    </TableCell>
                                    <TableCell><TableCellLayout>{tenure}</TableCellLayout></TableCell>
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
    fn test_margin_class() {
        assert_eq!(margin_class(Some(-2.0), 10.0), "text-error");
        assert_eq!(margin_class(Some(4.5), 10.0), "text-warning");
        assert_eq!(margin_class(Some(25.0), 10.0), "");
        assert_eq!(margin_class(None, 10.0), "");
    }
}
