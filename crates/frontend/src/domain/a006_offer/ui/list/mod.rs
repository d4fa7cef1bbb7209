use std::cmp::Ordering;

use contracts::domain::a006_offer::aggregate::Offer;
use contracts::domain::common::AggregateRoot;
use contracts::shared::list_filter::ListFilter;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a006_offer::ui::details::OfferDetails;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::{Badge, StatusBadge};
use crate::shared::crud::{open_details_modal, CrudPageState, CrudToolbar, ListStateView, RowActions};
use crate::shared::date_utils::{format_date, today};
use crate::shared::list_utils::{cmp_f64, cmp_text, Sortable};
use crate::shared::locations::{use_locations, LocationFilter};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};

impl Sortable for Offer {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "title" => cmp_text(&self.title, &other.title),
            "discount" => cmp_f64(self.discount_value, other.discount_value),
            "valid_from" => self.valid_from.cmp(&other.valid_from),
            "valid_to" => self.valid_to.cmp(&other.valid_to),
            "scope" => cmp_text(&self.scope_label(), &other.scope_label()),
            "status" => self.status.as_str().cmp(other.status.as_str()),
            _ => Ordering::Equal,
        }
    }
}

#[component]
pub fn OfferList() -> impl IntoView {
    let state = CrudPageState::<Offer>::new("valid_to");
    let locations = use_locations();
    let today = today();

    let open = move |record: Option<Offer>| {
        open_details_modal(state, record, |vm, on_saved, on_cancel| {
            view! { <OfferDetails vm on_saved on_cancel /> }.into_any()
        })
    };
    let on_sort = Callback::new(move |field: &'static str| state.toggle_sort(field));

    state.fetch();

    view! {
        <PageFrame page_id=page_id(&Offer::full_name(), PAGE_CAT_LIST) category=PAGE_CAT_LIST>
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
                            <SortableHeaderCell label="Title" sort_field="title" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort min_width=200.0 />
                            <SortableHeaderCell label="Discount" sort_field="discount" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort align="right" />
                            <SortableHeaderCell label="From" sort_field="valid_from" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort />
                            <SortableHeaderCell label="To" sort_field="valid_to" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort />
                            <SortableHeaderCell label="Applies to" sort_field="scope" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort min_width=160.0 />
                            <SortableHeaderCell label="Status" sort_field="status" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort />
                            <TableHeaderCell>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || state.visible().into_iter().map(|row| {
                            let status = row.status;
                            let running = row.is_running_on(today);
                            let title = row.title.clone();
                            let discount_label = row.discount_label();
                            let valid_from = format_date(row.valid_from);
                            let valid_to = format_date(row.valid_to);
                            let scope_label = row.scope_label();
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout truncate=true>
                                            {title}
                                            {running.then(|| view! { <Badge variant="success">"Running"</Badge> })}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell class="text-right"><TableCellLayout>{discount_label}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{valid_from}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{valid_to}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout truncate=true>{scope_label}</TableCellLayout></TableCell>
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

    fn offer(title: &str, valid_to: Option<&str>) -> Offer {
        serde_json::from_value(serde_json::json!({
            "_id": title,
            "title": title,
            "discountType": "flat",
            "discountValue": 5000,
            "validTo": valid_to,
        }))
        .unwrap()
    }

    #[test]
    fn test_sort_by_end_date() {
        let mut rows = vec![
            offer("Diwali", Some("2024-11-15")),
            offer("Always On", None),
            offer("Monsoon", Some("2024-08-31")),
        ];
        sort_list(&mut rows, "valid_to", true);
        let titles: Vec<&str> = rows.iter().map(|o| o.title.as_str()).collect();
        assert_eq!(titles, vec!["Always On", "Monsoon", "Diwali"]);
    }
}
