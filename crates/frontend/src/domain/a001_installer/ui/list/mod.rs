use std::cmp::Ordering;

use contracts::domain::a001_installer::aggregate::Installer;
use contracts::domain::common::AggregateRoot;
use contracts::shared::list_filter::ListFilter;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_installer::ui::details::InstallerDetails;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::StatusBadge;
use crate::shared::crud::{open_details_modal, CrudPageState, CrudToolbar, ListStateView, RowActions};
use crate::shared::list_utils::{cmp_text, Sortable};
use crate::shared::locations::{use_locations, LocationFilter};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};

impl Sortable for Installer {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => cmp_text(&self.name, &other.name),
            "mobile" => self.mobile.cmp(&other.mobile),
            "agency" => cmp_text(&self.agency_name(), &other.agency_name()),
            "location" => cmp_text(&self.location_label(), &other.location_label()),
            "experience" => self.experience_years.cmp(&other.experience_years),
            "status" => self.status.as_str().cmp(other.status.as_str()),
            _ => Ordering::Equal,
        }
    }
}

#[component]
pub fn InstallerList() -> impl IntoView {
    let state = CrudPageState::<Installer>::new("name");
    let locations = use_locations();

    let open = move |record: Option<Installer>| {
        open_details_modal(state, record, |vm, on_saved, on_cancel| {
            view! { <InstallerDetails vm on_saved on_cancel /> }.into_any()
        })
    };
    let on_sort = Callback::new(move |field: &'static str| state.toggle_sort(field));

    state.fetch();

    view! {
        <PageFrame page_id=page_id(&Installer::full_name(), PAGE_CAT_LIST) category=PAGE_CAT_LIST>
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
                            <SortableHeaderCell label="Name" sort_field="name" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort min_width=180.0 />
                            <SortableHeaderCell label="Mobile" sort_field="mobile" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort />
                            <SortableHeaderCell label="Agency" sort_field="agency" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort min_width=160.0 />
                            <SortableHeaderCell label="Location" sort_field="location" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort min_width=200.0 />
                            <SortableHeaderCell label="Experience" sort_field="experience" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort align="right" />
                            <SortableHeaderCell label="Status" sort_field="status" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort />
                            <TableHeaderCell>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || state.visible().into_iter().map(|row| {
                            let experience = row
                                .experience_years
                                .map(|y| format!("{} yrs", y))
                                .unwrap_or_else(|| "-".to_string());
                            let status = row.status;
                            let name = row.name.clone();
                            let mobile = row.mobile.clone();
                            let agency_name = row.agency_name();
                            let location_label = row.location_label();
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout truncate=true>{name}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{mobile}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout truncate=true>{agency_name}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout truncate=true>{location_label}</TableCellLayout></TableCell>
                                    <TableCell class="text-right"><TableCellLayout>{experience}</TableCellLayout></TableCell>
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

    fn installer(id: &str, name: &str, agency: &str, years: Option<u32>) -> Installer {
        serde_json::from_value(serde_json::json!({
            "_id": id,
            "name": name,
            "mobile": "9876543210",
            "agency": { "_id": format!("ag-{}", id), "name": agency },
            "experienceYears": years,
        }))
        .unwrap()
    }

    #[test]
    fn test_search_then_sort() {
        let rows = CrudList::new(vec![
            installer("1", "Mahesh", "SunFit", Some(4)),
            installer("2", "anil", "Bright Roofs", None),
            installer("3", "Kiran", "SunFit", Some(9)),
        ]);

        let by_agency = visible_rows(&rows, "sunfit", "experience", false);
        let names: Vec<&str> = by_agency.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Kiran", "Mahesh"]);

        let by_name = visible_rows(&rows, "", "name", true);
        assert_eq!(by_name[0].name, "anil");
    }
}
