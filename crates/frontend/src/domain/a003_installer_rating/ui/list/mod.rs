use std::cmp::Ordering;

use contracts::domain::a003_installer_rating::aggregate::InstallerRating;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a003_installer_rating::ui::details::InstallerRatingDetails;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::StatusBadge;
use crate::shared::crud::{open_details_modal, CrudPageState, CrudToolbar, ListStateView, RowActions};
use crate::shared::date_utils::format_timestamp;
use crate::shared::list_utils::{cmp_text, Sortable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};

impl Sortable for InstallerRating {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "installer" => cmp_text(&self.installer_name(), &other.installer_name()),
            "project" => self.project_code.cmp(&other.project_code),
            "rating" => self.rating.cmp(&other.rating),
            "created" => self.metadata.created_at.cmp(&other.metadata.created_at),
            "status" => self.status.as_str().cmp(other.status.as_str()),
            _ => Ordering::Equal,
        }
    }
}

/// Mean rating of the shown rows, one decimal.
fn average_rating(rows: &[InstallerRating]) -> Option<String> {
    if rows.is_empty() {
        return None;
    }
    let total: u32 = rows.iter().map(|r| r.rating as u32).sum();
    Some(format!("{:.1}", total as f64 / rows.len() as f64))
}

#[component]
pub fn InstallerRatingList() -> impl IntoView {
    let state = CrudPageState::<InstallerRating>::new("created");
    state.sort_ascending.set(false);

    let open = move |record: Option<InstallerRating>| {
        open_details_modal(state, record, |vm, on_saved, on_cancel| {
            view! { <InstallerRatingDetails vm on_saved on_cancel /> }.into_any()
        })
    };
    let on_sort = Callback::new(move |field: &'static str| state.toggle_sort(field));

    state.fetch();

    view! {
        <PageFrame page_id=page_id(&InstallerRating::full_name(), PAGE_CAT_LIST) category=PAGE_CAT_LIST>
            <CrudToolbar state on_create=Callback::new(move |_| open(None)) />
            <ListStateView state>
                {move || average_rating(&state.visible()).map(|avg| view! {
                    <div class="page__summary">"Average rating: " {avg} " / 5"</div>
                })}
                <Table>
                    <TableHeader>
                        <TableRow>
                            <SortableHeaderCell label="Installer" sort_field="installer" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort min_width=180.0 />
                            <SortableHeaderCell label="Project" sort_field="project" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort />
                            <SortableHeaderCell label="Rating" sort_field="rating" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort />
                            <TableHeaderCell min_width=200.0>"Remarks"</TableHeaderCell>
                            <SortableHeaderCell label="Created" sort_field="created" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort />
                            <SortableHeaderCell label="Status" sort_field="status" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort />
                            <TableHeaderCell>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || state.visible().into_iter().map(|row| {
                            let status = row.status;
                            let installer_name = row.installer_name();
                            let project_code = row.project_code.clone().unwrap_or_else(|| "-".to_string());
                            let stars = row.stars();
                            let remarks = row.remarks.clone().unwrap_or_default();
                            let created = format_timestamp(row.metadata.created_at);
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout truncate=true>{installer_name}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{project_code}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout><span class="rating-stars">{stars}</span></TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout truncate=true>{remarks}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{created}</TableCellLayout></TableCell>
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

    fn rating(id: &str, stars: u8) -> InstallerRating {
        serde_json::from_value(serde_json::json!({
            "_id": id,
            "installer": { "_id": "i1", "name": "Mahesh" },
            "rating": stars,
        }))
        .unwrap()
    }

    #[test]
    fn test_average_rating() {
        assert_eq!(average_rating(&[]), None);
        let rows = vec![rating("1", 5), rating("2", 4), rating("3", 4)];
        assert_eq!(average_rating(&rows).as_deref(), Some("4.3"));
    }
}
