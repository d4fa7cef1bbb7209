use std::cmp::Ordering;

use contracts::domain::a011_overdue_config::aggregate::OverdueConfig;
use contracts::domain::common::AggregateRoot;
use contracts::system::auth::Role;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a011_overdue_config::ui::details::OverdueConfigDetails;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::StatusBadge;
use crate::shared::crud::{open_details_modal, CrudPageState, CrudToolbar, ListStateView, RowActions};
use crate::shared::list_utils::{cmp_text, Sortable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};

impl Sortable for OverdueConfig {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "stage" => cmp_text(&self.stage_name(), &other.stage_name()),
            "overdue" => self.overdue_days.cmp(&other.overdue_days),
            "reminder" => self.reminder_days.cmp(&other.reminder_days),
            "status" => self.status.as_str().cmp(other.status.as_str()),
            _ => Ordering::Equal,
        }
    }
}

/// Role label of the escalation target; unknown values are shown as stored.
fn escalation_label(value: Option<&str>) -> String {
    match value {
        None => "-".to_string(),
        Some(raw) => Role::ALL
            .iter()
            .find(|r| r.as_str() == raw)
            .map(|r| r.label().to_string())
            .unwrap_or_else(|| raw.to_string()),
    }
}

fn days(value: Option<u32>) -> String {
    value.map(|d| format!("{} days", d)).unwrap_or_else(|| "-".to_string())
}

#[component]
pub fn OverdueConfigList() -> impl IntoView {
    let state = CrudPageState::<OverdueConfig>::new("stage");

    let open = move |record: Option<OverdueConfig>| {
        open_details_modal(state, record, |vm, on_saved, on_cancel| {
            view! { <OverdueConfigDetails vm on_saved on_cancel /> }.into_any()
        })
    };
    let on_sort = Callback::new(move |field: &'static str| state.toggle_sort(field));

    state.fetch();

    view! {
        <PageFrame page_id=page_id(&OverdueConfig::full_name(), PAGE_CAT_LIST) category=PAGE_CAT_LIST>
            <CrudToolbar state on_create=Callback::new(move |_| open(None)) />
            <ListStateView state>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <SortableHeaderCell label="Stage" sort_field="stage" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort min_width=180.0 />
                            <SortableHeaderCell label="Reminder after" sort_field="reminder" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort />
                            <SortableHeaderCell label="Overdue after" sort_field="overdue" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort />
                            <TableHeaderCell>"Escalate to"</TableHeaderCell>
                            <SortableHeaderCell label="Status" sort_field="status" current_sort_field=state.sort_field sort_ascending=state.sort_ascending on_sort />
                            <TableHeaderCell>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || state.visible().into_iter().map(|row| {
                            let status = row.status;
                            let stage_name = row.stage_name();
                            let reminder = days(row.reminder_days);
                            let overdue = days(Some(row.overdue_days));
                            let escalation = escalation_label(row.escalate_to.as_deref());
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout truncate=true>{stage_name}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{reminder}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{overdue}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{escalation}</TableCellLayout></TableCell>
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
    fn test_escalation_label() {
        assert_eq!(escalation_label(None), "-");
        assert_eq!(escalation_label(Some("admin")), Role::Admin.label());
        assert_eq!(escalation_label(Some("regional_head")), "regional_head");
    }

    #[test]
    fn test_days() {
        assert_eq!(days(Some(7)), "7 days");
        assert_eq!(days(None), "-");
    }
}
