//! "Module Access" page: which modules the signed-in user's departments grant.

use contracts::system::access::active_module_keys;
use contracts::system::auth::UserInfo;
use contracts::system::navigation::keys;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::ui::Badge;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_SYSTEM};
use crate::system::auth::context::use_current_user;

#[derive(Debug, Clone, PartialEq)]
pub struct AccessRow {
    pub department: String,
    pub delegated: bool,
    pub module_key: String,
    pub module_name: String,
    pub active: bool,
}

/// One row per grant, own department first.
pub fn access_rows(user: &UserInfo) -> Vec<AccessRow> {
    let own_id = user.department.as_ref().map(|d| d.id.clone());
    user.departments()
        .flat_map(|department| {
            let delegated = own_id.as_deref() != Some(department.id.as_str());
            department.assigned_modules.iter().map(move |assigned| AccessRow {
                department: department.name.clone(),
                delegated,
                module_key: assigned.module.key.clone(),
                module_name: assigned
                    .module
                    .name
                    .clone()
                    .unwrap_or_else(|| assigned.module.key.clone()),
                active: assigned.is_active(),
            })
        })
        .collect()
}

#[component]
pub fn AccessOverviewPage() -> impl IntoView {
    let user = use_current_user();

    let rows = move || user.with(|u| u.as_ref().map(access_rows).unwrap_or_default());
    let summary = move || {
        user.with(|u| match u {
            Some(u) if u.is_admin() => "Administrators see every module.".to_string(),
            Some(u) => {
                let keys = active_module_keys(u);
                if keys.is_empty() {
                    "No active modules.".to_string()
                } else {
                    format!(
                        "Active modules: {}",
                        keys.into_iter().collect::<Vec<_>>().join(", ")
                    )
                }
            }
            None => String::new(),
        })
    };

    view! {
        <PageFrame page_id=page_id(keys::ACCESS_OVERVIEW, PAGE_CAT_SYSTEM) category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <h1 class="page__title">"Module Access"</h1>
                <div class="page__subtitle">{summary}</div>
            </div>
            <div class="page__content">
                <Show
                    when=move || !rows().is_empty()
                    fallback=|| view! { <div class="page__empty">"No departments assigned"</div> }
                >
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Department"</TableHeaderCell>
                                <TableHeaderCell>"Module"</TableHeaderCell>
                                <TableHeaderCell>"Key"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || rows().into_iter().map(|row| {
                                let department = if row.delegated {
                                    format!("{} (delegated)", row.department)
                                } else {
                                    row.department
                                };
                                let (variant, label) = if row.active {
                                    ("success", "Active")
                                } else {
                                    ("neutral", "Inactive")
                                };
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{department}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{row.module_name}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout><code>{row.module_key}</code></TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Badge variant=variant>{label}</Badge>
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }).collect_view()}
                        </TableBody>
                    </Table>
                </Show>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_rows_mark_delegated_grants() {
        let user: UserInfo = serde_json::from_str(
            r#"{
                "_id": "u1",
                "name": "Ravi",
                "role": "dealerManager",
                "department": {
                    "_id": "d1",
                    "name": "Sales",
                    "assignedModules": [{"module": {"key": "settings_hr", "name": "HR Settings"}, "status": "active"}]
                },
                "delegatedDepartments": [{
                    "_id": "d2",
                    "name": "Projects",
                    "assignedModules": [{"module": {"key": "project_settings"}, "status": "inactive"}]
                }]
            }"#,
        )
        .unwrap();

        let rows = access_rows(&user);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].module_name, "HR Settings");
        assert!(!rows[0].delegated && rows[0].active);
        assert_eq!(rows[1].module_name, "project_settings");
        assert!(rows[1].delegated && !rows[1].active);
    }
}
