//! Module-level access control.
//!
//! Pure predicate over the already loaded user; no network access.

use std::collections::BTreeSet;

use super::auth::UserInfo;

/// Whether a navigation entry gated by `module_key` is visible to `user`.
///
/// - admins see everything;
/// - entries without a module key are visible to every role;
/// - otherwise the key must be granted with status `active` by the user's
///   own department or by any department delegated to them.
pub fn is_entry_visible(user: &UserInfo, module_key: Option<&str>) -> bool {
    if user.is_admin() {
        return true;
    }
    match module_key {
        None => true,
        Some(key) => has_active_module(user, key),
    }
}

/// Whether any of the user's departments grants `key` as active.
pub fn has_active_module(user: &UserInfo, key: &str) -> bool {
    user.departments().any(|department| {
        department
            .assigned_modules
            .iter()
            .any(|assigned| assigned.module.key == key && assigned.is_active())
    })
}

/// All module keys the user currently holds as active, sorted.
pub fn active_module_keys(user: &UserInfo) -> BTreeSet<String> {
    user.departments()
        .flat_map(|department| department.assigned_modules.iter())
        .filter(|assigned| assigned.is_active())
        .map(|assigned| assigned.module.key.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::{AssignedModule, Department, ModuleRef, Role};

    fn grant(key: &str, status: &str) -> AssignedModule {
        AssignedModule {
            module: ModuleRef {
                key: key.to_string(),
                name: None,
            },
            status: status.to_string(),
        }
    }

    fn department(id: &str, modules: Vec<AssignedModule>) -> Department {
        Department {
            id: id.to_string(),
            name: id.to_string(),
            assigned_modules: modules,
        }
    }

    fn user(role: Role, own: Option<Department>, delegated: Vec<Department>) -> UserInfo {
        UserInfo {
            id: "u1".to_string(),
            name: "Test".to_string(),
            email: None,
            role,
            department: own,
            delegated_departments: delegated,
        }
    }

    #[test]
    fn test_admin_sees_everything() {
        let admin = user(Role::Admin, None, vec![]);
        assert!(is_entry_visible(&admin, Some("settings_hr")));
        assert!(is_entry_visible(&admin, Some("anything_else")));
        assert!(is_entry_visible(&admin, None));
    }

    #[test]
    fn test_unmapped_entry_is_visible() {
        let dealer = user(Role::Dealer, None, vec![]);
        assert!(is_entry_visible(&dealer, None));
    }

    #[test]
    fn test_active_grant_required() {
        let active = user(
            Role::Dealer,
            Some(department("d1", vec![grant("settings_hr", "active")])),
            vec![],
        );
        let inactive = user(
            Role::Dealer,
            Some(department("d1", vec![grant("settings_hr", "inactive")])),
            vec![],
        );
        assert!(is_entry_visible(&active, Some("settings_hr")));
        assert!(!is_entry_visible(&inactive, Some("settings_hr")));
        assert!(!is_entry_visible(&active, Some("settings_sales")));
    }

    #[test]
    fn test_status_match_is_exact() {
        let shouting = user(
            Role::Franchisee,
            Some(department("d1", vec![grant("settings_hr", "ACTIVE")])),
            vec![],
        );
        assert!(!is_entry_visible(&shouting, Some("settings_hr")));
    }

    #[test]
    fn test_delegated_department_grants() {
        let delegated = user(
            Role::FranchiseeManager,
            Some(department("own", vec![])),
            vec![department("hr", vec![grant("settings_hr", "active")])],
        );
        assert!(is_entry_visible(&delegated, Some("settings_hr")));
        assert_eq!(
            active_module_keys(&delegated).into_iter().collect::<Vec<_>>(),
            vec!["settings_hr".to_string()]
        );
    }

    #[test]
    fn test_empty_module_list_hides_gated_entries() {
        let bare = user(Role::DealerManager, Some(department("d1", vec![])), vec![]);
        assert!(!is_entry_visible(&bare, Some("installer_management")));
        assert!(active_module_keys(&bare).is_empty());
    }
}
