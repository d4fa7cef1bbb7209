//! Role menus shown in the sidebar.
//!
//! Each role gets its own set of groups. A group or an item may be gated by
//! a module key; the sidebar renders only what [`visible_menu`] returns.

use super::access::is_entry_visible;
use super::auth::{Role, UserInfo};

/// Module keys granted through departments.
pub mod modules {
    pub const DASHBOARD: &str = "dashboard";
    pub const SETTINGS_INSTALLER: &str = "settings_installer";
    pub const SETTINGS_SALES: &str = "settings_sales";
    pub const SETTINGS_PROJECT: &str = "settings_project";
    pub const SETTINGS_HR: &str = "settings_hr";
    pub const INSTALLER_MANAGEMENT: &str = "installer_management";
    pub const SALES_CATALOG: &str = "sales_catalog";
    pub const PRICING_AMC: &str = "pricing_amc";
    pub const PROJECT_WORKFLOW: &str = "project_workflow";
}

/// Tab keys of pages that are not settings aggregates.
pub mod keys {
    pub const DASHBOARD: &str = "dashboard";
    pub const ACCESS_OVERVIEW: &str = "sys_access_overview";
}

#[derive(Clone, Debug, PartialEq)]
pub struct MenuItem {
    /// Tab key opened on click
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub module_key: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MenuGroup {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub module_key: Option<&'static str>,
    pub items: Vec<MenuItem>,
}

const fn item(id: &'static str, label: &'static str, icon: &'static str) -> MenuItem {
    MenuItem {
        id,
        label,
        icon,
        module_key: None,
    }
}

const fn gated_item(
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    module_key: &'static str,
) -> MenuItem {
    MenuItem {
        id,
        label,
        icon,
        module_key: Some(module_key),
    }
}

// Items reused across role menus.
const DASHBOARD: MenuItem = item(keys::DASHBOARD, "Dashboard", "layout-dashboard");
const INSTALLERS: MenuItem = item("a001_installer", "Installers", "users");
const AGENCIES: MenuItem = item("a002_installer_agency", "Installer Agencies", "building");
const RATINGS: MenuItem = item("a003_installer_rating", "Installer Ratings", "star");
const INSTALLATION_RATES: MenuItem =
    item("a004_installation_rate", "Installation Rates", "dollar-sign");
const AGENCY_PLANS: MenuItem = item("a005_agency_plan", "Agency Plans", "layers");
const OFFERS: MenuItem = item("a006_offer", "Offers", "tag");
const BUNDLES: MenuItem = item("a007_bundle_plan", "Bundle Plans", "package");
const AMC_PRICES: MenuItem = item("a008_amc_price", "AMC Prices", "receipt");
const STAGES: MenuItem = item("a009_journey_stage", "Journey Stages", "activity");
const PLACEHOLDERS: MenuItem = item("a010_placeholder", "Placeholders", "code");
const OVERDUE: MenuItem = item("a011_overdue_config", "Overdue Config", "clock");
const DOCUMENTS: MenuItem = item("a012_project_document", "Project Documents", "file-text");
const ACCESS_OVERVIEW: MenuItem = item(keys::ACCESS_OVERVIEW, "Module Access", "shield");

fn dashboard_group() -> MenuGroup {
    MenuGroup {
        id: "dashboards",
        label: "Dashboard",
        icon: "layout-dashboard",
        module_key: None,
        items: vec![DASHBOARD],
    }
}

fn hr_group() -> MenuGroup {
    MenuGroup {
        id: "hr_settings",
        label: "HR Settings",
        icon: "users",
        module_key: Some(modules::SETTINGS_HR),
        items: vec![ACCESS_OVERVIEW],
    }
}

fn admin_menu() -> Vec<MenuGroup> {
    vec![
        dashboard_group(),
        MenuGroup {
            id: "installer_settings",
            label: "Installer Settings",
            icon: "tool",
            module_key: Some(modules::SETTINGS_INSTALLER),
            items: vec![INSTALLERS, AGENCIES, AGENCY_PLANS, RATINGS, INSTALLATION_RATES],
        },
        MenuGroup {
            id: "sales_settings",
            label: "Sales Settings",
            icon: "shopping-cart",
            module_key: Some(modules::SETTINGS_SALES),
            items: vec![OFFERS, BUNDLES, AMC_PRICES],
        },
        MenuGroup {
            id: "project_settings",
            label: "Project Settings",
            icon: "settings",
            module_key: Some(modules::SETTINGS_PROJECT),
            items: vec![STAGES, OVERDUE, DOCUMENTS, PLACEHOLDERS],
        },
        hr_group(),
    ]
}

fn dealer_menu() -> Vec<MenuGroup> {
    vec![
        dashboard_group(),
        MenuGroup {
            id: "installers",
            label: "Installers",
            icon: "users",
            module_key: Some(modules::INSTALLER_MANAGEMENT),
            items: vec![INSTALLERS, RATINGS],
        },
        MenuGroup {
            id: "sales",
            label: "Sales",
            icon: "shopping-cart",
            module_key: Some(modules::SALES_CATALOG),
            items: vec![OFFERS, BUNDLES],
        },
        hr_group(),
    ]
}

fn franchisee_menu() -> Vec<MenuGroup> {
    vec![
        dashboard_group(),
        MenuGroup {
            id: "installers",
            label: "Installers",
            icon: "users",
            module_key: Some(modules::INSTALLER_MANAGEMENT),
            items: vec![INSTALLERS, RATINGS],
        },
        MenuGroup {
            id: "sales",
            label: "Sales",
            icon: "shopping-cart",
            module_key: Some(modules::SALES_CATALOG),
            items: vec![
                OFFERS,
                BUNDLES,
                gated_item(AMC_PRICES.id, AMC_PRICES.label, AMC_PRICES.icon, modules::PRICING_AMC),
            ],
        },
        hr_group(),
    ]
}

fn dealer_manager_menu() -> Vec<MenuGroup> {
    vec![
        dashboard_group(),
        MenuGroup {
            id: "installers",
            label: "Installers",
            icon: "users",
            module_key: Some(modules::INSTALLER_MANAGEMENT),
            items: vec![INSTALLERS, AGENCIES, RATINGS],
        },
        MenuGroup {
            id: "sales",
            label: "Sales",
            icon: "shopping-cart",
            module_key: Some(modules::SALES_CATALOG),
            items: vec![OFFERS, BUNDLES],
        },
        MenuGroup {
            id: "project_workflow",
            label: "Project Workflow",
            icon: "activity",
            module_key: Some(modules::PROJECT_WORKFLOW),
            items: vec![STAGES, DOCUMENTS],
        },
        hr_group(),
    ]
}

fn franchisee_manager_menu() -> Vec<MenuGroup> {
    vec![
        dashboard_group(),
        MenuGroup {
            id: "installers",
            label: "Installers",
            icon: "users",
            module_key: Some(modules::INSTALLER_MANAGEMENT),
            items: vec![INSTALLERS, AGENCIES, RATINGS, INSTALLATION_RATES],
        },
        MenuGroup {
            id: "sales",
            label: "Sales",
            icon: "shopping-cart",
            module_key: Some(modules::SALES_CATALOG),
            items: vec![
                OFFERS,
                BUNDLES,
                gated_item(AMC_PRICES.id, AMC_PRICES.label, AMC_PRICES.icon, modules::PRICING_AMC),
            ],
        },
        MenuGroup {
            id: "project_workflow",
            label: "Project Workflow",
            icon: "activity",
            module_key: Some(modules::PROJECT_WORKFLOW),
            items: vec![STAGES, OVERDUE, DOCUMENTS],
        },
        hr_group(),
    ]
}

/// Full (unfiltered) menu of a role.
pub fn menu_for_role(role: Role) -> Vec<MenuGroup> {
    match role {
        Role::Admin => admin_menu(),
        Role::Dealer => dealer_menu(),
        Role::Franchisee => franchisee_menu(),
        Role::DealerManager => dealer_manager_menu(),
        Role::FranchiseeManager => franchisee_manager_menu(),
    }
}

/// Menu of the user's role with every entry the user cannot see removed.
///
/// Groups failing their own gate are dropped whole; groups whose items are
/// all hidden are dropped too.
pub fn visible_menu(user: &UserInfo) -> Vec<MenuGroup> {
    menu_for_role(user.role)
        .into_iter()
        .filter(|group| is_entry_visible(user, group.module_key))
        .filter_map(|mut group| {
            group
                .items
                .retain(|item| is_entry_visible(user, item.module_key));
            (!group.items.is_empty()).then_some(group)
        })
        .collect()
}

/// Whether `user` may open the tab `key` through their menu.
pub fn can_open(user: &UserInfo, key: &str) -> bool {
    visible_menu(user)
        .iter()
        .any(|group| group.items.iter().any(|item| item.id == key))
}

/// Menu label of a tab key across all role menus.
pub fn label_for_key(key: &str) -> Option<&'static str> {
    Role::ALL
        .iter()
        .flat_map(|role| menu_for_role(*role))
        .flat_map(|group| group.items)
        .find(|item| item.id == key)
        .map(|item| item.label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::{AssignedModule, Department, ModuleRef};

    fn user_with(role: Role, grants: &[(&str, &str)]) -> UserInfo {
        UserInfo {
            id: "u1".to_string(),
            name: "Test".to_string(),
            email: None,
            role,
            department: Some(Department {
                id: "d1".to_string(),
                name: "Ops".to_string(),
                assigned_modules: grants
                    .iter()
                    .map(|(key, status)| AssignedModule {
                        module: ModuleRef {
                            key: key.to_string(),
                            name: None,
                        },
                        status: status.to_string(),
                    })
                    .collect(),
            }),
            delegated_departments: vec![],
        }
    }

    fn group_ids(menu: &[MenuGroup]) -> Vec<&'static str> {
        menu.iter().map(|g| g.id).collect()
    }

    #[test]
    fn test_admin_menu_is_unfiltered() {
        let admin = user_with(Role::Admin, &[]);
        assert_eq!(visible_menu(&admin), menu_for_role(Role::Admin));
    }

    #[test]
    fn test_hr_settings_follows_grant_status() {
        let active = user_with(Role::Dealer, &[("settings_hr", "active")]);
        let inactive = user_with(Role::Dealer, &[("settings_hr", "inactive")]);

        assert!(visible_menu(&active).iter().any(|g| g.label == "HR Settings"));
        assert!(!visible_menu(&inactive).iter().any(|g| g.label == "HR Settings"));
    }

    #[test]
    fn test_ungated_dashboard_always_visible() {
        let bare = user_with(Role::Franchisee, &[]);
        assert_eq!(group_ids(&visible_menu(&bare)), vec!["dashboards"]);
    }

    #[test]
    fn test_item_level_gate() {
        let without_amc = user_with(Role::Franchisee, &[("sales_catalog", "active")]);
        let with_amc = user_with(
            Role::Franchisee,
            &[("sales_catalog", "active"), ("pricing_amc", "active")],
        );

        assert!(!can_open(&without_amc, "a008_amc_price"));
        assert!(can_open(&without_amc, "a006_offer"));
        assert!(can_open(&with_amc, "a008_amc_price"));
    }

    #[test]
    fn test_group_gate_dominates_item_grant() {
        let amc_only = user_with(Role::Franchisee, &[("pricing_amc", "active")]);
        assert!(!can_open(&amc_only, "a008_amc_price"));
        assert!(visible_menu(&amc_only).iter().all(|g| !g.items.is_empty()));
    }

    #[test]
    fn test_labels_lookup() {
        assert_eq!(label_for_key("a009_journey_stage"), Some("Journey Stages"));
        assert_eq!(label_for_key("sys_access_overview"), Some("Module Access"));
        assert_eq!(label_for_key("unknown"), None);
    }
}
