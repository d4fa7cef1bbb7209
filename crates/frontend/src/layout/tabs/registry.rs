//! Tab content registry: maps a tab key to its page
//!
//! Every page except the placeholder is wrapped in `RequireModule`, so a key
//! restored from the URL still honours the user's module grants.

use crate::dashboards::d001_overview::ui::OverviewDashboard;
use crate::domain::a001_installer::ui::list::InstallerList;
use crate::domain::a002_installer_agency::ui::list::InstallerAgencyList;
use crate::domain::a003_installer_rating::ui::list::InstallerRatingList;
use crate::domain::a004_installation_rate::ui::list::InstallationRateList;
use crate::domain::a005_agency_plan::ui::list::AgencyPlanList;
use crate::domain::a006_offer::ui::list::OfferList;
use crate::domain::a007_bundle_plan::ui::list::BundlePlanList;
use crate::domain::a008_amc_price::ui::list::AmcPriceList;
use crate::domain::a009_journey_stage::ui::list::JourneyStageList;
use crate::domain::a010_placeholder::ui::list::PlaceholderList;
use crate::domain::a011_overdue_config::ui::list::OverdueConfigList;
use crate::domain::a012_project_document::ui::list::ProjectDocumentList;
use crate::system::access_overview::AccessOverviewPage;
use crate::system::auth::guard::RequireModule;
use contracts::system::navigation::keys;
use leptos::logging::log;
use leptos::prelude::*;

/// Page for a tab key.
///
/// Unknown keys render a placeholder instead of failing.
pub fn render_tab_content(key: &str) -> AnyView {
    let page: fn() -> AnyView = match key {
        // Dashboards
        keys::DASHBOARD => || view! { <OverviewDashboard /> }.into_any(),

        // Installer settings (a001-a005)
        "a001_installer" => || view! { <InstallerList /> }.into_any(),
        "a002_installer_agency" => || view! { <InstallerAgencyList /> }.into_any(),
        "a003_installer_rating" => || view! { <InstallerRatingList /> }.into_any(),
        "a004_installation_rate" => || view! { <InstallationRateList /> }.into_any(),
        "a005_agency_plan" => || view! { <AgencyPlanList /> }.into_any(),

        // Sales settings (a006-a008)
        "a006_offer" => || view! { <OfferList /> }.into_any(),
        "a007_bundle_plan" => || view! { <BundlePlanList /> }.into_any(),
        "a008_amc_price" => || view! { <AmcPriceList /> }.into_any(),

        // Project settings (a009-a012)
        "a009_journey_stage" => || view! { <JourneyStageList /> }.into_any(),
        "a010_placeholder" => || view! { <PlaceholderList /> }.into_any(),
        "a011_overdue_config" => || view! { <OverdueConfigList /> }.into_any(),
        "a012_project_document" => || view! { <ProjectDocumentList /> }.into_any(),

        // System
        keys::ACCESS_OVERVIEW => || view! { <AccessOverviewPage /> }.into_any(),

        _ => {
            log!("⚠️ Unknown tab key: {}", key);
            let key = key.to_string();
            return view! {
                <div class="page">
                    <div class="placeholder">{format!("Page '{}' is not available", key)}</div>
                </div>
            }
            .into_any();
        }
    };

    let key = key.to_string();
    view! { <RequireModule tab_key=key>{page()}</RequireModule> }.into_any()
}
