use contracts::dashboards::d001_overview::dto::DashboardStats;
use contracts::domain::a008_amc_price::aggregate::AmcPrice;
use contracts::shared::list_filter::ListFilter;

use crate::shared::api_utils::{get_json, ApiError};
use crate::shared::crud_api;

/// Server counters for the overview cards
pub async fn get_dashboard_stats() -> Result<DashboardStats, ApiError> {
    get_json("/sales-settings/dashboard-stats").await
}

/// Every AMC price, input of the pricing summary
pub async fn get_amc_prices() -> Result<Vec<AmcPrice>, ApiError> {
    crud_api::fetch_list::<AmcPrice>(&ListFilter::default()).await
}
