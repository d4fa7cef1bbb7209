pub mod a001_installer;
pub mod a002_installer_agency;
pub mod a003_installer_rating;
pub mod a004_installation_rate;
pub mod a005_agency_plan;
pub mod a006_offer;
pub mod a007_bundle_plan;
pub mod a008_amc_price;
pub mod a009_journey_stage;
pub mod a010_placeholder;
pub mod a011_overdue_config;
pub mod a012_project_document;
