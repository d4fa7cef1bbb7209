pub mod access_overview;
pub mod auth;
